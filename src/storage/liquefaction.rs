use crate::constants::LIQUEFACTION_KWH_PER_KG;

/// 수소 액화에 필요한 에너지 [kWh].
pub fn calculate_liquefaction_energy(hydrogen_kg: f64) -> f64 {
    hydrogen_kg * LIQUEFACTION_KWH_PER_KG
}
