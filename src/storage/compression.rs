use serde::Serialize;

use crate::constants::{
    COMPRESSION_ENERGY_TABLE, COMPRESSION_FALLBACK_REFERENCE_BAR,
    COMPRESSION_FALLBACK_REFERENCE_KWH_PER_KG,
};
use crate::error::CalcError;

/// 압축 에너지 계산 결과.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct CompressionEnergyResult {
    /// 소요 에너지 [kWh]
    pub energy_required_kwh: f64,
    /// 단위 질량당 에너지 [kWh/kg]
    pub energy_per_kg_kwh: f64,
    /// 압축비 (토출/흡입)
    pub compression_ratio: f64,
}

/// 목표 압력의 단위 압축 에너지 [kWh/kg].
/// 표에 정확히 일치하는 압력이 있으면 그 값을, 없으면 700 bar 기준 비례 근사를 쓴다.
pub fn compression_energy_per_kg(to_pressure_bar: f64) -> f64 {
    match lookup_compression_table(to_pressure_bar) {
        Some(energy) => energy,
        None => {
            (to_pressure_bar / COMPRESSION_FALLBACK_REFERENCE_BAR)
                * COMPRESSION_FALLBACK_REFERENCE_KWH_PER_KG
        }
    }
}

fn lookup_compression_table(to_pressure_bar: f64) -> Option<f64> {
    COMPRESSION_ENERGY_TABLE
        .iter()
        .find(|(bar, _)| *bar == to_pressure_bar)
        .map(|(_, energy)| *energy)
}

/// 수소를 목표 압력까지 압축하는 데 필요한 에너지를 계산한다.
pub fn calculate_compression_energy(
    hydrogen_kg: f64,
    from_pressure_bar: f64,
    to_pressure_bar: f64,
) -> Result<CompressionEnergyResult, CalcError> {
    if from_pressure_bar == 0.0 {
        return Err(CalcError::DegenerateInput(
            "Inlet pressure must be non-zero to compute a compression ratio",
        ));
    }
    let energy_per_kg_kwh = compression_energy_per_kg(to_pressure_bar);
    Ok(CompressionEnergyResult {
        energy_required_kwh: hydrogen_kg * energy_per_kg_kwh,
        energy_per_kg_kwh,
        compression_ratio: to_pressure_bar / from_pressure_bar,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn table_hit_is_exact() {
        assert_eq!(lookup_compression_table(870.0), Some(3.36));
        assert_eq!(lookup_compression_table(870.5), None);
    }

    #[test]
    fn fallback_matches_700_bar_reference() {
        // 700 bar는 표 값과 근사식이 같은 값을 준다.
        let approx = (700.0 / COMPRESSION_FALLBACK_REFERENCE_BAR) * COMPRESSION_FALLBACK_REFERENCE_KWH_PER_KG;
        assert_eq!(approx, compression_energy_per_kg(700.0));
        assert!((compression_energy_per_kg(500.0) - 500.0 / 700.0 * 3.24).abs() < 1e-12);
    }
}
