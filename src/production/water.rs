use serde::Serialize;

use crate::constants::{PHYSICAL_CONSTANTS, WATER_PRACTICAL_OVERHEAD};

/// 물 사용량 계산 결과.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct WaterConsumptionResult {
    /// 화학양론 기준 물 사용량 [L]
    pub theoretical_l: f64,
    /// 설비 손실 10%를 더한 실사용량 [L]
    pub practical_l: f64,
}

/// 수소 질량에 필요한 물 사용량을 계산한다. 음수 질량도 그대로 계산한다.
pub fn calculate_water_consumption(hydrogen_kg: f64) -> WaterConsumptionResult {
    let theoretical_l = hydrogen_kg * PHYSICAL_CONSTANTS.water_consumption_l_per_kg_h2;
    WaterConsumptionResult {
        theoretical_l,
        practical_l: theoretical_l * WATER_PRACTICAL_OVERHEAD,
    }
}
