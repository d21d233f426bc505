//! 설비 단위 집계 지표. 단순 비례식이며, 생산 효율을 제외하면 분모 0을 따로 처리하지 않는다
//! (IEEE 규칙에 따라 inf/NaN이 그대로 반환된다).

use crate::constants::PHYSICAL_CONSTANTS;
use crate::production::ElectrolyzerType;

const HOURS_PER_DAY: f64 = 24.0;

/// 실제 생산량을 투입 전력 기준 이론 생산량(HHV)과 비교한 효율 [%].
/// 이론 생산량이 0이면 0을 반환한다.
pub fn calculate_production_efficiency(actual_production_kg: f64, energy_input_kwh: f64) -> f64 {
    let theoretical_kg = energy_input_kwh / PHYSICAL_CONSTANTS.hydrogen_hhv_kwh_per_kg;
    if theoretical_kg == 0.0 {
        return 0.0;
    }
    actual_production_kg / theoretical_kg * 100.0
}

/// 일일 목표 생산량을 달성하는 데 필요한 평균 전력 [kW].
pub fn calculate_power_requirement(target_kg_per_day: f64, efficiency_percent: f64) -> f64 {
    let daily_energy_kwh =
        target_kg_per_day * PHYSICAL_CONSTANTS.hydrogen_hhv_kwh_per_kg / (efficiency_percent / 100.0);
    daily_energy_kwh / HOURS_PER_DAY
}

/// 이용률을 고려한 재생에너지 설치 용량 [kW].
pub fn calculate_renewable_energy_capacity(power_requirement_kw: f64, capacity_factor_percent: f64) -> f64 {
    power_requirement_kw / (capacity_factor_percent / 100.0)
}

/// 이용률 [%] = 실제 발전량 / (정격 용량 × 시간)
pub fn calculate_capacity_factor(actual_output_kwh: f64, rated_capacity_kw: f64, hours: f64) -> f64 {
    actual_output_kwh / (rated_capacity_kw * hours) * 100.0
}

/// 수전해 설비 용량과 일일 가동 시간으로 일일 생산량 [kg]을 추정한다.
/// 단위 전력은 기본 방식(PEM) 값을 쓴다.
pub fn estimate_daily_production(capacity_kw: f64, efficiency_percent: f64, operating_hours: f64) -> f64 {
    let energy_kwh = capacity_kw * operating_hours;
    energy_kwh * (efficiency_percent / 100.0) / ElectrolyzerType::DEFAULT.energy_per_kg_kwh()
}
