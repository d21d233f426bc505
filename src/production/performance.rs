//! 수전해 방식별 운전 조건에 따른 효율 보정.
//! 모두 최적 구간에서는 보정 없이(1.0) 유지되고, 구간을 벗어나면
//! 중심값과의 거리에 비례해 선형으로 효율이 떨어진다.

use crate::constants::ValueRange;

/// PEM 최적 운전 온도 [°C]
pub const PEM_OPTIMAL_TEMP_C: ValueRange = ValueRange::new(50.0, 80.0);
const PEM_TEMP_PENALTY_PER_C: f64 = 0.002;
/// 100 bar당 1% 감소
const PEM_PRESSURE_PENALTY_PER_100_BAR: f64 = 0.01;

/// 알칼라인 최적 전류밀도
pub const ALKALINE_OPTIMAL_CURRENT_DENSITY: ValueRange = ValueRange::new(200.0, 400.0);
const ALKALINE_CURRENT_PENALTY: f64 = 0.0005;
/// 알칼라인 최적 운전 온도 [°C]
pub const ALKALINE_OPTIMAL_TEMP_C: ValueRange = ValueRange::new(70.0, 90.0);
const ALKALINE_TEMP_PENALTY_PER_C: f64 = 0.003;

/// SOEC 최적 운전 온도 [°C]
pub const SOEC_OPTIMAL_TEMP_C: ValueRange = ValueRange::new(750.0, 850.0);
const SOEC_TEMP_PENALTY_PER_C: f64 = 0.005;

/// 평탄 구간 + 선형 감소 형태의 보정 계수. 감소량은 최적 구간의 중앙값 기준.
fn plateau_factor(value: f64, optimal: ValueRange, penalty: f64) -> f64 {
    if optimal.contains(value) {
        1.0
    } else {
        1.0 - penalty * (optimal.midpoint() - value).abs()
    }
}

/// PEM 효율을 온도·압력 조건으로 보정한다.
pub fn calculate_pem_performance(base_efficiency: f64, temperature_c: f64, pressure_bar: f64) -> f64 {
    let temp_factor = plateau_factor(
        temperature_c,
        PEM_OPTIMAL_TEMP_C,
        PEM_TEMP_PENALTY_PER_C,
    );
    let pressure_factor = 1.0 - (pressure_bar / 100.0) * PEM_PRESSURE_PENALTY_PER_100_BAR;
    base_efficiency * temp_factor * pressure_factor
}

/// 알칼라인 효율을 전류밀도·온도 조건으로 보정한다.
pub fn calculate_alkaline_performance(
    base_efficiency: f64,
    current_density: f64,
    temperature_c: f64,
) -> f64 {
    let current_factor = plateau_factor(
        current_density,
        ALKALINE_OPTIMAL_CURRENT_DENSITY,
        ALKALINE_CURRENT_PENALTY,
    );
    let temp_factor = plateau_factor(
        temperature_c,
        ALKALINE_OPTIMAL_TEMP_C,
        ALKALINE_TEMP_PENALTY_PER_C,
    );
    base_efficiency * current_factor * temp_factor
}

/// SOEC 효율을 운전 온도로 보정한다.
pub fn calculate_soec_performance(base_efficiency: f64, temperature_c: f64) -> f64 {
    base_efficiency
        * plateau_factor(
            temperature_c,
            SOEC_OPTIMAL_TEMP_C,
            SOEC_TEMP_PENALTY_PER_C,
        )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plateau_edges_are_flat() {
        assert_eq!(plateau_factor(50.0, PEM_OPTIMAL_TEMP_C, 0.002), 1.0);
        assert_eq!(plateau_factor(80.0, PEM_OPTIMAL_TEMP_C, 0.002), 1.0);
    }

    #[test]
    fn penalty_measured_from_center_not_edge() {
        // 90°C는 구간 밖이고, 감소량은 중심 65°C로부터 25°C만큼이다.
        let f = plateau_factor(90.0, PEM_OPTIMAL_TEMP_C, 0.002);
        assert!((f - 0.95).abs() < 1e-12);
    }

    #[test]
    fn centers_are_range_midpoints() {
        assert_eq!(PEM_OPTIMAL_TEMP_C.midpoint(), 65.0);
        assert_eq!(ALKALINE_OPTIMAL_CURRENT_DENSITY.midpoint(), 300.0);
        assert_eq!(ALKALINE_OPTIMAL_TEMP_C.midpoint(), 80.0);
        assert_eq!(SOEC_OPTIMAL_TEMP_C.midpoint(), 800.0);
        // 700°C: 중앙값 800°C에서 100°C 떨어져 50% 감소
        assert!((calculate_soec_performance(80.0, 700.0) - 40.0).abs() < 1e-12);
    }
}
