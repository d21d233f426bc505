//! 수전해 효율 보정 및 설비 집계 지표 테스트.
use hydrogen_platform_toolbox::production::{
    calculate_alkaline_performance, calculate_capacity_factor, calculate_pem_performance,
    calculate_power_requirement, calculate_production_efficiency,
    calculate_renewable_energy_capacity, calculate_soec_performance, estimate_daily_production,
};

fn assert_close(label: &str, actual: f64, expected: f64, rel_tol: f64) {
    let denom = expected.abs().max(1.0);
    let diff = (actual - expected).abs();
    assert!(
        diff <= rel_tol * denom,
        "{label} expected {expected:.6} got {actual:.6} (diff {diff:.6}, tol {rel_tol})"
    );
}

#[test]
fn pem_plateau_and_penalties() {
    assert_eq!(calculate_pem_performance(70.0, 65.0, 0.0), 70.0);
    assert_eq!(calculate_pem_performance(70.0, 50.0, 0.0), 70.0);
    assert_eq!(calculate_pem_performance(70.0, 80.0, 0.0), 70.0);
    // 90°C: 1 - 0.002×25 = 0.95, 30 bar: 1 - 0.3×0.01 = 0.997
    assert_close("pem", calculate_pem_performance(70.0, 90.0, 30.0), 70.0 * 0.95 * 0.997, 1e-12);
    // 40°C: 1 - 0.002×25
    assert_close("pem cold", calculate_pem_performance(70.0, 40.0, 0.0), 66.5, 1e-12);
}

#[test]
fn pem_is_single_peaked_in_temperature() {
    let mut prev = calculate_pem_performance(70.0, 0.0, 10.0);
    for t in (5..=50).step_by(5) {
        let cur = calculate_pem_performance(70.0, t as f64, 10.0);
        assert!(cur >= prev, "t={t}");
        prev = cur;
    }
    let mut prev = calculate_pem_performance(70.0, 80.0, 10.0);
    for t in (85..=150).step_by(5) {
        let cur = calculate_pem_performance(70.0, t as f64, 10.0);
        assert!(cur <= prev, "t={t}");
        prev = cur;
    }
}

#[test]
fn alkaline_current_and_temperature_factors() {
    assert_eq!(calculate_alkaline_performance(70.0, 300.0, 80.0), 70.0);
    assert_eq!(calculate_alkaline_performance(70.0, 200.0, 90.0), 70.0);
    // J=500: 1 - 0.0005×200 = 0.9, T=100: 1 - 0.003×20 = 0.94
    assert_close(
        "alkaline",
        calculate_alkaline_performance(70.0, 500.0, 100.0),
        70.0 * 0.9 * 0.94,
        1e-12,
    );
    assert_close(
        "alkaline low J",
        calculate_alkaline_performance(70.0, 100.0, 80.0),
        70.0 * 0.9,
        1e-12,
    );
}

#[test]
fn soec_temperature_window() {
    assert_eq!(calculate_soec_performance(80.0, 750.0), 80.0);
    assert_eq!(calculate_soec_performance(80.0, 850.0), 80.0);
    assert_close("soec 700", calculate_soec_performance(80.0, 700.0), 40.0, 1e-12);
    assert_close("soec 900", calculate_soec_performance(80.0, 900.0), 40.0, 1e-12);
}

#[test]
fn production_efficiency_against_hhv() {
    // 394 kWh / 39.4 kWh/kg = 10 kg 이론 생산량
    assert_close("eff", calculate_production_efficiency(7.0, 394.0), 70.0, 1e-12);
    assert_eq!(calculate_production_efficiency(7.0, 0.0), 0.0);
}

#[test]
fn sizing_helpers() {
    assert_close("power", calculate_power_requirement(24.0, 100.0), 39.4, 1e-12);
    assert_close(
        "renewable",
        calculate_renewable_energy_capacity(39.4, 25.0),
        157.6,
        1e-12,
    );
    assert_close("cf", calculate_capacity_factor(1200.0, 100.0, 24.0), 50.0, 1e-12);
    assert_close("daily", estimate_daily_production(1000.0, 70.0, 24.0), 336.0, 1e-12);
}

#[test]
fn unguarded_helpers_follow_ieee() {
    assert!(calculate_power_requirement(10.0, 0.0).is_infinite());
    assert!(calculate_renewable_energy_capacity(10.0, 0.0).is_infinite());
    assert!(calculate_capacity_factor(0.0, 0.0, 24.0).is_nan());
}
