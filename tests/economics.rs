//! LCOH/EROI 테스트. 할인율 0은 DegenerateInput으로 거부한다.
use hydrogen_platform_toolbox::economics::{
    calculate_eroi, calculate_lcoh, capital_recovery_factor, LcohInput,
};
use hydrogen_platform_toolbox::CalcError;

fn assert_close(label: &str, actual: f64, expected: f64, rel_tol: f64) {
    let denom = expected.abs().max(1.0);
    let diff = (actual - expected).abs();
    assert!(
        diff <= rel_tol * denom,
        "{label} expected {expected:.6} got {actual:.6} (diff {diff:.6}, tol {rel_tol})"
    );
}

fn base_input() -> LcohInput {
    LcohInput {
        capex_usd: 1_000_000.0,
        annual_opex_usd: 50_000.0,
        annual_production_kg: 100_000.0,
        lifetime_years: 20.0,
        discount_rate: 0.08,
    }
}

#[test]
fn lcoh_with_eight_percent_discount() {
    let r = calculate_lcoh(base_input()).expect("lcoh");
    let crf = 0.08 / (1.0 - 1.08_f64.powf(-20.0));
    assert_close("lcoh", r.lcoh_usd_per_kg, (1_000_000.0 * crf + 50_000.0) / 100_000.0, 1e-12);
    // 약 1.5185 USD/kg
    assert_close("lcoh approx", r.lcoh_usd_per_kg, 1.5185, 1e-4);
}

#[test]
fn total_is_undiscounted_sum() {
    let r = calculate_lcoh(base_input()).expect("lcoh");
    assert_eq!(r.total_npv_usd, 1_000_000.0 + 50_000.0 * 20.0);
}

#[test]
fn small_discount_rate_approaches_straight_line() {
    let input = LcohInput {
        discount_rate: 0.0001,
        ..base_input()
    };
    let r = calculate_lcoh(input).expect("lcoh");
    let limit = (1_000_000.0 / 20.0 + 50_000.0) / 100_000.0;
    assert_close("limit", r.lcoh_usd_per_kg, limit, 2e-3);
    assert!(r.lcoh_usd_per_kg > limit);
}

#[test]
fn zero_discount_rate_is_degenerate() {
    let input = LcohInput {
        discount_rate: 0.0,
        ..base_input()
    };
    assert!(matches!(
        calculate_lcoh(input),
        Err(CalcError::DegenerateInput(_))
    ));
    assert!(capital_recovery_factor(0.0, 20.0).is_err());
}

#[test]
fn zero_production_is_degenerate() {
    let input = LcohInput {
        annual_production_kg: 0.0,
        ..base_input()
    };
    assert!(matches!(
        calculate_lcoh(input),
        Err(CalcError::DegenerateInput(_))
    ));
}

#[test]
fn eroi_ratio() {
    assert_eq!(calculate_eroi(10.0, 5.0), 2.0);
    assert!(calculate_eroi(1.0, 0.0).is_infinite());
}
