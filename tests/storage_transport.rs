//! 저장·운송 계산 테스트. 분모가 0이 되는 입력은 DegenerateInput 오류로 처리한다.
use hydrogen_platform_toolbox::storage::{
    calculate_compression_energy, calculate_liquefaction_energy, calculate_round_trip_efficiency,
    calculate_storage_utilization,
};
use hydrogen_platform_toolbox::transport::{
    calculate_transportation_cost, rate_for_name, TransportType, TransportationCostInput,
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

#[test]
fn compression_table_hit() {
    let r = calculate_compression_energy(100.0, 1.0, 350.0).expect("compression");
    assert_eq!(r.energy_per_kg_kwh, 2.94);
    assert_close("energy", r.energy_required_kwh, 294.0, 1e-12);
    assert_eq!(r.compression_ratio, 350.0);

    for (bar, kwh) in [(200.0, 2.21), (700.0, 3.24), (870.0, 3.36)] {
        let r = calculate_compression_energy(1.0, 1.0, bar).expect("table");
        assert_eq!(r.energy_per_kg_kwh, kwh, "{bar} bar");
    }
}

#[test]
fn compression_fallback_is_linear_in_pressure() {
    let r = calculate_compression_energy(10.0, 20.0, 500.0).expect("fallback");
    assert_close("per kg", r.energy_per_kg_kwh, 500.0 / 700.0 * 3.24, 1e-12);
    assert_close("ratio", r.compression_ratio, 25.0, 1e-12);
}

#[test]
fn compression_from_zero_pressure_is_degenerate() {
    let err = calculate_compression_energy(10.0, 0.0, 350.0).unwrap_err();
    assert!(matches!(err, CalcError::DegenerateInput(_)), "{err:?}");
}

#[test]
fn liquefaction_is_flat_rate() {
    assert_close("liq", calculate_liquefaction_energy(10.0), 110.0, 1e-12);
    assert_eq!(calculate_liquefaction_energy(0.0), 0.0);
}

#[test]
fn utilization_guards_zero_capacity() {
    assert_eq!(calculate_storage_utilization(50.0, 200.0), 25.0);
    assert_eq!(calculate_storage_utilization(10.0, 0.0), 0.0);
    assert_eq!(calculate_storage_utilization(0.0, 0.0), 0.0);
}

#[test]
fn round_trip_multiplies_stages() {
    assert_close("rte", calculate_round_trip_efficiency(70.0, 90.0, 50.0), 31.5, 1e-12);
}

#[test]
fn pipeline_reference_case() {
    let r = calculate_transportation_cost(TransportationCostInput {
        hydrogen_kg: 500.0,
        distance_km: 100.0,
        transport_type: Some(TransportType::Pipeline),
    })
    .expect("pipeline");
    assert_close("total", r.total_cost_usd, 2500.0, 1e-12);
    assert_close("per kg", r.cost_per_kg_usd, 5.0, 1e-12);
    assert_close("per km", r.cost_per_km_usd, 25.0, 1e-12);

    let tube = calculate_transportation_cost(TransportationCostInput {
        hydrogen_kg: 500.0,
        distance_km: 100.0,
        transport_type: Some(TransportType::TubeTrailer),
    })
    .expect("tube trailer");
    assert!(r.cost_per_kg_usd < tube.cost_per_kg_usd);
    assert_close("tube per kg", tube.cost_per_kg_usd, 15.0, 1e-12);
}

#[test]
fn unknown_transport_falls_back_to_tube_trailer_rate() {
    let unknown = calculate_transportation_cost(TransportationCostInput {
        hydrogen_kg: 10.0,
        distance_km: 10.0,
        transport_type: TransportType::from_name("hyperloop"),
    })
    .expect("unknown");
    assert_close("fallback", unknown.total_cost_usd, 15.0, 1e-12);
    assert_eq!(rate_for_name("hyperloop"), 0.15);
    assert_eq!(rate_for_name("tanker"), 0.25);
}

#[test]
fn zero_mass_or_distance_is_degenerate() {
    for (kg, km) in [(0.0, 100.0), (100.0, 0.0)] {
        let err = calculate_transportation_cost(TransportationCostInput {
            hydrogen_kg: kg,
            distance_km: km,
            transport_type: Some(TransportType::Tanker),
        })
        .unwrap_err();
        assert!(matches!(err, CalcError::DegenerateInput(_)), "kg={kg} km={km}");
    }
}
