/// 저장 설비 충전율 [%]. 총 용량이 0이면 0을 반환한다.
pub fn calculate_storage_utilization(current_level_kg: f64, total_capacity_kg: f64) -> f64 {
    if total_capacity_kg == 0.0 {
        return 0.0;
    }
    current_level_kg / total_capacity_kg * 100.0
}

/// 전력 → 수소 → 저장 → 전력 변환 전체의 왕복 효율 [%].
pub fn calculate_round_trip_efficiency(
    electrolysis_efficiency_percent: f64,
    storage_efficiency_percent: f64,
    conversion_efficiency_percent: f64,
) -> f64 {
    (electrolysis_efficiency_percent / 100.0)
        * (storage_efficiency_percent / 100.0)
        * (conversion_efficiency_percent / 100.0)
        * 100.0
}
