/// 에너지 투자 수익비(EROI) = 산출 에너지 / 투입 에너지.
pub fn calculate_eroi(energy_output_kwh: f64, energy_input_kwh: f64) -> f64 {
    energy_output_kwh / energy_input_kwh
}
