use serde::{Deserialize, Serialize};

use crate::constants::{self, REFERENCE_TEMPERATURE_C, TEMPERATURE_EFFICIENCY_COEFF};
use crate::error::CalcError;
use crate::production::carbon::{calculate_carbon_offset, ProductionType};
use crate::production::water::calculate_water_consumption;

/// 수전해 방식.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ElectrolyzerType {
    #[serde(rename = "PEM")]
    Pem,
    Alkaline,
    #[serde(rename = "SOEC")]
    Soec,
}

impl ElectrolyzerType {
    pub const ALL: [ElectrolyzerType; 3] = [
        ElectrolyzerType::Pem,
        ElectrolyzerType::Alkaline,
        ElectrolyzerType::Soec,
    ];

    /// 방식이 지정되지 않은 경우 PEM으로 본다.
    pub const DEFAULT: ElectrolyzerType = ElectrolyzerType::Pem;

    /// 선택 입력을 실제 적용할 방식으로 확정한다.
    pub fn resolve(kind: Option<ElectrolyzerType>) -> ElectrolyzerType {
        kind.unwrap_or(Self::DEFAULT)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ElectrolyzerType::Pem => "PEM",
            ElectrolyzerType::Alkaline => "Alkaline",
            ElectrolyzerType::Soec => "SOEC",
        }
    }

    /// 수소 1kg 생산에 드는 전력 [kWh/kg]
    pub fn energy_per_kg_kwh(&self) -> f64 {
        constants::find_electrolyzer(*self)
            .map(|t| t.energy_per_kg_kwh)
            .unwrap_or(DEFAULT_ENERGY_PER_KG_KWH)
    }
}

/// 기술 테이블에 없는 방식에 적용하는 값(PEM 기준)
const DEFAULT_ENERGY_PER_KG_KWH: f64 = 50.0;

impl std::fmt::Display for ElectrolyzerType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for ElectrolyzerType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "pem" => Ok(ElectrolyzerType::Pem),
            "alkaline" | "awe" => Ok(ElectrolyzerType::Alkaline),
            "soec" => Ok(ElectrolyzerType::Soec),
            other => Err(format!("unknown electrolyzer type: {other}")),
        }
    }
}

/// 수전해 운전 조건 입력.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HydrogenProductionInput {
    /// 투입 전력량 [kWh]
    pub energy_input_kwh: f64,
    /// 효율 [%] (0~100)
    pub efficiency_percent: f64,
    /// 수전해 방식. `None`이면 PEM.
    pub electrolyzer_type: Option<ElectrolyzerType>,
    /// 스택 온도 [°C]
    pub temperature_c: Option<f64>,
    /// 운전 압력 [bar]. 생산량 계산에는 쓰지 않는다.
    pub pressure_bar: Option<f64>,
}

impl HydrogenProductionInput {
    pub fn new(energy_input_kwh: f64, efficiency_percent: f64) -> Self {
        Self {
            energy_input_kwh,
            efficiency_percent,
            electrolyzer_type: None,
            temperature_c: None,
            pressure_bar: None,
        }
    }
}

/// 수소 생산량 계산 결과.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct HydrogenProductionResult {
    /// 수소 생산량 [kg]
    pub hydrogen_produced_kg: f64,
    /// 입력 효율 [%]
    pub energy_efficiency_percent: f64,
    /// 필요 물량(이론) [L]
    pub water_required_l: f64,
    /// 그레이 수소 대비 CO2 감축량 [kg]
    pub carbon_offset_kg_co2: f64,
}

/// 기준 온도(25°C)를 넘는 경우에만 효율을 소폭 올려준다.
pub fn temperature_factor(temperature_c: Option<f64>) -> f64 {
    match temperature_c {
        Some(t) if t > REFERENCE_TEMPERATURE_C => {
            1.0 + (t - REFERENCE_TEMPERATURE_C) * TEMPERATURE_EFFICIENCY_COEFF
        }
        _ => 1.0,
    }
}

/// 투입 전력량과 효율로 수소 생산량 및 부수 지표(물, 탄소 감축)를 계산한다.
pub fn calculate_hydrogen_production(
    input: HydrogenProductionInput,
) -> Result<HydrogenProductionResult, CalcError> {
    if input.energy_input_kwh < 0.0 || input.energy_input_kwh.is_nan() {
        return Err(CalcError::InvalidInput("Energy input must be positive"));
    }
    if !(0.0..=100.0).contains(&input.efficiency_percent) {
        return Err(CalcError::InvalidInput(
            "Efficiency must be between 0 and 100",
        ));
    }

    let kind = ElectrolyzerType::resolve(input.electrolyzer_type);
    let energy_per_kg = kind.energy_per_kg_kwh();
    let effective_efficiency =
        input.efficiency_percent / 100.0 * temperature_factor(input.temperature_c);
    let hydrogen_produced_kg = input.energy_input_kwh * effective_efficiency / energy_per_kg;

    let water = calculate_water_consumption(hydrogen_produced_kg);
    let carbon = calculate_carbon_offset(hydrogen_produced_kg, ProductionType::Green);

    Ok(HydrogenProductionResult {
        hydrogen_produced_kg,
        energy_efficiency_percent: input.efficiency_percent,
        water_required_l: water.theoretical_l,
        carbon_offset_kg_co2: carbon.total_offset_kg_co2,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn temperature_factor_only_above_reference() {
        assert_eq!(temperature_factor(None), 1.0);
        assert_eq!(temperature_factor(Some(25.0)), 1.0);
        assert_eq!(temperature_factor(Some(-10.0)), 1.0);
        assert!((temperature_factor(Some(75.0)) - 1.05).abs() < 1e-12);
    }

    #[test]
    fn parses_type_names_case_insensitively() {
        assert_eq!("pem".parse::<ElectrolyzerType>(), Ok(ElectrolyzerType::Pem));
        assert_eq!(" SOEC ".parse::<ElectrolyzerType>(), Ok(ElectrolyzerType::Soec));
        assert_eq!(
            "Alkaline".parse::<ElectrolyzerType>(),
            Ok(ElectrolyzerType::Alkaline)
        );
        assert!("pemfc".parse::<ElectrolyzerType>().is_err());
    }

    #[test]
    fn resolve_defaults_to_pem() {
        assert_eq!(ElectrolyzerType::resolve(None), ElectrolyzerType::Pem);
        assert_eq!(
            ElectrolyzerType::resolve(Some(ElectrolyzerType::Soec)),
            ElectrolyzerType::Soec
        );
    }
}
