//! TOML로 기술한 수소 플랜트 시나리오를 생산 → 저장 → 운송 → 경제성 순으로 평가한다.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::economics::{calculate_lcoh, LcohInput, LcohResult};
use crate::error::CalcError;
use crate::production::{
    calculate_carbon_offset, calculate_hydrogen_production, calculate_water_consumption,
    CarbonOffsetResult, ElectrolyzerType, HydrogenProductionInput, HydrogenProductionResult,
    ProductionType,
};
use crate::storage::{
    calculate_compression_energy, calculate_liquefaction_energy, calculate_storage_utilization,
};
use crate::transport::{
    calculate_transportation_cost, TransportType, TransportationCostInput,
    TransportationCostResult,
};

fn default_operating_days() -> f64 {
    330.0
}

/// 플랜트 시나리오 전체.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlantScenario {
    #[serde(default)]
    pub name: String,
    /// 연간 가동일 [일/년]. 생산 블록의 전력량을 하루치로 보고 연간 생산량을 환산한다.
    #[serde(default = "default_operating_days")]
    pub operating_days_per_year: f64,
    pub production: ProductionSection,
    #[serde(default)]
    pub storage: Option<StorageSection>,
    #[serde(default)]
    pub transport: Option<TransportSection>,
    pub economics: EconomicsSection,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProductionSection {
    /// 일일 투입 전력량 [kWh]
    pub energy_input_kwh: f64,
    pub efficiency_percent: f64,
    #[serde(default)]
    pub electrolyzer_type: Option<ElectrolyzerType>,
    #[serde(default)]
    pub temperature_c: Option<f64>,
    #[serde(default)]
    pub pressure_bar: Option<f64>,
    /// 탄소 감축량 보고에 쓸 생산 방식
    #[serde(default)]
    pub production_type: ProductionType,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StorageSection {
    pub total_capacity_kg: f64,
    #[serde(default)]
    pub current_level_kg: f64,
    /// 압축기 흡입 압력 [bar]
    #[serde(default = "default_inlet_pressure")]
    pub inlet_pressure_bar: f64,
    /// 저장 압력 [bar]
    #[serde(default = "default_target_pressure")]
    pub target_pressure_bar: f64,
    /// true면 압축 대신 액화로 저장한다.
    #[serde(default)]
    pub liquefy: bool,
}

fn default_inlet_pressure() -> f64 {
    30.0
}

fn default_target_pressure() -> f64 {
    350.0
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TransportSection {
    pub distance_km: f64,
    /// 운송 수단 이름. 모르는 이름은 기본 단가로 처리한다.
    #[serde(default)]
    pub transport_type: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EconomicsSection {
    pub capex_usd: f64,
    pub annual_opex_usd: f64,
    pub discount_rate: f64,
    pub lifetime_years: f64,
}

/// 저장 조건(압축 또는 액화) 평가 결과.
#[derive(Debug, Clone, Serialize)]
pub struct StorageReport {
    /// 생산량을 더한 뒤의 충전율 [%]
    pub utilization_percent: f64,
    /// 용량을 넘어 저장하지 못한 양 [kg]
    pub overflow_kg: f64,
    /// "compression" 또는 "liquefaction"
    pub method: &'static str,
    pub conditioning_energy_kwh: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub compression_ratio: Option<f64>,
}

/// 시나리오 평가 결과.
#[derive(Debug, Clone, Serialize)]
pub struct ScenarioReport {
    pub name: String,
    pub electrolyzer_type: ElectrolyzerType,
    pub daily_production: HydrogenProductionResult,
    pub practical_water_l: f64,
    pub carbon: CarbonOffsetResult,
    pub annual_production_kg: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub storage: Option<StorageReport>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub transport: Option<TransportationCostResult>,
    pub lcoh: LcohResult,
}

/// 시나리오 로드/평가 중 발생 가능한 오류.
#[derive(Debug)]
pub enum ScenarioError {
    /// 파일 입출력 오류
    Io(std::io::Error),
    /// TOML 파싱 오류
    Parse(toml::de::Error),
    /// 보고서 직렬화 오류
    Serialize(toml::ser::Error),
    /// 계산 오류
    Calc(CalcError),
}

impl std::fmt::Display for ScenarioError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ScenarioError::Io(e) => write!(f, "scenario file error: {e}"),
            ScenarioError::Parse(e) => write!(f, "scenario parse error: {e}"),
            ScenarioError::Serialize(e) => write!(f, "report serialization error: {e}"),
            ScenarioError::Calc(e) => write!(f, "scenario calculation error: {e}"),
        }
    }
}

impl std::error::Error for ScenarioError {}

impl From<std::io::Error> for ScenarioError {
    fn from(value: std::io::Error) -> Self {
        ScenarioError::Io(value)
    }
}

impl From<toml::de::Error> for ScenarioError {
    fn from(value: toml::de::Error) -> Self {
        ScenarioError::Parse(value)
    }
}

impl From<toml::ser::Error> for ScenarioError {
    fn from(value: toml::ser::Error) -> Self {
        ScenarioError::Serialize(value)
    }
}

impl From<CalcError> for ScenarioError {
    fn from(value: CalcError) -> Self {
        ScenarioError::Calc(value)
    }
}

/// TOML 문자열을 시나리오로 해석한다.
pub fn parse_scenario(src: &str) -> Result<PlantScenario, ScenarioError> {
    Ok(toml::from_str(src)?)
}

/// 시나리오 파일을 읽는다.
pub fn load_scenario(path: &Path) -> Result<PlantScenario, ScenarioError> {
    let content = fs::read_to_string(path)?;
    parse_scenario(&content)
}

/// 시나리오를 평가한다.
pub fn evaluate_scenario(scenario: &PlantScenario) -> Result<ScenarioReport, ScenarioError> {
    let prod = &scenario.production;
    let electrolyzer_type = ElectrolyzerType::resolve(prod.electrolyzer_type);
    let daily = calculate_hydrogen_production(HydrogenProductionInput {
        energy_input_kwh: prod.energy_input_kwh,
        efficiency_percent: prod.efficiency_percent,
        electrolyzer_type: Some(electrolyzer_type),
        temperature_c: prod.temperature_c,
        pressure_bar: prod.pressure_bar,
    })?;
    let h2 = daily.hydrogen_produced_kg;
    let water = calculate_water_consumption(h2);
    let carbon = calculate_carbon_offset(h2, prod.production_type);

    let storage = match &scenario.storage {
        Some(section) => Some(evaluate_storage(section, h2)?),
        None => None,
    };

    let transport = match &scenario.transport {
        Some(section) => Some(calculate_transportation_cost(TransportationCostInput {
            hydrogen_kg: h2,
            distance_km: section.distance_km,
            transport_type: section
                .transport_type
                .as_deref()
                .and_then(TransportType::from_name),
        })?),
        None => None,
    };

    let annual_production_kg = h2 * scenario.operating_days_per_year;
    let econ = &scenario.economics;
    let lcoh = calculate_lcoh(LcohInput {
        capex_usd: econ.capex_usd,
        annual_opex_usd: econ.annual_opex_usd,
        annual_production_kg,
        lifetime_years: econ.lifetime_years,
        discount_rate: econ.discount_rate,
    })?;

    Ok(ScenarioReport {
        name: scenario.name.clone(),
        electrolyzer_type,
        daily_production: daily,
        practical_water_l: water.practical_l,
        carbon,
        annual_production_kg,
        storage,
        transport,
        lcoh,
    })
}

fn evaluate_storage(section: &StorageSection, produced_kg: f64) -> Result<StorageReport, CalcError> {
    let filled = section.current_level_kg + produced_kg;
    let stored = filled.min(section.total_capacity_kg);
    let overflow_kg = (filled - section.total_capacity_kg).max(0.0);
    let utilization_percent = calculate_storage_utilization(stored, section.total_capacity_kg);

    // 새로 들어온 양만 컨디셔닝 에너지를 계산한다.
    let incoming = (stored - section.current_level_kg).max(0.0);
    if section.liquefy {
        return Ok(StorageReport {
            utilization_percent,
            overflow_kg,
            method: "liquefaction",
            conditioning_energy_kwh: calculate_liquefaction_energy(incoming),
            compression_ratio: None,
        });
    }
    let comp = calculate_compression_energy(
        incoming,
        section.inlet_pressure_bar,
        section.target_pressure_bar,
    )?;
    Ok(StorageReport {
        utilization_percent,
        overflow_kg,
        method: "compression",
        conditioning_energy_kwh: comp.energy_required_kwh,
        compression_ratio: Some(comp.compression_ratio),
    })
}

/// 보고서를 TOML 문자열로 직렬화한다.
pub fn report_to_toml(report: &ScenarioReport) -> Result<String, ScenarioError> {
    Ok(toml::to_string_pretty(report)?)
}
