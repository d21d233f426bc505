use serde::{Deserialize, Serialize};

use crate::constants::PHYSICAL_CONSTANTS;

/// 저탄소 수소 생산 방식.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProductionType {
    /// 재생에너지 수전해. 그레이 수소 배출을 전량 대체한다.
    #[default]
    Green,
    /// CCS 적용 개질. 잔여 배출만큼 감축량이 줄어든다.
    Blue,
}

impl ProductionType {
    pub fn as_str(&self) -> &'static str {
        match self {
            ProductionType::Green => "green",
            ProductionType::Blue => "blue",
        }
    }

    /// 수소 1kg당 CO2 감축량 [kg CO2/kg H2]
    pub fn offset_per_kg(&self) -> f64 {
        let gray = PHYSICAL_CONSTANTS.gray_hydrogen_co2_kg_per_kg_h2;
        match self {
            ProductionType::Green => gray,
            ProductionType::Blue => gray - PHYSICAL_CONSTANTS.blue_hydrogen_co2_kg_per_kg_h2,
        }
    }
}

impl std::fmt::Display for ProductionType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for ProductionType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "green" => Ok(ProductionType::Green),
            "blue" => Ok(ProductionType::Blue),
            other => Err(format!("unknown production type: {other}")),
        }
    }
}

/// 탄소 감축량 계산 결과.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct CarbonOffsetResult {
    /// 총 감축량 [kg CO2]
    pub total_offset_kg_co2: f64,
    /// 수소 1kg당 감축량 [kg CO2/kg H2]
    pub offset_per_kg: f64,
}

/// 그레이 수소 대비 CO2 감축량을 계산한다.
/// 방식을 따로 정하지 않는 호출부는 `ProductionType::default()`(green)를 넘긴다.
pub fn calculate_carbon_offset(hydrogen_kg: f64, production_type: ProductionType) -> CarbonOffsetResult {
    let offset_per_kg = production_type.offset_per_kg();
    CarbonOffsetResult {
        total_offset_kg_co2: hydrogen_kg * offset_per_kg,
        offset_per_kg,
    }
}
