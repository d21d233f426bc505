use serde::{Deserialize, Serialize};

use crate::constants::{self, DEFAULT_TRANSPORT_RATE_USD_PER_KG_KM};
use crate::error::CalcError;

/// 수소 운송 수단.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TransportType {
    TubeTrailer,
    Tanker,
    Pipeline,
}

impl TransportType {
    pub const ALL: [TransportType; 3] = [
        TransportType::TubeTrailer,
        TransportType::Tanker,
        TransportType::Pipeline,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            TransportType::TubeTrailer => "tube_trailer",
            TransportType::Tanker => "tanker",
            TransportType::Pipeline => "pipeline",
        }
    }

    /// 이름으로 운송 수단을 찾는다. 모르는 이름이면 `None`.
    pub fn from_name(name: &str) -> Option<TransportType> {
        let key = name.trim().to_ascii_lowercase().replace('-', "_");
        TransportType::ALL.into_iter().find(|t| t.as_str() == key)
    }

    /// 운송 단가 [USD/(kg·km)]
    pub fn rate_usd_per_kg_km(&self) -> f64 {
        transport_rate(Some(*self))
    }
}

impl std::fmt::Display for TransportType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for TransportType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        TransportType::from_name(s).ok_or_else(|| format!("unknown transport type: {}", s.trim()))
    }
}

/// 운송 단가를 조회한다. 지정되지 않았거나 표에 없는 경우 기본 단가(0.15)를 쓴다.
pub fn transport_rate(kind: Option<TransportType>) -> f64 {
    match kind.and_then(constants::find_transport_mode) {
        Some(mode) => mode.rate_usd_per_kg_km,
        None => DEFAULT_TRANSPORT_RATE_USD_PER_KG_KM,
    }
}

/// 문자열로 받은 운송 수단 이름의 단가. 모르는 이름은 기본 단가로 처리한다.
pub fn rate_for_name(name: &str) -> f64 {
    transport_rate(TransportType::from_name(name))
}

/// 운송비 계산 입력.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TransportationCostInput {
    /// 운송량 [kg]
    pub hydrogen_kg: f64,
    /// 운송 거리 [km]
    pub distance_km: f64,
    /// 운송 수단. `None`이면 기본 단가.
    pub transport_type: Option<TransportType>,
}

/// 운송비 계산 결과.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct TransportationCostResult {
    /// 총 운송비 [USD]
    pub total_cost_usd: f64,
    /// kg당 운송비 [USD/kg]
    pub cost_per_kg_usd: f64,
    /// km당 운송비 [USD/km]
    pub cost_per_km_usd: f64,
}

/// 운송량·거리·수단으로 운송비를 계산한다.
pub fn calculate_transportation_cost(
    input: TransportationCostInput,
) -> Result<TransportationCostResult, CalcError> {
    if input.hydrogen_kg == 0.0 {
        return Err(CalcError::DegenerateInput(
            "Hydrogen mass must be non-zero to compute cost per kg",
        ));
    }
    if input.distance_km == 0.0 {
        return Err(CalcError::DegenerateInput(
            "Distance must be non-zero to compute cost per km",
        ));
    }
    let rate = transport_rate(input.transport_type);
    let total_cost_usd = input.hydrogen_kg * input.distance_km * rate;
    Ok(TransportationCostResult {
        total_cost_usd,
        cost_per_kg_usd: total_cost_usd / input.hydrogen_kg,
        cost_per_km_usd: total_cost_usd / input.distance_km,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn names_accept_dash_and_case() {
        assert_eq!(TransportType::from_name("Tube-Trailer"), Some(TransportType::TubeTrailer));
        assert_eq!(TransportType::from_name(" pipeline"), Some(TransportType::Pipeline));
        assert_eq!(TransportType::from_name("ship"), None);
    }

    #[test]
    fn unknown_name_uses_default_rate() {
        assert_eq!(rate_for_name("ship"), 0.15);
        assert_eq!(rate_for_name("tanker"), 0.25);
        assert_eq!(transport_rate(None), DEFAULT_TRANSPORT_RATE_USD_PER_KG_KM);
    }
}
