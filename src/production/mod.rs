//! 수소 생산 관련 계산 모듈 모음.
//! 수전해 생산량, 물 사용량, 탄소 감축량, 방식별 효율 보정, 설비 집계 지표로 구성한다.

pub mod aggregate;
pub mod carbon;
pub mod electrolysis;
pub mod performance;
pub mod water;

pub use aggregate::*;
pub use carbon::{calculate_carbon_offset, CarbonOffsetResult, ProductionType};
pub use electrolysis::{
    calculate_hydrogen_production, ElectrolyzerType, HydrogenProductionInput,
    HydrogenProductionResult,
};
pub use performance::{
    calculate_alkaline_performance, calculate_pem_performance, calculate_soec_performance,
};
pub use water::{calculate_water_consumption, WaterConsumptionResult};
