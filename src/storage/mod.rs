//! 수소 저장 관련 계산(압축, 액화, 충전율, 왕복 효율).

pub mod compression;
pub mod liquefaction;
pub mod utilization;

pub use compression::{calculate_compression_energy, CompressionEnergyResult};
pub use liquefaction::calculate_liquefaction_energy;
pub use utilization::{calculate_round_trip_efficiency, calculate_storage_utilization};
