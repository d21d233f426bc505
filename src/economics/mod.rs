//! 수소 생산 경제성 계산(LCOH, EROI).

pub mod eroi;
pub mod lcoh;

pub use eroi::calculate_eroi;
pub use lcoh::{calculate_lcoh, capital_recovery_factor, LcohInput, LcohResult};
