//! 수소 운송비 계산 모듈.

pub mod cost;

pub use cost::*;
