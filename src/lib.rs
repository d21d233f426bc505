//! 수소 생산·저장·운송 계산 로직을 라이브러리로 분리하여 CLI와 다른 서비스에서 함께 쓴다.

pub mod app;
pub mod cli;
pub mod config;
pub mod constants;
pub mod economics;
pub mod error;
pub mod i18n;
pub mod production;
pub mod scenario;
pub mod storage;
pub mod transport;
pub mod ui_cli;

pub use error::CalcError;
