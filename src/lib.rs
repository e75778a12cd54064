//! 냉방 용량 계산 로직을 라이브러리로 분리하여 CLI 뿐 아니라 추후 확장도 쉽게 한다.

pub mod app;
pub mod capacity;
pub mod config;
pub mod conversion;
pub mod geometry;
pub mod quantity;
pub mod rates;
pub mod ui_cli;
pub mod units;
