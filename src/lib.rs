//! 핵심 상태/매핑 로직을 라이브러리로 분리하여 CLI와 GUI가 공유한다.

pub mod app;
pub mod catalog;
pub mod charts;
pub mod config;
pub mod filter;
pub mod metrics;
pub mod selection;
pub mod ui_cli;
pub mod visual;
