//! 냉각 계산 로직을 라이브러리로 분리하여 CLI 메뉴와 독립적으로 테스트할 수 있게 한다.

pub mod app;
pub mod config;
pub mod cooling;
pub mod i18n;
pub mod material_db;
pub mod result_log;
pub mod ui_cli;
