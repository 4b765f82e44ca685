//! 온도 변환 핵심 로직을 라이브러리로 분리하여 CLI와 GUI가 함께 쓴다.

pub mod app;
pub mod config;
pub mod conversion;
pub mod format;
pub mod logging;
pub mod reading;
pub mod ui_cli;
pub mod units;

pub use conversion::{
    convert_all, convert_for_display, parse_input, ConversionError, ConversionResult,
    ConversionTable,
};
pub use reading::Reading;
pub use units::TemperatureUnit;
