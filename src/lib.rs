//! 단위 변환 핵심 로직(단위 표, 변환 엔진, 프리셋 해석)을 라이브러리로 분리하여
//! CLI 외의 화면에서도 그대로 쓸 수 있게 한다. 핵심 모듈은 상태를 갖지 않는다.

pub mod app;
pub mod config;
pub mod conversion;
pub mod history;
pub mod i18n;
pub mod preset;
pub mod quantity;
pub mod registry;
pub mod ui_cli;
pub mod units;

pub use conversion::{compare, convert, ComparisonEntry, ComparisonSet, ConversionError};
pub use preset::{parse_preset, PresetParseError};
pub use registry::{Registry, RegistryError};
