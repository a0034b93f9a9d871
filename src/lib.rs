//! shellpilot library root.
//! 실행 모드 탐지와 계층형 설정 조립을 Clean Architecture 계층으로 노출한다.

use anyhow::Result;

pub mod application;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod interface;

pub use error::{ConfigError, ProbeError};

use application::config::Settings;
use application::ports::ConfigRepository;
use domain::mode::ExecutionMode;
use domain::options::InvocationOptions;
use infrastructure::adapters::LayeredConfigRepository;
use interface::cli::AppComposition;

/// 라이브러리 직접 호출용 실행 모드 판별 함수.
pub fn detect_mode() -> Result<ExecutionMode> {
    let composition = AppComposition::default();
    composition.detect_mode_usecase().execute()
}

/// 기본 탐색 경로 + 호출자 옵션으로 설정 스냅샷을 조립한다.
pub fn resolve_settings(options: &InvocationOptions) -> Result<Settings> {
    LayeredConfigRepository::from_options(options).settings()
}
