//! 명령 실행 전 실행 모드와 설정을 함께 확정하는 유스케이스.

use anyhow::{Context, Result};

use crate::application::config::Settings;
use crate::application::mode::ModeDetector;
use crate::application::ports::ConfigRepository;
use crate::domain::mode::ExecutionMode;

/// 하위 명령 로직에 넘길 실행 컨텍스트.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExecutionContext {
    pub mode: ExecutionMode,
    pub settings: Settings,
}

/// 모드 탐지 후 설정을 조립한다. 두 구성요소는 여기서만 함께 쓰인다.
pub struct ResolveContextUseCase<'a> {
    pub detector: &'a ModeDetector,
    pub config_repo: &'a dyn ConfigRepository,
}

impl<'a> ResolveContextUseCase<'a> {
    pub fn execute(&self) -> Result<ExecutionContext> {
        let mode = self
            .detector
            .detect()
            .context("could not determine execution mode")?;
        let settings = self
            .config_repo
            .settings()
            .context("could not resolve configuration")?;
        Ok(ExecutionContext { mode, settings })
    }
}
