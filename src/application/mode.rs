//! 실행 모드 탐지기.

use crate::application::ports::PipeCheck;
use crate::domain::mode::ExecutionMode;
use crate::error::ProbeError;

/// 주입된 파이프 검사기로 현재 실행 모드를 판별한다.
pub struct ModeDetector {
    check: Box<dyn PipeCheck>,
}

impl ModeDetector {
    pub fn new(check: impl PipeCheck + 'static) -> Self {
        Self {
            check: Box::new(check),
        }
    }

    /// 검사 결과를 실행 모드로 변환한다. 검사 실패 시 기본 모드를 가정하지 않고 에러를 돌려준다.
    pub fn detect(&self) -> Result<ExecutionMode, ProbeError> {
        let piped = self.check.is_piped()?;
        let mode = ExecutionMode::from_piped(piped);
        tracing::debug!(%mode, "execution mode detected");
        Ok(mode)
    }
}
