//! 현재 실행 모드를 판별하는 유스케이스.

use anyhow::Result;

use crate::application::mode::ModeDetector;
use crate::domain::mode::ExecutionMode;

pub struct DetectModeUseCase<'a> {
    pub detector: &'a ModeDetector,
}

impl<'a> DetectModeUseCase<'a> {
    pub fn execute(&self) -> Result<ExecutionMode> {
        Ok(self.detector.detect()?)
    }
}
