//! 적용 중인 설정 계층을 점검하는 유스케이스.

use anyhow::{Context, Result};

use crate::application::ports::ConfigRepository;
use crate::infrastructure::config::ConfigInspection;

pub struct InspectConfigUseCase<'a> {
    pub config_repo: &'a dyn ConfigRepository,
}

impl<'a> InspectConfigUseCase<'a> {
    /// 탐색한 경로, 읽은 파일, 키별 값과 출처를 모은다. 출력 형식은 호출자가 정한다.
    pub fn execute(&self) -> Result<ConfigInspection> {
        let inspection = self
            .config_repo
            .inspect()
            .context("failed to inspect configuration")?;
        tracing::debug!(
            loaded = inspection.loaded_path.as_deref().unwrap_or("-"),
            keys = inspection.settings.len(),
            "configuration inspected"
        );
        Ok(inspection)
    }
}
