//! 애플리케이션 조립(composition root) 모듈.

use crate::application::mode::ModeDetector;
use crate::application::ports::ConfigRepository;
use crate::application::usecases::detect_mode::DetectModeUseCase;
use crate::application::usecases::inspect_config::InspectConfigUseCase;
use crate::application::usecases::resolve_context::ResolveContextUseCase;
use crate::domain::options::InvocationOptions;
use crate::infrastructure::adapters::{LayeredConfigRepository, StdStreamCheck};

/// 실행 시점 의존성을 한 곳에서 조립하는 컨테이너.
pub struct AppComposition {
    detector: ModeDetector,
    config_repo: Box<dyn ConfigRepository>,
}

impl Default for AppComposition {
    fn default() -> Self {
        Self::from_options(&InvocationOptions::default())
    }
}

impl AppComposition {
    /// 실제 stdin 검사기와 기본 탐색 경로로 조립한다.
    pub fn from_options(options: &InvocationOptions) -> Self {
        Self::with_parts(
            ModeDetector::new(StdStreamCheck::default()),
            Box::new(LayeredConfigRepository::from_options(options)),
        )
    }

    /// 탐지기/설정 저장소를 외부에서 주입한다.
    pub fn with_parts(detector: ModeDetector, config_repo: Box<dyn ConfigRepository>) -> Self {
        Self {
            detector,
            config_repo,
        }
    }

    /// 실행 모드 판별 유스케이스를 생성한다.
    pub fn detect_mode_usecase(&self) -> DetectModeUseCase<'_> {
        DetectModeUseCase {
            detector: &self.detector,
        }
    }

    /// 설정 점검 유스케이스를 생성한다.
    pub fn inspect_config_usecase(&self) -> InspectConfigUseCase<'_> {
        InspectConfigUseCase {
            config_repo: self.config_repo.as_ref(),
        }
    }

    /// 실행 컨텍스트 확정 유스케이스를 생성한다.
    pub fn resolve_context_usecase(&self) -> ResolveContextUseCase<'_> {
        ResolveContextUseCase {
            detector: &self.detector,
            config_repo: self.config_repo.as_ref(),
        }
    }
}
