//! 애플리케이션 계층이 의존하는 포트(추상 인터페이스) 모음.

use std::io;

use anyhow::Result;
use serde_json::Value;

use crate::application::config::Settings;
use crate::infrastructure::config::ConfigInspection;

/// 표준 스트림이 파이프(비터미널)에 연결되어 있는지 확인하는 포트.
///
/// 인자 없는 `Fn() -> io::Result<bool>` 클로저도 그대로 사용할 수 있다.
pub trait PipeCheck: Send + Sync {
    fn is_piped(&self) -> io::Result<bool>;
}

impl<F> PipeCheck for F
where
    F: Fn() -> io::Result<bool> + Send + Sync,
{
    fn is_piped(&self) -> io::Result<bool> {
        self()
    }
}

/// 키 기반 설정 조회 포트.
pub trait SettingsSource {
    fn get(&self, key: &str) -> Option<Value>;
}

/// 설정 조립/점검을 담당하는 저장소 포트.
pub trait ConfigRepository: Send + Sync {
    fn settings(&self) -> Result<Settings>;
    fn inspect(&self) -> Result<ConfigInspection>;
}

/// 프로세스 종료 포트. 테스트에서는 종료 코드만 기록하는 구현으로 교체한다.
pub trait ProcessExit {
    fn exit(&self, code: i32);
}
