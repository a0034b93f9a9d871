//! 명령 실행 시 사용자가 지정한 설정 관련 옵션.

use std::path::PathBuf;

/// CLI/라이브러리 호출자가 넘기는 설정 재정의 값.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InvocationOptions {
    /// 기본 탐색 경로보다 먼저 확인할 설정 디렉터리
    pub config_dir: Option<PathBuf>,
    /// 캐시 디렉터리 재정의
    pub cache_dir: Option<PathBuf>,
    /// persona 디렉터리 재정의
    pub personas_dir: Option<PathBuf>,
}
