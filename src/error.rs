//! 실행 모드 탐지/설정 조립 과정의 에러 타입.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// 표준 스트림 상태를 확인하는 플랫폼 호출이 실패했다.
///
/// 이 에러를 받은 호출자는 실행 모드를 "알 수 없음"으로 취급해야 한다.
#[derive(Error, Debug)]
#[error("failed to inspect standard stream")]
pub struct ProbeError {
    #[from]
    source: io::Error,
}

impl ProbeError {
    pub fn io_error(&self) -> &io::Error {
        &self.source
    }
}

/// 설정 탐색/파싱/조립 에러.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// 어떤 탐색 경로에도 설정 파일이 없다(치명적이지 않음).
    #[error("no config file found (searched: {})", display_paths(.searched))]
    NotFound { searched: Vec<PathBuf> },

    /// 설정 파일을 찾았지만 형식이 잘못되었다.
    #[error("failed to parse config file {}: {message}", .path.display())]
    Parse { path: PathBuf, message: String },

    /// 설정 파일을 찾았지만 읽을 수 없다.
    #[error("failed to read config file {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("unsupported config type: {file_type}")]
    UnsupportedType { file_type: String },

    /// 디렉터리 값이 빈 문자열로 설정되었다.
    #[error("setting '{key}' is set to an empty value")]
    EmptyValue { key: String },

    #[error("setting '{key}' must be {expected}")]
    InvalidValue { key: String, expected: &'static str },

    /// 필수 설정이 어디에도 없다.
    #[error("setting '{key}' is not set")]
    Missing { key: String },
}

impl ConfigError {
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }
}

fn display_paths(paths: &[PathBuf]) -> String {
    if paths.is_empty() {
        return "<none>".to_string();
    }
    paths
        .iter()
        .map(|p| p.display().to_string())
        .collect::<Vec<_>>()
        .join(", ")
}
