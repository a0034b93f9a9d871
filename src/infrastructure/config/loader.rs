//! 설정 파일 탐색/읽기 로더.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use serde_json::{Map, Value};

use super::format::ConfigFormat;
use crate::error::ConfigError;

/// 탐색 경로 순서(바깥) x 확장자 순서(안쪽)로 후보 파일 경로를 만든다.
pub(crate) fn candidate_paths(
    search_paths: &[PathBuf],
    file_name: &str,
    format: ConfigFormat,
) -> Vec<PathBuf> {
    let mut out = Vec::new();
    for dir in search_paths {
        for ext in format.extensions() {
            let candidate = dir.join(format!("{file_name}.{ext}"));
            if !out.contains(&candidate) {
                out.push(candidate);
            }
        }
    }
    out
}

/// 첫 번째로 존재하는 후보 파일을 반환한다.
///
/// 없는 경로만 건너뛴다. 존재 여부를 확인할 수 없는 후보(권한 부족, 심볼릭 링크 순환 등)는
/// 뒤쪽 후보로 넘어가지 않고 `Read` 에러가 된다.
pub(crate) fn locate(candidates: &[PathBuf]) -> Result<Option<&Path>, ConfigError> {
    for path in candidates {
        match fs::metadata(path) {
            Ok(meta) if meta.is_file() => return Ok(Some(path.as_path())),
            Ok(_) => {}
            Err(err)
                if matches!(
                    err.kind(),
                    io::ErrorKind::NotFound | io::ErrorKind::NotADirectory
                ) => {}
            Err(source) => {
                return Err(ConfigError::Read {
                    path: path.clone(),
                    source,
                });
            }
        }
    }
    Ok(None)
}

/// 파일을 읽어 키가 소문자로 정규화된 매핑을 만든다.
pub(crate) fn read_config_file(
    path: &Path,
    format: ConfigFormat,
) -> Result<Map<String, Value>, ConfigError> {
    let raw = fs::read_to_string(path).map_err(|source| read_error(path, source))?;
    let parsed = format.parse(&raw).map_err(|message| ConfigError::Parse {
        path: path.to_path_buf(),
        message,
    })?;
    Ok(normalize_map(parsed))
}

/// 설정 키는 대소문자를 구분하지 않는다.
pub(crate) fn normalize_key(key: &str) -> String {
    key.trim().to_lowercase()
}

fn normalize_map(map: Map<String, Value>) -> Map<String, Value> {
    map.into_iter()
        .map(|(key, value)| (normalize_key(&key), normalize_value(value)))
        .collect()
}

pub(crate) fn normalize_value(value: Value) -> Value {
    match value {
        Value::Object(map) => Value::Object(normalize_map(map)),
        other => other,
    }
}

fn read_error(path: &Path, source: io::Error) -> ConfigError {
    // UTF-8이 아닌 파일은 읽기 실패가 아니라 형식 오류다.
    if source.kind() == io::ErrorKind::InvalidData {
        return ConfigError::Parse {
            path: path.to_path_buf(),
            message: source.to_string(),
        };
    }
    ConfigError::Read {
        path: path.to_path_buf(),
        source,
    }
}
