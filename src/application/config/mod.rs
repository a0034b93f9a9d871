//! 애플리케이션이 사용하는 설정 스냅샷(순수 데이터).
//!
//! 주의: 파일/환경변수 접근은 `infrastructure`에서만 수행한다.

use std::path::{Path, PathBuf};

use serde::Serialize;
use serde_json::Value;

use crate::application::ports::SettingsSource;
use crate::error::ConfigError;

pub const CACHE_DIR_KEY: &str = "cacheDir";
pub const PERSONAS_KEY: &str = "personas";
pub const TESTING_KEY: &str = "TESTING";

/// 한 번의 명령 실행 동안 변하지 않는 설정 스냅샷.
///
/// 디렉터리는 생성/존재 확인/정규화하지 않은 값 그대로 보관한다.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Settings {
    /// 캐시 산출물 루트 디렉터리
    pub cache_dir: Option<PathBuf>,
    /// persona 정의 루트 디렉터리
    pub personas_dir: Option<PathBuf>,
    /// 테스트 실행 표시
    pub testing: bool,
}

impl Settings {
    /// 설정 원천에서 알려진 키를 읽어 스냅샷을 만든다.
    pub fn from_source(source: &dyn SettingsSource) -> Result<Self, ConfigError> {
        Ok(Self {
            cache_dir: directory_setting(source, CACHE_DIR_KEY)?,
            personas_dir: directory_setting(source, PERSONAS_KEY)?,
            testing: source.get(TESTING_KEY).is_some_and(|v| is_truthy(&v)),
        })
    }

    pub fn require_cache_dir(&self) -> Result<&Path, ConfigError> {
        required(self.cache_dir.as_deref(), CACHE_DIR_KEY)
    }

    pub fn require_personas_dir(&self) -> Result<&Path, ConfigError> {
        required(self.personas_dir.as_deref(), PERSONAS_KEY)
    }
}

/// 숫자(0 이외), `true`, `1/true/yes/on` 문자열을 참으로 본다.
pub fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0),
        Value::String(s) => matches!(
            s.trim().to_ascii_lowercase().as_str(),
            "1" | "true" | "yes" | "on"
        ),
        _ => false,
    }
}

fn directory_setting(
    source: &dyn SettingsSource,
    key: &str,
) -> Result<Option<PathBuf>, ConfigError> {
    match source.get(key) {
        None | Some(Value::Null) => Ok(None),
        Some(Value::String(s)) if s.is_empty() => Err(ConfigError::EmptyValue {
            key: key.to_string(),
        }),
        Some(Value::String(s)) => Ok(Some(PathBuf::from(s))),
        Some(_) => Err(ConfigError::InvalidValue {
            key: key.to_string(),
            expected: "a directory path string",
        }),
    }
}

fn required<'a>(value: Option<&'a Path>, key: &str) -> Result<&'a Path, ConfigError> {
    value.ok_or_else(|| ConfigError::Missing {
        key: key.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use serde_json::json;

    use super::*;

    struct MapSource(HashMap<&'static str, Value>);

    impl SettingsSource for MapSource {
        fn get(&self, key: &str) -> Option<Value> {
            self.0.get(key).cloned()
        }
    }

    fn source(entries: &[(&'static str, Value)]) -> MapSource {
        MapSource(entries.iter().cloned().collect())
    }

    #[test]
    fn reads_directories_and_testing_marker() {
        let settings = Settings::from_source(&source(&[
            (CACHE_DIR_KEY, json!("/tmp/cache")),
            (PERSONAS_KEY, json!("personas")),
            (TESTING_KEY, json!(1)),
        ]))
        .unwrap();

        assert_eq!(settings.cache_dir, Some(PathBuf::from("/tmp/cache")));
        assert_eq!(settings.personas_dir, Some(PathBuf::from("personas")));
        assert!(settings.testing);
    }

    #[test]
    fn absent_keys_stay_unset() {
        let settings = Settings::from_source(&source(&[])).unwrap();
        assert_eq!(settings, Settings::default());
        assert!(matches!(
            settings.require_cache_dir(),
            Err(ConfigError::Missing { key }) if key == CACHE_DIR_KEY
        ));
        assert!(settings.require_personas_dir().is_err());
    }

    #[test]
    fn empty_directory_is_rejected() {
        let err = Settings::from_source(&source(&[(PERSONAS_KEY, json!(""))])).unwrap_err();
        assert!(matches!(err, ConfigError::EmptyValue { key } if key == PERSONAS_KEY));
    }

    #[test]
    fn non_string_directory_is_rejected() {
        let err = Settings::from_source(&source(&[(CACHE_DIR_KEY, json!(42))])).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidValue { .. }));
    }

    #[test]
    fn truthiness() {
        assert!(is_truthy(&json!(true)));
        assert!(is_truthy(&json!(2)));
        assert!(is_truthy(&json!(" Yes ")));
        assert!(!is_truthy(&json!(0)));
        assert!(!is_truthy(&json!("off")));
        assert!(!is_truthy(&json!(null)));
        assert!(!is_truthy(&json!([1])));
    }
}
