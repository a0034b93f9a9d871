//! 설정 파일 형식과 파서.

use std::fmt;
use std::str::FromStr;

use serde_json::{Map, Value};

use crate::error::ConfigError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ConfigFormat {
    #[default]
    Yaml,
    Json,
}

impl ConfigFormat {
    /// 이 형식으로 탐색할 파일 확장자(우선순위 순).
    pub fn extensions(self) -> &'static [&'static str] {
        match self {
            Self::Yaml => &["yaml", "yml"],
            Self::Json => &["json"],
        }
    }

    /// 원문을 최상위 매핑으로 파싱한다. 빈 문서는 빈 설정으로 취급한다.
    pub(crate) fn parse(self, raw: &str) -> Result<Map<String, Value>, String> {
        if raw.trim().is_empty() {
            return Ok(Map::new());
        }

        let value: Value = match self {
            Self::Yaml => serde_yaml::from_str(raw).map_err(|e| e.to_string())?,
            Self::Json => serde_json::from_str(raw).map_err(|e| e.to_string())?,
        };

        match value {
            Value::Object(map) => Ok(map),
            Value::Null => Ok(Map::new()),
            other => Err(format!(
                "top-level value must be a mapping, found {}",
                value_kind(&other)
            )),
        }
    }
}

impl FromStr for ConfigFormat {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "yaml" | "yml" => Ok(Self::Yaml),
            "json" => Ok(Self::Json),
            _ => Err(ConfigError::UnsupportedType {
                file_type: s.to_string(),
            }),
        }
    }
}

impl fmt::Display for ConfigFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.extensions()[0])
    }
}

fn value_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "a sequence",
        Value::Object(_) => "a mapping",
    }
}
