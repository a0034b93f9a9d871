//! 계층형 설정 해석기.
//!
//! 우선순위(높은 순): `set` 재정의 > 로딩된 파일 값 > `set_default` 기본값.
//! 파일은 탐색 경로 순서대로 찾아 처음 발견한 하나만 읽는다.

use std::path::{Path, PathBuf};

use serde::Serialize;
use serde_json::{Map, Value};

use super::format::ConfigFormat;
use super::inspection::{ConfigInspection, SettingSource};
use super::loader::{candidate_paths, locate, normalize_key, normalize_value, read_config_file};
use crate::application::config::{Settings, is_truthy};
use crate::application::ports::SettingsSource;
use crate::error::ConfigError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ResolverState {
    Unloaded,
    Loaded,
}

#[derive(Debug, Clone)]
pub struct Resolver {
    search_paths: Vec<PathBuf>,
    file_name: String,
    format: ConfigFormat,
    defaults: Map<String, Value>,
    file_values: Map<String, Value>,
    overrides: Map<String, Value>,
    config_file: Option<PathBuf>,
    state: ResolverState,
}

impl Resolver {
    /// 탐색 경로와 파일 이름/형식을 선언한다. 파일시스템은 건드리지 않는다.
    pub fn new<I, P>(search_paths: I, file_name: impl Into<String>, format: ConfigFormat) -> Self
    where
        I: IntoIterator<Item = P>,
        P: Into<PathBuf>,
    {
        Self {
            search_paths: search_paths.into_iter().map(Into::into).collect(),
            file_name: file_name.into(),
            format,
            defaults: Map::new(),
            file_values: Map::new(),
            overrides: Map::new(),
            config_file: None,
            state: ResolverState::Unloaded,
        }
    }

    /// 파일 형식을 이름(`yaml`, `yml`, `json`)으로 받는다.
    pub fn with_type<I, P>(
        search_paths: I,
        file_name: impl Into<String>,
        file_type: &str,
    ) -> Result<Self, ConfigError>
    where
        I: IntoIterator<Item = P>,
        P: Into<PathBuf>,
    {
        Ok(Self::new(search_paths, file_name, file_type.parse()?))
    }

    /// 탐색 경로를 가장 낮은 우선순위로 추가한다.
    pub fn add_search_path(&mut self, path: impl Into<PathBuf>) {
        self.search_paths.push(path.into());
    }

    pub fn search_paths(&self) -> &[PathBuf] {
        &self.search_paths
    }

    pub fn format(&self) -> ConfigFormat {
        self.format
    }

    pub fn state(&self) -> ResolverState {
        self.state
    }

    /// 마지막 `load`에서 읽은 설정 파일.
    pub fn config_file_used(&self) -> Option<&Path> {
        self.config_file.as_deref()
    }

    /// 재정의 값을 기록한다. 같은 키는 마지막 값이 이긴다.
    pub fn set(&mut self, key: &str, value: impl Into<Value>) {
        self.overrides
            .insert(normalize_key(key), normalize_value(value.into()));
    }

    /// 호출자 기본값을 기록한다. 파일/재정의 값이 없을 때만 사용된다.
    pub fn set_default(&mut self, key: &str, value: impl Into<Value>) {
        self.defaults
            .insert(normalize_key(key), normalize_value(value.into()));
    }

    /// 설정 파일을 찾아 파일 값을 교체한다.
    ///
    /// - 파일이 없으면 `NotFound`를 돌려주고 이전 파일 값은 비운다(재정의만으로 동작 가능).
    /// - 파싱에 실패하면 이전 상태를 그대로 둔다.
    pub fn load(&mut self) -> Result<(), ConfigError> {
        let candidates = candidate_paths(&self.search_paths, &self.file_name, self.format);

        let Some(path) = locate(&candidates)?.map(Path::to_path_buf) else {
            tracing::debug!(searched = candidates.len(), "no config file found");
            self.file_values.clear();
            self.config_file = None;
            self.state = ResolverState::Loaded;
            return Err(ConfigError::NotFound {
                searched: candidates,
            });
        };

        let values = read_config_file(&path, self.format)?;
        tracing::debug!(path = %path.display(), keys = values.len(), "config file loaded");
        self.file_values = values;
        self.config_file = Some(path);
        self.state = ResolverState::Loaded;
        Ok(())
    }

    /// 병합된 최종 값을 조회한다. `.`으로 구분한 키는 각 계층의 중첩 매핑을 따라간다.
    /// `null` 값은 설정되지 않은 것으로 보고 다음 계층으로 넘어간다.
    pub fn get(&self, key: &str) -> Option<Value> {
        self.lookup(key).map(|(value, _)| value.clone())
    }

    pub fn is_set(&self, key: &str) -> bool {
        self.lookup(key).is_some()
    }

    /// 스칼라 값을 문자열로 돌려준다. 빈 문자열은 `None`이다.
    pub fn get_string(&self, key: &str) -> Option<String> {
        match self.get(key)? {
            Value::String(s) if s.is_empty() => None,
            Value::String(s) => Some(s),
            Value::Number(n) => Some(n.to_string()),
            Value::Bool(b) => Some(b.to_string()),
            _ => None,
        }
    }

    pub fn get_path(&self, key: &str) -> Option<PathBuf> {
        self.get_string(key).map(PathBuf::from)
    }

    pub fn get_bool(&self, key: &str) -> bool {
        self.get(key).is_some_and(|v| is_truthy(&v))
    }

    /// 현재 값으로 설정 스냅샷을 만든다.
    pub fn settings(&self) -> Result<Settings, ConfigError> {
        Settings::from_source(self)
    }

    /// 진단용 뷰를 만든다.
    pub fn inspect(&self) -> ConfigInspection {
        let mut keys: Vec<&String> = self
            .overrides
            .keys()
            .chain(self.file_values.keys())
            .chain(self.defaults.keys())
            .collect();
        keys.sort();
        keys.dedup();

        let settings = keys
            .into_iter()
            .filter_map(|key| {
                self.lookup(key)
                    .map(|(value, source)| (key.clone(), value.clone(), source))
            })
            .collect();

        ConfigInspection::new(
            candidate_paths(&self.search_paths, &self.file_name, self.format),
            self.config_file.clone(),
            self.state,
            settings,
        )
    }

    fn lookup(&self, key: &str) -> Option<(&Value, SettingSource)> {
        let key = normalize_key(key);
        [
            (&self.overrides, SettingSource::Override),
            (&self.file_values, SettingSource::File),
            (&self.defaults, SettingSource::Default),
        ]
        .into_iter()
        .find_map(|(layer, source)| {
            lookup_nested(layer, &key)
                .filter(|value| !value.is_null())
                .map(|value| (value, source))
        })
    }
}

impl SettingsSource for Resolver {
    fn get(&self, key: &str) -> Option<Value> {
        Resolver::get(self, key)
    }
}

fn lookup_nested<'a>(map: &'a Map<String, Value>, key: &str) -> Option<&'a Value> {
    if let Some(value) = map.get(key).filter(|v| !v.is_null()) {
        return Some(value);
    }

    let mut segments = key.split('.');
    let mut current = map.get(segments.next()?)?;
    for segment in segments {
        current = current.as_object()?.get(segment)?;
    }
    Some(current)
}
