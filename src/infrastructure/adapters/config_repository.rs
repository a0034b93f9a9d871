//! 설정 저장소 포트 구현 어댑터.

use std::path::PathBuf;

use anyhow::Result;
use serde_json::Value;

use crate::application::config::{CACHE_DIR_KEY, PERSONAS_KEY, Settings};
use crate::application::ports::ConfigRepository;
use crate::domain::options::InvocationOptions;
use crate::infrastructure::config::{
    CONFIG_FILE_NAME, ConfigFormat, ConfigInspection, Resolver, config_search_paths,
    default_cache_dir, default_personas_dir,
};

/// 탐색 경로 + 재정의 + 기본값으로 매 호출마다 새 `Resolver`를 조립하는 저장소.
#[derive(Debug, Clone)]
pub struct LayeredConfigRepository {
    search_paths: Vec<PathBuf>,
    file_name: String,
    format: ConfigFormat,
    defaults: Vec<(String, Value)>,
    overrides: Vec<(String, Value)>,
}

impl LayeredConfigRepository {
    pub fn new(search_paths: Vec<PathBuf>) -> Self {
        Self {
            search_paths,
            file_name: CONFIG_FILE_NAME.to_string(),
            format: ConfigFormat::Yaml,
            defaults: Vec::new(),
            overrides: Vec::new(),
        }
    }

    /// 플랫폼 기본 경로/기본값과 호출자 옵션으로 저장소를 구성한다.
    pub fn from_options(options: &InvocationOptions) -> Self {
        let mut repo = Self::new(config_search_paths(options.config_dir.as_deref()));

        if let Some(dir) = default_cache_dir() {
            repo = repo.with_default(CACHE_DIR_KEY, path_value(&dir));
        }
        if let Some(dir) = default_personas_dir() {
            repo = repo.with_default(PERSONAS_KEY, path_value(&dir));
        }
        if let Some(dir) = &options.cache_dir {
            repo = repo.with_override(CACHE_DIR_KEY, path_value(dir));
        }
        if let Some(dir) = &options.personas_dir {
            repo = repo.with_override(PERSONAS_KEY, path_value(dir));
        }
        repo
    }

    pub fn with_file(mut self, file_name: impl Into<String>, format: ConfigFormat) -> Self {
        self.file_name = file_name.into();
        self.format = format;
        self
    }

    pub fn with_default(mut self, key: &str, value: impl Into<Value>) -> Self {
        self.defaults.push((key.to_string(), value.into()));
        self
    }

    pub fn with_override(mut self, key: &str, value: impl Into<Value>) -> Self {
        self.overrides.push((key.to_string(), value.into()));
        self
    }

    /// 값을 채우고 파일을 로딩한 `Resolver`를 만든다. 파일이 없는 것은 정상 경로다.
    pub fn build_resolver(&self) -> Result<Resolver> {
        let mut resolver = Resolver::new(
            self.search_paths.iter().cloned(),
            self.file_name.clone(),
            self.format,
        );
        for (key, value) in &self.defaults {
            resolver.set_default(key, value.clone());
        }
        for (key, value) in &self.overrides {
            resolver.set(key, value.clone());
        }

        match resolver.load() {
            Ok(()) => {}
            Err(err) if err.is_not_found() => {
                tracing::debug!("{err}; continuing with overrides and defaults");
            }
            Err(err) => return Err(err.into()),
        }
        Ok(resolver)
    }
}

impl ConfigRepository for LayeredConfigRepository {
    fn settings(&self) -> Result<Settings> {
        let resolver = self.build_resolver()?;
        Ok(resolver.settings()?)
    }

    fn inspect(&self) -> Result<ConfigInspection> {
        Ok(self.build_resolver()?.inspect())
    }
}

fn path_value(path: &std::path::Path) -> Value {
    Value::String(path.to_string_lossy().into_owned())
}
