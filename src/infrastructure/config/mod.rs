//! 사용자 설정(YAML/JSON) 탐색/해석 모듈.
//! 탐색 경로 중 처음 발견한 파일 하나와 호출자 재정의/기본값을 우선순위대로 병합한다.

mod format;
mod inspection;
mod loader;
mod paths;
mod resolver;

pub use format::ConfigFormat;
pub use inspection::{ConfigInspection, InspectedSetting, SettingSource};
pub use paths::{
    APP_DIR_NAME, CONFIG_DIR_ENV, config_search_paths, default_cache_dir, default_personas_dir,
};
pub use resolver::{Resolver, ResolverState};

/// 설정 파일 기본 이름(확장자 제외).
pub const CONFIG_FILE_NAME: &str = "config";
