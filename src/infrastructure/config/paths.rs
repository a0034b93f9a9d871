//! 기본 설정 탐색 경로와 호출자 기본 디렉터리.

use std::env;
use std::path::{Path, PathBuf};

pub const APP_DIR_NAME: &str = "shellpilot";
pub const CONFIG_DIR_ENV: &str = "SHELLPILOT_CONFIG_DIR";

/// 명시 경로 > 환경변수 > 프로젝트 > 사용자 순으로 탐색 경로를 구성한다.
/// 앞에 있을수록 우선순위가 높다(처음 발견한 파일 하나만 사용).
pub fn config_search_paths(explicit: Option<&Path>) -> Vec<PathBuf> {
    let mut paths = Vec::new();

    if let Some(dir) = explicit {
        paths.push(dir.to_path_buf());
    }

    if let Some(dir) = env::var_os(CONFIG_DIR_ENV).filter(|v| !v.is_empty()) {
        paths.push(PathBuf::from(dir));
    }

    paths.push(PathBuf::from(format!(".{APP_DIR_NAME}")));

    if let Some(base) = dirs::config_dir() {
        paths.push(base.join(APP_DIR_NAME));
    }

    dedup_paths(paths)
}

/// 플랫폼 캐시 디렉터리 아래 기본 캐시 경로.
pub fn default_cache_dir() -> Option<PathBuf> {
    dirs::cache_dir().map(|base| base.join(APP_DIR_NAME))
}

/// 플랫폼 설정 디렉터리 아래 기본 persona 경로.
pub fn default_personas_dir() -> Option<PathBuf> {
    dirs::config_dir().map(|base| base.join(APP_DIR_NAME).join("personas"))
}

fn dedup_paths(paths: Vec<PathBuf>) -> Vec<PathBuf> {
    let mut out = Vec::new();
    for p in paths {
        if !out.contains(&p) {
            out.push(p);
        }
    }
    out
}
