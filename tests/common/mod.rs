//! 통합 테스트 공용 헬퍼.
#![allow(dead_code)]

use std::cell::Cell;
use std::io;
use std::path::PathBuf;

use shellpilot::application::ports::ProcessExit;
use shellpilot::infrastructure::config::{CONFIG_FILE_NAME, ConfigFormat, Resolver};
use tempfile::TempDir;

/// 종료 코드만 기록하는 종료 포트.
#[derive(Default)]
pub struct ExitMemento {
    code: Cell<Option<i32>>,
}

impl ExitMemento {
    pub fn code(&self) -> Option<i32> {
        self.code.get()
    }
}

impl ProcessExit for ExitMemento {
    fn exit(&self, code: i32) {
        self.code.set(Some(code));
    }
}

/// 고정 결과를 돌려주는 파이프 검사기.
pub fn mock_pipe_check(
    piped: bool,
    err: Option<&str>,
) -> impl Fn() -> io::Result<bool> + Send + Sync + 'static {
    let err = err.map(str::to_string);
    move || match &err {
        Some(message) => Err(io::Error::other(message.clone())),
        None => Ok(piped),
    }
}

/// 격리된 임시 디렉터리를 쓰는 테스트 설정.
/// `TempDir`이 살아 있는 동안만 디렉터리가 유지된다.
pub struct TestConfig {
    pub resolver: Resolver,
    pub config_dir: TempDir,
    pub cache_dir: TempDir,
    pub personas_dir: TempDir,
}

impl TestConfig {
    pub fn cache_path(&self) -> PathBuf {
        self.cache_dir.path().to_path_buf()
    }

    pub fn personas_path(&self) -> PathBuf {
        self.personas_dir.path().to_path_buf()
    }
}

pub fn create_test_config() -> TestConfig {
    let config_dir = TempDir::new().unwrap();
    let cache_dir = TempDir::new().unwrap();
    let personas_dir = TempDir::new().unwrap();

    let mut resolver = Resolver::new([config_dir.path()], CONFIG_FILE_NAME, ConfigFormat::Yaml);
    resolver.set("cacheDir", path_string(&cache_dir));
    resolver.set("personas", path_string(&personas_dir));
    resolver.set("TESTING", 1);

    TestConfig {
        resolver,
        config_dir,
        cache_dir,
        personas_dir,
    }
}

pub fn path_string(dir: &TempDir) -> String {
    dir.path().to_string_lossy().into_owned()
}
