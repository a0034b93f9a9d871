//! 애플리케이션 포트를 실제 인프라 구현체로 연결하는 어댑터 계층.

mod config_repository;
mod process_exit;
mod std_stream_check;

pub use config_repository::LayeredConfigRepository;
pub use process_exit::SystemExit;
pub use std_stream_check::{StdStream, StdStreamCheck};
