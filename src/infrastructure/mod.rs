//! Infrastructure layer
//! 파일시스템/표준 스트림/프로세스와 직접 통신하는 구현체 집합.

pub mod adapters;
pub mod config;
