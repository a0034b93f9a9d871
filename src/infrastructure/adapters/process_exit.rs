//! 프로세스 종료 포트 구현 어댑터.

use crate::application::ports::ProcessExit;

/// 실제로 프로세스를 종료하는 어댑터.
pub struct SystemExit;

impl ProcessExit for SystemExit {
    fn exit(&self, code: i32) {
        std::process::exit(code)
    }
}
