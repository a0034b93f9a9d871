//! Domain layer
//! 실행 모드와 호출 옵션을 외부 의존성 없이 표현한다.

pub mod mode;
pub mod options;
