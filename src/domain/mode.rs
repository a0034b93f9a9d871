//! 실행 모드(파이프/대화형) 값 객체.

use std::fmt;

use serde::Serialize;

/// 현재 프로세스가 파이프라인 단계로 실행 중인지, 터미널에서 대화형으로 실행 중인지.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ExecutionMode {
    /// 표준 스트림이 파일/파이프/리다이렉트된 장치에 연결됨
    Piped,
    /// 표준 스트림이 대화형 터미널에 연결됨
    Interactive,
}

impl ExecutionMode {
    /// 파이프 검사 결과(piped 여부)를 실행 모드로 변환한다.
    pub fn from_piped(piped: bool) -> Self {
        if piped { Self::Piped } else { Self::Interactive }
    }

    pub fn is_piped(self) -> bool {
        matches!(self, Self::Piped)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Piped => "piped",
            Self::Interactive => "interactive",
        }
    }
}

impl fmt::Display for ExecutionMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
