//! 표준 스트림 파이프 여부 확인 포트 구현 어댑터.

use std::io::{self, IsTerminal};

use crate::application::ports::PipeCheck;

/// 검사 대상 표준 스트림.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StdStream {
    #[default]
    Stdin,
    Stdout,
}

/// 실제 프로세스 표준 스트림을 검사하는 구현.
#[derive(Debug, Clone, Copy, Default)]
pub struct StdStreamCheck {
    stream: StdStream,
}

impl StdStreamCheck {
    pub fn new(stream: StdStream) -> Self {
        Self { stream }
    }

    pub fn stream(&self) -> StdStream {
        self.stream
    }
}

impl PipeCheck for StdStreamCheck {
    fn is_piped(&self) -> io::Result<bool> {
        match self.stream {
            StdStream::Stdin => classify(&io::stdin()),
            StdStream::Stdout => classify(&io::stdout()),
        }
    }
}

// 닫혔거나 잘못된 디스크립터는 fstat 단계에서 에러가 된다.
// `/dev/null`은 문자 장치지만 터미널이 아니므로 piped로 분류된다.
#[cfg(unix)]
fn classify<S>(stream: &S) -> io::Result<bool>
where
    S: IsTerminal + std::os::fd::AsFd,
{
    let fd = stream.as_fd().try_clone_to_owned()?;
    std::fs::File::from(fd).metadata()?;
    Ok(!stream.is_terminal())
}

#[cfg(not(unix))]
fn classify<S: IsTerminal>(stream: &S) -> io::Result<bool> {
    Ok(!stream.is_terminal())
}
