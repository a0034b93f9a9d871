//! CLI 명령 파싱 모듈.

use std::ffi::OsString;
use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::domain::options::InvocationOptions;

#[derive(Debug, Parser)]
#[command(name = "shellpilot")]
#[command(about = "Resolve execution mode and layered configuration for shellpilot")]
pub struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Directory searched for config.yaml before the default locations
    #[arg(long, global = true, value_name = "DIR")]
    config_dir: Option<PathBuf>,

    /// Override the cache directory
    #[arg(long, global = true, value_name = "DIR")]
    cache_dir: Option<PathBuf>,

    /// Override the personas directory
    #[arg(long, global = true, value_name = "DIR")]
    personas_dir: Option<PathBuf>,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Print whether stdin is piped or interactive
    Mode,
    /// Show effective merged config and where each value came from
    Config,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CliAction {
    Summary,
    DetectMode,
    InspectConfig,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CliInvocation {
    pub action: CliAction,
    pub options: InvocationOptions,
}

impl Cli {
    /// 프로세스 인자를 파싱한다. 사용법 오류/도움말은 clap이 직접 출력 후 종료한다.
    pub fn parse_invocation() -> CliInvocation {
        Cli::parse().into_invocation()
    }

    /// 주어진 인자 목록을 파싱한다(테스트/라이브러리 호출용).
    pub fn try_parse_invocation<I, T>(args: I) -> Result<CliInvocation, clap::Error>
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString> + Clone,
    {
        Ok(Cli::try_parse_from(args)?.into_invocation())
    }

    fn into_invocation(self) -> CliInvocation {
        let action = match self.command {
            Some(Commands::Mode) => CliAction::DetectMode,
            Some(Commands::Config) => CliAction::InspectConfig,
            None => CliAction::Summary,
        };

        CliInvocation {
            action,
            options: InvocationOptions {
                config_dir: self.config_dir,
                cache_dir: self.cache_dir,
                personas_dir: self.personas_dir,
            },
        }
    }
}
