//! 파싱된 CLI 동작을 실행하고 종료 코드를 종료 포트로 넘긴다.

use std::io::Write;
use std::path::Path;

use anyhow::Result;

use crate::application::ports::ProcessExit;
use crate::interface::cli::command::CliAction;
use crate::interface::cli::composition::AppComposition;

pub const EXIT_SUCCESS: i32 = 0;
pub const EXIT_FAILURE: i32 = 1;

/// 동작을 실행하고 결과에 맞는 종료 코드로 `exit`를 호출한다.
pub fn run(
    action: CliAction,
    composition: &AppComposition,
    exit: &dyn ProcessExit,
    out: &mut dyn Write,
) {
    let code = match execute(action, composition, out) {
        Ok(()) => EXIT_SUCCESS,
        Err(err) => {
            tracing::debug!(?action, "command failed");
            eprintln!("error: {err:#}");
            EXIT_FAILURE
        }
    };
    exit.exit(code);
}

/// 동작을 실행해 결과를 `out`에 쓴다. 종료 여부는 결정하지 않는다.
pub fn execute(action: CliAction, composition: &AppComposition, out: &mut dyn Write) -> Result<()> {
    match action {
        CliAction::DetectMode => {
            let mode = composition.detect_mode_usecase().execute()?;
            writeln!(out, "{mode}")?;
        }
        CliAction::InspectConfig => {
            let inspection = composition.inspect_config_usecase().execute()?;
            writeln!(out, "{}", inspection.to_pretty_json()?)?;
        }
        CliAction::Summary => {
            let ctx = composition.resolve_context_usecase().execute()?;
            writeln!(out, "{:<9}: {}", "mode", ctx.mode)?;
            writeln!(out, "{:<9}: {}", "cache", display_dir(ctx.settings.cache_dir.as_deref()))?;
            writeln!(
                out,
                "{:<9}: {}",
                "personas",
                display_dir(ctx.settings.personas_dir.as_deref())
            )?;
            if ctx.settings.testing {
                writeln!(out, "{:<9}: on", "testing")?;
            }
        }
    }
    out.flush()?;
    Ok(())
}

fn display_dir(dir: Option<&Path>) -> String {
    dir.map(|d| d.display().to_string())
        .unwrap_or_else(|| "(unset)".to_string())
}
