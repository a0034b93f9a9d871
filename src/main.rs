//! `shellpilot` 바이너리 진입점.

use std::io;

use shellpilot::infrastructure::adapters::SystemExit;
use shellpilot::interface::cli::{AppComposition, Cli, run};

fn main() {
    // stdout은 파이프라인 출력으로 쓰일 수 있으므로 로그는 stderr로 보낸다.
    tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "warn".into()),
        )
        .init();

    let invocation = Cli::parse_invocation();
    let composition = AppComposition::from_options(&invocation.options);

    let mut stdout = io::stdout().lock();
    run(invocation.action, &composition, &SystemExit, &mut stdout);
}
