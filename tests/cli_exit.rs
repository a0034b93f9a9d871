mod common;

use std::fs;

use common::{ExitMemento, mock_pipe_check};
use serde_json::Value;
use shellpilot::application::mode::ModeDetector;
use shellpilot::infrastructure::adapters::LayeredConfigRepository;
use shellpilot::interface::cli::{AppComposition, Cli, CliAction, run};
use tempfile::TempDir;

fn composition(piped: bool, err: Option<&str>, config_dir: &TempDir) -> AppComposition {
    AppComposition::with_parts(
        ModeDetector::new(mock_pipe_check(piped, err)),
        Box::new(LayeredConfigRepository::new(vec![config_dir.path().to_path_buf()])),
    )
}

#[test]
fn mode_command_prints_mode_and_exits_zero() {
    let config_dir = TempDir::new().unwrap();
    let app = composition(true, None, &config_dir);
    let exit = ExitMemento::default();
    let mut out = Vec::new();

    let invocation = Cli::try_parse_invocation(["shellpilot", "mode"]).unwrap();
    run(invocation.action, &app, &exit, &mut out);

    assert_eq!(exit.code(), Some(0));
    assert_eq!(String::from_utf8(out).unwrap(), "piped\n");
}

#[test]
fn detection_error_exits_one() {
    let config_dir = TempDir::new().unwrap();
    let app = composition(false, Some("bad descriptor"), &config_dir);
    let exit = ExitMemento::default();
    let mut out = Vec::new();

    run(CliAction::Summary, &app, &exit, &mut out);

    assert_eq!(exit.code(), Some(1));
    assert!(out.is_empty());
}

#[test]
fn malformed_config_exits_one() {
    let config_dir = TempDir::new().unwrap();
    fs::write(config_dir.path().join("config.yaml"), "cacheDir: [\n").unwrap();
    let app = composition(false, None, &config_dir);
    let exit = ExitMemento::default();
    let mut out = Vec::new();

    run(CliAction::InspectConfig, &app, &exit, &mut out);
    assert_eq!(exit.code(), Some(1));
}

#[test]
fn config_command_prints_inspection_json() {
    let config_dir = TempDir::new().unwrap();
    fs::write(
        config_dir.path().join("config.yaml"),
        "cacheDir: /file-cache\npersonas: /file-personas\n",
    )
    .unwrap();
    let app = composition(false, None, &config_dir);
    let exit = ExitMemento::default();
    let mut out = Vec::new();

    run(CliAction::InspectConfig, &app, &exit, &mut out);

    assert_eq!(exit.code(), Some(0));
    let parsed: Value = serde_json::from_slice(&out).unwrap();
    assert_eq!(parsed["state"], "loaded");
    assert_eq!(parsed["settings"]["personas"]["value"], "/file-personas");
    assert_eq!(parsed["settings"]["cachedir"]["source"], "file");
}
