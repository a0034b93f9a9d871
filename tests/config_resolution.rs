mod common;

use std::fs;
use std::thread;

use common::{create_test_config, path_string};
use serde_json::json;
use shellpilot::application::config::Settings;
use shellpilot::infrastructure::config::{ConfigFormat, Resolver, ResolverState};
use tempfile::TempDir;

#[test]
fn test_config_exposes_isolated_directories() {
    let mut config = create_test_config();
    assert!(config.resolver.load().unwrap_err().is_not_found());

    let settings = Settings::from_source(&config.resolver).unwrap();
    assert_eq!(settings.cache_dir, Some(config.cache_path()));
    assert_eq!(settings.personas_dir, Some(config.personas_path()));
    assert!(settings.testing);
    assert_eq!(config.resolver.state(), ResolverState::Loaded);
}

#[test]
fn override_wins_over_file_written_later() {
    let mut config = create_test_config();
    fs::write(
        config.config_dir.path().join("config.yaml"),
        "cacheDir: /from-file\nextra: kept\n",
    )
    .unwrap();

    config.resolver.load().unwrap();
    assert_eq!(
        config.resolver.get("cacheDir"),
        Some(json!(path_string(&config.cache_dir)))
    );
    assert_eq!(config.resolver.get("extra"), Some(json!("kept")));
}

#[test]
fn resolvers_do_not_share_state() {
    let handles: Vec<_> = (0..4)
        .map(|_| {
            thread::spawn(|| {
                let config = create_test_config();
                let settings = Settings::from_source(&config.resolver).unwrap();
                (settings, config.cache_path(), config.personas_path(), config)
            })
        })
        .collect();

    let results: Vec<_> = handles.into_iter().map(|h| h.join().unwrap()).collect();
    for (settings, cache, personas, _config) in &results {
        assert_eq!(settings.cache_dir.as_ref(), Some(cache));
        assert_eq!(settings.personas_dir.as_ref(), Some(personas));
    }
    for (i, a) in results.iter().enumerate() {
        for b in results.iter().skip(i + 1) {
            assert_ne!(a.1, b.1);
            assert_ne!(a.2, b.2);
        }
    }
}

#[test]
fn first_matching_search_path_wins() {
    let dir_a = TempDir::new().unwrap();
    let dir_b = TempDir::new().unwrap();
    fs::write(dir_a.path().join("config.yaml"), "cacheDir: /a-cache\n").unwrap();
    fs::write(dir_b.path().join("config.yaml"), "cacheDir: /b-cache\n").unwrap();

    let mut resolver = Resolver::new([dir_a.path(), dir_b.path()], "config", ConfigFormat::Yaml);
    resolver.load().unwrap();
    assert_eq!(resolver.get("cacheDir"), Some(json!("/a-cache")));

    let mut reversed = Resolver::new([dir_b.path(), dir_a.path()], "config", ConfigFormat::Yaml);
    reversed.load().unwrap();
    assert_eq!(reversed.get("cacheDir"), Some(json!("/b-cache")));
}

#[test]
fn no_file_and_no_overrides() {
    let dir = TempDir::new().unwrap();
    let mut resolver = Resolver::new([dir.path()], "config", ConfigFormat::Yaml);

    let err = resolver.load().unwrap_err();
    assert!(err.is_not_found());
    assert_eq!(resolver.get("cacheDir"), None);
    assert_eq!(Settings::from_source(&resolver).unwrap(), Settings::default());
}

#[test]
fn malformed_file_is_fatal_to_load() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("config.yaml"), "personas: {unclosed\n").unwrap();

    let mut resolver = Resolver::new([dir.path()], "config", ConfigFormat::Yaml);
    resolver.set("cacheDir", "/override");
    let err = resolver.load().unwrap_err();
    assert!(matches!(err, shellpilot::ConfigError::Parse { .. }));
    assert_eq!(resolver.get("personas"), None);
    assert_eq!(resolver.get("cacheDir"), Some(json!("/override")));
}
