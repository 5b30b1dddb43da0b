//! Integration tests for configuration loading

use std::fs;
use std::path::Path;

use ams_foundation::ErrorKind;
use ams_runtime::{Config, Pipeline};

#[test]
fn config_file_drives_pipeline() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(
        dir.path().join("ams.json"),
        r#"{"validate": true, "extension": "txt", "color": false}"#,
    )
    .unwrap();
    let input = dir.path().join("main.ams");
    fs::write(&input, "say hi\nkill 5\n").unwrap();

    let config = Config::discover(dir.path()).unwrap();
    let report = Pipeline::new(config).compile_file(&input, None).unwrap();

    assert_eq!(report.written.as_deref(), Some(dir.path().join("main.txt").as_path()));
    let validation = report.validation.expect("validation enabled");
    assert_eq!(validation.failures.len(), 1);
    assert_eq!(validation.failures[0].source_line, 2);
}

#[test]
fn config_unknown_key_fails_to_load() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("ams.json"), r#"{"strict": true}"#).unwrap();
    let err = Config::discover(dir.path()).unwrap_err();
    assert!(matches!(err.kind, ErrorKind::Config(ref m) if m.contains("strict")));
}

#[test]
fn config_round_trips_through_json() {
    let config = Config {
        validate: true,
        show_tree: true,
        ..Config::default()
    };
    let text = serde_json::to_string(&config).unwrap();
    assert_eq!(Config::from_json(&text).unwrap(), config);
}

#[test]
fn derived_output_path() {
    let config = Config::default();
    assert_eq!(
        config.output_path(Path::new("data/functions/load.ams")),
        Path::new("data/functions/load.mcfunction")
    );
}
