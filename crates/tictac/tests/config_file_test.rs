//! Loading configuration from disk.

use std::io::Write;

use tempfile::NamedTempFile;
use tictac::TuiConfig;
use tictac_core::StartEntryPolicy;

fn config_file(content: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().expect("temp file");
    file.write_all(content.as_bytes()).expect("write config");
    file
}

#[test]
fn test_load_full_file() {
    let file = config_file(
        r#"
start_entry = "view"
confetti = false
confetti_particles = 12
tick_ms = 33
log_file = "game.log"
"#,
    );

    let config = TuiConfig::load(Some(file.path())).expect("valid config");
    assert_eq!(*config.start_entry(), StartEntryPolicy::View);
    assert!(!*config.confetti());
    assert_eq!(*config.confetti_particles(), 12);
    assert_eq!(*config.tick_ms(), 33);
    assert_eq!(config.log_file().to_str(), Some("game.log"));
}

#[test]
fn test_zero_tick_rejected() {
    let file = config_file("tick_ms = 0");
    let err = TuiConfig::from_file(file.path()).unwrap_err();
    assert!(err.message.contains("tick_ms"));
}

#[test]
fn test_unknown_key_rejected() {
    let file = config_file("colour = \"red\"");
    assert!(TuiConfig::from_file(file.path()).is_err());
}

#[test]
fn test_bad_policy_rejected() {
    let file = config_file("start_entry = \"rewind\"");
    assert!(TuiConfig::from_file(file.path()).is_err());
}

#[test]
fn test_missing_explicit_file_is_an_error() {
    let dir = tempfile::tempdir().expect("temp dir");
    let missing = dir.path().join("absent.toml");
    let err = TuiConfig::load(Some(missing.as_path())).unwrap_err();
    assert!(err.message.contains("Failed to read"));
}
