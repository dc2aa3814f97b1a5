use tempfile::TempDir;
use tracing::warn;
use viquill::config::Config;

// The subscriber is process-global, so this binary holds a single test.
#[test]
fn test_config_error_reaches_log_file() {
    let dir = TempDir::new().unwrap();
    let config_path = dir.path().join("config.toml");
    std::fs::write(&config_path, "show_line_numbers = maybe").unwrap();
    let log_path = dir.path().join("logs").join("viquill.log");

    let err = Config::load_from(&config_path).unwrap_err();
    let guard = viquill::logging::init(&log_path, "warn").unwrap();
    warn!("{:#}, using defaults", err);
    drop(guard);

    let log = std::fs::read_to_string(&log_path).unwrap();
    assert!(log.contains("WARN"));
    assert!(log.contains("Failed to parse config"));
    assert!(log.contains("using defaults"));
}
