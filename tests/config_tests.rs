use std::path::PathBuf;
use tempfile::TempDir;
use viquill::config::Config;

#[test]
fn test_config_defaults() {
    let config = Config::default();

    assert_eq!(config.theme, "default-dark");
    assert!(!config.show_line_numbers);
    assert_eq!(config.log_level, "info");
    assert_eq!(config.log_file, None);
}

#[test]
fn test_serialize_default_config() {
    let config = Config::default();
    let toml_str = toml::to_string(&config).expect("Failed to serialize config");

    assert!(toml_str.contains("theme = \"default-dark\""));
    assert!(toml_str.contains("show_line_numbers = false"));
    assert!(toml_str.contains("log_level = \"info\""));
    assert!(!toml_str.contains("log_file"));
}

#[test]
fn test_deserialize_full_config() {
    let toml_str = r#"
        theme = "gruvbox-dark"
        show_line_numbers = true
        log_level = "debug"
        log_file = "/var/log/viquill.log"
    "#;
    let config: Config = toml::from_str(toml_str).expect("Failed to deserialize config");

    assert_eq!(config.theme, "gruvbox-dark");
    assert!(config.show_line_numbers);
    assert_eq!(config.log_level, "debug");
    assert_eq!(config.log_file, Some(PathBuf::from("/var/log/viquill.log")));
}

#[test]
fn test_save_and_load_round_trip() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("nested").join("config.toml");

    let config = Config {
        theme: "nord".to_string(),
        show_line_numbers: true,
        ..Config::default()
    };
    config.save_to(&path).unwrap();

    assert!(path.exists());
    assert_eq!(Config::load_from(&path).unwrap(), config);
}

#[test]
fn test_missing_file_gives_defaults() {
    let dir = TempDir::new().unwrap();
    let config = Config::load_from(&dir.path().join("absent.toml")).unwrap();
    assert_eq!(config, Config::default());
}

#[test]
fn test_malformed_file_is_reported() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("config.toml");
    std::fs::write(&path, "theme = [not valid").unwrap();

    let err = Config::load_from(&path).unwrap_err();
    let message = format!("{:#}", err);
    assert!(message.contains("Failed to parse config"));
    assert!(message.contains("config.toml"));
}

#[test]
fn test_unreadable_file_is_reported() {
    let dir = TempDir::new().unwrap();
    // A directory exists but can't be read as a file.
    let err = Config::load_from(dir.path()).unwrap_err();
    assert!(format!("{:#}", err).contains("Failed to read config"));
}

#[test]
fn test_config_path_location() {
    if let Some(path) = Config::config_path() {
        assert!(path.ends_with(".config/viquill/config.toml"));
    }
}
