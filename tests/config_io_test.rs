use std::fs;

use tempeste::config::Config;

#[test]
fn save_and_load_yaml_roundtrip() {
    let tmp_dir = tempfile::tempdir().unwrap();
    let path = tmp_dir.path().join("config.yaml");

    let mut cfg = Config::default();
    cfg.api.client_id = "client-abc".to_string();
    cfg.api.client_secret = "topsecret".to_string();
    cfg.poll_interval_secs = 900;
    cfg.logging.file = path.with_extension("log").to_string_lossy().to_string();

    cfg.save_to_file(&path).unwrap();
    let loaded = Config::from_file(&path).unwrap();

    assert_eq!(loaded.api.client_id, "client-abc");
    assert_eq!(loaded.poll_interval_secs, 900);
    assert_eq!(loaded.logging.file, cfg.logging.file);
}

#[test]
fn config_validation_errors() {
    let mut cfg = Config::default();
    cfg.api.client_id = "id".to_string();
    cfg.api.client_secret = "secret".to_string();
    assert!(cfg.validate().is_ok());

    // Missing client id
    cfg.api.client_id.clear();
    assert!(cfg.validate().is_err());

    // Missing client secret
    cfg.api.client_id = "id".to_string();
    cfg.api.client_secret = "  ".to_string();
    assert!(cfg.validate().is_err());

    // Poll interval zero
    cfg.api.client_secret = "secret".to_string();
    cfg.poll_interval_secs = 0;
    assert!(cfg.validate().is_err());

    // Empty endpoint override
    cfg.poll_interval_secs = 3600;
    cfg.api.tempo_url = String::new();
    assert!(cfg.validate().is_err());
}

#[test]
fn from_file_with_invalid_yaml_fails() {
    let tmp = tempfile::NamedTempFile::new().unwrap();
    fs::write(tmp.path(), b"bad: [unclosed").unwrap();
    let err = Config::from_file(tmp.path()).unwrap_err();
    let msg = format!("{}", err);
    assert!(msg.contains("Configuration error"));
}
