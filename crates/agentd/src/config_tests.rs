use super::*;

#[test]
fn loads_a_well_formed_config() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("config.json");
    std::fs::write(
        &path,
        r#"{
            "TestFarmApi": { "BaseUrl": "https://farm.example.test", "Timeout": 30 },
            "Grid":        { "name": "default", "capabilities": ["linux", "x64"] },
            "Logging":     { "LogDir": "/var/log/tf-agentd" }
        }"#,
    )
    .expect("write config");

    let config = Config::load(&path).expect("load config");
    assert_eq!(config.base_url, "https://farm.example.test");
    assert_eq!(config.timeout_secs, 30);
    assert_eq!(config.grid_name, "default");
    assert_eq!(config.capabilities, vec!["linux".to_string(), "x64".to_string()]);
    assert_eq!(config.log_dir, PathBuf::from("/var/log/tf-agentd"));
}

#[test]
fn defaults_capabilities_to_empty_when_absent() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("config.json");
    std::fs::write(
        &path,
        r#"{
            "TestFarmApi": { "BaseUrl": "https://farm.example.test", "Timeout": 30 },
            "Grid":        { "name": "default" },
            "Logging":     { "LogDir": "/var/log/tf-agentd" }
        }"#,
    )
    .expect("write config");

    let config = Config::load(&path).expect("load config");
    assert!(config.capabilities.is_empty());
}

#[test]
fn missing_file_is_a_read_error() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("does-not-exist.json");

    let error = Config::load(&path).expect_err("should fail");
    assert!(matches!(error, ConfigError::Read { .. }));
}

#[test]
fn malformed_json_is_a_parse_error() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("config.json");
    std::fs::write(&path, "not json").expect("write config");

    let error = Config::load(&path).expect_err("should fail");
    assert!(matches!(error, ConfigError::Parse { .. }));
}
