use std::fs;

use crm_desk::error::{ConfigError, Error};
use crm_desk::infrastructure::config::logging::LogFormat;
use crm_desk::infrastructure::config::settings::Config;

fn write_temp_config(dir: &tempfile::TempDir, contents: &str) -> std::path::PathBuf {
    let path = dir.path().join("config.toml");
    fs::write(&path, contents).expect("write temp config");
    path
}

#[test]
fn config_loads_every_section() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_temp_config(
        &dir,
        r#"
[server]
bind = "0.0.0.0:8080"

[database]
url = "/var/lib/crm-desk/desk.db"
pool_size = 8
busy_timeout_ms = 250

[logging]
level = "debug"
format = "json"
"#,
    );

    let config = Config::load(&path).unwrap();
    assert_eq!(config.server.bind, "0.0.0.0:8080");
    assert_eq!(config.database.pool_size, 8);
    assert_eq!(config.database.busy_timeout_ms, 250);
    assert_eq!(config.logging.format, LogFormat::Json);
}

#[test]
fn config_rejects_zero_pool_size() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_temp_config(&dir, "[database]\npool_size = 0\n");

    let err = Config::load(&path).unwrap_err();
    assert!(matches!(
        err,
        Error::Config(ConfigError::InvalidValue {
            field: "pool_size",
            ..
        })
    ));
}

#[test]
fn config_rejects_bad_bind_address() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_temp_config(&dir, "[server]\nbind = \"localhost\"\n");

    let err = Config::load(&path).unwrap_err();
    assert!(matches!(
        err,
        Error::Config(ConfigError::InvalidValue { field: "bind", .. })
    ));
}

#[test]
fn config_reports_malformed_toml() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_temp_config(&dir, "[server\nbind = 1");

    let err = Config::load(&path).unwrap_err();
    assert!(matches!(err, Error::Config(ConfigError::Parse(_))));
}

#[test]
fn config_reports_missing_file() {
    let dir = tempfile::tempdir().unwrap();
    let err = Config::load(dir.path().join("absent.toml")).unwrap_err();
    assert!(matches!(err, Error::Config(ConfigError::ReadFile(_))));
}

#[test]
fn database_url_override_wins_over_file() {
    let config = Config::parse_toml_with_database_url(
        "[database]\nurl = \"file.db\"\n",
        Some("override.db".to_string()),
    )
    .unwrap();
    assert_eq!(config.database.url, "override.db");
}
