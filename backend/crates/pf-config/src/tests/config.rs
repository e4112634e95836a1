use crate::Config;
use crate::tests::{EnvGuard, setup_config_dir};

use googletest::assert_that;
use googletest::prelude::{anything, contains_substring, eq, err, ok, some};
use log::LevelFilter;
use serial_test::serial;

// =========================================================================
// Loading
// =========================================================================

#[test]
#[serial]
fn given_no_config_file_when_load_then_defaults_are_used() {
    // Given
    let (_temp, _dir, _secret) = setup_config_dir();

    // When
    let config = Config::load().unwrap();

    // Then
    assert_that!(config.server.port, eq(crate::DEFAULT_PORT));
    assert_that!(config.database.path.as_str(), eq(crate::DEFAULT_DATABASE_FILENAME));
    assert_that!(config.auth.issuer.as_str(), eq(crate::DEFAULT_JWT_ISSUER));
    assert_that!(config.auth.token_ttl_secs, eq(172_800));
    assert_that!(config.validate(), ok(anything()));
}

#[test]
#[serial]
fn given_missing_config_dir_when_load_then_directory_is_created() {
    // Given
    let temp = tempfile::TempDir::new().unwrap();
    let nested = temp.path().join("nested").join(".pf");
    let _dir = EnvGuard::set("PF_CONFIG_DIR", nested.to_str().unwrap());

    // When
    let result = Config::load();

    // Then
    assert_that!(result, ok(anything()));
    assert!(nested.exists());
}

#[test]
#[serial]
fn given_config_toml_when_load_then_file_values_are_used() {
    // Given
    let (temp, _dir, _secret) = setup_config_dir();
    std::fs::write(
        temp.path().join("config.toml"),
        r#"
            [server]
            port = 4100

            [auth]
            issuer = "https://folio.example.com"
            token_ttl_secs = 600

            [logging]
            level = "debug"
        "#,
    )
    .unwrap();

    // When
    let config = Config::load().unwrap();

    // Then
    assert_that!(config.server.port, eq(4100));
    assert_that!(config.auth.issuer.as_str(), eq("https://folio.example.com"));
    assert_that!(config.auth.token_ttl_secs, eq(600));
    assert_that!(*config.logging.level, eq(LevelFilter::Debug));
}

#[test]
#[serial]
fn given_env_override_when_load_then_env_wins_over_file() {
    // Given
    let (temp, _dir, _secret) = setup_config_dir();
    std::fs::write(temp.path().join("config.toml"), "[server]\nport = 4100\n").unwrap();
    let _port = EnvGuard::set("PF_SERVER_PORT", "4200");
    let _file = EnvGuard::set("PF_LOG_FILE", "server.log");

    // When
    let config = Config::load().unwrap();

    // Then
    assert_that!(config.server.port, eq(4200));
    assert_that!(config.logging.file.clone(), some(eq("server.log")));
    let log_path = config.log_file_path().unwrap().unwrap();
    assert!(log_path.ends_with("log/server.log"));
}

#[test]
#[serial]
fn given_malformed_toml_when_load_then_toml_error() {
    // Given
    let (temp, _dir, _secret) = setup_config_dir();
    std::fs::write(temp.path().join("config.toml"), "[server\nport = ").unwrap();

    // When
    let result = Config::load();

    // Then
    assert_that!(result, err(anything()));
    let msg = format!("{}", result.unwrap_err());
    assert_that!(msg, contains_substring("TOML parse error"));
}

#[test]
#[serial]
fn given_unknown_log_level_when_load_then_falls_back_to_info() {
    // Given
    let (_temp, _dir, _secret) = setup_config_dir();
    let _level = EnvGuard::set("PF_LOG_LEVEL", "chatty");

    // When
    let config = Config::load().unwrap();

    // Then
    assert_that!(*config.logging.level, eq(LevelFilter::Info));
}

// =========================================================================
// Database path
// =========================================================================

#[test]
#[serial]
fn given_absolute_database_path_when_validate_then_error() {
    let (_temp, _dir, _secret) = setup_config_dir();
    let _db = EnvGuard::set("PF_DATABASE_PATH", "/etc/portfolio.db");

    let config = Config::load().unwrap();
    let result = config.validate();

    assert_that!(result, err(anything()));
    let msg = format!("{}", result.unwrap_err());
    assert_that!(msg, contains_substring("database.path"));
}

#[test]
#[serial]
fn given_relative_database_path_when_resolved_then_joined_to_config_dir() {
    let (temp, _dir, _secret) = setup_config_dir();

    let config = Config::load().unwrap();
    let path = config.database_path().unwrap();

    assert_eq!(path, temp.path().join(crate::DEFAULT_DATABASE_FILENAME));
}
