use serial_test::serial;
use std::fs;
use tempfile::TempDir;
use unitforge::core::types::ErrorCategory;
use unitforge::logging::{ConsoleOutput, LoggingConfig};

fn workspace_with(toml: &str) -> TempDir {
    let dir = TempDir::new().expect("temp dir");
    let config_dir = dir.path().join(".unitforge");
    fs::create_dir_all(&config_dir).expect("config dir");
    fs::write(config_dir.join("logging.toml"), toml).expect("write logging config");
    dir
}

#[test]
#[serial]
fn defaults_without_config_file() {
    std::env::remove_var("UNITFORGE_LOG_CONSOLE");
    let dir = TempDir::new().expect("temp dir");
    let config = LoggingConfig::load(Some(dir.path())).expect("load logging config");
    assert_eq!(config, LoggingConfig::default());
    assert_eq!(config.default_level, "warn");
    assert_eq!(config.console_output, ConsoleOutput::Stderr);
}

#[test]
#[serial]
fn file_values_apply() {
    std::env::remove_var("UNITFORGE_LOG_CONSOLE");
    let dir = workspace_with(
        "[logging]\ndefault_level = \"unitforge=debug\"\nconsole_output = \"none\"\n",
    );
    let config = LoggingConfig::load(Some(dir.path())).expect("load logging config");
    assert_eq!(config.default_level, "unitforge=debug");
    assert_eq!(config.console_output, ConsoleOutput::None);
}

#[test]
#[serial]
fn env_overrides_console_output() {
    let dir = workspace_with("[logging]\nconsole_output = \"none\"\n");
    std::env::set_var("UNITFORGE_LOG_CONSOLE", "stderr");
    let config = LoggingConfig::load(Some(dir.path()));
    std::env::remove_var("UNITFORGE_LOG_CONSOLE");
    assert_eq!(
        config.expect("load logging config").console_output,
        ConsoleOutput::Stderr
    );
}

#[test]
#[serial]
fn invalid_level_is_rejected() {
    std::env::remove_var("UNITFORGE_LOG_CONSOLE");
    let dir = workspace_with("[logging]\ndefault_level = \"unitforge=loud\"\n");
    let err = LoggingConfig::load(Some(dir.path())).expect_err("invalid level");
    assert_eq!(err.category, ErrorCategory::ConfigError);
    assert_eq!(err.code, "UF-CONFIG");
    assert!(err
        .to_string()
        .contains("logging.default_level must be a valid tracing directive"));
}

#[test]
#[serial]
fn malformed_toml_names_the_file() {
    std::env::remove_var("UNITFORGE_LOG_CONSOLE");
    let dir = workspace_with("[logging\n");
    let err = LoggingConfig::load(Some(dir.path())).expect_err("malformed toml");
    assert_eq!(err.category, ErrorCategory::ConfigError);
    assert!(err.to_string().contains("logging.toml"));
}

#[test]
#[serial]
fn unknown_console_value_is_a_config_error() {
    let dir = TempDir::new().expect("temp dir");
    std::env::set_var("UNITFORGE_LOG_CONSOLE", "syslog");
    let result = LoggingConfig::load(Some(dir.path()));
    std::env::remove_var("UNITFORGE_LOG_CONSOLE");
    let err = result.expect_err("unsupported console output");
    assert_eq!(err.category, ErrorCategory::ConfigError);
    assert!(err.to_string().contains("supported values are stderr, none"));
}
