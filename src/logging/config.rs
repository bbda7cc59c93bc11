#![allow(clippy::result_large_err)]

use crate::core::error::AppError;
use crate::core::types::ErrorCategory;
use crate::logging::layers::console::ConsoleOutput;
use serde::Deserialize;
use std::env;
use std::fs;
use std::path::Path;
use std::str::FromStr;
use tracing_subscriber::filter::Directive;

const DEFAULT_LEVEL: &str = "warn";

/// Environment variable holding a full tracing filter, e.g. `unitforge=debug`.
pub const LOG_FILTER_ENV: &str = "UNITFORGE_LOG";
/// Environment variable overriding `logging.console_output`.
pub const LOG_CONSOLE_ENV: &str = "UNITFORGE_LOG_CONSOLE";

/// Resolved logging configuration after reading config files and env overrides.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoggingConfig {
    pub default_level: String,
    pub console_output: ConsoleOutput,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            default_level: DEFAULT_LEVEL.to_string(),
            console_output: ConsoleOutput::default(),
        }
    }
}

impl LoggingConfig {
    /// Load configuration with deterministic precedence: defaults, config file, env overrides.
    pub fn load(workspace_root: Option<&Path>) -> Result<Self, AppError> {
        let mut config = LoggingConfig::default();
        if let Some(workspace) = workspace_root {
            if let Some(workspace_config) = Self::load_from_workspace(workspace)? {
                config.apply(workspace_config);
            }
        }
        config.apply_env_overrides()?;
        config.validate()?;
        Ok(config)
    }

    fn load_from_workspace(workspace_root: &Path) -> Result<Option<TomlLogging>, AppError> {
        let path = workspace_root.join(".unitforge").join("logging.toml");
        Self::load_from_file(&path)
    }

    fn load_from_file(path: &Path) -> Result<Option<TomlLogging>, AppError> {
        if !path.exists() {
            return Ok(None);
        }
        let content = fs::read_to_string(path).map_err(|e| {
            AppError::with_source(
                ErrorCategory::IoError,
                format!("failed to read logging config {}", path.display()),
                e,
            )
        })?;
        let parsed: TomlLogging = toml::from_str(&content).map_err(|e| {
            AppError::with_source(
                ErrorCategory::ConfigError,
                format!("failed to parse logging config {}", path.display()),
                e,
            )
        })?;
        Ok(Some(parsed))
    }

    fn apply(&mut self, toml: TomlLogging) {
        if let Some(logging) = toml.logging {
            if let Some(default_level) = logging.default_level {
                self.default_level = default_level;
            }
            if let Some(console_output) = logging.console_output {
                self.console_output = console_output;
            }
        }
    }

    fn apply_env_overrides(&mut self) -> Result<(), AppError> {
        if let Ok(console) = env::var(LOG_CONSOLE_ENV) {
            if !console.trim().is_empty() {
                self.console_output = ConsoleOutput::from_str(&console).map_err(|message| {
                    AppError::new(ErrorCategory::ConfigError, message)
                        .with_context("env", LOG_CONSOLE_ENV)
                })?;
            }
        }
        Ok(())
    }

    fn validate(&self) -> Result<(), AppError> {
        Directive::from_str(&self.default_level).map_err(|_| {
            AppError::new(
                ErrorCategory::ConfigError,
                "logging.default_level must be a valid tracing directive",
            )
            .with_context("default_level", self.default_level.as_str())
        })?;
        Ok(())
    }
}

#[derive(Debug, Deserialize)]
struct TomlLogging {
    pub logging: Option<TomlLoggingSection>,
}

#[derive(Debug, Deserialize)]
struct TomlLoggingSection {
    pub default_level: Option<String>,
    #[serde(default)]
    pub console_output: Option<ConsoleOutput>,
}
