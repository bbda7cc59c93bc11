#![allow(clippy::result_large_err)]

use super::Config;
use crate::core::error::AppError;
use crate::core::types::ErrorCategory;
use std::io::Read;
use std::path::Path;

pub struct ConfigLoader;

impl ConfigLoader {
    /// Decode a YAML document. Empty or comment-only input is an empty config.
    pub fn from_yaml_str(text: &str) -> Result<Config, AppError> {
        let document: serde_yaml::Value = serde_yaml::from_str(text)?;
        if document.is_null() {
            tracing::debug!("input document is empty");
            return Ok(Config::default());
        }
        let config: Config = serde_yaml::from_str(text)?;
        tracing::debug!(
            systemd_units = config.systemd.units.len(),
            networkd_units = config.networkd.units.len(),
            "decoded config document"
        );
        Ok(config)
    }

    /// Load config from a specific file path
    pub fn load_from_file(path: &Path) -> Result<Config, AppError> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            AppError::with_source(
                ErrorCategory::IoError,
                format!("Failed to read config file {}: {}", path.display(), e),
                e,
            )
        })?;

        Self::from_yaml_str(&content)
            .map_err(|e| e.with_context("path", path.display().to_string()))
    }

    /// Load config from an arbitrary reader such as stdin.
    pub fn load_from_reader<R: Read>(mut reader: R) -> Result<Config, AppError> {
        let mut content = String::new();
        reader.read_to_string(&mut content)?;
        Self::from_yaml_str(&content)
    }
}
