use crate::core::types::ErrorCategory;
use std::collections::BTreeMap;

/// Hard failure at the edges of a transpile run: reading input, decoding YAML, writing
/// output, loading logging config. Problems inside a document are report entries instead.
#[derive(Debug)]
pub struct AppError {
    pub category: ErrorCategory,
    pub code: String,
    pub message: String,
    pub context: BTreeMap<String, String>,
    pub source: Option<anyhow::Error>,
}

impl AppError {
    pub fn new<T: Into<String>>(category: ErrorCategory, message: T) -> Self {
        let code = match category {
            ErrorCategory::SerializationError => "UF-SERDE",
            ErrorCategory::ConfigError => "UF-CONFIG",
            ErrorCategory::IoError => "UF-IO",
        };
        AppError {
            category,
            code: code.to_string(),
            message: message.into(),
            context: BTreeMap::new(),
            source: None,
        }
    }

    pub fn with_source<T: Into<String>>(
        category: ErrorCategory,
        message: T,
        source: impl Into<anyhow::Error>,
    ) -> Self {
        let mut error = AppError::new(category, message);
        error.source = Some(source.into());
        error
    }

    pub fn with_context<K: Into<String>, V: Into<String>>(mut self, key: K, value: V) -> Self {
        self.context.insert(key.into(), value.into());
        self
    }
}

impl std::fmt::Display for AppError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}] {}: {}", self.code, self.category, self.message)?;
        if !self.context.is_empty() {
            write!(f, " (Context: {:?})", self.context)?;
        }
        if let Some(ref source) = self.source {
            write!(f, "\nCaused by: {}", source)?;
        }
        Ok(())
    }
}

impl std::error::Error for AppError {}

impl From<std::io::Error> for AppError {
    fn from(e: std::io::Error) -> Self {
        AppError::with_source(ErrorCategory::IoError, e.to_string(), e)
    }
}

impl From<serde_yaml::Error> for AppError {
    fn from(e: serde_yaml::Error) -> Self {
        let location = e.location();
        let mut error = AppError::with_source(
            ErrorCategory::SerializationError,
            format!("failed to decode config: {}", e),
            e,
        );
        if let Some(location) = location {
            error = error
                .with_context("line", location.line().to_string())
                .with_context("column", location.column().to_string());
        }
        error
    }
}
