pub mod config;
pub mod layers;

pub use config::LoggingConfig;
pub use layers::console::ConsoleOutput;

use crate::Result;
use anyhow::{anyhow, Context};
use std::path::Path;
use std::sync::atomic::{AtomicBool, Ordering};
use tracing_subscriber::filter::EnvFilter;
use tracing_subscriber::prelude::*;
use tracing_subscriber::registry::Registry;

static LOGGER_INITIALIZED: AtomicBool = AtomicBool::new(false);

/// Initialize tracing for the process.
///
/// The filter comes from `level_override` when given, then `UNITFORGE_LOG`, then the
/// configured default level. Errors when called more than once per process.
pub fn init(workspace_root: Option<&Path>, level_override: Option<&str>) -> Result<()> {
    if LOGGER_INITIALIZED
        .compare_exchange(false, true, Ordering::SeqCst, Ordering::SeqCst)
        .is_err()
    {
        return Err(anyhow!("logging already initialized"));
    }

    let config = LoggingConfig::load(workspace_root)?;

    let env_filter = match level_override {
        Some(level) => EnvFilter::try_new(level),
        None => EnvFilter::try_from_env(config::LOG_FILTER_ENV)
            .or_else(|_| EnvFilter::try_new(&config.default_level)),
    }
    .context("failed to configure tracing level")?;

    let console_layer = layers::console::console_layer::<Registry>(config.console_output);
    tracing_subscriber::registry()
        .with(console_layer)
        .with(env_filter)
        .try_init()
        .context("failed to install tracing subscriber")?;

    tracing::debug!(
        console_output = %config.console_output,
        "logging initialized"
    );
    Ok(())
}
