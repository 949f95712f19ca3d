//! Setup of the logging subsystem.
//!
//! Events go to stderr so that stdout only carries payment requests.

use crate::error::{PluginError, Result};
use std::io::IsTerminal;
use tracing_subscriber::EnvFilter;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum LogFormat {
    #[default]
    Default,
    Json,
}

/// Installs the global subscriber.
///
/// `RUST_LOG` wins over `level` when it is set.
pub fn setup(level: &str, format: LogFormat) -> Result<()> {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(level))
        .map_err(|e| PluginError::LoggerError(e.to_string()))?;

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_ansi(std::io::stderr().is_terminal())
        .with_target(false);

    let installed = match format {
        LogFormat::Default => builder.try_init(),
        LogFormat::Json => builder.json().try_init(),
    };
    installed.map_err(|e| PluginError::LoggerError(e.to_string()))
}
