//! Utility functions for CLI operations.

use crate::error::CliError;
use sessionizer::{Config, ConfigLoader, Logger, PathResolver};

/// Options shared by every command.
#[derive(Debug, Clone, Copy)]
pub struct GlobalOptions {
    /// Logger built from `--verbose`, `--quiet` and `TS_LOG_MODE`.
    pub logger: Logger,
}

/// Load the configuration file at `path` (which may start with `~`).
pub fn load_configuration(path: &str, resolver: &PathResolver) -> Result<Config, CliError> {
    let config = ConfigLoader::load(path, resolver).map_err(CliError::Config)?;
    if config.targets.is_empty() {
        log::warn!("no targets configured in {path}");
    }
    Ok(config)
}
