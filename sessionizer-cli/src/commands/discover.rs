//! Discover targets and list them or open the selected one.

use crate::error::CliError;
use crate::utils::{load_configuration, GlobalOptions};
use clap::Args;
use sessionizer::config::DEFAULT_CONFIG_PATH;
use sessionizer::{FzfSelector, PathResolver, RunOptions, Sessionizer, TmuxSessionManager};
use std::io;

/// Discover targets from the configuration.
#[derive(Args)]
pub struct DiscoverCommand {
    /// Load configuration from FILE
    #[arg(
        short,
        long,
        value_name = "FILE",
        env = "TS_CONFIG",
        default_value = DEFAULT_CONFIG_PATH
    )]
    pub config: String,

    /// Narrow down the results displayed in the selector
    #[arg(short, long, value_name = "FILTER")]
    pub filter: Option<String>,

    /// List all discovered targets
    #[arg(short, long)]
    pub list: bool,
}

impl DiscoverCommand {
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let resolver = PathResolver::new();
        let config = load_configuration(&self.config, &resolver)?;
        global
            .logger
            .info(&format!("loaded {} target(s) from {}", config.targets.len(), self.config));

        let options = RunOptions::new()
            .with_list(self.list)
            .with_filter(self.filter);

        let sessionizer =
            Sessionizer::new(resolver, FzfSelector::new(), TmuxSessionManager::new());
        sessionizer.run(&config, &options, &mut io::stdout().lock())?;
        Ok(())
    }
}
