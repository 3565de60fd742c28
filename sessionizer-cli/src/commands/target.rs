//! Open a single target directly.

use crate::error::CliError;
use crate::utils::GlobalOptions;
use sessionizer::{FzfSelector, PathResolver, Sessionizer, TmuxSessionManager};

/// Switch or attach to one target, skipping configuration and discovery.
pub struct TargetCommand {
    /// The target path, possibly starting with `~`.
    pub target: String,
}

impl TargetCommand {
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        global.logger.info(&format!("opening {}", self.target));

        let sessionizer = Sessionizer::new(
            PathResolver::new(),
            FzfSelector::new(),
            TmuxSessionManager::new(),
        );
        sessionizer
            .run_single(&self.target)
            .map_err(CliError::from_target)
    }
}
