//! CLI structure and argument definitions.
//!
//! `ts` has no subcommands: it either opens the selector over discovered
//! targets, lists them, or opens a single target given with `--target`.

use crate::commands::{DiscoverCommand, TargetCommand};
use clap::Parser;

/// Navigate folders and projects as tmux sessions.
#[derive(Parser)]
#[command(name = "ts")]
#[command(
    version,
    about = "Navigate folders and projects as tmux sessions",
    long_about = "Tmux Sessionizer discovers project directories under the configured \
                  targets, lets you pick one with fzf, and attaches to a tmux session for it."
)]
pub struct Cli {
    /// Enable verbose output
    #[arg(long)]
    pub verbose: bool,

    /// Suppress non-essential output
    #[arg(long)]
    pub quiet: bool,

    /// Switch or attach to this target (e.g., a path), skipping discovery
    #[arg(short, long, value_name = "TARGET")]
    pub target: Option<String>,

    #[command(flatten)]
    pub discover: DiscoverCommand,
}

impl Cli {
    /// The single-target command, when `--target` was given.
    pub fn target_command(&self) -> Option<TargetCommand> {
        self.target.clone().map(|target| TargetCommand { target })
    }
}
