//! Main entry point for the `ts` CLI.
//!
//! `ts` discovers project directories under the configured targets and
//! opens the one you pick as a tmux session:
//! - `ts`: pick a target with fzf and attach to its session
//! - `ts -l`: print the discovered targets
//! - `ts -t PATH`: attach to the session for PATH directly

mod cli;
mod commands;
mod error;
mod utils;

use clap::Parser;
use cli::Cli;
use utils::GlobalOptions;

fn main() {
    let cli = Cli::parse();

    let logger = sessionizer::init_logger(cli.verbose, cli.quiet);
    if logger.install().is_err() {
        logger.warn("a logger was already installed");
    }
    let global = GlobalOptions { logger };

    let result = match cli.target_command() {
        Some(cmd) => cmd.execute(&global),
        None => cli.discover.execute(&global),
    };

    match result {
        Ok(()) => std::process::exit(0),
        Err(e) => {
            eprintln!("{e}");
            std::process::exit(e.exit_code());
        }
    }
}
