//! Build script for sessionizer-cli.
//!
//! This script generates the `ts.1` man page at build time using
//! clap_mangen. The page is placed in OUT_DIR for inclusion in release builds.
//!
//! Note: We build a minimal command structure here rather than importing from
//! the main crate, since build scripts cannot depend on the crate being built.

use clap::{Arg, ArgAction, Command};
use clap_mangen::Man;
use std::fs;
use std::io;
use std::path::PathBuf;

/// Build the CLI command structure for man page generation.
///
/// IMPORTANT: Keep this structure synchronized with src/cli.rs and
/// src/commands/discover.rs.
fn build_cli() -> Command {
    Command::new("ts")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Navigate folders and projects as tmux sessions")
        .long_about(
            "Tmux Sessionizer discovers project directories under the configured targets, \
             lets you pick one with fzf, and attaches to a tmux session for it.",
        )
        .arg(
            Arg::new("config")
                .short('c')
                .long("config")
                .help("Load configuration from FILE")
                .value_name("FILE")
                .env("TS_CONFIG")
                .default_value("~/.config/ts/config.json"),
        )
        .arg(
            Arg::new("filter")
                .short('f')
                .long("filter")
                .help("Narrow down the results displayed in the selector")
                .value_name("FILTER"),
        )
        .arg(
            Arg::new("target")
                .short('t')
                .long("target")
                .help("Switch or attach to this target (e.g., a path), skipping discovery")
                .value_name("TARGET"),
        )
        .arg(
            Arg::new("list")
                .short('l')
                .long("list")
                .help("List all discovered targets")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("verbose")
                .long("verbose")
                .help("Enable verbose output")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("quiet")
                .long("quiet")
                .help("Suppress non-essential output")
                .action(ArgAction::SetTrue),
        )
}

fn main() -> io::Result<()> {
    let out_dir = PathBuf::from(
        std::env::var_os("OUT_DIR")
            .ok_or_else(|| io::Error::new(io::ErrorKind::NotFound, "OUT_DIR is not set"))?,
    );
    let man_dir = out_dir.join("man");
    fs::create_dir_all(&man_dir)?;

    let man = Man::new(build_cli());
    let mut buffer = Vec::new();
    man.render(&mut buffer)?;
    fs::write(man_dir.join("ts.1"), buffer)?;

    println!("cargo:rerun-if-changed=src/cli.rs");
    println!("cargo:rerun-if-changed=src/commands/");
    Ok(())
}
