//! CLI-specific error types with exit codes.
//!
//! Every error is tagged with the stage that failed and printed as
//! `Error(<Tag>): <message>`.

use std::fmt;
use sessionizer::Error as LibError;

/// CLI-specific error type with exit code mapping.
#[derive(Debug)]
pub enum CliError {
    /// The configuration could not be loaded.
    Config(LibError),

    /// One or more roots failed during discovery.
    Discovery(LibError),

    /// The selector failed.
    Selector(LibError),

    /// tmux failed.
    Session(LibError),

    /// The `--target` path is not an existing directory.
    InvalidTarget(LibError),

    /// Writing output failed.
    Io(std::io::Error),
}

impl CliError {
    /// Get the appropriate exit code for this error.
    ///
    /// Exit codes:
    /// - 0: Success (not an error)
    /// - 1: Discovery or output failure
    /// - 2: Selector failure
    /// - 3: tmux failure
    /// - 4: Configuration error
    /// - 5: Invalid target
    pub fn exit_code(&self) -> i32 {
        match self {
            CliError::Discovery(_) | CliError::Io(_) => 1,
            CliError::Selector(_) => 2,
            CliError::Session(_) => 3,
            CliError::Config(_) => 4,
            CliError::InvalidTarget(_) => 5,
        }
    }

    /// The stage name shown in the error message.
    pub fn tag(&self) -> &'static str {
        match self {
            CliError::Config(_) => "Config",
            CliError::Discovery(_) => "Discovery",
            CliError::Selector(_) => "Selector",
            CliError::Session(_) => "Tmux",
            CliError::InvalidTarget(_) => "Target",
            CliError::Io(_) => "Io",
        }
    }

    /// Classify an error from a single-target run.
    ///
    /// Anything that is not a tmux failure means the target was unusable.
    pub fn from_target(e: LibError) -> Self {
        match e {
            LibError::Session { .. } => CliError::Session(e),
            _ => CliError::InvalidTarget(e),
        }
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Error({}): ", self.tag())?;
        match self {
            CliError::Config(e)
            | CliError::Discovery(e)
            | CliError::Selector(e)
            | CliError::Session(e)
            | CliError::InvalidTarget(e) => write!(f, "{e}"),
            CliError::Io(e) => write!(f, "{e}"),
        }
    }
}

impl std::error::Error for CliError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            CliError::Config(e)
            | CliError::Discovery(e)
            | CliError::Selector(e)
            | CliError::Session(e)
            | CliError::InvalidTarget(e) => Some(e),
            CliError::Io(e) => Some(e),
        }
    }
}

impl From<LibError> for CliError {
    fn from(e: LibError) -> Self {
        match e {
            LibError::Discovery(_) => CliError::Discovery(e),
            LibError::Selector { .. } => CliError::Selector(e),
            LibError::Session { .. } => CliError::Session(e),
            LibError::Configuration { .. } | LibError::Validation { .. } => CliError::Config(e),
            // Outside of discovery these come from resolving a chosen target.
            LibError::NotADirectory { .. }
            | LibError::InvalidPath { .. }
            | LibError::HomeDirectoryNotFound { .. }
            | LibError::PathNotFound { .. }
            | LibError::PermissionDenied { .. }
            | LibError::Traversal { .. } => CliError::InvalidTarget(e),
            LibError::Io(io) => CliError::Io(io),
        }
    }
}

impl From<std::io::Error> for CliError {
    fn from(e: std::io::Error) -> Self {
        CliError::Io(e)
    }
}
