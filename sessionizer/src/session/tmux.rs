//! tmux-backed session manager.

use std::env;
use std::path::Path;
use std::process::{Command, Output, Stdio};

use crate::error::{Error, Result};
use crate::session::SessionManager;

/// Drives the `tmux` binary.
///
/// # Examples
///
/// ```no_run
/// use sessionizer::{SessionManager, TmuxSessionManager};
///
/// let tmux = TmuxSessionManager::new();
/// if !tmux.has_session("api").unwrap() {
///     tmux.create_session("api", std::path::Path::new("/srv/api")).unwrap();
/// }
/// tmux.attach_or_switch("api").unwrap();
/// ```
#[derive(Debug, Clone)]
pub struct TmuxSessionManager {
    program: String,
    inside_tmux: bool,
}

impl Default for TmuxSessionManager {
    fn default() -> Self {
        Self {
            program: "tmux".to_string(),
            inside_tmux: env::var_os("TMUX").is_some_and(|v| !v.is_empty()),
        }
    }
}

impl TmuxSessionManager {
    /// Use the `tmux` found on `PATH`, detecting whether we already run
    /// inside a tmux client from `$TMUX`.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Use a specific program instead of `tmux`.
    #[must_use]
    pub fn with_program(program: impl Into<String>, inside_tmux: bool) -> Self {
        Self {
            program: program.into(),
            inside_tmux,
        }
    }

    fn run(&self, args: &[&str], stdio: bool) -> Result<Output> {
        log::debug!("running {} {}", self.program, args.join(" "));

        let mut command = Command::new(&self.program);
        command.args(args);
        if stdio {
            command
                .stdin(Stdio::inherit())
                .stdout(Stdio::inherit())
                .stderr(Stdio::inherit());
        }

        command.output().map_err(|e| Error::Session {
            message: format!("failed to run {}: {e}", self.program),
        })
    }

    fn run_checked(&self, args: &[&str], stdio: bool) -> Result<()> {
        let output = self.run(args, stdio)?;
        if output.status.success() {
            return Ok(());
        }

        let stderr = String::from_utf8_lossy(&output.stderr);
        let stderr = stderr.trim();
        Err(Error::Session {
            message: if stderr.is_empty() {
                format!("{} {} exited with {}", self.program, args[0], output.status)
            } else {
                stderr.to_string()
            },
        })
    }
}

impl SessionManager for TmuxSessionManager {
    fn has_session(&self, name: &str) -> Result<bool> {
        // `=` asks for an exact name match rather than a prefix.
        let target = format!("={name}");
        let output = self.run(&["has-session", "-t", &target], false)?;
        Ok(output.status.success())
    }

    fn create_session(&self, name: &str, dir: &Path) -> Result<()> {
        let dir = dir.to_string_lossy();
        self.run_checked(&["new-session", "-d", "-s", name, "-c", &dir], false)
    }

    fn attach_or_switch(&self, name: &str) -> Result<()> {
        let target = format!("={name}");
        if self.inside_tmux {
            self.run_checked(&["switch-client", "-t", &target], false)
        } else {
            self.run_checked(&["attach-session", "-t", &target], true)
        }
    }
}
