//! `fzf`-backed selector.

use std::io::{self, Write};
use std::process::{Command, Stdio};

use crate::error::{Error, Result};
use crate::selector::options::merge_options;
use crate::selector::Selector;

/// Exit code `fzf` uses when nothing matched.
const EXIT_NO_MATCH: i32 = 1;
/// Exit code `fzf` uses when interrupted with Ctrl-C or Esc.
const EXIT_INTERRUPTED: i32 = 130;

/// Runs `fzf` as a child process.
///
/// Items are written to its stdin one per line and the chosen line is read
/// back from stdout. The picker itself draws on the terminal.
///
/// # Examples
///
/// ```no_run
/// use sessionizer::{FzfSelector, Selector};
///
/// let items = vec!["~/code/api".to_string(), "~/code/web".to_string()];
/// if let Some(choice) = FzfSelector::new().select(&items, &[]).unwrap() {
///     println!("picked {choice}");
/// }
/// ```
#[derive(Debug, Clone)]
pub struct FzfSelector {
    program: String,
}

impl Default for FzfSelector {
    fn default() -> Self {
        Self {
            program: "fzf".to_string(),
        }
    }
}

impl FzfSelector {
    /// Use the `fzf` found on `PATH`.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Use a specific program instead of `fzf`.
    #[must_use]
    pub fn with_program(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
        }
    }
}

impl Selector for FzfSelector {
    fn select(&self, items: &[String], options: &[String]) -> Result<Option<String>> {
        let args = merge_options(options);
        log::debug!("running {} {}", self.program, args.join(" "));

        let mut child = Command::new(&self.program)
            .args(&args)
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .spawn()
            .map_err(|e| Error::Selector {
                message: format!("failed to start {}: {e}", self.program),
            })?;

        if let Some(mut stdin) = child.stdin.take() {
            let input = items.join("\n");
            match stdin.write_all(input.as_bytes()) {
                // The picker may exit before reading everything.
                Err(e) if e.kind() != io::ErrorKind::BrokenPipe => {
                    return Err(Error::Selector {
                        message: format!("failed to write items: {e}"),
                    });
                }
                _ => {}
            }
        }

        let output = child.wait_with_output().map_err(|e| Error::Selector {
            message: format!("failed to wait for {}: {e}", self.program),
        })?;

        match output.status.code() {
            Some(0) => {}
            Some(EXIT_NO_MATCH | EXIT_INTERRUPTED) => return Ok(None),
            _ => {
                return Err(Error::Selector {
                    message: format!("{} exited with {}", self.program, output.status),
                })
            }
        }

        let chosen = String::from_utf8_lossy(&output.stdout);
        let chosen = chosen.trim_end_matches(['\n', '\r']);
        if chosen.is_empty() {
            Ok(None)
        } else {
            Ok(Some(chosen.to_string()))
        }
    }
}
