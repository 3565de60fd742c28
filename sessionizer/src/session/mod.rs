//! Terminal multiplexer sessions.
//!
//! Every target maps to one tmux session named after its last path
//! component. Opening a target attaches to that session, creating it first
//! if needed.

mod tmux;

pub use tmux::TmuxSessionManager;

use std::path::Path;

use crate::error::Result;
use crate::path::PathResolver;

/// Creates and attaches to sessions.
///
/// # Examples
///
/// ```
/// use std::path::Path;
/// use std::sync::Mutex;
/// use sessionizer::{Result, SessionManager};
///
/// #[derive(Default)]
/// struct Recorder(Mutex<Vec<String>>);
///
/// impl SessionManager for Recorder {
///     fn has_session(&self, _name: &str) -> Result<bool> {
///         Ok(false)
///     }
///     fn create_session(&self, name: &str, _dir: &Path) -> Result<()> {
///         self.0.lock().unwrap().push(format!("new {name}"));
///         Ok(())
///     }
///     fn attach_or_switch(&self, name: &str) -> Result<()> {
///         self.0.lock().unwrap().push(format!("attach {name}"));
///         Ok(())
///     }
/// }
///
/// let recorder = Recorder::default();
/// recorder.create_session("api", Path::new("/srv/api")).unwrap();
/// assert_eq!(recorder.0.lock().unwrap().len(), 1);
/// ```
pub trait SessionManager: Send + Sync {
    /// Whether a session called `name` already exists.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::Session`] if the multiplexer cannot be queried.
    fn has_session(&self, name: &str) -> Result<bool>;

    /// Create a detached session called `name` rooted at `dir`.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::Session`] if the session cannot be created.
    fn create_session(&self, name: &str, dir: &Path) -> Result<()>;

    /// Attach to `name`, or switch to it when already inside the multiplexer.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::Session`] if attaching fails.
    fn attach_or_switch(&self, name: &str) -> Result<()>;
}

/// The session name for a target.
///
/// This is the target's last path component with leading dots removed.
/// tmux treats `.` and `:` as target separators, so those become `_`.
///
/// # Examples
///
/// ```
/// use sessionizer::session_name;
///
/// assert_eq!(session_name("~/code/api"), "api");
/// assert_eq!(session_name("~/.config"), "config");
/// assert_eq!(session_name("/srv/web.v2"), "web_v2");
/// ```
#[must_use]
pub fn session_name(target: &str) -> String {
    let trimmed = target.trim_end_matches('/');
    let base = trimmed.rsplit('/').next().unwrap_or(trimmed);
    let base = if base.is_empty() { target } else { base };

    base.trim_start_matches('.')
        .chars()
        .map(|c| if matches!(c, '.' | ':') { '_' } else { c })
        .collect()
}

/// Attach to the session for `target`, creating it if it does not exist.
///
/// `target` is a display path as produced by discovery, or any raw path the
/// user typed; it is normalized before being handed to the multiplexer.
///
/// # Errors
///
/// Returns an error if the target cannot be normalized or if any
/// multiplexer call fails.
pub fn open_session(
    manager: &dyn SessionManager,
    resolver: &PathResolver,
    target: &str,
) -> Result<()> {
    let name = session_name(target);

    if manager.has_session(&name)? {
        log::debug!("session {name} exists, attaching");
        return manager.attach_or_switch(&name);
    }

    let dir = resolver.normalize(target)?;
    log::debug!("creating session {name} in {dir}");
    manager.create_session(&name, dir.as_path())?;
    manager.attach_or_switch(&name)
}
