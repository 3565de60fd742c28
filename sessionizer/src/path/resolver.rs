//! Home-aware path resolution.
//!
//! This module provides the `PathResolver` type, which carries the home
//! directory as an explicit value and applies the normalize / unexpand
//! transforms against it.

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{Error, Result};
use crate::path::normalize;
use crate::path::types::{DisplayPath, NormalizedPath};

/// Resolves raw path strings against a fixed home directory.
///
/// The home directory is looked up once (see [`PathResolver::new`]) and then
/// shared by every discovery worker, so the process environment is never
/// consulted from inside a walk.
///
/// # Examples
///
/// ```
/// use sessionizer::PathResolver;
/// use std::path::Path;
///
/// let resolver = PathResolver::with_home("/home/me");
///
/// let normalized = resolver.normalize("~/code").unwrap();
/// assert_eq!(normalized.as_path(), Path::new("/home/me/code"));
///
/// assert_eq!(resolver.unexpand(normalized.as_path()), "~/code");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PathResolver {
    /// The current user's home directory, if it could be determined.
    home: Option<PathBuf>,
}

impl Default for PathResolver {
    fn default() -> Self {
        Self {
            home: home::home_dir(),
        }
    }
}

impl PathResolver {
    /// Create a resolver for the current user's home directory.
    ///
    /// A missing home directory is not an error here; it only fails the
    /// paths that actually need tilde expansion.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a resolver with an explicit home directory.
    #[must_use]
    pub fn with_home(home: impl Into<PathBuf>) -> Self {
        Self {
            home: Some(home.into()),
        }
    }

    /// Create a resolver that knows no home directory.
    #[must_use]
    pub fn without_home() -> Self {
        Self { home: None }
    }

    /// The home directory this resolver expands `~` to.
    #[must_use]
    pub fn home(&self) -> Option<&Path> {
        self.home.as_deref()
    }

    /// Normalize a raw path: expand `~` and make it absolute.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The path is empty
    /// - The path starts with `~` and the home directory is unknown
    /// - The path uses unsupported `~user` syntax
    /// - The current directory cannot be determined for a relative path
    pub fn normalize(&self, raw: &str) -> Result<NormalizedPath> {
        let path = normalize::normalize(raw, self.home())?;
        NormalizedPath::new(path)
    }

    /// Collapse the home directory prefix of `path` to `~`.
    ///
    /// Without a known home directory the path is returned as-is.
    #[must_use]
    pub fn unexpand(&self, path: &Path) -> DisplayPath {
        match self.home() {
            Some(home) => normalize::unexpand(path, home),
            None => path.display().to_string(),
        }
    }

    /// Stat `path` (following symlinks) and report whether it is a directory.
    ///
    /// # Errors
    ///
    /// Returns an error if the path cannot be accessed: it does not exist,
    /// permission is denied, or the symlink it names is dangling.
    ///
    /// # Examples
    ///
    /// ```no_run
    /// use sessionizer::PathResolver;
    /// use std::path::Path;
    ///
    /// assert!(PathResolver::classify_directory(Path::new("/tmp")).unwrap());
    /// assert!(!PathResolver::classify_directory(Path::new("/etc/hosts")).unwrap());
    /// assert!(PathResolver::classify_directory(Path::new("/nope")).is_err());
    /// ```
    pub fn classify_directory(path: &Path) -> Result<bool> {
        let metadata = fs::metadata(path).map_err(|e| Error::from_io(path, e))?;
        Ok(metadata.is_dir())
    }
}
