//! Core types for path handling.

use std::fmt;
use std::path::{Path, PathBuf};

use crate::error::{Error, Result};

/// A path in display form: the home-directory prefix collapsed to `~`.
///
/// Display paths are what users see in the selector and in list output.
/// They are never used for filesystem operations directly; normalize them
/// first with [`PathResolver::normalize`](crate::PathResolver::normalize).
pub type DisplayPath = String;

/// An absolute path with any home-directory shorthand expanded.
///
/// # Examples
///
/// ```
/// use sessionizer::NormalizedPath;
/// use std::path::PathBuf;
///
/// let normalized = NormalizedPath::new(PathBuf::from("/home/me/code")).unwrap();
/// assert!(normalized.as_path().is_absolute());
///
/// assert!(NormalizedPath::new(PathBuf::from("code")).is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NormalizedPath {
    path: PathBuf,
}

impl NormalizedPath {
    /// Create a new normalized path.
    ///
    /// # Errors
    ///
    /// Returns an error if the path is not absolute.
    pub fn new(path: PathBuf) -> Result<Self> {
        if !path.is_absolute() {
            return Err(Error::InvalidPath {
                path,
                reason: "Path must be absolute after normalization".to_string(),
            });
        }
        Ok(Self { path })
    }

    /// Get a reference to the path.
    #[must_use]
    pub fn as_path(&self) -> &Path {
        &self.path
    }

    /// Convert into the underlying `PathBuf`.
    #[must_use]
    pub fn into_path_buf(self) -> PathBuf {
        self.path
    }
}

impl AsRef<Path> for NormalizedPath {
    fn as_ref(&self) -> &Path {
        &self.path
    }
}

impl fmt::Display for NormalizedPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.path.display())
    }
}
