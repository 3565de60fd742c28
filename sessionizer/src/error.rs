//! Error types for the sessionizer library.
//!
//! This module provides the error hierarchy for discovery, configuration,
//! selection and session handling, using `thiserror` for ergonomic error
//! handling.

use std::fmt;
use std::io::{self, ErrorKind};
use std::path::{Path, PathBuf};

use thiserror::Error;

/// Result type alias for operations that may fail with a sessionizer error.
///
/// # Examples
///
/// ```
/// use sessionizer::{Error, Result};
///
/// fn example_operation() -> Result<u8> {
///     Ok(2)
/// }
/// ```
pub type Result<T> = std::result::Result<T, Error>;

/// The main error type for the sessionizer library.
#[derive(Debug, Error)]
pub enum Error {
    /// An invalid filesystem path was provided.
    #[error("invalid path {}: {reason}", path.display())]
    InvalidPath {
        /// The invalid path.
        path: PathBuf,
        /// The reason the path is invalid.
        reason: String,
    },

    /// A path needed home-directory expansion but no home directory is known.
    #[error("cannot expand {}: home directory could not be determined", path.display())]
    HomeDirectoryNotFound {
        /// The path that needed expansion.
        path: PathBuf,
    },

    /// A path does not exist.
    #[error("path not found: {}", path.display())]
    PathNotFound {
        /// The path that was not found.
        path: PathBuf,
    },

    /// Permission denied accessing a path.
    #[error("permission denied: {}", path.display())]
    PermissionDenied {
        /// The path that could not be accessed.
        path: PathBuf,
    },

    /// A filesystem operation failed while traversing a root.
    #[error("cannot read {}: {source}", path.display())]
    Traversal {
        /// The path being read when the failure happened.
        path: PathBuf,
        /// The underlying I/O error.
        #[source]
        source: io::Error,
    },

    /// An I/O error occurred.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// One or more roots failed during discovery.
    #[error("{0}")]
    Discovery(#[from] AggregateError),

    /// A single target is not an existing directory.
    #[error("not a directory: {}", path.display())]
    NotADirectory {
        /// The rejected target path.
        path: PathBuf,
    },

    /// A configuration file could not be parsed.
    #[error("invalid configuration in {}: {message}", path.display())]
    Configuration {
        /// The configuration file.
        path: PathBuf,
        /// The parser message.
        message: String,
    },

    /// A validation error occurred.
    #[error("validation error for '{field}': {message}")]
    Validation {
        /// The field that failed validation.
        field: String,
        /// A description of the validation failure.
        message: String,
    },

    /// The interactive selector failed.
    #[error("selector failed: {message}")]
    Selector {
        /// Details about the failure.
        message: String,
    },

    /// The terminal multiplexer failed.
    #[error("tmux failed: {message}")]
    Session {
        /// Details about the failure.
        message: String,
    },
}

impl Error {
    /// Attribute an I/O error to the path that produced it.
    ///
    /// `NotFound` and `PermissionDenied` map to their dedicated variants so
    /// callers can match on them; everything else keeps the source error.
    ///
    /// # Examples
    ///
    /// ```
    /// use sessionizer::Error;
    /// use std::io;
    /// use std::path::Path;
    ///
    /// let err = Error::from_io(Path::new("/missing"), io::ErrorKind::NotFound.into());
    /// assert!(err.is_not_found());
    /// ```
    #[must_use]
    pub fn from_io(path: &Path, err: io::Error) -> Self {
        match err.kind() {
            ErrorKind::NotFound => Self::PathNotFound {
                path: path.to_path_buf(),
            },
            ErrorKind::PermissionDenied => Self::PermissionDenied {
                path: path.to_path_buf(),
            },
            _ => Self::Traversal {
                path: path.to_path_buf(),
                source: err,
            },
        }
    }

    /// Check if error indicates a path does not exist.
    ///
    /// # Examples
    ///
    /// ```
    /// use sessionizer::Error;
    /// use std::path::PathBuf;
    ///
    /// let err = Error::PathNotFound { path: PathBuf::from("/nonexistent") };
    /// assert!(err.is_not_found());
    /// ```
    #[must_use]
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::PathNotFound { .. })
    }

    /// Check if error is permission-related.
    #[must_use]
    pub fn is_permission_denied(&self) -> bool {
        matches!(self, Self::PermissionDenied { .. })
    }
}

/// A discovery failure attributed to one configured root.
#[derive(Debug)]
pub struct RootError {
    /// The root path as configured (before normalization).
    pub root: String,
    /// Why the root failed.
    pub source: Error,
}

impl fmt::Display for RootError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.root, self.source)
    }
}

impl std::error::Error for RootError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        Some(&self.source)
    }
}

/// Every root that failed during one discovery call.
///
/// Produced only after all roots have been attempted. The order of causes is
/// not significant.
#[derive(Debug, Default)]
pub struct AggregateError {
    causes: Vec<RootError>,
}

impl AggregateError {
    /// Create an aggregate from individual root failures.
    #[must_use]
    pub fn new(causes: Vec<RootError>) -> Self {
        Self { causes }
    }

    /// The individual failures.
    #[must_use]
    pub fn causes(&self) -> &[RootError] {
        &self.causes
    }

    /// Number of failed roots.
    #[must_use]
    pub fn len(&self) -> usize {
        self.causes.len()
    }

    /// Whether no root failed.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.causes.is_empty()
    }
}

impl fmt::Display for AggregateError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, cause) in self.causes.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            write!(f, "{cause}")?;
        }
        Ok(())
    }
}

impl std::error::Error for AggregateError {}
