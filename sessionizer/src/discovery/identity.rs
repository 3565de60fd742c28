//! Physical directory identity.
//!
//! Two logical paths name the same directory when they resolve to the same
//! device and inode. On platforms without cheap access to those numbers the
//! canonical path is used instead, which cannot merge hard-linked duplicates.

use std::collections::HashSet;
use std::fs::Metadata;
use std::path::Path;
#[cfg(not(unix))]
use std::path::PathBuf;

use crate::error::Result;
#[cfg(not(unix))]
use crate::error::Error;

/// A traversal-stable identifier for a directory.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct DirIdentity {
    #[cfg(unix)]
    dev: u64,
    #[cfg(unix)]
    ino: u64,
    #[cfg(not(unix))]
    canonical: PathBuf,
}

impl DirIdentity {
    /// Identify the directory at `path` from its followed metadata.
    ///
    /// # Errors
    ///
    /// On Unix this never fails. Elsewhere it fails if the path cannot be
    /// canonicalized.
    #[cfg(unix)]
    #[allow(clippy::unnecessary_wraps)]
    pub fn of(_path: &Path, metadata: &Metadata) -> Result<Self> {
        use std::os::unix::fs::MetadataExt;

        Ok(Self {
            dev: metadata.dev(),
            ino: metadata.ino(),
        })
    }

    /// Identify the directory at `path` from its canonical location.
    ///
    /// # Errors
    ///
    /// Returns an error if the path cannot be canonicalized.
    #[cfg(not(unix))]
    pub fn of(path: &Path, _metadata: &Metadata) -> Result<Self> {
        let canonical = std::fs::canonicalize(path).map_err(|e| Error::from_io(path, e))?;
        Ok(Self { canonical })
    }
}

/// Directories already visited during one walk.
///
/// # Examples
///
/// ```no_run
/// use std::fs;
/// use std::path::Path;
/// use sessionizer::{DirIdentity, VisitedSet};
///
/// let mut visited = VisitedSet::new();
/// let dir = Path::new("/tmp");
/// let identity = DirIdentity::of(dir, &fs::metadata(dir).unwrap()).unwrap();
///
/// assert!(visited.insert(identity.clone()));
/// assert!(!visited.insert(identity));
/// ```
#[derive(Debug, Default)]
pub struct VisitedSet {
    seen: HashSet<DirIdentity>,
}

impl VisitedSet {
    /// Create an empty set.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a directory. Returns `false` if it was already visited.
    pub fn insert(&mut self, identity: DirIdentity) -> bool {
        self.seen.insert(identity)
    }

    /// Number of distinct directories visited.
    #[must_use]
    pub fn len(&self) -> usize {
        self.seen.len()
    }

    /// Whether nothing has been visited yet.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.seen.is_empty()
    }
}
