//! Common test utilities for integration tests.
//!
//! This module provides a directory-tree fixture builder and helpers for
//! comparing discovered targets.

use std::collections::BTreeSet;
use std::fs;
use std::path::{Path, PathBuf};

use sessionizer::{PathResolver, Root};
use tempfile::TempDir;

/// A temporary directory tree for discovery tests.
///
/// # Examples
///
/// ```no_run
/// # use common::Tree;
/// let tree = Tree::new().dir("a/b").dir("c");
/// assert!(tree.path("a/b").is_dir());
/// ```
pub struct Tree {
    temp_dir: TempDir,
}

#[allow(dead_code)]
impl Tree {
    /// Creates an empty tree.
    pub fn new() -> Self {
        Self {
            temp_dir: tempfile::tempdir().expect("Failed to create temp dir"),
        }
    }

    /// Creates a directory (and its parents) under the tree.
    pub fn dir(self, rel: &str) -> Self {
        fs::create_dir_all(self.path(rel)).expect("Failed to create directory");
        self
    }

    /// Creates a file under the tree.
    pub fn file(self, rel: &str) -> Self {
        let path = self.path(rel);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).expect("Failed to create parent directory");
        }
        fs::write(path, "").expect("Failed to write file");
        self
    }

    /// Creates a symlink at `link` pointing to the absolute `target`.
    #[cfg(unix)]
    pub fn symlink(self, target: &Path, link: &str) -> Self {
        std::os::unix::fs::symlink(target, self.path(link)).expect("Failed to create symlink");
        self
    }

    /// The tree's root directory.
    pub fn root(&self) -> &Path {
        self.temp_dir.path()
    }

    /// An absolute path under the tree.
    pub fn path(&self, rel: &str) -> PathBuf {
        if rel.is_empty() {
            self.root().to_path_buf()
        } else {
            self.root().join(rel)
        }
    }

    /// The display string discovery produces for `rel` when home is elsewhere.
    pub fn display(&self, rel: &str) -> String {
        self.path(rel).display().to_string()
    }

    /// A discovery root for `rel`.
    pub fn root_at(&self, rel: &str, depth: u8) -> Root {
        Root::new(self.display(rel), depth)
    }
}

/// A resolver whose home directory no test path lives under.
#[allow(dead_code)]
pub fn resolver() -> PathResolver {
    PathResolver::with_home("/nonexistent-home-for-tests")
}

/// Collect targets into a set for order-independent comparison.
#[allow(dead_code)]
pub fn set<I, S>(items: I) -> BTreeSet<String>
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    items.into_iter().map(Into::into).collect()
}
