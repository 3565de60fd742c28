//! Depth-bounded directory walking for a single root.
//!
//! Depths 0 and 1 take fast paths that avoid a full recursive walk. All
//! three tiers produce the same set of targets the general walk would.

use std::fs::{self, Metadata};
use std::io;
use std::path::{Path, PathBuf};

use walkdir::WalkDir;

use crate::discovery::identity::{DirIdentity, VisitedSet};
use crate::error::{Error, Result};
use crate::path::normalize::trim_trailing_separators;
use crate::path::{DisplayPath, NormalizedPath, PathResolver};

/// A directory found by a walk, with its physical identity.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WalkedDir {
    /// Physical identity of the directory.
    pub identity: DirIdentity,
    /// The path the walk reached it through, in display form.
    pub display: DisplayPath,
}

/// Walks one root and returns the directories within its depth limit.
///
/// Symlinked directories are followed. Every physical directory is returned
/// at most once per walk, so symlink cycles terminate and two links to the
/// same directory produce a single target.
///
/// # Examples
///
/// ```no_run
/// use sessionizer::{DepthBoundedWalker, PathResolver};
///
/// let resolver = PathResolver::new();
/// let walker = DepthBoundedWalker::new(&resolver);
/// let root = resolver.normalize("~/code").unwrap();
///
/// for target in walker.walk(&root, 1).unwrap() {
///     println!("{target}");
/// }
/// ```
#[derive(Debug, Clone, Copy)]
pub struct DepthBoundedWalker<'a> {
    resolver: &'a PathResolver,
}

impl<'a> DepthBoundedWalker<'a> {
    /// Create a walker that renders targets through `resolver`.
    #[must_use]
    pub fn new(resolver: &'a PathResolver) -> Self {
        Self { resolver }
    }

    /// Walk `root` down to `max_depth` levels.
    ///
    /// A root that exists but is not a directory yields no targets.
    ///
    /// # Errors
    ///
    /// Returns an error if the root cannot be stat'ed, or if any directory
    /// read or entry stat fails during the walk. No partial results are
    /// returned for a failed walk.
    pub fn walk(&self, root: &NormalizedPath, max_depth: u8) -> Result<Vec<DisplayPath>> {
        let walked = self.walk_identified(root, max_depth)?;
        Ok(walked.into_iter().map(|dir| dir.display).collect())
    }

    /// Like [`walk`](Self::walk), keeping the physical identity of each
    /// target so callers can deduplicate across walks.
    ///
    /// # Errors
    ///
    /// Same as [`walk`](Self::walk).
    pub fn walk_identified(&self, root: &NormalizedPath, max_depth: u8) -> Result<Vec<WalkedDir>> {
        let root = trim_trailing_separators(root.as_path());

        let metadata = fs::metadata(&root).map_err(|e| Error::from_io(&root, e))?;
        if !metadata.is_dir() {
            log::debug!("{} is not a directory, skipping", root.display());
            return Ok(Vec::new());
        }

        let walked = match max_depth {
            0 => vec![WalkedDir {
                identity: DirIdentity::of(&root, &metadata)?,
                display: self.resolver.unexpand(&root),
            }],
            1 => self.walk_children(&root, &metadata)?,
            _ => self.walk_tree(&root, &metadata, max_depth)?,
        };

        log::debug!(
            "found {} target(s) under {} at depth {max_depth}",
            walked.len(),
            root.display()
        );
        Ok(walked)
    }

    /// Immediate child directories of `root`, followed by `root` itself.
    fn walk_children(&self, root: &Path, root_metadata: &Metadata) -> Result<Vec<WalkedDir>> {
        let mut visited = VisitedSet::new();
        let root_identity = DirIdentity::of(root, root_metadata)?;
        visited.insert(root_identity.clone());

        let mut children = fs::read_dir(root)
            .and_then(|entries| {
                entries
                    .map(|entry| entry.map(|e| e.path()))
                    .collect::<io::Result<Vec<_>>>()
            })
            .map_err(|e| Error::from_io(root, e))?;
        children.sort();

        let mut walked = Vec::with_capacity(children.len() + 1);
        for child in children {
            let metadata = fs::metadata(&child).map_err(|e| Error::from_io(&child, e))?;
            if !metadata.is_dir() {
                continue;
            }

            let identity = DirIdentity::of(&child, &metadata)?;
            if visited.insert(identity.clone()) {
                walked.push(WalkedDir {
                    identity,
                    display: self.resolver.unexpand(&child),
                });
            }
        }

        walked.push(WalkedDir {
            identity: root_identity,
            display: self.resolver.unexpand(root),
        });
        Ok(walked)
    }

    /// Breadth-first walk down to `max_depth`.
    ///
    /// Directories are visited level by level, in file name order within a
    /// parent, so every physical directory is claimed by its shallowest path.
    /// That order does not depend on `max_depth`, which keeps a deeper limit a
    /// superset of a shallower one.
    fn walk_tree(
        &self,
        root: &Path,
        root_metadata: &Metadata,
        max_depth: u8,
    ) -> Result<Vec<WalkedDir>> {
        let mut visited = VisitedSet::new();
        let root_identity = DirIdentity::of(root, root_metadata)?;
        visited.insert(root_identity.clone());

        let mut walked = vec![WalkedDir {
            identity: root_identity,
            display: self.resolver.unexpand(root),
        }];
        let mut frontier = vec![root.to_path_buf()];

        for _ in 0..max_depth {
            let mut next = Vec::new();
            for dir in &frontier {
                for (path, identity) in child_directories(root, dir)? {
                    if !visited.insert(identity.clone()) {
                        continue;
                    }
                    walked.push(WalkedDir {
                        identity,
                        display: self.resolver.unexpand(&path),
                    });
                    next.push(path);
                }
            }
            if next.is_empty() {
                break;
            }
            frontier = next;
        }

        Ok(walked)
    }
}

/// Child directories of `dir` in file name order, with symlinks followed.
fn child_directories(root: &Path, dir: &Path) -> Result<Vec<(PathBuf, DirIdentity)>> {
    let entries = WalkDir::new(dir)
        .follow_links(true)
        .min_depth(1)
        .max_depth(1)
        .sort_by_file_name();

    let mut children = Vec::new();
    for entry in entries {
        let entry = match entry {
            Ok(entry) => entry,
            Err(err) if err.loop_ancestor().is_some() => {
                log::debug!(
                    "skipping symlink cycle at {}",
                    err.path().unwrap_or(dir).display()
                );
                continue;
            }
            Err(err) => return Err(walk_error(root, err)),
        };

        if !entry.file_type().is_dir() {
            continue;
        }

        let metadata = entry.metadata().map_err(|e| walk_error(root, e))?;
        let identity = DirIdentity::of(entry.path(), &metadata)?;
        children.push((entry.into_path(), identity));
    }
    Ok(children)
}

fn walk_error(root: &Path, err: walkdir::Error) -> Error {
    let path = err.path().map_or_else(|| root.to_path_buf(), Path::to_path_buf);
    let message = err.to_string();
    match err.into_io_error() {
        Some(source) => Error::from_io(&path, source),
        None => Error::Traversal {
            path,
            source: io::Error::new(io::ErrorKind::Other, message),
        },
    }
}
