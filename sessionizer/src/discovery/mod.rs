//! Target discovery.
//!
//! A target is a directory the user may open as a session. Targets are found
//! by walking each configured [`Root`] down to its depth limit, then merged
//! across roots so that every physical directory appears once.
//!
//! # Examples
//!
//! ```no_run
//! use sessionizer::{validate_single_target, PathResolver};
//!
//! let resolver = PathResolver::new();
//! let target = validate_single_target(&resolver, "~/code/project").unwrap();
//! println!("{target}");
//! ```

mod aggregator;
mod identity;
mod root;
mod walker;

pub use aggregator::TargetAggregator;
pub use identity::{DirIdentity, VisitedSet};
pub use root::Root;
pub use walker::{DepthBoundedWalker, WalkedDir};

use crate::error::{Error, Result};
use crate::path::{NormalizedPath, PathResolver};

/// Normalize a target given directly by the user and check that it is a
/// directory.
///
/// # Errors
///
/// Returns [`Error::NotADirectory`] if the path exists but is not a
/// directory, or the normalization or stat error otherwise.
pub fn validate_single_target(resolver: &PathResolver, raw: &str) -> Result<NormalizedPath> {
    let normalized = resolver.normalize(raw)?;
    if !PathResolver::classify_directory(normalized.as_path())? {
        return Err(Error::NotADirectory {
            path: normalized.into_path_buf(),
        });
    }
    Ok(normalized)
}
