//! Concurrent discovery across all configured roots.

use std::collections::hash_map::Entry;
use std::collections::HashMap;
use std::sync::{Mutex, PoisonError};

use rayon::prelude::*;

use crate::discovery::identity::DirIdentity;
use crate::discovery::root::Root;
use crate::discovery::walker::{DepthBoundedWalker, WalkedDir};
use crate::error::{AggregateError, Error, Result, RootError};
use crate::path::{DisplayPath, PathResolver};

/// Targets and failures accumulated while roots are being walked.
///
/// Targets are keyed by physical identity. When two roots reach the same
/// directory through different paths, the smaller display string is kept so
/// the outcome does not depend on which walk finished first.
#[derive(Debug, Default)]
struct ResultSet {
    targets: HashMap<DirIdentity, DisplayPath>,
    errors: Vec<RootError>,
}

impl ResultSet {
    fn merge(&mut self, root: &Root, outcome: Result<Vec<WalkedDir>>) {
        match outcome {
            Ok(walked) => {
                for dir in walked {
                    self.add(dir);
                }
            }
            Err(source) => self.errors.push(RootError {
                root: root.path().to_string(),
                source,
            }),
        }
    }

    fn add(&mut self, dir: WalkedDir) {
        match self.targets.entry(dir.identity) {
            Entry::Vacant(slot) => {
                slot.insert(dir.display);
            }
            Entry::Occupied(mut slot) => {
                if dir.display < *slot.get() {
                    slot.insert(dir.display);
                }
            }
        }
    }

    /// Sorted targets, or every failure if any root failed.
    fn finish(self) -> Result<Vec<DisplayPath>> {
        if !self.errors.is_empty() {
            return Err(Error::Discovery(AggregateError::new(self.errors)));
        }

        let mut targets: Vec<DisplayPath> = self.targets.into_values().collect();
        targets.sort_unstable_by(|a, b| b.cmp(a));
        targets.dedup();
        Ok(targets)
    }
}

/// Runs one walk per root on the rayon pool and merges the results.
///
/// Every root is always attempted: a failing root never stops the others.
/// If any root fails the whole call fails with [`Error::Discovery`], carrying
/// one cause per failed root and no targets.
///
/// # Examples
///
/// ```no_run
/// use sessionizer::{PathResolver, Root, TargetAggregator};
///
/// let aggregator = TargetAggregator::new(PathResolver::new());
/// let targets = aggregator
///     .collect(&[Root::new("~/code", 1), Root::new("~/work", 2)])
///     .unwrap();
///
/// // Strictly descending
/// assert!(targets.windows(2).all(|pair| pair[0] > pair[1]));
/// ```
#[derive(Debug, Clone, Default)]
pub struct TargetAggregator {
    resolver: PathResolver,
}

impl TargetAggregator {
    /// Create an aggregator that normalizes roots with `resolver`.
    #[must_use]
    pub fn new(resolver: PathResolver) -> Self {
        Self { resolver }
    }

    /// The resolver shared by every walk.
    #[must_use]
    pub fn resolver(&self) -> &PathResolver {
        &self.resolver
    }

    /// Discover targets under every root.
    ///
    /// Returns the deduplicated targets sorted in descending byte order.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Discovery`] listing every root that failed to
    /// normalize or walk.
    pub fn collect(&self, roots: &[Root]) -> Result<Vec<DisplayPath>> {
        let state = Mutex::new(ResultSet::default());

        roots.par_iter().for_each(|root| {
            let outcome = self.walk_root(root);
            state
                .lock()
                .unwrap_or_else(PoisonError::into_inner)
                .merge(root, outcome);
        });

        let state = state.into_inner().unwrap_or_else(PoisonError::into_inner);
        log::debug!(
            "discovery finished: {} target(s), {} failed root(s) out of {}",
            state.targets.len(),
            state.errors.len(),
            roots.len()
        );
        state.finish()
    }

    fn walk_root(&self, root: &Root) -> Result<Vec<WalkedDir>> {
        let normalized = self.resolver.normalize(root.path())?;
        DepthBoundedWalker::new(&self.resolver).walk_identified(&normalized, root.max_depth())
    }
}
