//! Interactive target selection.
//!
//! The selector is a seam: discovery hands it the targets and gets back the
//! one the user picked, if any. [`FzfSelector`] drives the `fzf` binary;
//! tests substitute their own implementation.

mod fzf;
pub mod options;

pub use fzf::FzfSelector;
pub use options::{default_options, merge_options, with_query};

use crate::error::Result;

/// Presents a list of items and returns the user's choice.
///
/// # Examples
///
/// ```
/// use sessionizer::{Result, Selector};
///
/// struct First;
///
/// impl Selector for First {
///     fn select(&self, items: &[String], _options: &[String]) -> Result<Option<String>> {
///         Ok(items.first().cloned())
///     }
/// }
///
/// let items = vec!["~/b".to_string(), "~/a".to_string()];
/// assert_eq!(First.select(&items, &[]).unwrap(), Some("~/b".to_string()));
/// ```
pub trait Selector: Send + Sync {
    /// Show `items` and wait for a choice.
    ///
    /// `options` are the user's extra selector options; implementations merge
    /// them over their own defaults. Returns `Ok(None)` when the user made no
    /// selection.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::Selector`] if the selector itself fails.
    fn select(&self, items: &[String], options: &[String]) -> Result<Option<String>>;
}
