//! Plain-text output of discovered targets.
//!
//! List mode prints one target per line with no trailing newline, so the
//! output can be piped straight into other tools.

use crate::path::DisplayPath;

/// Keep the targets containing `filter`, in order.
///
/// Matching is a case-sensitive substring test. An empty filter keeps
/// everything.
///
/// # Examples
///
/// ```
/// use sessionizer::output::filter_targets;
///
/// let targets = vec!["~/code/api".to_string(), "~/code/web".to_string()];
/// assert_eq!(filter_targets(targets, "api"), vec!["~/code/api"]);
/// ```
#[must_use]
pub fn filter_targets(targets: Vec<DisplayPath>, filter: &str) -> Vec<DisplayPath> {
    if filter.is_empty() {
        return targets;
    }
    targets
        .into_iter()
        .filter(|target| target.contains(filter))
        .collect()
}

/// Join targets one per line, without a trailing newline.
///
/// # Examples
///
/// ```
/// use sessionizer::output::format_list;
///
/// let targets = vec!["~/b".to_string(), "~/a".to_string()];
/// assert_eq!(format_list(&targets), "~/b\n~/a");
/// assert_eq!(format_list(&[]), "");
/// ```
#[must_use]
pub fn format_list(targets: &[DisplayPath]) -> String {
    targets.join("\n")
}
