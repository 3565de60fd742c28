//! Discovery roots.

use std::fmt;

/// One configured search location plus its traversal depth limit.
///
/// `max_depth` 0 means only the root itself, 1 adds its immediate children,
/// and so on.
///
/// # Examples
///
/// ```
/// use sessionizer::Root;
///
/// let root = Root::new("~/code", 2);
/// assert_eq!(root.path(), "~/code");
/// assert_eq!(root.max_depth(), 2);
/// assert_eq!(root.to_string(), "~/code (depth 2)");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Root {
    path: String,
    max_depth: u8,
}

impl Root {
    /// Create a root from a raw (possibly `~`-prefixed) path.
    #[must_use]
    pub fn new(path: impl Into<String>, max_depth: u8) -> Self {
        Self {
            path: path.into(),
            max_depth,
        }
    }

    /// The path as configured.
    #[must_use]
    pub fn path(&self) -> &str {
        &self.path
    }

    /// The maximum traversal depth.
    #[must_use]
    pub const fn max_depth(&self) -> u8 {
        self.max_depth
    }
}

impl fmt::Display for Root {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} (depth {})", self.path, self.max_depth)
    }
}
