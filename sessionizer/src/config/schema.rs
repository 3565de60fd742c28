//! Configuration schema definitions.

use serde::{Deserialize, Serialize};

use crate::discovery::Root;

/// Complete configuration file structure.
///
/// # Examples
///
/// ```
/// use sessionizer::{Config, TargetConfig};
///
/// let config = Config {
///     targets: vec![TargetConfig::new("~/code", 1)],
///     selector: vec!["--height=40%".to_string()],
/// };
/// assert_eq!(config.roots().len(), 1);
/// ```
///
/// Unknown keys are ignored so config files written for other versions of
/// the tool keep loading.
#[derive(Debug, Clone, Deserialize, Serialize, Default, PartialEq, Eq)]
pub struct Config {
    /// Roots to discover targets under.
    #[serde(default)]
    pub targets: Vec<TargetConfig>,

    /// Extra selector options, merged over the built-in defaults.
    #[serde(default)]
    pub selector: Vec<String>,
}

impl Config {
    /// The configured targets as discovery roots, in file order.
    #[must_use]
    pub fn roots(&self) -> Vec<Root> {
        self.targets
            .iter()
            .map(|target| Root::new(target.path.clone(), target.depth))
            .collect()
    }
}

/// One configured discovery root.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq, Eq)]
pub struct TargetConfig {
    /// Root path, possibly starting with `~`.
    pub path: String,

    /// How many levels below the root to search. Defaults to 0.
    #[serde(default)]
    pub depth: u8,
}

impl TargetConfig {
    /// Create a target entry.
    #[must_use]
    pub fn new(path: impl Into<String>, depth: u8) -> Self {
        Self {
            path: path.into(),
            depth,
        }
    }
}
