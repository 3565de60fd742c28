//! Path handling for discovery targets.
//!
//! # Key Concepts
//!
//! ## Normalization
//!
//! Normalization converts a configured path string to an absolute path by:
//! - Expanding a leading tilde (`~`) to the home directory
//! - Converting relative paths to absolute paths
//!
//! ## Display form
//!
//! Discovered paths are shown with the home-directory prefix collapsed back
//! to `~`. Normalizing a display path gives back exactly the path it was
//! produced from.
//!
//! # Examples
//!
//! ```
//! use sessionizer::path::PathResolver;
//!
//! let resolver = PathResolver::with_home("/home/me");
//! let normalized = resolver.normalize("~/code/api").unwrap();
//! let display = resolver.unexpand(normalized.as_path());
//!
//! assert_eq!(display, "~/code/api");
//! assert_eq!(resolver.normalize(&display).unwrap(), normalized);
//! ```

pub mod normalize;
pub mod resolver;
mod types;

#[cfg(all(test, feature = "property-tests"))]
mod proptests;

// Re-export key types
pub use resolver::PathResolver;
pub use types::{DisplayPath, NormalizedPath};
