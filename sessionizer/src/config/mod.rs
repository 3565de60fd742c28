//! Configuration for sessionizer.
//!
//! The configuration file lists the discovery roots and any extra options
//! for the selector:
//!
//! ```json
//! {
//!   "targets": [
//!     { "path": "~/code", "depth": 1 },
//!     { "path": "~/.config" }
//!   ],
//!   "selector": ["--height=40%"]
//! }
//! ```
//!
//! Files ending in `.yaml` or `.yml` are read as YAML, everything else as
//! JSON. The default location is [`DEFAULT_CONFIG_PATH`].
//!
//! # Examples
//!
//! ```no_run
//! use sessionizer::{ConfigLoader, PathResolver};
//!
//! let resolver = PathResolver::new();
//! let config = ConfigLoader::load("~/.config/ts/config.json", &resolver).unwrap();
//!
//! for root in config.roots() {
//!     println!("{root}");
//! }
//! ```

pub mod loader;
pub mod schema;
pub mod validator;

pub use loader::{ConfigFormat, ConfigLoader, DEFAULT_CONFIG_PATH};
pub use schema::{Config, TargetConfig};
pub use validator::ConfigValidator;
