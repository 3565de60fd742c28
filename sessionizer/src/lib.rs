#![deny(missing_docs, unsafe_code)]
#![warn(clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

//! # sessionizer
//!
//! A library for discovering project directories and opening them as tmux
//! sessions.
//!
//! The library discovers navigable directory "targets" under a set of
//! configured roots, deduplicates and orders them, hands them to an
//! interactive selector, and attaches to (or creates) a tmux session for the
//! chosen directory.
//!
//! ## Core Types
//!
//! - [`PathResolver`]: Home-directory expansion and directory classification
//! - [`DepthBoundedWalker`]: Depth-bounded, symlink-safe walk of one root
//! - [`TargetAggregator`]: Concurrent discovery across all configured roots
//! - [`Config`] and [`ConfigLoader`]: Configuration file handling
//! - [`Selector`] and [`SessionManager`]: Bindings to fzf and tmux
//! - [`Error`] and [`Result`]: Error handling types
//! - [`Logger`] and [`LogLevel`]: Logging infrastructure
//!
//! ## Examples
//!
//! ```no_run
//! use sessionizer::{PathResolver, Root, TargetAggregator};
//!
//! let aggregator = TargetAggregator::new(PathResolver::new());
//! let targets = aggregator
//!     .collect(&[Root::new("~/code", 1), Root::new("~/.config", 0)])
//!     .unwrap();
//!
//! for target in targets {
//!     println!("{target}");
//! }
//! ```

pub mod config;
pub mod discovery;
pub mod error;
pub mod logging;
pub mod operations;
pub mod output;
pub mod path;
pub mod selector;
pub mod session;

// Re-export key types at crate root for convenience
pub use config::{Config, ConfigLoader, ConfigValidator, TargetConfig};
pub use discovery::{
    validate_single_target, DepthBoundedWalker, DirIdentity, Root, TargetAggregator, VisitedSet,
};
pub use error::{AggregateError, Error, Result, RootError};
pub use logging::{init_logger, LogLevel, Logger};
pub use operations::{RunOptions, Sessionizer};
pub use path::{DisplayPath, NormalizedPath, PathResolver};
pub use selector::{FzfSelector, Selector};
pub use session::{session_name, SessionManager, TmuxSessionManager};
