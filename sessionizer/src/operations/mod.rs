//! End-to-end sessionizer runs.
//!
//! A run discovers targets from the configuration, then either prints them
//! (list mode) or lets the user pick one and opens it as a session. A single
//! target given directly skips discovery altogether.
//!
//! # Examples
//!
//! ```no_run
//! use sessionizer::{
//!     Config, FzfSelector, PathResolver, RunOptions, Sessionizer, TargetConfig,
//!     TmuxSessionManager,
//! };
//!
//! let config = Config {
//!     targets: vec![TargetConfig::new("~/code", 1)],
//!     selector: Vec::new(),
//! };
//!
//! let sessionizer = Sessionizer::new(
//!     PathResolver::new(),
//!     FzfSelector::new(),
//!     TmuxSessionManager::new(),
//! );
//!
//! let options = RunOptions::new().with_list(true);
//! sessionizer.run(&config, &options, &mut std::io::stdout()).unwrap();
//! ```

mod run;

pub use run::{RunOptions, Sessionizer};
