//! The sessionizer run loop.

use std::io::Write;

use crate::config::Config;
use crate::discovery::{validate_single_target, TargetAggregator};
use crate::error::Result;
use crate::output::{filter_targets, format_list};
use crate::path::PathResolver;
use crate::selector::{with_query, Selector};
use crate::session::{open_session, SessionManager};

/// Options for one run, taken from the command line.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RunOptions {
    /// Print the targets instead of opening the selector.
    pub list: bool,

    /// Narrow the targets down. In list mode targets not containing the
    /// filter are dropped; otherwise it pre-fills the selector's query.
    pub filter: Option<String>,
}

impl RunOptions {
    /// Interactive run with no filter.
    ///
    /// # Examples
    ///
    /// ```
    /// use sessionizer::RunOptions;
    ///
    /// let options = RunOptions::new().with_filter(Some("api".to_string()));
    /// assert!(!options.list);
    /// assert_eq!(options.filter.as_deref(), Some("api"));
    /// ```
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets list mode.
    #[must_use]
    pub const fn with_list(mut self, list: bool) -> Self {
        self.list = list;
        self
    }

    /// Sets the filter. An empty filter counts as none.
    #[must_use]
    pub fn with_filter(mut self, filter: Option<String>) -> Self {
        self.filter = filter.filter(|f| !f.is_empty());
        self
    }
}

/// Ties discovery, selection and session handling together.
#[derive(Debug)]
pub struct Sessionizer<S, M> {
    aggregator: TargetAggregator,
    selector: S,
    sessions: M,
}

impl<S: Selector, M: SessionManager> Sessionizer<S, M> {
    /// Create a sessionizer from its collaborators.
    #[must_use]
    pub fn new(resolver: PathResolver, selector: S, sessions: M) -> Self {
        Self {
            aggregator: TargetAggregator::new(resolver),
            selector,
            sessions,
        }
    }

    /// The resolver used for every path.
    #[must_use]
    pub fn resolver(&self) -> &PathResolver {
        self.aggregator.resolver()
    }

    /// Discover targets and either list them to `out` or open the one the
    /// user selects.
    ///
    /// An empty selection is not an error; nothing is opened.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::Discovery`] if any root fails, or the
    /// selector, session or write error otherwise.
    pub fn run<W: Write>(&self, config: &Config, options: &RunOptions, out: &mut W) -> Result<()> {
        let targets = self.aggregator.collect(&config.roots())?;

        if options.list {
            let targets = match options.filter.as_deref() {
                Some(filter) => filter_targets(targets, filter),
                None => targets,
            };
            out.write_all(format_list(&targets).as_bytes())?;
            out.flush()?;
            return Ok(());
        }

        // The selector does the filtering so no target is hidden from it.
        let selector_options = match options.filter.as_deref() {
            Some(filter) => with_query(config.selector.clone(), filter),
            None => config.selector.clone(),
        };

        match self.selector.select(&targets, &selector_options)? {
            Some(choice) => open_session(&self.sessions, self.resolver(), &choice),
            None => {
                log::debug!("no target selected");
                Ok(())
            }
        }
    }

    /// Open a session for a target given directly, skipping discovery.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::NotADirectory`] if the target exists but is
    /// not a directory, the normalization or stat error if it cannot be
    /// resolved, or the session error.
    pub fn run_single(&self, target: &str) -> Result<()> {
        let dir = validate_single_target(self.resolver(), target)?;
        open_session(&self.sessions, self.resolver(), &dir.to_string())
    }
}
