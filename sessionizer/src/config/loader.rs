//! Configuration file loading.
//!
//! This module reads a configuration file, picks the parser from its
//! extension and validates the result.

use std::fs;
use std::path::Path;

use crate::config::schema::Config;
use crate::config::validator::ConfigValidator;
use crate::error::{Error, Result};
use crate::path::PathResolver;

/// Where the configuration is read from when none is given.
pub const DEFAULT_CONFIG_PATH: &str = "~/.config/ts/config.json";

/// Serialization format of a configuration file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigFormat {
    /// JSON, the default.
    Json,
    /// YAML, for `.yaml` and `.yml` files.
    Yaml,
}

impl ConfigFormat {
    /// Pick the format from a file's extension.
    ///
    /// # Examples
    ///
    /// ```
    /// use sessionizer::config::ConfigFormat;
    /// use std::path::Path;
    ///
    /// assert_eq!(ConfigFormat::from_path(Path::new("ts.yml")), ConfigFormat::Yaml);
    /// assert_eq!(ConfigFormat::from_path(Path::new("config")), ConfigFormat::Json);
    /// ```
    #[must_use]
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("yaml") || ext.eq_ignore_ascii_case("yml") => {
                Self::Yaml
            }
            _ => Self::Json,
        }
    }
}

/// Loads configuration files.
///
/// # Examples
///
/// ```no_run
/// use sessionizer::config::ConfigLoader;
/// use std::path::Path;
///
/// let config = ConfigLoader::load_file(Path::new("/etc/ts/config.yaml")).unwrap();
/// println!("{} target(s) configured", config.targets.len());
/// ```
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load the configuration at a raw, possibly `~`-prefixed, path.
    ///
    /// # Errors
    ///
    /// Returns an error if the path cannot be normalized, or if the file
    /// cannot be read, parsed or validated.
    pub fn load(raw: &str, resolver: &PathResolver) -> Result<Config> {
        let path = resolver.normalize(raw)?;
        Self::load_file(path.as_path())
    }

    /// Load, parse and validate a configuration file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read, parsed or validated.
    pub fn load_file(path: &Path) -> Result<Config> {
        let contents = fs::read_to_string(path).map_err(|e| Error::from_io(path, e))?;
        let config = Self::parse(&contents, ConfigFormat::from_path(path)).map_err(|message| {
            Error::Configuration {
                path: path.to_path_buf(),
                message,
            }
        })?;

        ConfigValidator::validate(&config)?;
        log::debug!(
            "loaded {} target(s) from {}",
            config.targets.len(),
            path.display()
        );
        Ok(config)
    }

    /// Parse configuration text in the given format.
    ///
    /// # Errors
    ///
    /// Returns the parser's message if the text is malformed.
    pub fn parse(contents: &str, format: ConfigFormat) -> std::result::Result<Config, String> {
        match format {
            ConfigFormat::Json => serde_json::from_str(contents).map_err(|e| e.to_string()),
            ConfigFormat::Yaml => serde_yaml::from_str(contents).map_err(|e| e.to_string()),
        }
    }
}
