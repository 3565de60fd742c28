//! Configuration validation.

use crate::config::schema::{Config, TargetConfig};
use crate::error::{Error, Result};

/// Validates a parsed configuration.
///
/// Duplicate targets are allowed; discovery merges their results.
///
/// # Examples
///
/// ```
/// use sessionizer::{Config, ConfigValidator, TargetConfig};
///
/// let config = Config {
///     targets: vec![TargetConfig::new("~/code", 1)],
///     selector: Vec::new(),
/// };
/// ConfigValidator::validate(&config).unwrap();
/// ```
pub struct ConfigValidator;

impl ConfigValidator {
    /// Validate a complete configuration.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Validation`] naming the first offending field.
    pub fn validate(config: &Config) -> Result<()> {
        for (i, target) in config.targets.iter().enumerate() {
            Self::validate_target(i, target)?;
        }

        for (i, option) in config.selector.iter().enumerate() {
            if option.trim().is_empty() {
                return Err(Error::Validation {
                    field: format!("selector[{i}]"),
                    message: "Cannot be empty or only whitespace".into(),
                });
            }
        }

        Ok(())
    }

    fn validate_target(index: usize, target: &TargetConfig) -> Result<()> {
        let field = format!("targets[{index}].path");

        if target.path.trim().is_empty() {
            return Err(Error::Validation {
                field,
                message: "Cannot be empty or only whitespace".into(),
            });
        }

        if target.path.contains('\0') {
            return Err(Error::Validation {
                field,
                message: "Cannot contain null bytes".into(),
            });
        }

        Ok(())
    }
}
