//! Path normalization functions.
//!
//! This module provides the two directions of the home-directory transform:
//! - Expanding a leading tilde (`~`) to the home directory
//! - Collapsing a home-directory prefix back to `~` for display
//!
//! The home directory is always passed in explicitly so that a single lookup
//! can be shared by every worker of a discovery call.

use std::env;
use std::path::{Path, PathBuf, MAIN_SEPARATOR};

use crate::error::{Error, Result};

/// The home-directory shorthand marker.
pub const HOME_MARKER: char = '~';

/// Expand a leading tilde (`~`) to the given home directory.
///
/// This function handles `~` and `~/path` but does not support `~user` syntax.
///
/// # Errors
///
/// Returns an error if:
/// - The path starts with `~` and no home directory is known
/// - The path uses `~user` syntax (not supported)
///
/// # Examples
///
/// ```
/// use sessionizer::path::normalize::expand_tilde;
/// use std::path::{Path, PathBuf};
///
/// let home = Path::new("/home/me");
///
/// assert_eq!(expand_tilde("~", Some(home)).unwrap(), PathBuf::from("/home/me"));
/// assert_eq!(
///     expand_tilde("~/code", Some(home)).unwrap(),
///     PathBuf::from("/home/me/code")
/// );
///
/// // Paths without a tilde are left alone
/// assert_eq!(expand_tilde("/srv", None).unwrap(), PathBuf::from("/srv"));
/// ```
pub fn expand_tilde(raw: &str, home: Option<&Path>) -> Result<PathBuf> {
    let Some(rest) = raw.strip_prefix(HOME_MARKER) else {
        return Ok(PathBuf::from(raw));
    };

    let home = home.ok_or_else(|| Error::HomeDirectoryNotFound {
        path: PathBuf::from(raw),
    })?;

    if rest.is_empty() {
        Ok(home.to_path_buf())
    } else if let Some(tail) = rest.strip_prefix('/').or_else(|| rest.strip_prefix('\\')) {
        Ok(home.join(tail))
    } else {
        Err(Error::InvalidPath {
            path: PathBuf::from(raw),
            reason: "~user syntax is not supported; use ~ or ~/path".to_string(),
        })
    }
}

/// Collapse the home-directory prefix of `path` back to `~`.
///
/// The prefix only matches on a component boundary, so `/home/me2` is not
/// rewritten when the home directory is `/home/me`. Paths outside the home
/// directory are returned unchanged. This is the inverse of [`expand_tilde`]
/// for every path it rewrites.
///
/// # Examples
///
/// ```
/// use sessionizer::path::normalize::unexpand;
/// use std::path::Path;
///
/// let home = Path::new("/home/me");
///
/// assert_eq!(unexpand(Path::new("/home/me"), home), "~");
/// assert_eq!(unexpand(Path::new("/home/me/code/api"), home), "~/code/api");
/// assert_eq!(unexpand(Path::new("/home/me2/code"), home), "/home/me2/code");
/// assert_eq!(unexpand(Path::new("/srv/www"), home), "/srv/www");
/// ```
#[must_use]
pub fn unexpand(path: &Path, home: &Path) -> String {
    if !home.is_absolute() {
        return path.display().to_string();
    }

    match path.strip_prefix(home) {
        Ok(rest) if rest.as_os_str().is_empty() => HOME_MARKER.to_string(),
        Ok(rest) => format!("{HOME_MARKER}{MAIN_SEPARATOR}{}", rest.display()),
        Err(_) => path.display().to_string(),
    }
}

/// Convert a relative path to an absolute one using the current directory.
///
/// # Errors
///
/// Returns an error if the current directory cannot be determined.
pub fn absolutize(path: PathBuf) -> Result<PathBuf> {
    if path.is_absolute() {
        return Ok(path);
    }

    let cwd = env::current_dir().map_err(|e| Error::InvalidPath {
        path: path.clone(),
        reason: format!("Cannot get current directory: {e}"),
    })?;
    Ok(cwd.join(path))
}

/// Strip trailing separators (and interior `.` components) from a path.
///
/// The filesystem root is kept as `/`.
///
/// # Examples
///
/// ```
/// use sessionizer::path::normalize::trim_trailing_separators;
/// use std::path::{Path, PathBuf};
///
/// assert_eq!(trim_trailing_separators(Path::new("/tmp/A/")), PathBuf::from("/tmp/A"));
/// assert_eq!(trim_trailing_separators(Path::new("/")), PathBuf::from("/"));
/// ```
#[must_use]
pub fn trim_trailing_separators(path: &Path) -> PathBuf {
    path.components().collect()
}

/// Normalize a raw path string to absolute form.
///
/// 1. Expands a leading tilde against `home`
/// 2. Converts relative paths to absolute (using the current directory)
///
/// # Errors
///
/// Returns an error if the path is empty, tilde expansion fails, or the
/// current directory cannot be determined.
///
/// # Examples
///
/// ```
/// use sessionizer::path::normalize::normalize;
/// use std::path::{Path, PathBuf};
///
/// let normalized = normalize("~/code", Some(Path::new("/home/me"))).unwrap();
/// assert_eq!(normalized, PathBuf::from("/home/me/code"));
/// ```
pub fn normalize(raw: &str, home: Option<&Path>) -> Result<PathBuf> {
    if raw.is_empty() {
        return Err(Error::InvalidPath {
            path: PathBuf::new(),
            reason: "Path is empty".to_string(),
        });
    }

    let expanded = expand_tilde(raw, home)?;
    absolutize(expanded)
}
