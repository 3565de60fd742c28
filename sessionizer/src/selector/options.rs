//! Selector option handling.
//!
//! Options are `--key` or `--key=value` strings. User options are merged
//! over the defaults by key, where the key is everything before the first
//! `=`.

/// The options every selection starts from.
///
/// # Examples
///
/// ```
/// use sessionizer::selector::default_options;
///
/// assert_eq!(default_options()[0], "--border");
/// ```
#[must_use]
pub fn default_options() -> Vec<String> {
    vec![
        "--border".to_string(),
        "--border-label= Tmux Sessionizer ".to_string(),
    ]
}

fn split_option(option: &str) -> (&str, Option<&str>) {
    match option.split_once('=') {
        Some((key, value)) => (key, Some(value)),
        None => (option, None),
    }
}

/// Merge user options over [`default_options`].
///
/// A user option replaces the default with the same key in place; options
/// with new keys are appended in the order given. When a key repeats, the
/// last value wins. An explicit empty value (`--key=`) is kept as written.
///
/// # Examples
///
/// ```
/// use sessionizer::selector::merge_options;
///
/// let merged = merge_options(&["--border-label=Projects".into(), "--reverse".into()]);
/// assert_eq!(merged, vec!["--border", "--border-label=Projects", "--reverse"]);
/// ```
#[must_use]
pub fn merge_options(user: &[String]) -> Vec<String> {
    let defaults = default_options();
    let mut merged: Vec<(&str, Option<&str>)> = Vec::with_capacity(defaults.len() + user.len());

    for option in defaults.iter().chain(user) {
        let (key, value) = split_option(option);
        match merged.iter_mut().find(|(existing, _)| *existing == key) {
            Some(slot) => slot.1 = value,
            None => merged.push((key, value)),
        }
    }

    merged
        .into_iter()
        .map(|(key, value)| match value {
            Some(value) => format!("{key}={value}"),
            None => key.to_string(),
        })
        .collect()
}

/// Append a `--query` option that pre-fills the selector's input.
///
/// # Examples
///
/// ```
/// use sessionizer::selector::with_query;
///
/// let options = with_query(vec!["--reverse".into()], "api");
/// assert_eq!(options, vec!["--reverse", "--query=api"]);
/// ```
#[must_use]
pub fn with_query(mut options: Vec<String>, query: &str) -> Vec<String> {
    options.push(format!("--query={query}"));
    options
}
