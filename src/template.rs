//! Placeholder substitution for rendered prompts.
//!
//! # Syntax
//!
//! - `{NAME}` where `NAME` matches `[A-Za-z0-9_]+` is a placeholder.
//! - A placeholder whose name is a defined variable is replaced by the value.
//! - Any other placeholder is left in the output unchanged, so it stays
//!   visible to whoever reads the prompt.
//!
//! There is no escape syntax. Braces that do not form a placeholder
//! (`{}`, `{a b}`, a lone `}`) are ordinary text.
//!
//! Substitution is a single left-to-right pass over non-overlapping matches.
//! Substituted values are never scanned again, so a value containing
//! `{OTHER}` comes through literally.

use regex::{Captures, Regex};
use std::collections::BTreeMap;
use std::sync::LazyLock;

/// Matches a `{NAME}` placeholder and captures `NAME`.
static PLACEHOLDER_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\{([A-Za-z0-9_]+)\}").expect("Invalid placeholder regex")
});

/// Matches a full variable name.
static NAME_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z0-9_]+$").expect("Invalid variable name regex"));

/// Replace `{NAME}` placeholders with values from `variables`.
///
/// # Examples
///
/// ```
/// use std::collections::BTreeMap;
/// use prompt_designer::template::substitute_variables;
///
/// let mut vars = BTreeMap::new();
/// vars.insert("LANG".to_string(), "Python".to_string());
///
/// let result = substitute_variables("Build an API in {LANG} by {DEADLINE}.", &vars);
/// assert_eq!(result, "Build an API in Python by {DEADLINE}.");
/// ```
pub fn substitute_variables(text: &str, variables: &BTreeMap<String, String>) -> String {
    if variables.is_empty() {
        return text.to_string();
    }

    PLACEHOLDER_REGEX
        .replace_all(text, |caps: &Captures| match variables.get(&caps[1]) {
            Some(value) => value.clone(),
            None => caps[0].to_string(),
        })
        .into_owned()
}

/// Whether `name` can ever be substituted.
///
/// Variables whose names fail this check are kept but are inert.
pub fn is_valid_variable_name(name: &str) -> bool {
    NAME_REGEX.is_match(name)
}

/// Distinct placeholder names in `text`, in order of first appearance.
pub fn placeholder_names(text: &str) -> Vec<String> {
    let mut names: Vec<String> = Vec::new();
    for caps in PLACEHOLDER_REGEX.captures_iter(text) {
        let name = &caps[1];
        if !names.iter().any(|n| n == name) {
            names.push(name.to_string());
        }
    }
    names
}

/// Placeholder names in `text` that have no value in `variables`.
pub fn unresolved_placeholders(text: &str, variables: &BTreeMap<String, String>) -> Vec<String> {
    placeholder_names(text)
        .into_iter()
        .filter(|name| !variables.contains_key(name))
        .collect()
}

/// Helper to create a variables map from a list of key-value pairs.
pub fn vars<I, K, V>(pairs: I) -> BTreeMap<String, String>
where
    I: IntoIterator<Item = (K, V)>,
    K: Into<String>,
    V: Into<String>,
{
    pairs
        .into_iter()
        .map(|(k, v)| (k.into(), v.into()))
        .collect()
}
