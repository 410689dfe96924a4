//! Small text helpers shared by the section generators.

use crate::options::DelimiterStyle;
use regex::Regex;
use std::sync::LazyLock;

static BLANK_RUN_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\n{3,}").expect("Invalid blank run regex"));

/// Trim `text` and collapse runs of blank lines to a single blank line.
pub fn tidy(text: &str) -> String {
    BLANK_RUN_REGEX
        .replace_all(text.trim(), "\n\n")
        .into_owned()
}

/// Wrap `body` in delimiters under a label, e.g. "Task ```\nbody\n```".
///
/// The body is passed through as-is: delimiter sequences inside it are not
/// escaped.
pub fn fence(label: &str, tag: &str, style: DelimiterStyle, body: &str) -> String {
    let (open, close) = style.markers(tag);
    format!("{} {}\n{}\n{}", label, open, body, close)
}
