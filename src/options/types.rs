//! Enumerations and defaults for the options record.
//!
//! Every enum serializes as a lowercase string and deserializes through
//! `from_label`, which also understands the display labels written by older
//! settings files ("triple backticks", "Plain text", "Medium", ...). Unknown
//! labels fail to deserialize so the settings loader can fall back to the
//! field's default.

use serde::{Deserialize, Serialize};

/// Role used when neither a role nor a custom role is given.
pub const DEFAULT_ROLE: &str = "General assistant";

/// Role label meaning "use `custom_role` instead".
pub const CUSTOM_ROLE_LABEL: &str = "Custom";

/// Role choices offered to users. Roles are free text; these are suggestions.
pub const ROLE_PRESETS: &[&str] = &[
    "General assistant",
    "Coding assistant",
    "Data analyst",
    "Writing coach",
    CUSTOM_ROLE_LABEL,
];

/// Normalize a label for matching: lowercase, with `-`, `_` and spaces collapsed.
fn normalize_label(s: &str) -> String {
    s.trim()
        .to_lowercase()
        .split(|c: char| c.is_whitespace() || c == '-' || c == '_')
        .filter(|part| !part.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
}

/// Delimiters used to fence free text (task, context, examples).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case", try_from = "String")]
pub enum DelimiterStyle {
    /// Triple backticks.
    #[default]
    Backticks,
    /// Triple double quotes.
    Quotes,
    /// Named XML tags, e.g. `<task>` / `</task>`.
    Xml,
}

impl DelimiterStyle {
    /// Parse a delimiter style from a canonical name or legacy label.
    pub fn from_label(s: &str) -> Option<Self> {
        match normalize_label(s).as_str() {
            "backticks" | "triple backticks" => Some(Self::Backticks),
            "quotes" | "triple quotes" => Some(Self::Quotes),
            "xml" | "xml tags" => Some(Self::Xml),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Backticks => "backticks",
            Self::Quotes => "quotes",
            Self::Xml => "xml",
        }
    }

    /// Opening and closing markers for a block named `tag`.
    ///
    /// The tag name only matters for XML; the other styles use the same
    /// marker on both sides.
    pub fn markers(&self, tag: &str) -> (String, String) {
        match self {
            Self::Backticks => ("```".to_string(), "```".to_string()),
            Self::Quotes => ("\"\"\"".to_string(), "\"\"\"".to_string()),
            Self::Xml => (format!("<{}>", tag), format!("</{}>", tag)),
        }
    }
}

impl TryFrom<String> for DelimiterStyle {
    type Error = String;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::from_label(&value).ok_or_else(|| format!("unknown delimiter style '{}'", value))
    }
}

/// Shape of the final answer requested from the model.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case", try_from = "String")]
pub enum OutputFormat {
    /// No format instructions.
    #[default]
    Plain,
    /// Markdown guidance.
    Markdown,
    /// A single JSON object, optionally constrained by a schema.
    Json,
}

impl OutputFormat {
    /// Parse an output format from a canonical name or legacy label.
    pub fn from_label(s: &str) -> Option<Self> {
        match normalize_label(s).as_str() {
            "plain" | "plain text" => Some(Self::Plain),
            "markdown" => Some(Self::Markdown),
            "json" => Some(Self::Json),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Plain => "plain",
            Self::Markdown => "markdown",
            Self::Json => "json",
        }
    }
}

impl TryFrom<String> for OutputFormat {
    type Error = String;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::from_label(&value).ok_or_else(|| format!("unknown output format '{}'", value))
    }
}

/// How proactively the model should act and call tools.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case", try_from = "String")]
pub enum Eagerness {
    Low,
    #[default]
    Medium,
    High,
}

impl Eagerness {
    /// Parse an eagerness level from a canonical name or legacy label.
    pub fn from_label(s: &str) -> Option<Self> {
        match normalize_label(s).as_str() {
            "low" => Some(Self::Low),
            "medium" => Some(Self::Medium),
            "high" => Some(Self::High),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Low => "low",
            Self::Medium => "medium",
            Self::High => "high",
        }
    }
}

impl TryFrom<String> for Eagerness {
    type Error = String;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::from_label(&value).ok_or_else(|| format!("unknown eagerness '{}'", value))
    }
}

/// Requested reasoning effort. `Default` leaves it to the model.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case", try_from = "String")]
pub enum ReasoningEffort {
    #[default]
    Default,
    Minimal,
    Medium,
    High,
}

impl ReasoningEffort {
    /// Parse a reasoning effort from a canonical name or legacy label.
    pub fn from_label(s: &str) -> Option<Self> {
        match normalize_label(s).as_str() {
            "default" => Some(Self::Default),
            "minimal" => Some(Self::Minimal),
            "medium" => Some(Self::Medium),
            "high" => Some(Self::High),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Default => "default",
            Self::Minimal => "minimal",
            Self::Medium => "medium",
            Self::High => "high",
        }
    }
}

impl TryFrom<String> for ReasoningEffort {
    type Error = String;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::from_label(&value).ok_or_else(|| format!("unknown reasoning effort '{}'", value))
    }
}

/// Requested answer length. `Default` leaves it to the model.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case", try_from = "String")]
pub enum Verbosity {
    #[default]
    Default,
    Low,
    Medium,
    High,
}

impl Verbosity {
    /// Parse a verbosity level from a canonical name or legacy label.
    pub fn from_label(s: &str) -> Option<Self> {
        match normalize_label(s).as_str() {
            "default" => Some(Self::Default),
            "low" => Some(Self::Low),
            "medium" => Some(Self::Medium),
            "high" => Some(Self::High),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Default => "default",
            Self::Low => "low",
            Self::Medium => "medium",
            Self::High => "high",
        }
    }
}

impl TryFrom<String> for Verbosity {
    type Error = String;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::from_label(&value).ok_or_else(|| format!("unknown verbosity '{}'", value))
    }
}
