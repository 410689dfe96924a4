//! Named starting points for common prompt shapes.

use super::model::PromptOptions;
use super::types::{Eagerness, ReasoningEffort, Verbosity};
use std::fmt;
use std::str::FromStr;

/// Placeholder tool rules filled in by the `agentic-high` preset.
const TOOL_RULES_PLACEHOLDER: &str =
    "List each tool, when to use it, and when not to. Prefer the most specific tool.";

/// A preset options record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Preset {
    General,
    AgenticLow,
    AgenticHigh,
    Coding,
    Metaprompt,
}

impl Preset {
    /// Every preset, in display order.
    pub const ALL: [Preset; 5] = [
        Preset::General,
        Preset::AgenticLow,
        Preset::AgenticHigh,
        Preset::Coding,
        Preset::Metaprompt,
    ];

    /// Parse a preset from its command-line name.
    pub fn from_name(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().replace('_', "-").as_str() {
            "general" => Some(Self::General),
            "agentic-low" => Some(Self::AgenticLow),
            "agentic-high" => Some(Self::AgenticHigh),
            "coding" => Some(Self::Coding),
            "metaprompt" => Some(Self::Metaprompt),
            _ => None,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::General => "general",
            Self::AgenticLow => "agentic-low",
            Self::AgenticHigh => "agentic-high",
            Self::Coding => "coding",
            Self::Metaprompt => "metaprompt",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            Self::General => "General task with Markdown guidance and medium verbosity",
            Self::AgenticLow => "Low-eagerness agent: minimal reasoning, tool preamble, persistence",
            Self::AgenticHigh => "High-eagerness agent: progress updates and tool rules",
            Self::Coding => "Coding assistant with planning and apply_patch edits",
            Self::Metaprompt => "Metaprompt that asks the model to improve an existing prompt",
        }
    }

    /// A fresh record configured for this preset.
    pub fn options(&self) -> PromptOptions {
        let mut o = PromptOptions::default();
        match self {
            Self::General => {
                o.markdown_guidance = true;
                o.verbosity = Verbosity::Medium;
            }
            Self::AgenticLow => {
                o.persistence = true;
                o.tool_preamble = true;
                o.eagerness = Eagerness::Low;
                o.reasoning_effort = ReasoningEffort::Minimal;
                o.markdown_guidance = true;
                o.verbosity = Verbosity::Low;
            }
            Self::AgenticHigh => {
                o.persistence = true;
                o.tool_preamble = true;
                o.progress_narration = true;
                o.tool_disambiguation = TOOL_RULES_PLACEHOLDER.to_string();
                o.eagerness = Eagerness::High;
                o.reasoning_effort = ReasoningEffort::Medium;
                o.markdown_guidance = true;
                o.verbosity = Verbosity::Medium;
            }
            Self::Coding => {
                o.role = "Coding assistant".to_string();
                o.coding_mode = true;
                o.planning_snippet = true;
                o.apply_patch_instructions = true;
                o.tool_definitions = true;
                o.markdown_guidance = true;
                o.verbosity = Verbosity::Medium;
                o.reasoning_effort = ReasoningEffort::Medium;
                o.persistence = true;
            }
            Self::Metaprompt => {
                o.meta_mode = true;
                o.verbosity = Verbosity::Low;
                o.eagerness = Eagerness::Low;
            }
        }
        o
    }
}

impl fmt::Display for Preset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Preset {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_name(s).ok_or_else(|| {
            let names: Vec<&str> = Self::ALL.iter().map(Preset::name).collect();
            format!("unknown preset '{}' (expected one of: {})", s, names.join(", "))
        })
    }
}
