//! PromptOptions struct definition and default implementation.

use super::types::*;
use serde::Serialize;
use std::collections::BTreeMap;

/// One few-shot exchange: (user message, assistant reply).
pub type FewShotExample = (String, String);

/// Snapshot of every prompt-design option.
///
/// The record is plain data: construct it with `Default`, assign fields
/// directly, and hand it to [`crate::builder::build`]. Two records with
/// equal fields always render to the same text.
///
/// Serialization emits every field under its canonical key. Deserialization
/// is lenient (see `operations.rs`): missing keys, wrong types and unknown
/// enum values all fall back to the field's default.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PromptOptions {
    // =========================================================================
    // Basics
    // =========================================================================
    /// Preset role name (default: "General assistant").
    pub role: String,

    /// Free-text role; takes precedence over `role` when non-empty.
    pub custom_role: String,

    /// What the model should do.
    pub task: String,

    /// Additional background for the task.
    pub context: String,

    /// Who the answer is for.
    pub audience: String,

    /// Constraint lines, rendered as bullets in this order.
    pub constraints: Vec<String>,

    /// Fencing used around task, context and example text.
    pub delimiter_style: DelimiterStyle,

    /// Requested shape of the final answer.
    pub output_format: OutputFormat,

    /// JSON Schema text, included verbatim when `output_format` is JSON.
    pub json_schema: Option<String>,

    // =========================================================================
    // Agentic
    // =========================================================================
    pub eagerness: Eagerness,

    pub reasoning_effort: ReasoningEffort,

    /// Ask for a short goal/plan/next-action preamble before tool calls.
    pub tool_preamble: bool,

    /// Ask the model to keep going until the goal is reached.
    pub persistence: bool,

    /// Ask for progress updates during long tasks.
    pub progress_narration: bool,

    /// Tool rules and capabilities, rendered when non-empty.
    pub tool_disambiguation: String,

    // =========================================================================
    // Coding
    // =========================================================================
    pub coding_mode: bool,

    /// Include a planning instruction.
    pub planning_snippet: bool,

    /// Custom planning instruction; a built-in one is used when empty.
    pub planning_text: String,

    /// Ask for edits as apply_patch unified diffs.
    pub apply_patch_instructions: bool,

    /// Tell the model host-defined code tools are available.
    pub tool_definitions: bool,

    /// Free-form coding notes.
    pub extra_notes: String,

    // =========================================================================
    // Intelligence
    // =========================================================================
    pub verbosity: Verbosity,

    /// Extra verbosity instruction appended after the base directive.
    pub verbosity_override: String,

    pub markdown_guidance: bool,

    /// Ask for 1-3 summary bullets at the start of the answer.
    pub brief_rationale: bool,

    // =========================================================================
    // Metaprompt
    // =========================================================================
    /// Render the metaprompt template instead of the normal sections.
    pub meta_mode: bool,

    pub meta_prompt_to_optimize: String,

    pub meta_desired: String,

    pub meta_undesired: String,

    // =========================================================================
    // Few-shot and variables
    // =========================================================================
    /// Few-shot exchanges, rendered in this order.
    pub examples: Vec<FewShotExample>,

    /// Placeholder values substituted for `{NAME}` tokens.
    pub variables: BTreeMap<String, String>,

    // =========================================================================
    // Appendices
    // =========================================================================
    pub swe_bench_appendix: bool,

    pub retail_guardrails_appendix: bool,
}

impl Default for PromptOptions {
    fn default() -> Self {
        Self {
            role: DEFAULT_ROLE.to_string(),
            custom_role: String::new(),
            task: String::new(),
            context: String::new(),
            audience: String::new(),
            constraints: Vec::new(),
            delimiter_style: DelimiterStyle::default(),
            output_format: OutputFormat::default(),
            json_schema: None,
            eagerness: Eagerness::default(),
            reasoning_effort: ReasoningEffort::default(),
            tool_preamble: false,
            persistence: false,
            progress_narration: false,
            tool_disambiguation: String::new(),
            coding_mode: false,
            planning_snippet: false,
            planning_text: String::new(),
            apply_patch_instructions: false,
            tool_definitions: false,
            extra_notes: String::new(),
            verbosity: Verbosity::default(),
            verbosity_override: String::new(),
            markdown_guidance: false,
            brief_rationale: false,
            meta_mode: false,
            meta_prompt_to_optimize: String::new(),
            meta_desired: String::new(),
            meta_undesired: String::new(),
            examples: Vec::new(),
            variables: BTreeMap::new(),
            swe_bench_appendix: false,
            retail_guardrails_appendix: false,
        }
    }
}

impl PromptOptions {
    /// The role name that will be rendered.
    ///
    /// A non-empty custom role wins. Otherwise the preset role is used,
    /// unless it is empty or the "Custom" placeholder label.
    pub fn effective_role(&self) -> &str {
        let custom = self.custom_role.trim();
        if !custom.is_empty() {
            return custom;
        }
        let role = self.role.trim();
        if role.is_empty() || role == CUSTOM_ROLE_LABEL {
            DEFAULT_ROLE
        } else {
            role
        }
    }

    /// The schema text with surrounding whitespace removed, if one is set
    /// and not blank. Interior bytes are left as written.
    pub fn schema(&self) -> Option<&str> {
        self.json_schema
            .as_deref()
            .map(str::trim)
            .filter(|schema| !schema.is_empty())
    }

    /// Whether any agentic control differs from its default.
    pub fn has_agentic_controls(&self) -> bool {
        self.eagerness != Eagerness::default()
            || self.reasoning_effort != ReasoningEffort::default()
            || self.tool_preamble
            || self.persistence
            || self.progress_narration
            || !self.tool_disambiguation.trim().is_empty()
    }

    /// Whether coding mode or any coding sub-option is set.
    pub fn has_coding_controls(&self) -> bool {
        self.coding_mode
            || self.planning_snippet
            || self.apply_patch_instructions
            || self.tool_definitions
            || !self.extra_notes.trim().is_empty()
    }

    /// Whether any intelligence control differs from its default.
    pub fn has_intelligence_controls(&self) -> bool {
        self.verbosity != Verbosity::default()
            || !self.verbosity_override.trim().is_empty()
            || self.markdown_guidance
            || self.brief_rationale
    }

    /// Insert or replace a variable.
    pub fn set_variable(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.variables.insert(name.into(), value.into());
    }
}
