//! Settings document loading and saving.
//!
//! The settings document is a flat JSON object keyed by field name. Loading
//! decodes each field on its own: a missing key, a value of the wrong type or
//! an unknown enum label keeps that field's default and logs a warning. Only
//! unparseable JSON (or a top level that is not an object) is an error.
//!
//! Keys written by the original desktop tool (`additional_context`,
//! `include_persistence`, ...) are accepted as aliases. The canonical key
//! wins when both are present.

use super::model::PromptOptions;
use crate::error::{DesignerError, Result};
use crate::fs::atomic_write_file;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer};
use serde_json::{Map, Value};
use std::path::Path;
use tracing::warn;

/// Reads fields out of a settings object, falling back to defaults.
struct FieldReader<'a> {
    map: &'a Map<String, Value>,
}

impl<'a> FieldReader<'a> {
    /// Find the value for `key`, trying legacy aliases in order.
    fn get(&self, key: &str, aliases: &[&str]) -> Option<(&'a str, &'a Value)> {
        std::iter::once(key)
            .chain(aliases.iter().copied())
            .find_map(|k| self.map.get_key_value(k))
            .map(|(k, v)| (k.as_str(), v))
    }

    /// Decode `key` (or one of its aliases), or return `default`.
    fn read<T: DeserializeOwned>(&self, key: &str, aliases: &[&str], default: T) -> T {
        let Some((found, value)) = self.get(key, aliases) else {
            return default;
        };
        match T::deserialize(value) {
            Ok(decoded) => decoded,
            Err(e) => {
                warn!(field = key, key = found, error = %e, "invalid settings value; using default");
                default
            }
        }
    }

    /// Decode the constraint list, accepting a newline-separated string too.
    fn read_lines(&self, key: &str, default: Vec<String>) -> Vec<String> {
        match self.get(key, &[]) {
            Some((_, Value::String(text))) => text.lines().map(str::to_string).collect(),
            _ => self.read(key, &[], default),
        }
    }
}

impl PromptOptions {
    /// Build a record from a decoded settings object.
    pub fn from_map(map: &Map<String, Value>) -> Self {
        let r = FieldReader { map };
        let d = Self::default();

        let mut options = Self {
            role: r.read("role", &[], d.role),
            custom_role: r.read("custom_role", &[], d.custom_role),
            task: r.read("task", &[], d.task),
            context: r.read("context", &["additional_context"], d.context),
            audience: r.read("audience", &[], d.audience),
            constraints: r.read_lines("constraints", d.constraints),
            delimiter_style: r.read("delimiter_style", &["delimiters"], d.delimiter_style),
            output_format: r.read("output_format", &[], d.output_format),
            json_schema: r.read("json_schema", &[], d.json_schema),

            eagerness: r.read("eagerness", &[], d.eagerness),
            reasoning_effort: r.read("reasoning_effort", &[], d.reasoning_effort),
            tool_preamble: r.read("tool_preamble", &["include_tool_preamble"], d.tool_preamble),
            persistence: r.read("persistence", &["include_persistence"], d.persistence),
            progress_narration: r.read(
                "progress_narration",
                &["include_progress_narration"],
                d.progress_narration,
            ),
            tool_disambiguation: r.read(
                "tool_disambiguation",
                &["tool_context"],
                d.tool_disambiguation,
            ),

            coding_mode: r.read("coding_mode", &[], d.coding_mode),
            planning_snippet: d.planning_snippet,
            planning_text: r.read("planning_text", &[], d.planning_text),
            apply_patch_instructions: r.read(
                "apply_patch_instructions",
                &["include_apply_patch_instr"],
                d.apply_patch_instructions,
            ),
            tool_definitions: r.read(
                "tool_definitions",
                &["include_tool_defs"],
                d.tool_definitions,
            ),
            extra_notes: r.read("extra_notes", &["coding_notes"], d.extra_notes),

            verbosity: r.read("verbosity", &[], d.verbosity),
            verbosity_override: r.read("verbosity_override", &[], d.verbosity_override),
            markdown_guidance: r.read("markdown_guidance", &[], d.markdown_guidance),
            brief_rationale: r.read("brief_rationale", &["ask_brief_rationale"], d.brief_rationale),

            meta_mode: r.read("meta_mode", &[], d.meta_mode),
            meta_prompt_to_optimize: r.read(
                "meta_prompt_to_optimize",
                &["meta_prompt"],
                d.meta_prompt_to_optimize,
            ),
            meta_desired: r.read("meta_desired", &[], d.meta_desired),
            meta_undesired: r.read("meta_undesired", &[], d.meta_undesired),

            examples: r.read("examples", &[], d.examples),
            variables: r.read("variables", &[], d.variables),

            swe_bench_appendix: r.read(
                "swe_bench_appendix",
                &["include_swe_bench"],
                d.swe_bench_appendix,
            ),
            retail_guardrails_appendix: r.read(
                "retail_guardrails_appendix",
                &["include_retail_min_reason"],
                d.retail_guardrails_appendix,
            ),
        };

        // Older files store the planning text under `planning_snippet` and the
        // on/off switch under `include_planning`.
        match map.get("planning_snippet") {
            Some(Value::String(text)) => {
                if options.planning_text.is_empty() {
                    options.planning_text = text.clone();
                }
                options.planning_snippet = r.read("include_planning", &[], false);
            }
            Some(_) => {
                options.planning_snippet = r.read("planning_snippet", &[], false);
            }
            None => {
                options.planning_snippet = r.read("include_planning", &[], false);
            }
        }

        // Older files keep tool rules behind a separate switch.
        if !map.contains_key("tool_disambiguation")
            && !r.read("include_tool_disambiguation", &[], true)
        {
            options.tool_disambiguation.clear();
        }

        options
    }

    /// Parse a settings document from JSON text.
    ///
    /// Fails only when the text is not valid JSON or its top level is not an
    /// object. Everything else degrades to defaults field by field.
    pub fn from_json(json: &str) -> Result<Self> {
        let value: Value = serde_json::from_str(json).map_err(|e| {
            DesignerError::DeserializationError(format!("failed to parse settings JSON: {}", e))
        })?;

        match value {
            Value::Object(map) => Ok(Self::from_map(&map)),
            other => Err(DesignerError::DeserializationError(format!(
                "settings document must be a JSON object, found {}",
                json_kind(&other)
            ))),
        }
    }

    /// Serialize every field to a pretty-printed JSON document.
    pub fn to_json(&self) -> Result<String> {
        let mut json = serde_json::to_string_pretty(self).map_err(serialization_error)?;
        json.push('\n');
        Ok(json)
    }

    /// Load a settings document from a file.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();

        let content = std::fs::read_to_string(path).map_err(|e| {
            DesignerError::IoError(format!(
                "failed to read settings file '{}': {}",
                path.display(),
                e
            ))
        })?;

        Self::from_json(&content)
    }

    /// Write the settings document to a file atomically.
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        atomic_write_file(path, &self.to_json()?)
    }
}

impl<'de> Deserialize<'de> for PromptOptions {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let map = Map::<String, Value>::deserialize(deserializer)?;
        Ok(Self::from_map(&map))
    }
}

/// Serializing a record is not an I/O failure; report it as a user error.
pub(super) fn serialization_error(e: serde_json::Error) -> DesignerError {
    DesignerError::UserError(format!("failed to serialize settings: {}", e))
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
