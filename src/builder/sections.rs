//! Section generators.
//!
//! Each generator reads a few option fields and returns one text block
//! without a trailing newline, or an empty string when it has nothing to say.

use super::text::{fence, tidy};
use crate::options::{Eagerness, OutputFormat, PromptOptions, ReasoningEffort, Verbosity};

pub const EAGERNESS_LOW: &str = "Agentic eagerness: low. Avoid tangential tool calls. Ask at most one clarifying question only if blocking.";
pub const EAGERNESS_HIGH: &str = "Agentic eagerness: high. Be proactive. Decompose the task and use available tools when helpful.";
pub const TOOL_PREAMBLE: &str = "Before tools: emit a short tool preamble that restates the goal, the plan, and the next action.";
pub const PERSISTENCE: &str = "Agentic persistence: continue until the user's goal is fully achieved. Do not stop early.";
pub const PROGRESS_NARRATION: &str =
    "During long tasks: include brief progress updates and what remains.";
pub const TOOL_RULES_HEADER: &str = "Tool instructions: follow these disambiguated tool rules:";

pub const CODING_MODE: &str =
    "Coding mode: enabled. Prefer small, verifiable steps and runnable outputs.";
pub const PLANNING_HEADER: &str = "Planning:";
pub const DEFAULT_PLANNING: &str = "Plan the steps before producing the final answer. Verify each step. Do not yield until all sub-tasks are complete.";
pub const APPLY_PATCH: &str = "For code edits, prefer unified diffs in an apply_patch block: begin with '*** Begin Patch' and end with '*** End Patch'.";
pub const TOOL_DEFINITIONS: &str = "Assume standard code tools are available as defined by the host environment. Use them when appropriate.";

pub const MARKDOWN_GUIDANCE: &str = "Use Markdown only where semantically correct: inline code, fenced code blocks, lists, and tables. When naming files or code elements, use backticks; use \\( \\) for inline math and \\[ \\] for block math.";
pub const BRIEF_RATIONALE: &str = "Begin the final answer with 1-3 concise bullets summarizing the key factors behind it. This is a brief visible rationale, not a request for hidden reasoning; do not include private chain-of-thought.";

pub const MARKDOWN_OUTPUT: &str = "Format the final answer in Markdown. Use headings, lists, and fenced code blocks where they aid readability.";
pub const JSON_OUTPUT: &str =
    "Return a single valid JSON object with keys appropriate to the task. No extra commentary.";
pub const JSON_SCHEMA_OUTPUT: &str =
    "Return a single JSON object that exactly follows this JSON Schema:";

pub const EXAMPLES_HEADER: &str = "Few-shot examples:";

pub const SWE_BENCH_APPENDIX: &str = "Appendix: When editing code, use an apply_patch block with a unified diff. Verify changes thoroughly and consider hidden tests.";
pub const RETAIL_GUARDRAILS_APPENDIX: &str = "Appendix: Retail domain guardrails. Authenticate the user first. Only act for the authenticated user. Before database changes, summarize the action and get explicit confirmation.";

pub fn role(o: &PromptOptions) -> String {
    format!("You are {}.", o.effective_role())
}

pub fn task(o: &PromptOptions) -> String {
    fence("Task", "task", o.delimiter_style, &tidy(&o.task))
}

pub fn context(o: &PromptOptions) -> String {
    fence("Context", "context", o.delimiter_style, &tidy(&o.context))
}

pub fn audience(o: &PromptOptions) -> String {
    format!("Target audience: {}.", o.audience.trim())
}

pub fn constraints(o: &PromptOptions) -> String {
    let bullets: Vec<String> = o
        .constraints
        .iter()
        .flat_map(|entry| entry.lines())
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(|line| format!("- {}", line))
        .collect();

    if bullets.is_empty() {
        return String::new();
    }
    format!("Constraints:\n{}", bullets.join("\n"))
}

pub fn agentic(o: &PromptOptions) -> String {
    let mut lines: Vec<String> = Vec::new();

    match o.eagerness {
        Eagerness::Low => lines.push(EAGERNESS_LOW.to_string()),
        Eagerness::High => lines.push(EAGERNESS_HIGH.to_string()),
        Eagerness::Medium => {}
    }
    if o.reasoning_effort != ReasoningEffort::Default {
        lines.push(format!("Reasoning effort: {}.", o.reasoning_effort.as_str()));
    }
    if o.tool_preamble {
        lines.push(TOOL_PREAMBLE.to_string());
    }
    if o.persistence {
        lines.push(PERSISTENCE.to_string());
    }
    if o.progress_narration {
        lines.push(PROGRESS_NARRATION.to_string());
    }
    let rules = tidy(&o.tool_disambiguation);
    if !rules.is_empty() {
        lines.push(format!("{}\n{}", TOOL_RULES_HEADER, rules));
    }

    lines.join("\n")
}

pub fn coding(o: &PromptOptions) -> String {
    let mut lines: Vec<String> = Vec::new();

    if o.coding_mode {
        lines.push(CODING_MODE.to_string());
    }
    if o.planning_snippet {
        let custom = tidy(&o.planning_text);
        let snippet = if custom.is_empty() {
            DEFAULT_PLANNING.to_string()
        } else {
            custom
        };
        lines.push(format!("{}\n{}", PLANNING_HEADER, snippet));
    }
    if o.apply_patch_instructions {
        lines.push(APPLY_PATCH.to_string());
    }
    if o.tool_definitions {
        lines.push(TOOL_DEFINITIONS.to_string());
    }
    let notes = tidy(&o.extra_notes);
    if !notes.is_empty() {
        lines.push(notes);
    }

    lines.join("\n")
}

pub fn intelligence(o: &PromptOptions) -> String {
    let mut lines: Vec<String> = Vec::new();

    let override_text = o.verbosity_override.trim();
    let directive = match (o.verbosity, override_text.is_empty()) {
        (Verbosity::Default, _) => override_text.to_string(),
        (level, true) => format!("Verbosity: {}.", level.as_str()),
        (level, false) => format!("Verbosity: {}. {}", level.as_str(), override_text),
    };
    if !directive.is_empty() {
        lines.push(directive);
    }
    if o.markdown_guidance {
        lines.push(MARKDOWN_GUIDANCE.to_string());
    }
    if o.brief_rationale {
        lines.push(BRIEF_RATIONALE.to_string());
    }

    lines.join("\n")
}

pub fn output_format(o: &PromptOptions) -> String {
    match o.output_format {
        OutputFormat::Plain => String::new(),
        OutputFormat::Markdown => MARKDOWN_OUTPUT.to_string(),
        OutputFormat::Json => match o.schema() {
            Some(schema) => format!("{}\n{}", JSON_SCHEMA_OUTPUT, schema),
            None => JSON_OUTPUT.to_string(),
        },
    }
}

pub fn examples(o: &PromptOptions) -> String {
    let pairs: Vec<String> = o
        .examples
        .iter()
        .enumerate()
        .map(|(i, (user, assistant))| {
            let n = i + 1;
            let user = fence(
                &format!("Example {} - user", n),
                "user",
                o.delimiter_style,
                &tidy(user),
            );
            let assistant = fence(
                &format!("Example {} - assistant", n),
                "assistant",
                o.delimiter_style,
                &tidy(assistant),
            );
            format!("{}\n{}", user, assistant)
        })
        .collect();

    format!("{}\n{}", EXAMPLES_HEADER, pairs.join("\n\n"))
}

pub fn appendices(o: &PromptOptions) -> String {
    let mut lines = Vec::new();
    if o.swe_bench_appendix {
        lines.push(SWE_BENCH_APPENDIX);
    }
    if o.retail_guardrails_appendix {
        lines.push(RETAIL_GUARDRAILS_APPENDIX);
    }
    lines.join("\n")
}
