//! Metaprompt template.
//!
//! Asks the model to improve an existing prompt rather than perform a task.
//! Only the three metaprompt fields are read; the prompt is always fenced
//! with triple backticks regardless of `delimiter_style`.

use super::text::fence;
use crate::options::{DelimiterStyle, PromptOptions};

pub const METAPROMPT_INSTRUCTION: &str = "Optimize the following prompt. Explain what minimal edits or additions would encourage the desired behavior and reduce undesired behavior.";

/// Shown in place of an empty desired/undesired description.
pub const NOT_PROVIDED: &str = "(not provided)";

/// Render the metaprompt template, before variable substitution.
pub fn metaprompt(o: &PromptOptions) -> String {
    let desired = or_not_provided(&o.meta_desired);
    let undesired = or_not_provided(&o.meta_undesired);
    let prompt = fence(
        "Prompt",
        "prompt",
        DelimiterStyle::Backticks,
        o.meta_prompt_to_optimize.trim(),
    );

    [
        METAPROMPT_INSTRUCTION.to_string(),
        format!("Desired behavior: {}", desired),
        format!("Undesired behavior: {}", undesired),
        prompt,
    ]
    .join("\n")
}

fn or_not_provided(text: &str) -> &str {
    let text = text.trim();
    if text.is_empty() { NOT_PROVIDED } else { text }
}
