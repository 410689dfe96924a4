//! Prompt builder: renders a `PromptOptions` record into prompt text.
//!
//! Normal mode walks a fixed, ordered table of sections. Each entry pairs a
//! predicate with a generator; the blocks of every applicable section are
//! joined with one blank line, and `{NAME}` placeholders are substituted in a
//! final pass over the whole text.
//!
//! | # | Section       | Present when                                   |
//! |---|---------------|------------------------------------------------|
//! | 1 | role          | always                                         |
//! | 2 | task          | `task` is not blank                            |
//! | 3 | context       | `context` is not blank                         |
//! | 4 | audience      | `audience` is not blank                        |
//! | 5 | constraints   | some constraint line is not blank              |
//! | 6 | agentic       | any agentic field differs from its default     |
//! | 7 | coding        | coding mode or any coding sub-field is set     |
//! | 8 | intelligence  | any intelligence field differs from its default|
//! | 9 | output_format | `output_format` is markdown or json            |
//! | 10| examples      | at least one few-shot example                  |
//! | 11| appendices    | either appendix flag is set                    |
//!
//! Metaprompt mode replaces all of the above with a single template.
//!
//! Rendering is a pure function of the record: no I/O, no shared state.

mod metaprompt;
mod sections;
mod text;

#[cfg(test)]
mod tests;

use crate::options::{OutputFormat, PromptOptions};
use crate::template::substitute_variables;
use tracing::debug;

pub use metaprompt::{METAPROMPT_INSTRUCTION, NOT_PROVIDED};

/// Separator placed between section blocks.
pub const SECTION_SEPARATOR: &str = "\n\n";

/// One conditional unit of the prompt.
struct Section {
    name: &'static str,
    applies: fn(&PromptOptions) -> bool,
    render: fn(&PromptOptions) -> String,
}

fn not_blank(s: &str) -> bool {
    !s.trim().is_empty()
}

/// The sections in render order.
const SECTIONS: &[Section] = &[
    Section {
        name: "role",
        applies: |_| true,
        render: sections::role,
    },
    Section {
        name: "task",
        applies: |o| not_blank(&o.task),
        render: sections::task,
    },
    Section {
        name: "context",
        applies: |o| not_blank(&o.context),
        render: sections::context,
    },
    Section {
        name: "audience",
        applies: |o| not_blank(&o.audience),
        render: sections::audience,
    },
    Section {
        name: "constraints",
        applies: |o| o.constraints.iter().any(|c| not_blank(c)),
        render: sections::constraints,
    },
    Section {
        name: "agentic",
        applies: PromptOptions::has_agentic_controls,
        render: sections::agentic,
    },
    Section {
        name: "coding",
        applies: PromptOptions::has_coding_controls,
        render: sections::coding,
    },
    Section {
        name: "intelligence",
        applies: PromptOptions::has_intelligence_controls,
        render: sections::intelligence,
    },
    Section {
        name: "output_format",
        applies: |o| o.output_format != OutputFormat::Plain,
        render: sections::output_format,
    },
    Section {
        name: "examples",
        applies: |o| !o.examples.is_empty(),
        render: sections::examples,
    },
    Section {
        name: "appendices",
        applies: |o| o.swe_bench_appendix || o.retail_guardrails_appendix,
        render: sections::appendices,
    },
];

/// Render the prompt for `options`.
///
/// Returns the metaprompt when `meta_mode` is set. Never fails and never
/// returns an empty string: the role line is always present in normal mode.
pub fn build(options: &PromptOptions) -> String {
    if options.meta_mode {
        return render_metaprompt(options);
    }

    let mut blocks: Vec<String> = Vec::with_capacity(SECTIONS.len());
    for section in SECTIONS {
        if !(section.applies)(options) {
            continue;
        }
        let block = (section.render)(options);
        if block.trim().is_empty() {
            continue;
        }
        debug!(section = section.name, bytes = block.len(), "rendered section");
        blocks.push(block);
    }

    finish(&blocks.join(SECTION_SEPARATOR), options)
}

/// Render the metaprompt template for `options`, whatever `meta_mode` says.
pub fn render_metaprompt(options: &PromptOptions) -> String {
    debug!("rendering metaprompt");
    finish(&metaprompt::metaprompt(options), options)
}

/// Names of the sections `build` would emit, in order.
///
/// Returns `["metaprompt"]` in metaprompt mode.
pub fn active_sections(options: &PromptOptions) -> Vec<&'static str> {
    if options.meta_mode {
        return vec!["metaprompt"];
    }
    SECTIONS
        .iter()
        .filter(|s| (s.applies)(options) && not_blank(&(s.render)(options)))
        .map(|s| s.name)
        .collect()
}

fn finish(assembled: &str, options: &PromptOptions) -> String {
    let rendered = substitute_variables(assembled, &options.variables);
    debug!(
        variables = options.variables.len(),
        bytes = rendered.len(),
        "substituted variables"
    );
    rendered
}
