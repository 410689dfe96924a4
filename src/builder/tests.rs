//! Tests for prompt assembly.

use super::sections::*;
use super::*;
use crate::options::{
    DelimiterStyle, Eagerness, OutputFormat, Preset, PromptOptions, ReasoningEffort, Verbosity,
};
use crate::template::vars;

fn with_task(task: &str) -> PromptOptions {
    PromptOptions {
        task: task.to_string(),
        ..Default::default()
    }
}

/// A record with every section switched on.
fn kitchen_sink() -> PromptOptions {
    PromptOptions {
        role: "Data analyst".to_string(),
        task: "Summarize {DATASET}.".to_string(),
        context: "Quarterly numbers.".to_string(),
        audience: "executives".to_string(),
        constraints: vec!["Be brief".to_string(), "Cite sources".to_string()],
        output_format: OutputFormat::Json,
        json_schema: Some(r#"{"type":"object"}"#.to_string()),
        eagerness: Eagerness::High,
        reasoning_effort: ReasoningEffort::High,
        tool_preamble: true,
        persistence: true,
        progress_narration: true,
        tool_disambiguation: "Use search before fetch.".to_string(),
        coding_mode: true,
        planning_snippet: true,
        apply_patch_instructions: true,
        tool_definitions: true,
        extra_notes: "Target Rust 2024.".to_string(),
        verbosity: Verbosity::Low,
        verbosity_override: "Keep it under 200 words.".to_string(),
        markdown_guidance: true,
        brief_rationale: true,
        examples: vec![("Hi".to_string(), "Hello!".to_string())],
        variables: vars([("DATASET", "sales.csv")]),
        swe_bench_appendix: true,
        retail_guardrails_appendix: true,
        ..Default::default()
    }
}

// ============================================================================
// Whole-prompt properties
// ============================================================================

#[test]
fn test_default_renders_only_role_line() {
    let prompt = build(&PromptOptions::default());
    assert_eq!(prompt, "You are General assistant.");
}

#[test]
fn test_build_is_deterministic() {
    let options = kitchen_sink();
    assert_eq!(build(&options), build(&options));
    assert_eq!(build(&options), build(&options.clone()));
}

#[test]
fn test_build_does_not_modify_input() {
    let options = kitchen_sink();
    let before = options.clone();
    let _ = build(&options);
    assert_eq!(options, before);
}

#[test]
fn test_sections_in_fixed_order() {
    let options = kitchen_sink();
    assert_eq!(
        active_sections(&options),
        vec![
            "role",
            "task",
            "context",
            "audience",
            "constraints",
            "agentic",
            "coding",
            "intelligence",
            "output_format",
            "examples",
            "appendices",
        ]
    );

    let prompt = build(&options);
    let markers = [
        "You are Data analyst.",
        "Task ```",
        "Context ```",
        "Target audience: executives.",
        "Constraints:",
        EAGERNESS_HIGH,
        CODING_MODE,
        "Verbosity: low.",
        JSON_SCHEMA_OUTPUT,
        EXAMPLES_HEADER,
        SWE_BENCH_APPENDIX,
    ];
    let positions: Vec<usize> = markers
        .iter()
        .map(|m| prompt.find(m).unwrap_or_else(|| panic!("missing marker {:?}", m)))
        .collect();
    let mut sorted = positions.clone();
    sorted.sort_unstable();
    assert_eq!(positions, sorted);
}

#[test]
fn test_sections_separated_by_single_blank_line() {
    let options = PromptOptions {
        task: "Do it.".to_string(),
        audience: "students".to_string(),
        ..Default::default()
    };
    assert_eq!(
        build(&options),
        "You are General assistant.\n\nTask ```\nDo it.\n```\n\nTarget audience: students."
    );
}

#[test]
fn test_no_trailing_blank_line() {
    let prompt = build(&kitchen_sink());
    assert!(!prompt.ends_with('\n'));
    assert!(!prompt.contains("\n\n\n"));
}

// ============================================================================
// Role
// ============================================================================

#[test]
fn test_custom_role_takes_precedence() {
    let options = PromptOptions {
        role: "Data analyst".to_string(),
        custom_role: "  a senior SRE  ".to_string(),
        ..Default::default()
    };
    assert_eq!(build(&options), "You are a senior SRE.");
}

#[test]
fn test_custom_label_without_text_falls_back() {
    let options = PromptOptions {
        role: "Custom".to_string(),
        ..Default::default()
    };
    assert_eq!(build(&options), "You are General assistant.");

    let options = PromptOptions {
        role: "   ".to_string(),
        ..Default::default()
    };
    assert_eq!(build(&options), "You are General assistant.");
}

// ============================================================================
// Task / context / delimiters
// ============================================================================

#[test]
fn test_task_wrapped_per_delimiter_style() {
    let mut options = with_task("Write a haiku.");

    options.delimiter_style = DelimiterStyle::Backticks;
    assert!(build(&options).contains("Task ```\nWrite a haiku.\n```"));

    options.delimiter_style = DelimiterStyle::Quotes;
    assert!(build(&options).contains("Task \"\"\"\nWrite a haiku.\n\"\"\""));

    options.delimiter_style = DelimiterStyle::Xml;
    assert!(build(&options).contains("Task <task>\nWrite a haiku.\n</task>"));
}

#[test]
fn test_task_and_context_fenced_independently() {
    let options = PromptOptions {
        task: "same".to_string(),
        context: "same".to_string(),
        delimiter_style: DelimiterStyle::Xml,
        ..Default::default()
    };
    let prompt = build(&options);
    assert!(prompt.contains("Task <task>\nsame\n</task>"));
    assert!(prompt.contains("Context <context>\nsame\n</context>"));
}

#[test]
fn test_blank_task_omitted() {
    assert_eq!(build(&with_task("  \n ")), "You are General assistant.");
}

#[test]
fn test_task_text_tidied() {
    let prompt = build(&with_task("\n  line one\n\n\n\nline two  \n"));
    assert!(prompt.contains("Task ```\nline one\n\nline two\n```"));
}

#[test]
fn test_delimiters_inside_text_not_escaped() {
    let prompt = build(&with_task("```\ncode\n```"));
    assert!(prompt.contains("Task ```\n```\ncode\n```\n```"));
}

// ============================================================================
// Constraints
// ============================================================================

#[test]
fn test_constraints_preserve_order() {
    let mut options = PromptOptions {
        constraints: vec!["A".to_string(), "B".to_string(), "C".to_string()],
        ..Default::default()
    };
    assert!(build(&options).ends_with("Constraints:\n- A\n- B\n- C"));

    options.constraints.reverse();
    assert!(build(&options).ends_with("Constraints:\n- C\n- B\n- A"));
}

#[test]
fn test_blank_constraint_lines_skipped() {
    let options = PromptOptions {
        constraints: vec!["A".to_string(), "  ".to_string(), String::new(), "B".to_string()],
        ..Default::default()
    };
    assert!(build(&options).ends_with("Constraints:\n- A\n- B"));
}

#[test]
fn test_multiline_constraint_entry_splits_into_bullets() {
    let options = PromptOptions {
        constraints: vec!["a\n\n\nb".to_string(), "c\r\n  d  ".to_string()],
        ..Default::default()
    };
    let prompt = build(&options);
    assert_eq!(
        prompt,
        "You are General assistant.\n\nConstraints:\n- a\n- b\n- c\n- d"
    );
    assert!(!prompt.contains("\n\n\n"));
}

#[test]
fn test_all_blank_constraints_omit_section() {
    let options = PromptOptions {
        constraints: vec![" ".to_string(), String::new()],
        ..Default::default()
    };
    assert_eq!(build(&options), "You are General assistant.");
}

// ============================================================================
// Agentic
// ============================================================================

#[test]
fn test_default_eagerness_line_omitted() {
    let options = PromptOptions {
        persistence: true,
        ..Default::default()
    };
    let prompt = build(&options);
    assert!(!prompt.contains("Agentic eagerness"));
    assert!(prompt.ends_with(PERSISTENCE));
}

#[test]
fn test_agentic_lines_follow_field_order() {
    let options = PromptOptions {
        eagerness: Eagerness::Low,
        reasoning_effort: ReasoningEffort::Minimal,
        tool_preamble: true,
        persistence: true,
        progress_narration: true,
        tool_disambiguation: "Prefer grep over find.".to_string(),
        ..Default::default()
    };
    let expected = [
        EAGERNESS_LOW,
        "Reasoning effort: minimal.",
        TOOL_PREAMBLE,
        PERSISTENCE,
        PROGRESS_NARRATION,
        TOOL_RULES_HEADER,
        "Prefer grep over find.",
    ]
    .join("\n");
    assert_eq!(
        build(&options),
        format!("You are General assistant.\n\n{}", expected)
    );
}

#[test]
fn test_reasoning_effort_alone_triggers_block() {
    let options = PromptOptions {
        reasoning_effort: ReasoningEffort::High,
        ..Default::default()
    };
    assert_eq!(
        build(&options),
        "You are General assistant.\n\nReasoning effort: high."
    );
}

// ============================================================================
// Coding
// ============================================================================

#[test]
fn test_coding_block_lines() {
    let options = PromptOptions {
        coding_mode: true,
        planning_snippet: true,
        apply_patch_instructions: true,
        tool_definitions: true,
        extra_notes: "Run clippy.".to_string(),
        ..Default::default()
    };
    let expected = [
        CODING_MODE,
        PLANNING_HEADER,
        DEFAULT_PLANNING,
        APPLY_PATCH,
        TOOL_DEFINITIONS,
        "Run clippy.",
    ]
    .join("\n");
    assert!(build(&options).ends_with(&expected));
}

#[test]
fn test_coding_sub_field_without_mode() {
    let options = PromptOptions {
        apply_patch_instructions: true,
        ..Default::default()
    };
    let prompt = build(&options);
    assert!(prompt.contains(APPLY_PATCH));
    assert!(!prompt.contains(CODING_MODE));
}

#[test]
fn test_custom_planning_text() {
    let options = PromptOptions {
        planning_snippet: true,
        planning_text: "Outline, then implement.".to_string(),
        ..Default::default()
    };
    let prompt = build(&options);
    assert!(prompt.ends_with("Planning:\nOutline, then implement."));
    assert!(!prompt.contains(DEFAULT_PLANNING));
}

#[test]
fn test_planning_text_without_switch_is_inert() {
    let options = PromptOptions {
        planning_text: "Outline, then implement.".to_string(),
        ..Default::default()
    };
    assert_eq!(build(&options), "You are General assistant.");
}

// ============================================================================
// Intelligence
// ============================================================================

#[test]
fn test_verbosity_with_override() {
    let options = PromptOptions {
        verbosity: Verbosity::High,
        verbosity_override: "Explain every step.".to_string(),
        ..Default::default()
    };
    assert!(build(&options).ends_with("Verbosity: high. Explain every step."));
}

#[test]
fn test_override_alone_with_default_verbosity() {
    let options = PromptOptions {
        verbosity_override: "Be terse.".to_string(),
        ..Default::default()
    };
    assert_eq!(build(&options), "You are General assistant.\n\nBe terse.");
}

#[test]
fn test_brief_rationale_wording() {
    let options = PromptOptions {
        brief_rationale: true,
        ..Default::default()
    };
    let prompt = build(&options);
    assert!(prompt.contains("1-3 concise bullets"));
    assert!(prompt.contains("not a request for hidden reasoning"));
}

#[test]
fn test_markdown_guidance_in_intelligence_block() {
    let options = PromptOptions {
        markdown_guidance: true,
        ..Default::default()
    };
    assert!(build(&options).ends_with(MARKDOWN_GUIDANCE));
}

// ============================================================================
// Output format
// ============================================================================

#[test]
fn test_plain_output_omitted() {
    let options = PromptOptions {
        output_format: OutputFormat::Plain,
        json_schema: Some("{}".to_string()),
        ..Default::default()
    };
    assert_eq!(build(&options), "You are General assistant.");
}

#[test]
fn test_markdown_output() {
    let options = PromptOptions {
        output_format: OutputFormat::Markdown,
        ..Default::default()
    };
    assert!(build(&options).ends_with(MARKDOWN_OUTPUT));
}

#[test]
fn test_json_output_without_schema() {
    let options = PromptOptions {
        output_format: OutputFormat::Json,
        json_schema: Some("   ".to_string()),
        ..Default::default()
    };
    assert!(build(&options).ends_with(JSON_OUTPUT));
}

#[test]
fn test_json_schema_included_verbatim() {
    let schema = r#"{"type":"object"}"#;
    let options = PromptOptions {
        output_format: OutputFormat::Json,
        json_schema: Some(schema.to_string()),
        ..Default::default()
    };
    let prompt = build(&options);
    assert!(prompt.contains(schema));
    assert!(prompt.ends_with(&format!("{}\n{}", JSON_SCHEMA_OUTPUT, schema)));
}

#[test]
fn test_json_schema_trailing_newline_keeps_single_blank_line() {
    let options = PromptOptions {
        output_format: OutputFormat::Json,
        json_schema: Some("\n  {\"type\":\"object\"}\n".to_string()),
        examples: vec![("q".to_string(), "a".to_string())],
        ..Default::default()
    };
    let prompt = build(&options);
    assert!(!prompt.contains("\n\n\n"));
    assert!(prompt.contains(&format!(
        "{}\n{{\"type\":\"object\"}}\n\n{}",
        JSON_SCHEMA_OUTPUT, EXAMPLES_HEADER
    )));
}

#[test]
fn test_json_schema_last_section_has_no_trailing_newline() {
    let options = PromptOptions {
        output_format: OutputFormat::Json,
        json_schema: Some("{\"type\":\"object\"}\n\n".to_string()),
        ..Default::default()
    };
    let prompt = build(&options);
    assert!(prompt.ends_with(&format!("{}\n{{\"type\":\"object\"}}", JSON_SCHEMA_OUTPUT)));
}

#[test]
fn test_json_schema_not_reformatted() {
    let schema = "{\n    \"type\" :  \"object\",\n\n\n\n  \"required\": []\n}";
    let options = PromptOptions {
        output_format: OutputFormat::Json,
        json_schema: Some(schema.to_string()),
        ..Default::default()
    };
    assert!(build(&options).contains(schema));
}

// ============================================================================
// Few-shot
// ============================================================================

#[test]
fn test_examples_render_in_order() {
    let options = PromptOptions {
        examples: vec![
            ("first question".to_string(), "first answer".to_string()),
            ("second question".to_string(), "second answer".to_string()),
        ],
        ..Default::default()
    };
    let expected = "Few-shot examples:\n\
                    Example 1 - user ```\nfirst question\n```\n\
                    Example 1 - assistant ```\nfirst answer\n```\n\
                    \n\
                    Example 2 - user ```\nsecond question\n```\n\
                    Example 2 - assistant ```\nsecond answer\n```";
    assert!(build(&options).ends_with(expected));
}

#[test]
fn test_examples_use_xml_tags() {
    let options = PromptOptions {
        delimiter_style: DelimiterStyle::Xml,
        examples: vec![("q".to_string(), "a".to_string())],
        ..Default::default()
    };
    let prompt = build(&options);
    assert!(prompt.contains("Example 1 - user <user>\nq\n</user>"));
    assert!(prompt.contains("Example 1 - assistant <assistant>\na\n</assistant>"));
}

// ============================================================================
// Appendices
// ============================================================================

#[test]
fn test_swe_bench_before_retail() {
    let options = PromptOptions {
        swe_bench_appendix: true,
        retail_guardrails_appendix: true,
        ..Default::default()
    };
    assert!(build(&options).ends_with(&format!(
        "{}\n{}",
        SWE_BENCH_APPENDIX, RETAIL_GUARDRAILS_APPENDIX
    )));
}

// ============================================================================
// Section gating
// ============================================================================

#[test]
fn test_toggling_each_section_is_reversible() {
    type Toggle = (&'static str, fn(&mut PromptOptions));
    let toggles: &[Toggle] = &[
        ("Task ```", |o| o.task = "x".to_string()),
        ("Context ```", |o| o.context = "x".to_string()),
        ("Target audience:", |o| o.audience = "x".to_string()),
        ("Constraints:", |o| o.constraints = vec!["x".to_string()]),
        (EAGERNESS_HIGH, |o| o.eagerness = Eagerness::High),
        ("Reasoning effort:", |o| {
            o.reasoning_effort = ReasoningEffort::Medium
        }),
        (TOOL_PREAMBLE, |o| o.tool_preamble = true),
        (PERSISTENCE, |o| o.persistence = true),
        (PROGRESS_NARRATION, |o| o.progress_narration = true),
        (TOOL_RULES_HEADER, |o| o.tool_disambiguation = "x".to_string()),
        (CODING_MODE, |o| o.coding_mode = true),
        (PLANNING_HEADER, |o| o.planning_snippet = true),
        (APPLY_PATCH, |o| o.apply_patch_instructions = true),
        (TOOL_DEFINITIONS, |o| o.tool_definitions = true),
        ("Verbosity:", |o| o.verbosity = Verbosity::Low),
        (MARKDOWN_GUIDANCE, |o| o.markdown_guidance = true),
        (BRIEF_RATIONALE, |o| o.brief_rationale = true),
        (MARKDOWN_OUTPUT, |o| o.output_format = OutputFormat::Markdown),
        (JSON_OUTPUT, |o| o.output_format = OutputFormat::Json),
        (EXAMPLES_HEADER, |o| {
            o.examples = vec![("u".to_string(), "a".to_string())]
        }),
        (SWE_BENCH_APPENDIX, |o| o.swe_bench_appendix = true),
        (RETAIL_GUARDRAILS_APPENDIX, |o| {
            o.retail_guardrails_appendix = true
        }),
    ];

    let base = PromptOptions::default();
    let baseline = build(&base);

    for (marker, toggle) in toggles {
        assert!(!baseline.contains(marker), "baseline contains {:?}", marker);

        let mut toggled = base.clone();
        toggle(&mut toggled);
        let prompt = build(&toggled);
        assert!(prompt.contains(marker), "toggle did not add {:?}", marker);

        // Untoggled record still renders byte-for-byte as before.
        assert_eq!(build(&base), baseline);
        assert_eq!(build(&PromptOptions::default()), baseline);
    }
}

// ============================================================================
// Variables
// ============================================================================

#[test]
fn test_substitution_in_task() {
    let options = PromptOptions {
        task: "Build an API in {LANG}.".to_string(),
        variables: vars([("LANG", "Python")]),
        ..Default::default()
    };
    let prompt = build(&options);
    assert!(prompt.contains("Build an API in Python."));
    assert!(!prompt.contains("{LANG}"));
}

#[test]
fn test_unresolved_placeholder_passthrough() {
    let prompt = build(&with_task("Use {UNDEFINED}."));
    assert!(prompt.contains("{UNDEFINED}"));
}

#[test]
fn test_no_recursive_substitution() {
    let options = PromptOptions {
        task: "{A}".to_string(),
        variables: vars([("A", "{B}"), ("B", "value")]),
        ..Default::default()
    };
    let prompt = build(&options);
    assert!(prompt.contains("{B}"));
    assert!(!prompt.contains("value"));
}

#[test]
fn test_substitution_applies_across_sections() {
    let options = PromptOptions {
        custom_role: "{ROLE}".to_string(),
        constraints: vec!["Ship by {DEADLINE}".to_string()],
        examples: vec![("Use {LANG}".to_string(), "OK, {LANG}.".to_string())],
        variables: vars([("ROLE", "a Rust expert"), ("DEADLINE", "Friday"), ("LANG", "Rust")]),
        ..Default::default()
    };
    let prompt = build(&options);
    assert!(prompt.starts_with("You are a Rust expert."));
    assert!(prompt.contains("- Ship by Friday"));
    assert!(prompt.contains("Use Rust"));
    assert!(prompt.contains("OK, Rust."));
}

#[test]
fn test_schema_placeholders_are_substituted() {
    let options = PromptOptions {
        output_format: OutputFormat::Json,
        json_schema: Some(r#"{"title":"{NAME}"}"#.to_string()),
        variables: vars([("NAME", "Report")]),
        ..Default::default()
    };
    assert!(build(&options).contains(r#"{"title":"Report"}"#));
}

// ============================================================================
// Metaprompt
// ============================================================================

#[test]
fn test_metaprompt_excludes_normal_sections() {
    let mut options = kitchen_sink();
    options.meta_mode = true;
    options.meta_prompt_to_optimize = "You are a bot. Answer questions.".to_string();
    options.meta_desired = "Asks clarifying questions".to_string();
    options.meta_undesired = "Rambles".to_string();

    let prompt = build(&options);
    for marker in [
        "Task ",
        "Context ",
        EXAMPLES_HEADER,
        "You are Data analyst.",
        "Constraints:",
        SWE_BENCH_APPENDIX,
    ] {
        assert!(!prompt.contains(marker), "metaprompt contains {:?}", marker);
    }

    assert_eq!(
        prompt,
        format!(
            "{}\nDesired behavior: Asks clarifying questions\nUndesired behavior: Rambles\nPrompt ```\nYou are a bot. Answer questions.\n```",
            METAPROMPT_INSTRUCTION
        )
    );
    assert_eq!(active_sections(&options), vec!["metaprompt"]);
}

#[test]
fn test_metaprompt_missing_descriptions() {
    let options = PromptOptions {
        meta_mode: true,
        ..Default::default()
    };
    let prompt = build(&options);
    assert!(prompt.contains(&format!("Desired behavior: {}", NOT_PROVIDED)));
    assert!(prompt.contains(&format!("Undesired behavior: {}", NOT_PROVIDED)));
}

#[test]
fn test_metaprompt_ignores_delimiter_style() {
    let options = PromptOptions {
        meta_mode: true,
        delimiter_style: DelimiterStyle::Xml,
        meta_prompt_to_optimize: "p".to_string(),
        ..Default::default()
    };
    assert!(build(&options).ends_with("Prompt ```\np\n```"));
}

#[test]
fn test_metaprompt_substitutes_variables() {
    let options = PromptOptions {
        meta_mode: true,
        meta_prompt_to_optimize: "Answer in {LANG}. Mention {MISSING}.".to_string(),
        variables: vars([("LANG", "French")]),
        ..Default::default()
    };
    let prompt = build(&options);
    assert!(prompt.contains("Answer in French. Mention {MISSING}."));
}

#[test]
fn test_render_metaprompt_ignores_flag() {
    let options = PromptOptions {
        meta_prompt_to_optimize: "p".to_string(),
        ..Default::default()
    };
    assert!(render_metaprompt(&options).starts_with(METAPROMPT_INSTRUCTION));
    assert_eq!(build(&options), "You are General assistant.");
}

// ============================================================================
// Presets
// ============================================================================

#[test]
fn test_every_preset_renders() {
    for preset in Preset::ALL {
        let prompt = build(&preset.options());
        assert!(!prompt.is_empty(), "{} rendered empty", preset);
    }
}

#[test]
fn test_coding_preset_prompt() {
    let prompt = build(&Preset::Coding.options());
    assert!(prompt.starts_with("You are Coding assistant."));
    assert!(prompt.contains(CODING_MODE));
    assert!(prompt.contains(APPLY_PATCH));
    assert!(prompt.contains("Reasoning effort: medium."));
}
