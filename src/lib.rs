//! Prompt designer: compile prompt-design options into a single prompt.
//!
//! The core is a pure rendering function. A [`options::PromptOptions`]
//! record holds every option (role, task, constraints, agentic, coding and
//! intelligence toggles, few-shot examples, variables); [`builder::build`]
//! turns it into plain prompt text, and [`builder::render_metaprompt`]
//! renders the alternate "improve this prompt" template.
//!
//! ```
//! use prompt_designer::builder::build;
//! use prompt_designer::options::PromptOptions;
//!
//! let mut options = PromptOptions::default();
//! options.task = "Build an API in {LANG}.".to_string();
//! options.set_variable("LANG", "Python");
//!
//! let prompt = build(&options);
//! assert!(prompt.starts_with("You are General assistant."));
//! assert!(prompt.contains("Build an API in Python."));
//! ```
//!
//! Records are saved and restored as flat JSON settings documents with
//! [`options::PromptOptions::to_json`] and [`options::PromptOptions::from_json`].

pub mod builder;
pub mod error;
pub mod exit_codes;
pub mod fs;
pub mod options;
pub mod template;
