//! CLI argument parsing for prompt-designer.
//!
//! Uses clap derive macros for declarative argument definitions.
//! This module defines the command structure; actual implementations
//! are in the `commands` module.

use clap::{Parser, Subcommand};
use prompt_designer::options::Preset;
use std::path::PathBuf;

/// Prompt designer: compile prompt-design options into a single prompt.
///
/// Options live in a flat JSON settings document. `build` renders one into
/// prompt text; `settings` writes a starting document to edit.
#[derive(Parser, Debug)]
#[command(name = "prompt-designer")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Log rendering details to stderr.
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

/// Available commands for prompt-designer.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Render a prompt from a settings document.
    ///
    /// Without a settings file, starts from the given preset or from
    /// defaults. Variables given with --var override the document's.
    Build(BuildArgs),

    /// Write a complete settings document.
    ///
    /// Emits every field, starting from defaults or a preset.
    Settings(SettingsArgs),

    /// List available presets.
    Presets,
}

/// Arguments for the `build` command.
#[derive(Parser, Debug, Default)]
pub struct BuildArgs {
    /// Settings document (JSON) to render.
    pub settings: Option<PathBuf>,

    /// Preset to start from when no settings file is given.
    #[arg(short, long)]
    pub preset: Option<Preset>,

    /// Set a variable, e.g. --var LANG=Python (repeatable).
    #[arg(long = "var", value_name = "NAME=VALUE")]
    pub vars: Vec<String>,

    /// Render the metaprompt instead of the normal prompt.
    #[arg(long)]
    pub meta: bool,

    /// Write the prompt to this file instead of stdout.
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

/// Arguments for the `settings` command.
#[derive(Parser, Debug, Default)]
pub struct SettingsArgs {
    /// Preset to start from instead of defaults.
    #[arg(short, long)]
    pub preset: Option<Preset>,

    /// Write the document to this file instead of stdout.
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

impl Cli {
    /// Parse command-line arguments.
    pub fn parse_args() -> Self {
        Self::parse()
    }
}
