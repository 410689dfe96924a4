//! Command implementations for prompt-designer.
//!
//! This module provides the dispatcher that routes CLI commands to their
//! implementations.

mod build;
mod presets;
mod settings;


use crate::cli::Command;
use prompt_designer::error::Result;

/// Dispatch a command to its implementation.
pub fn dispatch(command: Command) -> Result<()> {
    match command {
        Command::Build(args) => build::cmd_build(args),
        Command::Settings(args) => settings::cmd_settings(args),
        Command::Presets => presets::cmd_presets(),
    }
}
