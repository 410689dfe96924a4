//! Implementation of the `prompt-designer build` command.
//!
//! Loads the options record (settings file, preset, or defaults), applies
//! command-line overrides, renders the prompt and prints or exports it.

use crate::cli::BuildArgs;
use prompt_designer::builder::{active_sections, build};
use prompt_designer::error::{DesignerError, Result};
use prompt_designer::fs::atomic_write_file;
use prompt_designer::options::PromptOptions;
use prompt_designer::template::{is_valid_variable_name, unresolved_placeholders};
use tracing::{info, warn};

/// Execute the `prompt-designer build` command.
pub fn cmd_build(args: BuildArgs) -> Result<()> {
    let options = load_options(&args)?;
    let prompt = build(&options);

    let missing = unresolved_placeholders(&prompt, &options.variables);
    if !missing.is_empty() {
        warn!(placeholders = ?missing, "prompt contains unresolved placeholders");
    }

    match &args.output {
        Some(path) => {
            atomic_write_file(path, &format!("{}\n", prompt))?;
            info!(path = %path.display(), bytes = prompt.len(), "exported prompt");
            eprintln!("Wrote prompt to {}", path.display());
        }
        None => println!("{}", prompt),
    }

    Ok(())
}

/// Resolve the options record for a build.
///
/// A settings file wins over a preset; with neither, defaults are used.
/// `--var` and `--meta` are applied on top.
pub(super) fn load_options(args: &BuildArgs) -> Result<PromptOptions> {
    let mut options = match (&args.settings, args.preset) {
        (Some(path), preset) => {
            if let Some(preset) = preset {
                warn!(%preset, "settings file given; ignoring preset");
            }
            info!(path = %path.display(), "loading settings");
            PromptOptions::load(path)?
        }
        (None, Some(preset)) => preset.options(),
        (None, None) => PromptOptions::default(),
    };

    for assignment in &args.vars {
        let (name, value) = parse_var_assignment(assignment)?;
        if !is_valid_variable_name(&name) {
            warn!(name = %name, "variable name can never match a placeholder");
        }
        options.set_variable(name, value);
    }

    if args.meta {
        options.meta_mode = true;
    }

    info!(sections = ?active_sections(&options), "resolved options");
    Ok(options)
}

/// Split a `NAME=VALUE` argument at the first `=`.
pub(super) fn parse_var_assignment(s: &str) -> Result<(String, String)> {
    match s.split_once('=') {
        Some((name, value)) if !name.trim().is_empty() => {
            Ok((name.trim().to_string(), value.to_string()))
        }
        _ => Err(DesignerError::UserError(format!(
            "invalid --var '{}': expected NAME=VALUE",
            s
        ))),
    }
}
