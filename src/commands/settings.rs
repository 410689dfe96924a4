//! Implementation of the `prompt-designer settings` command.

use crate::cli::SettingsArgs;
use prompt_designer::error::Result;
use prompt_designer::options::PromptOptions;
use tracing::info;

/// Execute the `prompt-designer settings` command.
///
/// Emits a complete settings document, every field included, so it can be
/// edited and passed back to `build`.
pub fn cmd_settings(args: SettingsArgs) -> Result<()> {
    let options = starting_options(&args);

    match &args.output {
        Some(path) => {
            options.save(path)?;
            info!(path = %path.display(), "saved settings");
            eprintln!("Wrote settings to {}", path.display());
        }
        None => print!("{}", options.to_json()?),
    }

    Ok(())
}

/// The preset's record, or defaults.
pub(super) fn starting_options(args: &SettingsArgs) -> PromptOptions {
    args.preset
        .map(|preset| preset.options())
        .unwrap_or_default()
}
