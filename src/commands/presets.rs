//! Implementation of the `prompt-designer presets` command.

use prompt_designer::error::Result;
use prompt_designer::options::Preset;

/// Execute the `prompt-designer presets` command.
pub fn cmd_presets() -> Result<()> {
    print!("{}", format_presets());
    Ok(())
}

/// One line per preset: padded name, then description.
pub(super) fn format_presets() -> String {
    let width = Preset::ALL
        .iter()
        .map(|p| p.name().len())
        .max()
        .unwrap_or(0);

    Preset::ALL
        .iter()
        .map(|p| format!("  {:<width$}  {}\n", p.name(), p.description(), width = width))
        .collect()
}
