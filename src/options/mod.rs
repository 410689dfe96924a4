//! The options record consumed by the prompt builder.
//!
//! This module defines `PromptOptions`, its enum field types, named presets,
//! and the flat JSON settings document used to save and restore a record.

mod model;
mod operations;
mod presets;
pub mod types;


// Re-export public API
pub use model::{FewShotExample, PromptOptions};
pub use presets::Preset;
pub use types::{
    DEFAULT_ROLE, DelimiterStyle, Eagerness, OutputFormat, ROLE_PRESETS, ReasoningEffort,
    Verbosity,
};
