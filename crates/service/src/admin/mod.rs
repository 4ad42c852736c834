//! Administrator actions over the gate configuration.

pub mod commands;
pub mod sanitize;

pub use commands::{settings_view, RegenerateApiKey, SaveRestrictionPolicy, SettingsView};
