//! Configuration module for the AQL builder.
//!
//! Handles the settings file and its defaults.

mod settings;

pub use settings::{
    BuilderSettings, ClipboardCommand, ClipboardSettings, ServerSettings, Settings, SettingsError,
    CONFIG_ENV_VAR,
};
