//! TOML-based configuration for the AQL builder.
//!
//! Example configuration:
//! ```toml
//! [builder]
//! default_table = "flows"
//! order_dir = "ASC"
//! default_time = "LAST 24 HOURS"
//!
//! [server]
//! host = "0.0.0.0"
//! port = 8080
//!
//! [clipboard]
//! enabled = true
//!
//! [[clipboard.commands]]
//! program = "wl-copy"
//! args = []
//! ```

use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use crate::query::{ClauseSet, SortDir, Table, TimeClause};

/// Environment variable naming an explicit config file.
pub const CONFIG_ENV_VAR: &str = "AQL_BUILDER_CONFIG";

/// Error type for settings.
#[derive(Debug, thiserror::Error)]
pub enum SettingsError {
    #[error("Config file not found: {0}")]
    FileNotFound(PathBuf),

    #[error("Failed to read config file: {0}")]
    ReadError(#[from] std::io::Error),

    #[error("Failed to parse config file: {0}")]
    ParseError(#[from] toml::de::Error),

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
}

/// Root configuration structure.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct Settings {
    /// Defaults for new queries.
    pub builder: BuilderSettings,

    /// HTTP API settings.
    pub server: ServerSettings,

    /// Clipboard integration.
    pub clipboard: ClipboardSettings,
}

/// Defaults applied to every new query.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct BuilderSettings {
    /// Table a fresh query reads from.
    pub default_table: Table,

    /// ORDER BY direction when none is chosen.
    pub order_dir: SortDir,

    /// Time clause a fresh query starts with (e.g. "LAST 24 HOURS").
    pub default_time: Option<String>,
}

impl BuilderSettings {
    /// A fresh clause set with these defaults applied.
    pub fn new_clause_set(&self) -> ClauseSet {
        let mut clauses = ClauseSet::new().from(self.default_table);
        clauses.order_dir = self.order_dir;
        if let Some(time) = self.default_time.as_deref().map(str::trim) {
            if !time.is_empty() {
                clauses.set_time(TimeClause::raw(time));
            }
        }
        clauses
    }
}

/// HTTP server configuration.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct ServerSettings {
    pub host: String,
    pub port: u16,
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 5000,
        }
    }
}

/// Clipboard configuration.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct ClipboardSettings {
    /// Whether copy actions are offered at all.
    pub enabled: bool,

    /// Commands tried in order; the text is written to their stdin.
    pub commands: Vec<ClipboardCommand>,
}

impl Default for ClipboardSettings {
    fn default() -> Self {
        Self {
            enabled: true,
            commands: vec![
                ClipboardCommand::new("xclip", &["-selection", "clipboard"]),
                ClipboardCommand::new("xsel", &["--clipboard", "--input"]),
            ],
        }
    }
}

/// An external program that reads clipboard content from stdin.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct ClipboardCommand {
    pub program: String,
    #[serde(default)]
    pub args: Vec<String>,
}

impl ClipboardCommand {
    pub fn new(program: &str, args: &[&str]) -> Self {
        Self {
            program: program.to_string(),
            args: args.iter().map(|a| a.to_string()).collect(),
        }
    }
}

impl Settings {
    /// Load settings from a TOML file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, SettingsError> {
        let path = path.as_ref();
        if !path.exists() {
            return Err(SettingsError::FileNotFound(path.to_path_buf()));
        }

        let content = fs::read_to_string(path)?;
        Self::from_toml(&content)
    }

    /// Parse settings from TOML text.
    pub fn from_toml(content: &str) -> Result<Self, SettingsError> {
        let settings: Settings = toml::from_str(content)?;
        settings.check()?;
        Ok(settings)
    }

    /// Load settings from the default config file locations.
    ///
    /// Searches in order:
    /// 1. Environment variable `AQL_BUILDER_CONFIG`
    /// 2. `./aql-builder.toml`
    /// 3. `~/.config/aql-builder/config.toml`
    pub fn load() -> Result<Self, SettingsError> {
        if let Ok(path) = env::var(CONFIG_ENV_VAR) {
            tracing::debug!(path = %path, "loading settings from {}", CONFIG_ENV_VAR);
            return Self::from_file(&path);
        }

        let local_config = PathBuf::from("aql-builder.toml");
        if local_config.exists() {
            tracing::debug!(path = %local_config.display(), "loading local settings");
            return Self::from_file(&local_config);
        }

        if let Some(config_dir) = dirs::config_dir() {
            let user_config = config_dir.join("aql-builder").join("config.toml");
            if user_config.exists() {
                tracing::debug!(path = %user_config.display(), "loading user settings");
                return Self::from_file(&user_config);
            }
        }

        Ok(Settings::default())
    }

    fn check(&self) -> Result<(), SettingsError> {
        if self.server.host.trim().is_empty() {
            return Err(SettingsError::InvalidConfig(
                "server.host must not be empty".to_string(),
            ));
        }
        if let Some(cmd) = self
            .clipboard
            .commands
            .iter()
            .find(|c| c.program.trim().is_empty())
        {
            return Err(SettingsError::InvalidConfig(format!(
                "clipboard command with empty program (args: {:?})",
                cmd.args
            )));
        }
        Ok(())
    }
}
