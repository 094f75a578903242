use crate::error::{Result, UsersError};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

const DEFAULT_PROMPT: &str = "How can I help you?";

/// Session configuration, optionally read from a JSON file.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct AppConfig {
    /// Question asked when waiting for the next command
    #[serde(default = "default_prompt")]
    pub prompt: String,

    /// Print the welcome banner and action list at startup
    #[serde(default = "default_true")]
    pub show_banner: bool,

    /// Report unrecognized commands instead of silently re-prompting
    #[serde(default = "default_true")]
    pub report_unknown_commands: bool,

    #[serde(default = "default_true")]
    pub color: bool,
}

fn default_prompt() -> String {
    DEFAULT_PROMPT.to_string()
}

fn default_true() -> bool {
    true
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            prompt: default_prompt(),
            show_banner: true,
            report_unknown_commands: true,
            color: true,
        }
    }
}

impl AppConfig {
    /// Load config from the given file, or return defaults if it doesn't exist
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();

        if !path.exists() {
            log::info!("no config at {}, using defaults", path.display());
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path)?;
        let config: AppConfig = serde_json::from_str(&content)?;
        if config.prompt.trim().is_empty() {
            return Err(UsersError::Config(format!(
                "{}: prompt must not be empty",
                path.display()
            )));
        }
        log::info!("loaded config from {}", path.display());
        Ok(config)
    }

    /// Like [`AppConfig::load`], but a missing file is an error.
    pub fn load_required<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        if !path.is_file() {
            return Err(UsersError::Config(format!(
                "{}: no such config file",
                path.display()
            )));
        }
        Self::load(path)
    }

    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let path = path.as_ref();

        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                fs::create_dir_all(parent)?;
            }
        }

        let content = serde_json::to_string_pretty(self)?;
        fs::write(path, content)?;
        Ok(())
    }
}
