//! Global slotbook configuration.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::error::{SlotBookError, SlotBookResult};

static DEFAULT_DATA_PATH: &str = "~/.local/share/slotbook";

fn default_data_path() -> PathBuf {
    PathBuf::from(DEFAULT_DATA_PATH)
}

fn is_default_data_path(p: &PathBuf) -> bool {
    *p == default_data_path()
}

/// Global configuration at ~/.config/slotbook/config.toml
#[derive(Serialize, Deserialize, Clone)]
pub struct SlotbookConfig {
    #[serde(default = "default_data_path", skip_serializing_if = "is_default_data_path")]
    pub data_dir: PathBuf,
}

impl Default for SlotbookConfig {
    fn default() -> Self {
        SlotbookConfig {
            data_dir: default_data_path(),
        }
    }
}

impl SlotbookConfig {
    pub fn config_path() -> SlotBookResult<PathBuf> {
        let config_dir = dirs::config_dir()
            .ok_or_else(|| SlotBookError::Config("Could not determine config directory".into()))?
            .join("slotbook");

        Ok(config_dir.join("config.toml"))
    }

    /// Load the global config, writing a commented-out default file first if
    /// none exists yet.
    pub fn load() -> SlotBookResult<Self> {
        let config_path = Self::config_path()?;

        if !config_path.exists() {
            Self::create_default_config(&config_path)?;
        }

        let config: SlotbookConfig = config::Config::builder()
            .add_source(config::File::from(config_path).required(false))
            .build()
            .map_err(|e| SlotBookError::Config(e.to_string()))?
            .try_deserialize()
            .map_err(|e| SlotBookError::Config(e.to_string()))?;

        Ok(config)
    }

    /// The data directory with `~` expanded.
    pub fn data_path(&self) -> PathBuf {
        let full_path_str = shellexpand::tilde(&self.data_dir.to_string_lossy()).into_owned();

        PathBuf::from(full_path_str)
    }

    /// The data directory in display-friendly form, keeping `~` instead of
    /// expanding to the full home directory.
    pub fn display_path(&self) -> PathBuf {
        self.data_dir.clone()
    }

    /// Create a default config file with all options commented out.
    pub fn create_default_config(path: &std::path::Path) -> SlotBookResult<()> {
        let contents = format!(
            "\
# slotbook configuration

# Where your availability data lives:
# data_dir = \"{}\"
",
            DEFAULT_DATA_PATH
        );

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| {
                SlotBookError::Config(format!("Could not create config directory: {e}"))
            })?;
        }

        std::fs::write(path, contents)
            .map_err(|e| SlotBookError::Config(format!("Could not write config file: {e}")))?;

        Ok(())
    }
}

// =============================================================================
// Tests
// =============================================================================
