//! Global chorecal configuration.

use std::path::{Path, PathBuf};

use ::config::{Config, File};
use serde::{Deserialize, Serialize};

use crate::error::{ChoreCalError, ChoreCalResult};
use crate::storage::JsonFileStore;

static DEFAULT_DATA_DIR: &str = "~/.chorecal";

fn default_data_dir() -> PathBuf {
    PathBuf::from(DEFAULT_DATA_DIR)
}

fn is_default_data_dir(p: &PathBuf) -> bool {
    *p == default_data_dir()
}

/// Configuration at ~/.config/chorecal/config.toml
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct ChoreCalConfig {
    /// Where chores.json and teamMembers.json live
    #[serde(default = "default_data_dir", skip_serializing_if = "is_default_data_dir")]
    pub data_dir: PathBuf,

    /// Member name used for new chores when no assignee is given
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default_assignee: Option<String>,
}

impl Default for ChoreCalConfig {
    fn default() -> Self {
        ChoreCalConfig {
            data_dir: default_data_dir(),
            default_assignee: None,
        }
    }
}

impl ChoreCalConfig {
    pub fn config_path() -> ChoreCalResult<PathBuf> {
        let config_dir = dirs::config_dir()
            .ok_or_else(|| ChoreCalError::Config("Could not determine config directory".into()))?
            .join("chorecal");

        Ok(config_dir.join("config.toml"))
    }

    /// Load ~/.config/chorecal/config.toml, writing a commented default on first run.
    pub fn load() -> ChoreCalResult<Self> {
        let config_path = Self::config_path()?;

        if !config_path.exists() {
            Self::create_default_config(&config_path)?;
        }

        Self::load_from(&config_path)
    }

    pub fn load_from(path: &Path) -> ChoreCalResult<Self> {
        tracing::debug!("Loading configuration from {}", path.display());

        Config::builder()
            .add_source(File::from(path).required(false))
            .build()
            .map_err(|e| ChoreCalError::Config(e.to_string()))?
            .try_deserialize()
            .map_err(|e| ChoreCalError::Config(e.to_string()))
    }

    /// Data directory with `~` expanded.
    pub fn data_path(&self) -> PathBuf {
        let full_path_str = shellexpand::tilde(&self.data_dir.to_string_lossy()).into_owned();

        PathBuf::from(full_path_str)
    }

    /// File-backed storage rooted at the data directory.
    pub fn storage(&self) -> JsonFileStore {
        JsonFileStore::new(self.data_path())
    }

    pub fn save_to(&self, path: &Path) -> ChoreCalResult<()> {
        let content =
            toml::to_string_pretty(self).map_err(|e| ChoreCalError::Config(e.to_string()))?;

        std::fs::write(path, content)
            .map_err(|e| ChoreCalError::Config(format!("Could not write config file: {e}")))?;

        Ok(())
    }

    /// Create a default config file with all options commented out.
    pub fn create_default_config(path: &Path) -> ChoreCalResult<()> {
        let contents = format!(
            "\
# chorecal configuration

# Where chores and team members are stored:
# data_dir = \"{}\"

# Member assigned to new chores when --assignee is omitted:
# default_assignee = \"Alice\"
",
            DEFAULT_DATA_DIR
        );

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| {
                ChoreCalError::Config(format!("Could not create config directory: {e}"))
            })?;
        }

        std::fs::write(path, contents)
            .map_err(|e| ChoreCalError::Config(format!("Could not write config file: {e}")))?;

        Ok(())
    }
}
