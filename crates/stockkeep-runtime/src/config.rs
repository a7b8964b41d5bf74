use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

pub const DEFAULT_DATABASE_FILE: &str = "inventory.db";
pub const CONFIG_FILE: &str = "config.toml";
pub const LOG_FILE: &str = "stockkeep.log";

/// Resolve the data directory based on priority:
/// 1. Explicit path (with tilde expansion)
/// 2. STOCKKEEP_PATH environment variable (with tilde expansion)
/// 3. System data directory (recommended default)
/// 4. ~/.stockkeep (fallback for systems without a standard data directory)
pub fn resolve_data_dir(explicit_path: Option<&str>) -> Result<PathBuf> {
    // Priority 1: Explicit path
    if let Some(path) = explicit_path {
        return Ok(expand_tilde(path));
    }

    // Priority 2: STOCKKEEP_PATH environment variable
    if let Ok(env_path) = std::env::var("STOCKKEEP_PATH") {
        return Ok(expand_tilde(&env_path));
    }

    // Priority 3: System data directory
    if let Some(data_dir) = dirs::data_dir() {
        return Ok(data_dir.join("stockkeep"));
    }

    // Priority 4: ~/.stockkeep
    if let Some(home) = std::env::var_os("HOME") {
        return Ok(PathBuf::from(home).join(".stockkeep"));
    }

    Err(Error::Config(
        "Could not determine data directory: no HOME directory or system data directory found"
            .to_string(),
    ))
}

/// Expand tilde (~) in paths to the user's home directory
pub fn expand_tilde(path: &str) -> PathBuf {
    if let Some(stripped) = path.strip_prefix("~/")
        && let Some(home) = std::env::var_os("HOME")
    {
        return PathBuf::from(home).join(stripped);
    }
    PathBuf::from(path)
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct UiConfig {
    /// Event poll interval of the terminal UI
    pub tick_millis: u64,
    /// How long a notice stays on screen
    pub notice_seconds: u64,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            tick_millis: 250,
            notice_seconds: 4,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Non-cancelable delay before the main view appears
    pub splash_seconds: u64,
    /// Database file name, relative to the data directory
    pub database_file: String,
    pub ui: UiConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            splash_seconds: 3,
            database_file: DEFAULT_DATABASE_FILE.to_string(),
            ui: UiConfig::default(),
        }
    }
}

impl Config {
    /// Missing file means defaults.
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content)?;
        Ok(config)
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    pub fn database_path(&self, data_dir: &Path) -> PathBuf {
        data_dir.join(&self.database_file)
    }
}
