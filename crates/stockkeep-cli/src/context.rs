use anyhow::Result;
use once_cell::unsync::OnceCell;
use std::path::{Path, PathBuf};
use stockkeep_runtime::config::{CONFIG_FILE, LOG_FILE};
use stockkeep_runtime::{Config, InventoryWorkspace};

use crate::types::OutputFormat;

/// Per-invocation settings shared by every handler.
pub struct ExecutionContext {
    data_dir: PathBuf,
    config: OnceCell<Config>,
    pub format: OutputFormat,
}

impl ExecutionContext {
    pub fn new(data_dir: PathBuf, format: OutputFormat) -> Self {
        Self {
            data_dir,
            config: OnceCell::new(),
            format,
        }
    }

    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    pub fn config_path(&self) -> PathBuf {
        self.data_dir.join(CONFIG_FILE)
    }

    pub fn log_path(&self) -> PathBuf {
        self.data_dir.join(LOG_FILE)
    }

    pub fn config(&self) -> Result<&Config> {
        self.config
            .get_or_try_init(|| Ok(Config::load_from(&self.config_path())?))
    }

    pub fn database_path(&self) -> Result<PathBuf> {
        Ok(self.config()?.database_path(&self.data_dir))
    }

    /// Open the store; a failure here is fatal for the command.
    pub fn open_workspace(&self) -> Result<InventoryWorkspace> {
        let db_path = self.database_path()?;
        tracing::debug!(path = %db_path.display(), "opening inventory");
        Ok(InventoryWorkspace::open(&db_path)?)
    }

    pub fn json(&self) -> bool {
        self.format == OutputFormat::Json
    }
}
