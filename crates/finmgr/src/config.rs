//! User configuration stored as `{data_dir}/config.yaml`

use std::path::{Path, PathBuf};

use color_eyre::eyre::{WrapErr, eyre};
use serde::{Deserialize, Serialize};

use crate::io::atomic_write;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Table,
    Json,
}

/// Every field falls back to its default when absent from the file
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub output: OutputFormat,
    /// Used when `--log-level` is not given
    pub log_level: String,
    /// Print every month of an amortization in table output
    pub show_schedule: bool,
    /// Look-back window for `history` when `--days` is not given
    pub history_days: i64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            output: OutputFormat::Table,
            log_level: "info".to_string(),
            show_schedule: true,
            history_days: 30,
        }
    }
}

impl Config {
    pub const FILE_NAME: &'static str = "config.yaml";

    pub fn path(data_dir: &Path) -> PathBuf {
        data_dir.join(Self::FILE_NAME)
    }

    /// Load from the data directory, or defaults if the file is missing or
    /// cannot be parsed.
    pub fn load_or_default(data_dir: &Path) -> Self {
        let path = Self::path(data_dir);
        if !path.exists() {
            return Self::default();
        }

        match std::fs::read_to_string(&path) {
            Ok(content) => serde_saphyr::from_str(&content).unwrap_or_default(),
            Err(_) => Self::default(),
        }
    }

    /// Write to the data directory, creating it if needed
    pub fn save(&self, data_dir: &Path) -> color_eyre::Result<PathBuf> {
        std::fs::create_dir_all(data_dir)
            .wrap_err_with(|| format!("failed to create {}", data_dir.display()))?;

        let path = Self::path(data_dir);
        let yaml = serde_saphyr::to_string(self)
            .map_err(|e| eyre!("failed to serialize configuration: {e}"))?;

        atomic_write(&path, &yaml)
            .wrap_err_with(|| format!("failed to write {}", path.display()))?;
        Ok(path)
    }
}
