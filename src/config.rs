use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::constants::*;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub storage: StorageConfig,
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StorageConfig {
    pub data_file: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    pub verbosity: String,
    pub log_file: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            storage: StorageConfig {
                data_file: DEFAULT_DATA_FILE.to_string(),
            },
            logging: LoggingConfig {
                verbosity: DEFAULT_VERBOSITY.to_string(),
                log_file: DEFAULT_LOG_FILE.to_string(),
            },
        }
    }
}

impl Config {
    /// Loads configuration from a JSON file. A missing file is not an error:
    /// the defaults apply, so the tool runs without any setup.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path)?;
        let config: Self = serde_json::from_str(&content)?;
        config.validate()?;

        Ok(config)
    }

    pub fn to_file(&self, path: &Path) -> Result<()> {
        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    pub fn validate(&self) -> Result<()> {
        if self.storage.data_file.trim().is_empty() {
            anyhow::bail!("data_file must not be empty");
        }

        if !matches!(
            self.logging.verbosity.as_str(),
            "silent" | "normal" | "verbose"
        ) {
            anyhow::bail!("verbosity must be 'silent', 'normal', or 'verbose'");
        }

        Ok(())
    }
}
