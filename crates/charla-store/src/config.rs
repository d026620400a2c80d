use std::path::{Path, PathBuf};

use charla_core::{keys, Locale};
use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

const APP_DIR: &str = "com.charla.chat";

/// Settings for a file-backed [`MessageStore`](crate::MessageStore).
///
/// Every field has a default, so an empty JSON object is a valid config.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct StoreConfig {
    /// Directory holding the slot files. `None` means the platform data
    /// directory.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub storage_dir: Option<PathBuf>,
    pub storage_key: String,
    pub locale: Locale,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            storage_dir: None,
            storage_key: keys::CHAT_HISTORY.to_string(),
            locale: Locale::default(),
        }
    }
}

impl StoreConfig {
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let config: StoreConfig = serde_json::from_str(&contents)?;
        config.validate()?;

        tracing::debug!(path = %path.display(), locale = %config.locale, "store config loaded");
        Ok(config)
    }

    pub fn save(&self, path: &Path) -> Result<(), ConfigError> {
        self.validate()?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let json = serde_json::to_string_pretty(self)?;
        let tmp_path = path.with_extension("json.tmp");
        std::fs::write(&tmp_path, json.as_bytes())?;
        std::fs::rename(&tmp_path, path)?;

        tracing::info!(path = %path.display(), "store config saved");
        Ok(())
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if !keys::is_valid_key(&self.storage_key) {
            return Err(ConfigError::InvalidKey(self.storage_key.clone()));
        }
        Ok(())
    }

    /// The configured directory, or the platform data directory.
    pub fn resolve_storage_dir(&self) -> Result<PathBuf, ConfigError> {
        match &self.storage_dir {
            Some(dir) => Ok(dir.clone()),
            None => default_storage_dir(),
        }
    }
}

pub fn default_storage_dir() -> Result<PathBuf, ConfigError> {
    let base = dirs::data_dir().ok_or(ConfigError::NoDataDir)?;
    Ok(base.join(APP_DIR))
}
