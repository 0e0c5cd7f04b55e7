use serde::{Deserialize, Serialize};

use std::path::{Path, PathBuf};
use std::sync::OnceLock;

/// Environment variable that overrides `api.base_url`.
pub const API_URL_ENV: &str = "FRONTDOOR_API_URL";

const CONFIG_FILE: &str = "config.json";

static CONFIG: OnceLock<AppConfig> = OnceLock::new();

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub api: ApiConfig,
    pub storage: StorageConfig,
    pub window: WindowConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ApiConfig {
    /// Backend root, e.g. `http://localhost:8080`. `None` disables every backend call.
    pub base_url: Option<String>,
    pub timeout_secs: u64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StorageConfig {
    pub file_name: String,
    pub token_key: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WindowConfig {
    pub title: String,
    pub width: f64,
    pub height: f64,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: None,
            timeout_secs: 10,
        }
    }
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            file_name: "local_storage.json".to_string(),
            token_key: "token".to_string(),
        }
    }
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            title: "Frontdoor".to_string(),
            width: 1024.0,
            height: 720.0,
        }
    }
}

impl AppConfig {
    /// Loads the config from `dir`, writing the defaults out if the file is missing.
    pub fn load_or_create(dir: &Path) -> Result<Self, ConfigError> {
        let path = dir.join(CONFIG_FILE);

        if path.exists() {
            let content = std::fs::read_to_string(&path).map_err(ConfigError::IoError)?;
            return serde_json::from_str(&content).map_err(ConfigError::SerdeError);
        }

        let config = Self::default();
        config.save(dir)?;
        Ok(config)
    }

    pub fn save(&self, dir: &Path) -> Result<(), ConfigError> {
        std::fs::create_dir_all(dir).map_err(ConfigError::IoError)?;
        let content = serde_json::to_string_pretty(self).map_err(ConfigError::SerdeError)?;
        std::fs::write(dir.join(CONFIG_FILE), content).map_err(ConfigError::IoError)
    }

    /// Replaces `api.base_url` when an override is given. Blank overrides are ignored.
    #[must_use]
    pub fn with_api_override(mut self, base_url: Option<String>) -> Self {
        if let Some(url) = base_url.filter(|url| !url.trim().is_empty()) {
            self.api.base_url = Some(url.trim().to_string());
        }
        self
    }

    pub fn storage_path(&self, dir: &Path) -> PathBuf {
        dir.join(&self.storage.file_name)
    }
}

/// Installs the process-wide config. Only the first call has an effect.
pub fn init(config: AppConfig) {
    if CONFIG.set(config).is_err() {
        log::warn!("Config already initialized, ignoring");
    }
}

/// Returns the process-wide config, or the defaults when `init` was never called.
pub fn get() -> &'static AppConfig {
    CONFIG.get_or_init(AppConfig::default)
}

#[derive(Debug)]
pub enum ConfigError {
    IoError(std::io::Error),
    SerdeError(serde_json::Error),
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::IoError(err) => write!(f, "IO error: {}", err),
            ConfigError::SerdeError(err) => write!(f, "Serialization error: {}", err),
        }
    }
}

impl std::error::Error for ConfigError {}
