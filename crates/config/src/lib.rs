use serde::Deserialize;
use std::path::Path;

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub league: String,
    pub api: ApiConfig,
    pub storage: StorageConfig,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ApiConfig {
    pub base_url: String,
    /// Fixed top-N ladder window; the upstream caps at 200 per request.
    pub limit: u32,
    pub timeout_secs: u64,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct StorageConfig {
    pub data_dir: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            league: "Standard".to_string(),
            api: ApiConfig::default(),
            storage: StorageConfig::default(),
        }
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: "https://api.pathofexile.com/ladders".to_string(),
            limit: 200,
            timeout_secs: 30,
        }
    }
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            data_dir: "data".to_string(),
        }
    }
}

impl AppConfig {
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::IoError(e.to_string()))?;
        let mut config: AppConfig =
            toml::from_str(&content).map_err(|e| ConfigError::ParseError(e.to_string()))?;
        config.apply_env();
        Ok(config)
    }

    /// Built-in defaults with env overrides; used when no config file
    /// exists (the common case for the scheduled runner).
    pub fn from_env() -> Self {
        let mut config = AppConfig::default();
        config.apply_env();
        config
    }

    fn apply_env(&mut self) {
        if let Ok(league) = std::env::var("LADDER_LEAGUE") {
            if !league.is_empty() {
                self.league = league;
            }
        }
        if let Ok(dir) = std::env::var("LADDER_DATA_DIR") {
            if !dir.is_empty() {
                self.storage.data_dir = dir;
            }
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    IoError(String),
    #[error("Parse error: {0}")]
    ParseError(String),
}

// ── Tests ───────────────────────────────────────────────────────────
