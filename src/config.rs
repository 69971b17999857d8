use anyhow::{anyhow, Result};
use serde::{Deserialize, Serialize};
use tokio::fs;
use tracing::{debug, info};

/// Config file looked up next to the binary's working directory.
pub const DEFAULT_CONFIG_PATH: &str = "config.toml";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Base URL of the control panel
    #[serde(default = "default_panel_url")]
    pub panel_url: String,
    /// External executable that produces the backup artifact
    #[serde(default = "default_backup_command")]
    pub backup_command: String,
    // Supplied via the API_KEY environment variable, never via the file
    #[serde(skip)]
    pub api_key: String,
}

fn default_panel_url() -> String {
    "https://panel.mc.jared.cloud".to_string()
}

fn default_backup_command() -> String {
    "/root/scripts/backup.sh".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            panel_url: default_panel_url(),
            backup_command: default_backup_command(),
            api_key: String::new(),
        }
    }
}

impl Config {
    /// Loads the optional config file and the API key from the environment.
    /// A missing file falls back to the built-in defaults; a missing API key
    /// is a startup error since no request can be authenticated without it.
    pub async fn load(config_path: &str) -> Result<Self> {
        let mut config = match fs::read_to_string(config_path).await {
            Ok(content) => Self::from_toml(&content)
                .map_err(|e| anyhow!("Failed to parse config {}: {}", config_path, e))?,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                debug!("No config file at {}, using built-in defaults", config_path);
                Self::default()
            }
            Err(e) => return Err(anyhow!("Failed to read config {}: {}", config_path, e)),
        };

        config.api_key = std::env::var("API_KEY")
            .ok()
            .filter(|key| !key.is_empty())
            .ok_or_else(|| anyhow!("API_KEY environment variable is not set"))?;

        info!("Configuration loaded: panel {}", config.panel_url);
        Ok(config)
    }

    fn from_toml(content: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(content)
    }
}
