use crate::error::{PenzError, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

const CONFIG_FILENAME: &str = "config.json";

/// Configuration for penz, stored in the data directory as config.json
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct PenzConfig {
    /// Display name attached to newly created pens
    #[serde(default = "default_author")]
    pub author: String,

    /// Pause service operations for their simulated network delay
    #[serde(default = "default_simulate_latency")]
    pub simulate_latency: bool,
}

fn default_author() -> String {
    "Anonymous".to_string()
}

fn default_simulate_latency() -> bool {
    true
}

impl Default for PenzConfig {
    fn default() -> Self {
        Self {
            author: default_author(),
            simulate_latency: default_simulate_latency(),
        }
    }
}

impl PenzConfig {
    /// Load config from the given directory, or return defaults if not found
    pub fn load<P: AsRef<Path>>(config_dir: P) -> Result<Self> {
        let config_path = config_dir.as_ref().join(CONFIG_FILENAME);

        if !config_path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&config_path).map_err(PenzError::Io)?;
        let config: PenzConfig = serde_json::from_str(&content).map_err(PenzError::Serialization)?;
        Ok(config)
    }

    /// Save config to the given directory
    pub fn save<P: AsRef<Path>>(&self, config_dir: P) -> Result<()> {
        let config_dir = config_dir.as_ref();

        if !config_dir.exists() {
            fs::create_dir_all(config_dir).map_err(PenzError::Io)?;
        }

        let config_path = config_dir.join(CONFIG_FILENAME);
        let content = serde_json::to_string_pretty(self).map_err(PenzError::Serialization)?;
        fs::write(config_path, content).map_err(PenzError::Io)?;
        Ok(())
    }
}
