use anyhow::Context;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

pub const DEFAULT_PORT: u16 = 3000;
pub const DEFAULT_SWEEP_DURATION: i64 = 60;

#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub port: u16,
    pub default_duration: i64,
    /// Seed for reproducible payloads; omitted means OS entropy.
    pub seed: Option<u64>,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            port: DEFAULT_PORT,
            default_duration: DEFAULT_SWEEP_DURATION,
            seed: None,
        }
    }
}

impl ServerConfig {
    pub fn load<P: AsRef<Path>>(path: P) -> anyhow::Result<Self> {
        let path_ref = path.as_ref();
        let contents = fs::read_to_string(path_ref)
            .with_context(|| format!("reading server config {}", path_ref.display()))?;
        let config: ServerConfig = serde_yaml::from_str(&contents)
            .with_context(|| format!("parsing server config {}", path_ref.display()))?;
        Ok(config)
    }

    pub fn from_args(port: u16, default_duration: i64, seed: Option<u64>) -> Self {
        Self {
            port,
            default_duration,
            seed,
        }
    }

    /// Boundary rule for the sweep endpoint: absent or non-positive
    /// requests fall back to the configured default. The core itself
    /// still rejects non-positive counts.
    pub fn effective_duration(&self, requested: Option<i64>) -> i64 {
        requested
            .filter(|duration| *duration > 0)
            .unwrap_or(self.default_duration)
    }
}
