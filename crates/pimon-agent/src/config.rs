use serde::Deserialize;
use std::path::Path;

#[derive(Debug, Deserialize)]
pub struct AgentConfig {
    #[serde(default = "default_port")]
    pub port: u16,
}

fn default_port() -> u16 {
    5555
}

impl Default for AgentConfig {
    fn default() -> Self {
        Self {
            port: default_port(),
        }
    }
}

impl AgentConfig {
    /// Load the config file, or fall back to defaults when it does not
    /// exist: the agent must run with zero setup on a fresh host.
    pub fn load(path: &str) -> anyhow::Result<Self> {
        if !Path::new(path).exists() {
            tracing::info!(path, "no config file, using defaults");
            return Ok(Self::default());
        }
        let content = std::fs::read_to_string(path)?;
        let config: Self = toml::from_str(&content)?;
        Ok(config)
    }
}
