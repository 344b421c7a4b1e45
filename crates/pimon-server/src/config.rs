use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_http_port")]
    pub http_port: u16,
    /// Agent 监听端口（每台被监控主机上相同）
    #[serde(default = "default_agent_port")]
    pub agent_port: u16,
    /// Seconds between full sweeps over all hosts.
    #[serde(default = "default_poll_interval_secs")]
    pub poll_interval_secs: u64,
    /// Per-fetch timeout so one dead host cannot stall a sweep.
    #[serde(default = "default_poll_timeout_secs")]
    pub poll_timeout_secs: u64,
    /// Addresses (IPs or hostnames) of the monitored agents.
    #[serde(default)]
    pub hosts: Vec<String>,
}

fn default_http_port() -> u16 {
    8080
}

fn default_agent_port() -> u16 {
    5555
}

fn default_poll_interval_secs() -> u64 {
    5
}

fn default_poll_timeout_secs() -> u64 {
    3
}

impl ServerConfig {
    pub fn load(path: &str) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: Self = toml::from_str(&content)?;
        Ok(config)
    }
}
