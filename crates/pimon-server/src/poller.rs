use crate::state::AppState;
use chrono::Utc;
use pimon_common::types::{FleetEntry, Snapshot};
use std::time::Duration;
use tokio::time::interval;

/// Failure modes of a single poll against one agent.
///
/// The distinction drives the fleet status: a host we cannot reach is
/// `offline`, a host that answers garbage is `error`.
#[derive(Debug, thiserror::Error)]
pub enum PollError {
    /// Connect failure, timeout, or a non-success HTTP status.
    #[error("agent unreachable: {0}")]
    Unreachable(#[from] reqwest::Error),
    /// The response body did not decode as a snapshot.
    #[error("invalid snapshot payload: {0}")]
    Malformed(#[from] serde_json::Error),
}

/// Background producer: sweeps every configured host on a fixed interval
/// and replaces that host's fleet entry with the outcome.
pub struct Poller {
    client: reqwest::Client,
    state: AppState,
}

impl Poller {
    pub fn new(state: AppState) -> anyhow::Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(state.config.poll_timeout_secs))
            .build()?;
        Ok(Self { client, state })
    }

    /// Poll loop. Never returns; the owning task is simply aborted at
    /// shutdown since the loop holds nothing needing cleanup.
    pub async fn run(self) {
        let mut tick = interval(Duration::from_secs(self.state.config.poll_interval_secs));
        loop {
            tick.tick().await;
            self.sweep().await;
        }
    }

    /// One pass over all configured hosts, sequentially. Each host's
    /// entry is swapped in under the lock as soon as its poll finishes,
    /// so API readers never see a partially written entry.
    pub async fn sweep(&self) {
        for host in &self.state.config.hosts {
            let entry = self.poll_host(host).await;
            self.state.lock_fleet().insert(host.clone(), entry);
        }
    }

    async fn poll_host(&self, host: &str) -> FleetEntry {
        match self.fetch_snapshot(host).await {
            Ok(snapshot) => FleetEntry::Online {
                snapshot,
                last_seen: Utc::now(),
            },
            Err(PollError::Unreachable(e)) => {
                tracing::debug!(host, error = %e, "agent unreachable");
                FleetEntry::Offline {
                    hostname: host.to_string(),
                    ip: host.to_string(),
                }
            }
            Err(e) => {
                tracing::warn!(host, error = %e, "agent returned a bad snapshot");
                FleetEntry::Error {
                    hostname: host.to_string(),
                    ip: host.to_string(),
                    error: e.to_string(),
                }
            }
        }
    }

    async fn fetch_snapshot(&self, host: &str) -> Result<Snapshot, PollError> {
        let url = format!("http://{host}:{}/metrics", self.state.config.agent_port);
        let bytes = self
            .client
            .get(&url)
            .send()
            .await?
            .error_for_status()?
            .bytes()
            .await?;
        Ok(serde_json::from_slice(&bytes)?)
    }
}
