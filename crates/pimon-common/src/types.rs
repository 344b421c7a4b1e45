use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One point-in-time metrics reading from a single host.
///
/// Built fresh by the agent on every request and consumed verbatim by the
/// dashboard poller; never persisted anywhere.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Snapshot {
    pub hostname: String,
    /// Best-effort outbound IPv4 address ("unknown" when no route exists).
    pub ip: String,
    /// 设备型号（如 "Raspberry Pi 4 Model B Rev 1.4"）
    pub model: String,
    pub timestamp: DateTime<Utc>,
    pub cpu: CpuMetrics,
    pub memory: MemoryMetrics,
    pub disk: DiskMetrics,
    /// Human-readable uptime, e.g. `"3d 4h 12m"`; `"unknown"` when unreadable.
    pub uptime: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CpuMetrics {
    /// Instantaneous usage over the last sampling interval, 0–100.
    pub usage_percent: f64,
    /// 核心温度（摄氏度）；无热区的板子为 null
    pub temperature: Option<f64>,
    /// 1, 5 and 15 minute load averages.
    pub load_average: [f64; 3],
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MemoryMetrics {
    pub total_mb: u64,
    pub used_mb: u64,
    pub available_mb: u64,
    pub percent: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DiskMetrics {
    pub total_gb: f64,
    pub used_gb: f64,
    pub free_gb: f64,
    pub percent: f64,
}

/// Last known state of one monitored host, as stored in the dashboard's
/// fleet map and served by `/api/metrics`.
///
/// The `status` field doubles as the variant tag on the wire. A host that
/// stops answering collapses to the minimal `Offline` shape: earlier
/// snapshot fields are dropped, not kept around as stale data.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "lowercase")]
pub enum FleetEntry {
    /// The last poll succeeded.
    Online {
        #[serde(flatten)]
        snapshot: Snapshot,
        last_seen: DateTime<Utc>,
    },
    /// The agent could not be reached (connect failure or timeout).
    Offline { hostname: String, ip: String },
    /// The agent answered with something that was not a snapshot.
    Error {
        hostname: String,
        ip: String,
        error: String,
    },
}
