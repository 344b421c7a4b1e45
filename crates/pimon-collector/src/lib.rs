//! Kernel counter readers for the pimon agent.
//!
//! Each reader parses one kernel-exposed source (`/proc`, `/sys`, or the
//! filesystem statistics of the root mount) into a typed value. Readers do
//! not return `Result`: when a source cannot be read or parsed they yield
//! their documented fallback instead, so one bad source can never abort
//! snapshot construction.

pub mod cpu;
pub mod disk;
pub mod identity;
pub mod load;
pub mod memory;
pub mod thermal;
pub mod uptime;


use chrono::Utc;
use pimon_common::types::{CpuMetrics, Snapshot};
use std::path::PathBuf;
use sysinfo::Disks;

/// Filesystem locations of the kernel counter sources.
///
/// Overridable so tests can point the readers at fixture files instead of
/// the live `/proc` and `/sys` trees.
#[derive(Debug, Clone)]
pub struct ProcPaths {
    pub stat: PathBuf,
    pub meminfo: PathBuf,
    pub uptime: PathBuf,
    pub loadavg: PathBuf,
    pub thermal_zone: PathBuf,
    pub device_tree_model: PathBuf,
    pub os_release: PathBuf,
}

impl Default for ProcPaths {
    fn default() -> Self {
        Self {
            stat: PathBuf::from("/proc/stat"),
            meminfo: PathBuf::from("/proc/meminfo"),
            uptime: PathBuf::from("/proc/uptime"),
            loadavg: PathBuf::from("/proc/loadavg"),
            thermal_zone: PathBuf::from("/sys/class/thermal/thermal_zone0/temp"),
            device_tree_model: PathBuf::from("/proc/device-tree/model"),
            os_release: PathBuf::from("/etc/os-release"),
        }
    }
}

/// Builds complete metric snapshots.
///
/// Stateful: CPU usage is a delta over cumulative tick counters, so the
/// previous sample is retained between calls, and the disk list is
/// refreshed in place rather than re-enumerated. The agent keeps one
/// instance behind a mutex so overlapping requests cannot race the tick
/// pair.
pub struct SnapshotCollector {
    paths: ProcPaths,
    cpu: cpu::CpuUsage,
    disks: Disks,
}

impl SnapshotCollector {
    pub fn new(paths: ProcPaths) -> Self {
        Self {
            paths,
            cpu: cpu::CpuUsage::new(),
            disks: Disks::new_with_refreshed_list(),
        }
    }

    /// Read every source and assemble a snapshot stamped with the current
    /// time. Always succeeds; unreadable sources show up as their
    /// fallback values.
    pub fn collect(&mut self) -> Snapshot {
        Snapshot {
            hostname: identity::hostname(),
            ip: identity::outbound_ip(),
            model: identity::model(&self.paths),
            timestamp: Utc::now(),
            cpu: CpuMetrics {
                usage_percent: self.cpu.usage_percent(&self.paths.stat),
                temperature: thermal::temperature(&self.paths.thermal_zone),
                load_average: load::load_average(&self.paths.loadavg),
            },
            memory: memory::memory_info(&self.paths.meminfo),
            disk: disk::disk_info(&mut self.disks),
            uptime: uptime::uptime(&self.paths.uptime),
        }
    }
}

/// Round to one decimal place, the precision everything on the dashboard
/// is displayed with.
pub(crate) fn round1(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}
