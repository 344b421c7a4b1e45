use crate::round1;
use pimon_common::types::MemoryMetrics;
use std::fs;
use std::path::Path;

/// Memory usage from the meminfo key/value file (values in kB).
///
/// Used memory is `MemTotal - MemAvailable`, preferring `MemAvailable`
/// and falling back to `MemFree` on kernels that predate it. Degrades to
/// all-zero metrics when the file is unreadable, malformed, or reports a
/// zero total.
pub fn memory_info(meminfo_path: &Path) -> MemoryMetrics {
    read_memory(meminfo_path).unwrap_or(MemoryMetrics {
        total_mb: 0,
        used_mb: 0,
        available_mb: 0,
        percent: 0.0,
    })
}

fn read_memory(meminfo_path: &Path) -> Option<MemoryMetrics> {
    let content = fs::read_to_string(meminfo_path).ok()?;

    let mut total_kb = None;
    let mut available_kb = None;
    let mut free_kb = None;
    for line in content.lines() {
        let mut parts = line.split_whitespace();
        let (Some(key), Some(value)) = (parts.next(), parts.next()) else {
            continue;
        };
        match key {
            "MemTotal:" => total_kb = value.parse::<f64>().ok(),
            "MemAvailable:" => available_kb = value.parse::<f64>().ok(),
            "MemFree:" => free_kb = value.parse::<f64>().ok(),
            _ => {}
        }
    }

    let total = total_kb? / 1024.0;
    if total <= 0.0 {
        return None;
    }
    let available = available_kb.or(free_kb).unwrap_or(0.0) / 1024.0;
    let used = (total - available).max(0.0);

    Some(MemoryMetrics {
        total_mb: total.round() as u64,
        used_mb: used.round() as u64,
        available_mb: available.round() as u64,
        percent: round1(used / total * 100.0),
    })
}
