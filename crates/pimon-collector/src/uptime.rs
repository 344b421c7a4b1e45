use std::fs;
use std::path::Path;

/// Human-readable uptime from the uptime pseudo-file (first field,
/// seconds). Returns `"unknown"` when the file is unreadable.
pub fn uptime(uptime_path: &Path) -> String {
    read_uptime(uptime_path).unwrap_or_else(|| "unknown".to_string())
}

fn read_uptime(uptime_path: &Path) -> Option<String> {
    let content = fs::read_to_string(uptime_path).ok()?;
    let seconds: f64 = content.split_whitespace().next()?.parse().ok()?;
    Some(format_duration(seconds))
}

/// Compact a second count into the dashboard's uptime string, dropping
/// leading zero units.
///
/// # Examples
///
/// ```
/// use pimon_collector::uptime::format_duration;
///
/// assert_eq!(format_duration(93784.0), "1d 2h 3m");
/// assert_eq!(format_duration(3784.0), "1h 3m");
/// assert_eq!(format_duration(59.0), "0m");
/// ```
pub fn format_duration(seconds: f64) -> String {
    let days = (seconds / 86400.0) as u64;
    let hours = ((seconds % 86400.0) / 3600.0) as u64;
    let minutes = ((seconds % 3600.0) / 60.0) as u64;

    if days > 0 {
        format!("{days}d {hours}h {minutes}m")
    } else if hours > 0 {
        format!("{hours}h {minutes}m")
    } else {
        format!("{minutes}m")
    }
}
