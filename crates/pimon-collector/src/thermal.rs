use crate::round1;
use std::fs;
use std::path::Path;

/// CPU temperature in °C from a thermal zone file (millidegrees),
/// rounded to one decimal.
///
/// Returns `None` when the zone is absent or unreadable; plenty of
/// hardware simply has no thermal zone, so unlike the other readers the
/// fallback here is a real "not available", not a zero.
pub fn temperature(zone_path: &Path) -> Option<f64> {
    let raw = fs::read_to_string(zone_path).ok()?;
    let millidegrees: i64 = raw.trim().parse().ok()?;
    Some(round1(millidegrees as f64 / 1000.0))
}
