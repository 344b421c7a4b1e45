use std::fs;
use std::path::Path;

/// 1/5/15 minute load averages from the load-average pseudo-file.
/// Degrades to `[0.0, 0.0, 0.0]` when unreadable.
pub fn load_average(loadavg_path: &Path) -> [f64; 3] {
    read_loads(loadavg_path).unwrap_or([0.0; 3])
}

fn read_loads(loadavg_path: &Path) -> Option<[f64; 3]> {
    let content = fs::read_to_string(loadavg_path).ok()?;
    let mut fields = content.split_whitespace();
    let mut loads = [0.0; 3];
    for slot in &mut loads {
        *slot = fields.next()?.parse().ok()?;
    }
    Some(loads)
}
