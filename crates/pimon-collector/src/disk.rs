use crate::round1;
use pimon_common::types::DiskMetrics;
use std::path::Path;
use sysinfo::Disks;

const BYTES_PER_GB: f64 = 1024.0 * 1024.0 * 1024.0;

/// Disk usage of the root mount, in GB.
///
/// Free space is what an unprivileged process can actually allocate, so
/// `used + free` may come out below `total` (root-reserved blocks).
/// Degrades to all-zero metrics when no root mount is listed.
pub fn disk_info(disks: &mut Disks) -> DiskMetrics {
    disks.refresh();

    let root = disks
        .iter()
        .find(|disk| disk.mount_point() == Path::new("/"));
    let Some(root) = root else {
        return DiskMetrics {
            total_gb: 0.0,
            used_gb: 0.0,
            free_gb: 0.0,
            percent: 0.0,
        };
    };

    let total = root.total_space() as f64 / BYTES_PER_GB;
    let free = root.available_space() as f64 / BYTES_PER_GB;
    let used = (total - free).max(0.0);
    let percent = if total > 0.0 {
        round1(used / total * 100.0)
    } else {
        0.0
    };

    DiskMetrics {
        total_gb: round1(total),
        used_gb: round1(used),
        free_gb: round1(free),
        percent,
    }
}
