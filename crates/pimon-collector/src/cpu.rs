use crate::round1;
use std::fs;
use std::path::Path;
use std::time::Duration;

/// Delay between the two bootstrap samples taken on the very first call.
const BOOTSTRAP_DELAY: Duration = Duration::from_millis(100);

/// One reading of the aggregate `cpu` line: cumulative idle ticks and the
/// cumulative sum of all fields.
#[derive(Debug, Clone, Copy)]
struct TickSample {
    idle: u64,
    total: u64,
}

fn read_ticks(stat_path: &Path) -> Option<TickSample> {
    let content = fs::read_to_string(stat_path).ok()?;
    let line = content.lines().next()?;
    let values = line
        .split_whitespace()
        .skip(1)
        .map(str::parse)
        .collect::<Result<Vec<u64>, _>>()
        .ok()?;
    let idle = *values.get(3)?;
    Some(TickSample {
        idle,
        total: values.iter().sum(),
    })
}

/// CPU usage reader.
///
/// The stat counters are cumulative since boot, so a percentage only
/// exists as the delta between two samples. The previous sample lives
/// here, owned explicitly instead of hiding in a static.
#[derive(Debug, Default)]
pub struct CpuUsage {
    prev: Option<TickSample>,
}

impl CpuUsage {
    pub fn new() -> Self {
        Self { prev: None }
    }

    /// Usage percentage over the interval since the previous call,
    /// rounded to one decimal.
    ///
    /// The first call has no interval to measure yet and synthesizes one
    /// by sleeping [`BOOTSTRAP_DELAY`] between two reads. Returns `0.0`
    /// when the stat line is unreadable or no ticks elapsed between the
    /// samples.
    pub fn usage_percent(&mut self, stat_path: &Path) -> f64 {
        let Some(mut current) = read_ticks(stat_path) else {
            return 0.0;
        };

        let prev = match self.prev {
            Some(prev) => prev,
            None => {
                let first = current;
                std::thread::sleep(BOOTSTRAP_DELAY);
                match read_ticks(stat_path) {
                    Some(second) => current = second,
                    None => return 0.0,
                }
                first
            }
        };
        self.prev = Some(current);

        let idle_delta = current.idle.saturating_sub(prev.idle) as f64;
        let total_delta = current.total.saturating_sub(prev.total) as f64;
        if total_delta == 0.0 {
            return 0.0;
        }
        round1((1.0 - idle_delta / total_delta) * 100.0)
    }
}
