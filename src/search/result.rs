//! Counter and report types produced by the search

use chrono::{DateTime, Local};
use std::time::Duration;

/// Per-worker trial counters for one reporting interval
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Counters {
    /// Trials completed (including filler rejections)
    pub checked: u64,
    /// Trials that produced a magic square of squares
    pub found: u64,
}

impl Counters {
    #[cfg(test)]
    pub fn new(checked: u64, found: u64) -> Self {
        Self { checked, found }
    }

    pub fn is_empty(&self) -> bool {
        self.checked == 0 && self.found == 0
    }

    /// Record one finished trial
    pub fn record(&mut self, matched: bool) {
        self.checked += 1;
        if matched {
            self.found += 1;
        }
    }
}

/// Global totals as read back from the aggregator
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Totals {
    pub total_checked: u64,
    pub total_found: u64,
}

/// Everything one progress line reports
#[derive(Debug, Clone)]
pub struct ProgressReport {
    /// Wall-clock time of the flush
    pub timestamp: DateTime<Local>,
    pub worker_id: usize,
    /// Counters flushed by this report
    pub local: Counters,
    /// Time since the worker's previous flush
    pub elapsed: Duration,
    /// Global totals right after this flush
    pub global: Totals,
}

impl ProgressReport {
    /// Trials per second over the interval
    pub fn throughput(&self) -> f64 {
        let secs = self.elapsed.as_secs_f64();
        if secs == 0.0 {
            0.0
        } else {
            self.local.checked as f64 / secs
        }
    }
}
