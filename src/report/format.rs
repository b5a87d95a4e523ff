//! Text formatting for discovery, progress and final lines

use crate::grid::Grid;
use crate::search::result::{ProgressReport, Totals};

const SUFFIXES: [&str; 5] = ["", "K", "M", "G", "T"];

/// Timestamp layout of progress lines, millisecond precision
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S%.3f";

/// Scale a number by powers of 1000 and print it with one decimal and a
/// K/M/G/T suffix. Values beyond the T range keep the T suffix.
pub fn format_with_suffix(num: f64) -> String {
    let mut value = num;
    let mut i = 0;
    while value.abs() >= 1000.0 && i < SUFFIXES.len() - 1 {
        value /= 1000.0;
        i += 1;
    }
    format!("{:.1}{}", value, SUFFIXES[i])
}

/// How trial counts and throughput are rendered
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum NumberFormat {
    /// `2.0M`, `1.5K`
    #[default]
    Suffixed,
    /// `2000000`, `1500`
    Raw,
}

impl NumberFormat {
    pub fn count(&self, n: u64) -> String {
        match self {
            NumberFormat::Suffixed => format_with_suffix(n as f64),
            NumberFormat::Raw => n.to_string(),
        }
    }

    pub fn rate(&self, per_sec: f64) -> String {
        match self {
            NumberFormat::Suffixed => format_with_suffix(per_sec),
            NumberFormat::Raw => format!("{:.0}", per_sec),
        }
    }
}

/// Header plus one line per row
pub fn discovery_text(grid: &Grid) -> String {
    format!("MSS found!\n{}", grid)
}

pub fn progress_line(report: &ProgressReport, numbers: NumberFormat) -> String {
    format!(
        "[{}] Worker {}: Checked {} grids, found {}, {}/s.  GLOBAL: Checked {}, found {}",
        report.timestamp.format(TIMESTAMP_FORMAT),
        report.worker_id,
        numbers.count(report.local.checked),
        report.local.found,
        numbers.rate(report.throughput()),
        numbers.count(report.global.total_checked),
        report.global.total_found,
    )
}

pub fn final_line(totals: &Totals, numbers: NumberFormat) -> String {
    format!(
        "GLOBAL FINAL: Checked {}, found {} total.",
        numbers.count(totals.total_checked),
        totals.total_found
    )
}
