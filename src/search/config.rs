//! Configuration types for the grid search

use crate::grid::MAX_CELL_VALUE;
use crate::search::parallel::config::ConfigError;

/// Number of trials between two progress flushes of a worker
pub const DEFAULT_REPORT_INTERVAL: u64 = 2_000_000;

/// How candidate grids are produced before verification
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Strategy {
    /// Draw all nine cells at random and verify
    Random,
    /// Draw the first two rows, derive the remaining four cells, then verify
    #[default]
    Constructive,
}

impl std::fmt::Display for Strategy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Strategy::Random => write!(f, "random"),
            Strategy::Constructive => write!(f, "constructive"),
        }
    }
}

/// Main search configuration shared by every worker
#[derive(Debug, Clone)]
pub struct SearchConfig {
    /// Candidate strategy
    pub strategy: Strategy,
    /// Trials per worker between flushes into the global counters
    pub report_interval: u64,
    /// Largest value the generator draws for a cell (inclusive)
    pub max_cell_value: u64,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            strategy: Strategy::default(),
            report_interval: DEFAULT_REPORT_INTERVAL,
            max_cell_value: MAX_CELL_VALUE,
        }
    }
}

impl SearchConfig {
    pub fn with_strategy(mut self, strategy: Strategy) -> Self {
        self.strategy = strategy;
        self
    }

    pub fn with_report_interval(mut self, interval: u64) -> Self {
        self.report_interval = interval;
        self
    }

    pub fn with_max_cell_value(mut self, max: u64) -> Self {
        self.max_cell_value = max;
        self
    }

    /// Reject values that would break the reporting cadence or overflow the
    /// widened sum arithmetic.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.report_interval == 0 {
            return Err(ConfigError::ZeroReportInterval);
        }
        if self.max_cell_value == 0 || self.max_cell_value > MAX_CELL_VALUE {
            return Err(ConfigError::MaxValueOutOfRange {
                value: self.max_cell_value,
            });
        }
        Ok(())
    }
}
