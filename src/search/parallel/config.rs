//! Configuration for parallel search execution.

use std::fmt;

/// Cores left free for the rest of the system when no worker count is given
pub const DEFAULT_RESERVED_CORES: usize = 1;

/// Invalid startup configuration. Nothing is spawned when one of these occurs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// Fewer than one worker requested or left after reserving cores
    InsufficientCores,
    /// More workers requested than the machine has logical cores
    TooManyCores { available: usize },
    /// Report interval of zero would never flush
    ZeroReportInterval,
    /// Cell bound outside `1..=2^63-1`
    MaxValueOutOfRange { value: u64 },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::InsufficientCores => write!(f, "Insufficient CPU cores."),
            ConfigError::TooManyCores { available } => {
                write!(f, "CPU has only {} (virtual) cores available.", available)
            }
            ConfigError::ZeroReportInterval => {
                write!(f, "Report interval must be at least 1.")
            }
            ConfigError::MaxValueOutOfRange { value } => write!(
                f,
                "Maximum cell value {} is out of range (1..={}).",
                value,
                crate::grid::MAX_CELL_VALUE
            ),
        }
    }
}

impl std::error::Error for ConfigError {}

/// Pick the worker count from an explicit request or from the core count.
///
/// Without a request, `available - reserved` workers are used.
pub fn resolve_worker_count(
    requested: Option<usize>,
    available: usize,
    reserved: usize,
) -> Result<usize, ConfigError> {
    let count = requested.unwrap_or_else(|| available.saturating_sub(reserved));
    if count < 1 {
        Err(ConfigError::InsufficientCores)
    } else if count > available {
        Err(ConfigError::TooManyCores { available })
    } else {
        Ok(count)
    }
}

/// Configuration for parallel search execution.
#[derive(Debug, Clone)]
pub struct ParallelConfig {
    /// Number of worker threads to spawn.
    pub num_workers: usize,
    /// Base random seed (workers get seed + worker_id).
    pub base_seed: Option<u64>,
}

impl Default for ParallelConfig {
    fn default() -> Self {
        Self {
            num_workers: num_cpus::get()
                .saturating_sub(DEFAULT_RESERVED_CORES)
                .max(1),
            base_seed: None,
        }
    }
}

impl ParallelConfig {
    /// Create a new parallel config with the specified number of workers.
    pub fn with_workers(mut self, num_workers: usize) -> Self {
        self.num_workers = num_workers.max(1);
        self
    }

    /// Set the base random seed from an Option.
    pub fn with_seed_option(mut self, seed: Option<u64>) -> Self {
        self.base_seed = seed;
        self
    }

    /// Seed for one worker, if seeding is enabled.
    pub fn worker_seed(&self, worker_id: usize) -> Option<u64> {
        self.base_seed.map(|s| s.wrapping_add(worker_id as u64))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = ParallelConfig::default();
        assert!(config.num_workers >= 1);
        assert!(config.base_seed.is_none());
    }

    #[test]
    fn test_config_builder() {
        let config = ParallelConfig::default().with_workers(4).with_seed_option(Some(42));

        assert_eq!(config.num_workers, 4);
        assert_eq!(config.base_seed, Some(42));
        assert_eq!(config.worker_seed(0), Some(42));
        assert_eq!(config.worker_seed(3), Some(45));
    }

    #[test]
    fn test_worker_seed_wraps() {
        let config = ParallelConfig::default().with_seed_option(Some(u64::MAX));
        assert_eq!(config.worker_seed(1), Some(0));

        let config = ParallelConfig::default().with_seed_option(None);
        assert_eq!(config.worker_seed(1), None);
    }

    #[test]
    fn test_minimum_workers() {
        let config = ParallelConfig::default().with_workers(0);
        assert_eq!(config.num_workers, 1);
    }

    #[test]
    fn test_resolve_default_reserves_cores() {
        assert_eq!(resolve_worker_count(None, 8, 1), Ok(7));
        assert_eq!(resolve_worker_count(None, 8, 2), Ok(6));
    }

    #[test]
    fn test_resolve_explicit_request() {
        assert_eq!(resolve_worker_count(Some(1), 8, 1), Ok(1));
        assert_eq!(resolve_worker_count(Some(8), 8, 1), Ok(8));
    }

    #[test]
    fn test_resolve_rejects_invalid_counts() {
        assert_eq!(
            resolve_worker_count(Some(0), 8, 1),
            Err(ConfigError::InsufficientCores)
        );
        assert_eq!(
            resolve_worker_count(None, 1, 1),
            Err(ConfigError::InsufficientCores)
        );
        assert_eq!(
            resolve_worker_count(None, 1, 5),
            Err(ConfigError::InsufficientCores)
        );
        assert_eq!(
            resolve_worker_count(Some(9), 8, 1),
            Err(ConfigError::TooManyCores { available: 8 })
        );
    }

    #[test]
    fn test_error_messages() {
        assert_eq!(
            ConfigError::InsufficientCores.to_string(),
            "Insufficient CPU cores."
        );
        assert_eq!(
            ConfigError::TooManyCores { available: 4 }.to_string(),
            "CPU has only 4 (virtual) cores available."
        );
    }
}
