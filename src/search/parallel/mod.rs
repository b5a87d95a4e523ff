//! Parallel search execution for running multiple search workers concurrently.
//!
//! # Architecture
//!
//! The parallel search system consists of:
//! - A **coordinator** that spawns worker threads, waits for a stop request
//!   and prints the final totals
//! - Multiple **workers** that generate and verify grids, each with its own RNG
//! - An **aggregator** holding the global trial and discovery counters
//! - A **stop signal** shared by the coordinator, workers and interrupt handler
//!
//! Workers touch shared state only when they flush, once per report interval.
//!
//! # Example
//!
//! ```ignore
//! let stop = Arc::new(StopSignal::new());
//! let sink: Arc<dyn ReportSink> = Arc::new(ConsoleSink::default());
//!
//! let config = ParallelConfig::default().with_workers(4).with_seed_option(Some(42));
//! let result = run_parallel_search(&SearchConfig::default(), &config, sink, stop)?;
//! ```

pub mod aggregator;
pub mod channel;
pub mod config;
pub mod coordinator;
pub mod worker;

#[allow(unused_imports)]
pub use aggregator::Aggregator;
pub use channel::StopSignal;
#[allow(unused_imports)]
pub use config::{ConfigError, ParallelConfig, resolve_worker_count};
#[allow(unused_imports)]
pub use coordinator::{ParallelResult, run_parallel_search};
