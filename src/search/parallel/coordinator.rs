//! Supervisor that spawns worker threads and reports the final totals.

use crate::report::ReportSink;
use crate::search::candidate::RandomGenerator;
use crate::search::config::SearchConfig;
use crate::search::parallel::aggregator::Aggregator;
use crate::search::parallel::channel::StopSignal;
use crate::search::parallel::config::ParallelConfig;
use crate::search::parallel::worker::Worker;
use crate::search::result::{Counters, Totals};
use std::io;
use std::sync::Arc;
use std::thread::{self, JoinHandle};

/// Outcome of a finished search run.
#[derive(Debug)]
pub struct ParallelResult {
    /// Global totals after every worker stopped.
    pub totals: Totals,
    /// Lifetime counters per worker id.
    pub worker_counters: Vec<(usize, Counters)>,
}

/// Run the search until `stop` is signalled.
///
/// Spawns one OS thread per worker, blocks until a stop is requested, joins
/// every worker and hands the final totals to `sink` exactly once.
pub fn run_parallel_search(
    search_config: &SearchConfig,
    parallel_config: &ParallelConfig,
    sink: Arc<dyn ReportSink>,
    stop: Arc<StopSignal>,
) -> io::Result<ParallelResult> {
    let aggregator = Arc::new(Aggregator::new());

    let handles = match spawn_workers(search_config, parallel_config, &aggregator, &sink, &stop)
    {
        Ok(handles) => handles,
        Err(e) => {
            // Some workers may already be running.
            stop.signal_stop();
            return Err(e);
        }
    };
    log::info!("{} workers running", handles.len());

    stop.wait();

    let mut worker_counters = Vec::with_capacity(handles.len());
    for (worker_id, handle) in handles {
        match handle.join() {
            Ok(counters) => worker_counters.push((worker_id, counters)),
            Err(_) => log::error!("worker {} panicked", worker_id),
        }
    }
    sink.workers_stopped();

    let totals = aggregator.totals();
    sink.final_totals(&totals);

    Ok(ParallelResult {
        totals,
        worker_counters,
    })
}

fn spawn_workers(
    search_config: &SearchConfig,
    parallel_config: &ParallelConfig,
    aggregator: &Arc<Aggregator>,
    sink: &Arc<dyn ReportSink>,
    stop: &Arc<StopSignal>,
) -> io::Result<Vec<(usize, JoinHandle<Counters>)>> {
    let mut handles = Vec::with_capacity(parallel_config.num_workers);

    for worker_id in 0..parallel_config.num_workers {
        let seed = parallel_config.worker_seed(worker_id);
        if let Some(seed) = seed {
            log::debug!("worker {} seed {}", worker_id, seed);
        }

        let generator = RandomGenerator::new(search_config.max_cell_value, seed);
        let worker = Worker::new(
            worker_id,
            generator,
            search_config,
            Arc::clone(aggregator),
            Arc::clone(sink),
            Arc::clone(stop),
        );

        let handle = thread::Builder::new()
            .name(format!("mss-worker-{}", worker_id))
            .spawn(move || worker.run())?;
        handles.push((worker_id, handle));
    }

    Ok(handles)
}
