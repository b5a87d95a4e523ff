//! Per-thread search loop.

use crate::grid::Grid;
use crate::report::ReportSink;
use crate::search::candidate::GridGenerator;
use crate::search::config::{SearchConfig, Strategy};
use crate::search::filler::fill_grid;
use crate::search::parallel::aggregator::Aggregator;
use crate::search::parallel::channel::StopSignal;
use crate::search::result::{Counters, ProgressReport};
use chrono::Local;
use std::sync::Arc;
use std::time::Instant;

/// One search worker: generates, fills and verifies grids until stopped.
pub struct Worker<G: GridGenerator> {
    id: usize,
    generator: G,
    strategy: Strategy,
    report_interval: u64,
    aggregator: Arc<Aggregator>,
    sink: Arc<dyn ReportSink>,
    stop: Arc<StopSignal>,
    /// Counters since the last flush
    local: Counters,
    /// Counters over the worker's whole run
    lifetime: Counters,
    interval_start: Instant,
}

impl<G: GridGenerator> Worker<G> {
    pub fn new(
        id: usize,
        generator: G,
        config: &SearchConfig,
        aggregator: Arc<Aggregator>,
        sink: Arc<dyn ReportSink>,
        stop: Arc<StopSignal>,
    ) -> Self {
        Self {
            id,
            generator,
            strategy: config.strategy,
            report_interval: config.report_interval.max(1),
            aggregator,
            sink,
            stop,
            local: Counters::default(),
            lifetime: Counters::default(),
            interval_start: Instant::now(),
        }
    }

    /// Run trials until a stop is requested, then flush any unreported
    /// counts into the aggregator. Returns the counts of the whole run.
    pub fn run(mut self) -> Counters {
        log::debug!("worker {} started ({} strategy)", self.id, self.strategy);
        self.interval_start = Instant::now();

        while !self.stop.should_stop() {
            self.step();
        }

        if !self.local.is_empty() {
            log::debug!(
                "worker {} flushing {} unreported trials on shutdown",
                self.id,
                self.local.checked
            );
            self.aggregator.accumulate(self.local);
            self.local = Counters::default();
        }

        log::debug!(
            "worker {} stopped after {} trials",
            self.id,
            self.lifetime.checked
        );
        self.lifetime
    }

    /// One trial followed by a report if the interval is complete.
    pub fn step(&mut self) {
        let matched = self.trial();
        self.local.record(matched);
        self.lifetime.record(matched);

        if self.local.checked % self.report_interval == 0 {
            self.report();
        }
    }

    /// Generate one candidate and test it. Reports a discovery on a match.
    fn trial(&mut self) -> bool {
        let mut grid = self.generator.generate();
        let matched = check_candidate(&mut grid, self.strategy);
        if matched {
            self.sink.discovery(self.id, &grid);
        }
        matched
    }

    fn report(&mut self) {
        let global = self.aggregator.accumulate(self.local);
        let report = ProgressReport {
            timestamp: Local::now(),
            worker_id: self.id,
            local: self.local,
            elapsed: self.interval_start.elapsed(),
            global,
        };
        self.sink.progress(&report);

        self.local = Counters::default();
        self.interval_start = Instant::now();
    }
}

/// Test a candidate under the given strategy.
pub fn check_candidate(grid: &mut Grid, strategy: Strategy) -> bool {
    match strategy {
        Strategy::Random => grid.is_magic_square_of_squares(),
        Strategy::Constructive => fill_grid(grid),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::report::testing::RecordingSink;

    /// Yields the same grid forever
    struct FixedGenerator(Grid);

    impl GridGenerator for FixedGenerator {
        fn generate(&mut self) -> Grid {
            self.0
        }
    }

    /// Alternates between a matching and a non-matching grid
    struct AlternatingGenerator {
        flip: bool,
    }

    impl GridGenerator for AlternatingGenerator {
        fn generate(&mut self) -> Grid {
            self.flip = !self.flip;
            if self.flip {
                Grid::zeroed()
            } else {
                Grid::from_rows([[1, 2, 3], [4, 5, 6], [7, 8, 9]])
            }
        }
    }

    fn worker<G: GridGenerator>(
        generator: G,
        config: &SearchConfig,
        sink: Arc<RecordingSink>,
        stop: Arc<StopSignal>,
    ) -> (Worker<G>, Arc<Aggregator>) {
        let aggregator = Arc::new(Aggregator::new());
        let w = Worker::new(0, generator, config, Arc::clone(&aggregator), sink, stop);
        (w, aggregator)
    }

    #[test]
    fn test_zero_grids_single_report() {
        let stop = Arc::new(StopSignal::new());
        let sink = Arc::new(RecordingSink::stopping_after(1, Arc::clone(&stop)));
        let config = SearchConfig::default()
            .with_strategy(Strategy::Random)
            .with_report_interval(100);

        let (w, aggregator) = worker(
            FixedGenerator(Grid::zeroed()),
            &config,
            Arc::clone(&sink),
            Arc::clone(&stop),
        );
        let lifetime = w.run();

        let reports = sink.reports();
        assert_eq!(reports.len(), 1);
        assert_eq!(reports[0].local, Counters::new(100, 100));
        assert_eq!(reports[0].global.total_checked, 100);
        assert_eq!(reports[0].global.total_found, 100);
        assert_eq!(sink.discovery_count(), 100);

        assert_eq!(lifetime, Counters::new(100, 100));
        assert_eq!(aggregator.totals().total_checked, 100);
    }

    #[test]
    fn test_reports_on_interval_boundaries() {
        let stop = Arc::new(StopSignal::new());
        let sink = Arc::new(RecordingSink::new());
        let config = SearchConfig::default()
            .with_strategy(Strategy::Random)
            .with_report_interval(10);

        let (mut w, aggregator) = worker(
            AlternatingGenerator { flip: false },
            &config,
            Arc::clone(&sink),
            stop,
        );
        for _ in 0..35 {
            w.step();
        }

        let reports = sink.reports();
        assert_eq!(reports.len(), 3);
        for (i, report) in reports.iter().enumerate() {
            assert_eq!(report.local, Counters::new(10, 5));
            assert_eq!(report.global.total_checked, 10 * (i as u64 + 1));
        }
        assert_eq!(aggregator.totals().total_checked, 30);
    }

    #[test]
    fn test_shutdown_flushes_partial_interval() {
        let stop = Arc::new(StopSignal::new());
        let sink = Arc::new(RecordingSink::new());
        let config = SearchConfig::default()
            .with_strategy(Strategy::Random)
            .with_report_interval(1000);

        let (mut w, aggregator) = worker(
            AlternatingGenerator { flip: false },
            &config,
            Arc::clone(&sink),
            Arc::clone(&stop),
        );
        for _ in 0..7 {
            w.step();
        }
        stop.signal_stop();
        let lifetime = w.run();

        assert!(sink.reports().is_empty());
        assert_eq!(lifetime, Counters::new(7, 4));
        assert_eq!(
            aggregator.totals(),
            crate::search::result::Totals {
                total_checked: 7,
                total_found: 4
            }
        );
    }

    #[test]
    fn test_stopped_worker_runs_no_trials() {
        let stop = Arc::new(StopSignal::new());
        stop.signal_stop();
        let sink = Arc::new(RecordingSink::new());

        let (w, aggregator) = worker(
            FixedGenerator(Grid::zeroed()),
            &SearchConfig::default(),
            Arc::clone(&sink),
            stop,
        );

        assert_eq!(w.run(), Counters::default());
        assert_eq!(sink.discovery_count(), 0);
        assert_eq!(aggregator.totals().total_checked, 0);
    }

    #[test]
    fn test_constructive_strategy_fills_seed_rows() {
        let stop = Arc::new(StopSignal::new());
        let sink = Arc::new(RecordingSink::stopping_after(1, Arc::clone(&stop)));
        let config = SearchConfig::default()
            .with_strategy(Strategy::Constructive)
            .with_report_interval(5);

        let seed = Grid::from_rows([[5, 1, 7], [7, 5, 0], [0, 0, 0]]);
        let (w, _) = worker(FixedGenerator(seed), &config, Arc::clone(&sink), stop);
        w.run();

        let discoveries = sink.discoveries.lock().unwrap();
        assert_eq!(discoveries.len(), 5);
        assert_eq!(
            discoveries[0].1,
            Grid::from_rows([[5, 1, 7], [7, 5, 1], [1, 7, 5]])
        );
    }

    #[test]
    fn test_constructive_rejection_counts_as_checked() {
        let stop = Arc::new(StopSignal::new());
        let sink = Arc::new(RecordingSink::stopping_after(1, Arc::clone(&stop)));
        let config = SearchConfig::default()
            .with_strategy(Strategy::Constructive)
            .with_report_interval(50);

        // zero seed rows give a zero target, rejected on the first cell
        let (w, _) = worker(
            FixedGenerator(Grid::zeroed()),
            &config,
            Arc::clone(&sink),
            stop,
        );
        w.run();

        let reports = sink.reports();
        assert_eq!(reports.len(), 1);
        assert_eq!(reports[0].local, Counters::new(50, 0));
        assert_eq!(sink.discovery_count(), 0);
    }

    #[test]
    fn test_check_candidate_strategies() {
        let known = Grid::from_rows([[5, 1, 7], [7, 5, 1], [1, 7, 5]]);
        let (mut a, mut b) = (known, known);
        assert!(check_candidate(&mut a, Strategy::Random));
        assert!(check_candidate(&mut b, Strategy::Constructive));

        let seed = Grid::from_rows([[5, 1, 7], [7, 5, 0], [0, 0, 0]]);
        let (mut a, mut b) = (seed, seed);
        assert!(!check_candidate(&mut a, Strategy::Random));
        assert!(check_candidate(&mut b, Strategy::Constructive));
        assert_eq!(b, known);
    }
}
