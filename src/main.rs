use clap::{Parser, ValueEnum};
use std::sync::Arc;

mod grid;
mod report;
mod search;

use grid::MAX_CELL_VALUE;
use report::format::NumberFormat;
use report::{ConsoleSink, ReportSink};
use search::config::{DEFAULT_REPORT_INTERVAL, SearchConfig, Strategy};
use search::parallel::config::DEFAULT_RESERVED_CORES;
use search::parallel::{ParallelConfig, StopSignal, resolve_worker_count, run_parallel_search};

// --- Command Line Arguments ---

#[derive(Parser)]
#[command(name = "mss")]
#[command(about = "mss - parallel search for 3x3 magic squares of squares")]
#[command(version)]
struct Args {
    /// Number of worker threads (default: available cores minus reserved cores)
    #[arg(long, short = 'j')]
    cores: Option<usize>,
    /// Cores to leave free when --cores is not given
    #[arg(long, default_value_t = DEFAULT_RESERVED_CORES)]
    reserved_cores: usize,
    /// Trials per worker between progress lines
    #[arg(long, default_value_t = DEFAULT_REPORT_INTERVAL)]
    report_interval: u64,
    /// Largest random cell value (at most 2^63 - 1)
    #[arg(long, default_value_t = MAX_CELL_VALUE)]
    max_value: u64,
    /// How candidate grids are produced
    #[arg(long, value_enum, default_value = "constructive")]
    strategy: CliStrategy,
    /// Base random seed; worker i uses seed + i
    #[arg(long)]
    seed: Option<u64>,
    /// Print counts and throughput without K/M/G/T suffixes
    #[arg(long)]
    raw_numbers: bool,
}

/// CLI strategy selection
#[derive(Clone, Copy, Debug, ValueEnum)]
enum CliStrategy {
    /// Draw all nine cells at random, then verify
    Random,
    /// Draw two rows, derive the other four cells, then verify
    Constructive,
}

impl From<CliStrategy> for Strategy {
    fn from(cli: CliStrategy) -> Self {
        match cli {
            CliStrategy::Random => Strategy::Random,
            CliStrategy::Constructive => Strategy::Constructive,
        }
    }
}

// --- Main Function ---
fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    let args = Args::parse();

    let available = num_cpus::get();
    let num_workers = match resolve_worker_count(args.cores, available, args.reserved_cores) {
        Ok(n) => n,
        Err(e) => {
            eprintln!("{}", e);
            std::process::exit(1);
        }
    };

    let search_config = SearchConfig::default()
        .with_strategy(args.strategy.into())
        .with_report_interval(args.report_interval)
        .with_max_cell_value(args.max_value);
    if let Err(e) = search_config.validate() {
        eprintln!("{}", e);
        std::process::exit(1);
    }

    let parallel_config = ParallelConfig::default()
        .with_workers(num_workers)
        .with_seed_option(args.seed);

    let numbers = if args.raw_numbers {
        NumberFormat::Raw
    } else {
        NumberFormat::Suffixed
    };

    let stop = Arc::new(StopSignal::new());
    let handler_stop = Arc::clone(&stop);
    if let Err(e) = ctrlc::set_handler(move || {
        println!("Interrupt received. Terminating workers...");
        handler_stop.signal_stop();
    }) {
        eprintln!("Error installing interrupt handler: {}", e);
        std::process::exit(1);
    }

    println!(
        "Using {} cores, {} strategy.",
        num_workers, search_config.strategy
    );
    log::info!(
        "report interval {}, max cell value {}",
        search_config.report_interval,
        search_config.max_cell_value
    );

    let sink: Arc<dyn ReportSink> = Arc::new(ConsoleSink::new(numbers));
    match run_parallel_search(&search_config, &parallel_config, sink, stop) {
        Ok(result) => {
            for (worker_id, counters) in &result.worker_counters {
                log::info!(
                    "worker {}: {} grids checked, {} found",
                    worker_id,
                    counters.checked,
                    counters.found
                );
            }
            log::debug!("final totals {:?}", result.totals);
        }
        Err(e) => {
            eprintln!("Error starting workers: {}", e);
            std::process::exit(1);
        }
    }
}
