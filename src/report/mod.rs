//! Output of discoveries, progress lines and final totals
//!
//! Workers and the supervisor hand structured events to a [`ReportSink`].
//! [`ConsoleSink`] prints them to stdout; tests use a recording sink.

pub mod format;

use crate::grid::Grid;
use crate::search::result::{ProgressReport, Totals};
use format::{NumberFormat, discovery_text, final_line, progress_line};
use std::io::{self, Write};

/// Receiver of search events. Called concurrently from every worker thread.
pub trait ReportSink: Send + Sync {
    /// A worker found a magic square of squares
    fn discovery(&self, worker_id: usize, grid: &Grid);

    /// A worker flushed its counters
    fn progress(&self, report: &ProgressReport);

    /// Every worker has been joined; called once before `final_totals`
    fn workers_stopped(&self);

    /// The search has stopped; called once with the final totals
    fn final_totals(&self, totals: &Totals);
}

/// Prints every event to stdout
#[derive(Debug, Clone, Copy, Default)]
pub struct ConsoleSink {
    numbers: NumberFormat,
}

impl ConsoleSink {
    pub fn new(numbers: NumberFormat) -> Self {
        Self { numbers }
    }

    // Whole blocks are written under one lock so lines from different
    // workers never interleave. Write failures (closed pipe) are ignored.
    fn emit(&self, text: &str) {
        let mut out = io::stdout().lock();
        let _ = writeln!(out, "{}", text);
        let _ = out.flush();
    }
}

impl ReportSink for ConsoleSink {
    fn discovery(&self, _worker_id: usize, grid: &Grid) {
        self.emit(&discovery_text(grid));
    }

    fn progress(&self, report: &ProgressReport) {
        self.emit(&progress_line(report, self.numbers));
    }

    fn workers_stopped(&self) {
        self.emit("All workers terminated.");
    }

    fn final_totals(&self, totals: &Totals) {
        self.emit(&final_line(totals, self.numbers));
    }
}
