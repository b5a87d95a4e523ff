//! Global counters shared by all workers.

use crate::search::result::{Counters, Totals};
use std::sync::{Mutex, PoisonError};

/// Process-wide trial and discovery totals.
///
/// Each counter sits behind its own lock. A flush adds to one, reads it back,
/// then does the same for the other, so the two values returned by
/// [`Aggregator::accumulate`] are each exact post-update values but are not
/// guaranteed to be one atomic snapshot of the pair.
#[derive(Debug, Default)]
pub struct Aggregator {
    checked: Mutex<u64>,
    found: Mutex<u64>,
}

impl Aggregator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a worker's deltas and return the totals immediately after the update.
    pub fn accumulate(&self, delta: Counters) -> Totals {
        let total_checked = add_locked(&self.checked, delta.checked);
        let total_found = add_locked(&self.found, delta.found);
        Totals {
            total_checked,
            total_found,
        }
    }

    /// Current totals
    pub fn totals(&self) -> Totals {
        Totals {
            total_checked: *self.checked.lock().unwrap_or_else(PoisonError::into_inner),
            total_found: *self.found.lock().unwrap_or_else(PoisonError::into_inner),
        }
    }
}

// A panicking holder cannot leave a half-written u64, so poisoning is ignored.
fn add_locked(counter: &Mutex<u64>, delta: u64) -> u64 {
    let mut value = counter.lock().unwrap_or_else(PoisonError::into_inner);
    *value += delta;
    *value
}
