//! Stop signalling between the supervisor, the workers and the interrupt handler.

use crossbeam_channel::{Receiver, Sender, bounded};
use std::sync::atomic::{AtomicBool, Ordering};

/// Cancellation token shared by every worker.
///
/// Workers poll the flag once per trial. The supervisor blocks on the wake-up
/// channel instead of polling, so an idle supervisor costs nothing.
#[derive(Debug)]
pub struct StopSignal {
    should_stop: AtomicBool,
    wake_tx: Sender<()>,
    wake_rx: Receiver<()>,
}

impl Default for StopSignal {
    fn default() -> Self {
        let (wake_tx, wake_rx) = bounded(1);
        Self {
            should_stop: AtomicBool::new(false),
            wake_tx,
            wake_rx,
        }
    }
}

impl StopSignal {
    pub fn new() -> Self {
        Self::default()
    }

    /// Check if workers should stop.
    #[inline]
    pub fn should_stop(&self) -> bool {
        self.should_stop.load(Ordering::Relaxed)
    }

    /// Request a stop. Safe to call any number of times from any thread.
    pub fn signal_stop(&self) {
        self.should_stop.store(true, Ordering::SeqCst);
        // A full buffer means a wake-up is already pending.
        let _ = self.wake_tx.try_send(());
    }

    /// Block until a stop has been requested.
    pub fn wait(&self) {
        while !self.should_stop.load(Ordering::SeqCst) {
            if self.wake_rx.recv().is_err() {
                break;
            }
        }
    }
}
