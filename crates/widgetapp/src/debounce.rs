//! # Debounce
//!
//! Coalesces bursts of values into one: every [`Debouncer::call`] cancels the
//! pending timer and starts a new one, so only the last value of a burst is
//! delivered, once the quiet window has passed without another call.
//!
//! Delivered values arrive on the receiver returned by [`Debouncer::new`].
//! Timers are tokio tasks, so the debouncer must be used inside a runtime.
//!
//! ```text
//! call(a) ─ 100ms ─ call(b) ─ 100ms ─ call(c) ────── 500ms ──────▶ c
//! ```

use parking_lot::Mutex;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;

/// Default quiet window between the last edit and the write.
pub const DEFAULT_DEBOUNCE: Duration = Duration::from_millis(500);

struct Pending<T> {
    generation: u64,
    value: Option<T>,
}

pub struct Debouncer<T> {
    delay: Duration,
    pending: Arc<Mutex<Pending<T>>>,
    timer: Option<JoinHandle<()>>,
    tx: mpsc::UnboundedSender<T>,
}

impl<T: Send + 'static> Debouncer<T> {
    pub fn new(delay: Duration) -> (Self, mpsc::UnboundedReceiver<T>) {
        let (tx, rx) = mpsc::unbounded_channel();
        let debouncer = Self {
            delay,
            pending: Arc::new(Mutex::new(Pending {
                generation: 0,
                value: None,
            })),
            timer: None,
            tx,
        };
        (debouncer, rx)
    }

    pub fn delay(&self) -> Duration {
        self.delay
    }

    /// Schedule `value`, replacing whatever was pending.
    pub fn call(&mut self, value: T) {
        self.abort_timer();

        let generation = {
            let mut pending = self.pending.lock();
            pending.generation += 1;
            pending.value = Some(value);
            pending.generation
        };

        let pending = Arc::clone(&self.pending);
        let tx = self.tx.clone();
        let delay = self.delay;
        self.timer = Some(tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            let value = {
                let mut pending = pending.lock();
                // A newer call owns the slot now
                if pending.generation != generation {
                    return;
                }
                pending.value.take()
            };
            if let Some(value) = value {
                let _ = tx.send(value);
            }
        }));
    }

    /// Drop the pending value without delivering it.
    /// Returns the discarded value, if any.
    pub fn cancel(&mut self) -> Option<T> {
        self.abort_timer();
        let mut pending = self.pending.lock();
        pending.generation += 1;
        pending.value.take()
    }

    /// Deliver the pending value now instead of waiting for the timer.
    /// Returns true if a value was delivered.
    pub fn flush(&mut self) -> bool {
        match self.cancel() {
            Some(value) => self.tx.send(value).is_ok(),
            None => false,
        }
    }

    pub fn is_pending(&self) -> bool {
        self.pending.lock().value.is_some()
    }

    fn abort_timer(&mut self) {
        if let Some(handle) = self.timer.take() {
            handle.abort();
        }
    }
}

impl<T> Drop for Debouncer<T> {
    fn drop(&mut self) {
        if let Some(handle) = self.timer.take() {
            handle.abort();
        }
    }
}
