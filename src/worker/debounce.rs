//! Cancellable debounce timer for text-driven searches.
//!
//! Each keystroke replaces the pending timer rather than stacking a new one,
//! so at most one firing is ever outstanding. Cancellation is cooperative on
//! two levels: the pending task is aborted when replaced, and every firing
//! carries the generation it was armed with, so a firing that raced its own
//! abort is rejected by [`Debouncer::accept`].

use std::time::Duration;

use tokio::sync::mpsc::UnboundedSender;
use tokio::task::JoinHandle;

/// Notification that a scheduled search's quiet period elapsed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DebounceFired {
    /// Generation the timer was armed with.
    pub generation: u64,
    /// Query captured at scheduling time.
    pub query: String,
}

/// Replaceable one-shot timer driving debounced searches.
pub struct Debouncer {
    delay: Duration,
    generation: u64,
    pending: Option<JoinHandle<()>>,
    tx: UnboundedSender<DebounceFired>,
}

impl Debouncer {
    /// Creates a debouncer that reports firings on `tx` after `delay`.
    pub fn new(delay: Duration, tx: UnboundedSender<DebounceFired>) -> Self {
        Self {
            delay,
            generation: 0,
            pending: None,
            tx,
        }
    }

    /// Arms the timer for `query`, replacing any pending firing.
    pub fn schedule(&mut self, query: String) {
        self.abort_pending();
        self.generation += 1;

        let generation = self.generation;
        let delay = self.delay;
        let tx = self.tx.clone();

        tracing::trace!(generation, query = %query, "debounce armed");

        self.pending = Some(tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            let _ = tx.send(DebounceFired { generation, query });
        }));
    }

    /// Cancels the pending firing, if any.
    ///
    /// Also invalidates a firing already sitting in the channel.
    pub fn cancel(&mut self) {
        self.abort_pending();
        self.generation += 1;
    }

    /// Returns whether `fired` is the most recently armed timer.
    ///
    /// False means the timer was replaced or cancelled after this firing
    /// was sent, and it must be dropped.
    pub fn accept(&self, fired: &DebounceFired) -> bool {
        fired.generation == self.generation
    }

    fn abort_pending(&mut self) {
        if let Some(handle) = self.pending.take() {
            handle.abort();
        }
    }
}
