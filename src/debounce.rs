use crate::host::TimerToken;
use std::time::Duration;

/// Tracks the single outstanding delayed call of a debounced action.
///
/// Re-arming replaces the pending token; the caller cancels the old timer
/// with the token returned from [`Debouncer::take_pending`].
#[derive(Debug, Clone)]
pub struct Debouncer {
    wait: Duration,
    pending: Option<TimerToken>,
}

impl Debouncer {
    pub fn new(wait: Duration) -> Self {
        Self {
            wait,
            pending: None,
        }
    }

    pub fn wait(&self) -> Duration {
        self.wait
    }

    pub fn pending(&self) -> Option<TimerToken> {
        self.pending
    }

    pub fn take_pending(&mut self) -> Option<TimerToken> {
        self.pending.take()
    }

    pub fn arm(&mut self, token: TimerToken) {
        self.pending = Some(token);
    }

    /// Consume a fired timer. Returns `false` for stale or foreign tokens.
    pub fn fire(&mut self, token: TimerToken) -> bool {
        if self.pending == Some(token) {
            self.pending = None;
            true
        } else {
            false
        }
    }
}
