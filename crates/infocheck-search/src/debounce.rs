//! Cancellable delayed tasks.
//!
//! A [`Debouncer`] runs at most one pending task per input stream: scheduling
//! a new task cancels the one still waiting out its delay. Once a task's delay
//! has elapsed it runs to completion and is no longer affected by
//! cancellation.

use std::future::Future;
use std::sync::{Mutex, PoisonError};
use std::time::Duration;
use tokio_util::sync::CancellationToken;

/// Delay-then-run scheduler where each schedule supersedes the previous one.
#[derive(Debug)]
pub struct Debouncer {
    delay: Duration,
    pending: Mutex<Option<CancellationToken>>,
}

impl Debouncer {
    /// Create a debouncer with a fixed quiet period.
    #[must_use]
    pub fn new(delay: Duration) -> Self {
        Self {
            delay,
            pending: Mutex::new(None),
        }
    }

    /// Schedule `task` to run after the quiet period, cancelling any task
    /// that is still waiting.
    ///
    /// Must be called from within a Tokio runtime.
    pub fn schedule<F>(&self, task: F)
    where
        F: Future<Output = ()> + Send + 'static,
    {
        let token = CancellationToken::new();
        if let Some(previous) = self.swap(Some(token.clone())) {
            previous.cancel();
        }

        let delay = self.delay;
        tokio::spawn(async move {
            let fired = tokio::select! {
                biased;
                () = token.cancelled() => false,
                () = tokio::time::sleep(delay) => true,
            };
            if fired {
                // Fired: no longer pending.
                token.cancel();
                task.await;
            }
        });
    }

    /// Cancel the waiting task, if any.
    pub fn cancel(&self) {
        if let Some(previous) = self.swap(None) {
            previous.cancel();
        }
    }

    /// Whether a task is still waiting out its delay.
    #[must_use]
    pub fn is_pending(&self) -> bool {
        self.pending
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .as_ref()
            .is_some_and(|token| !token.is_cancelled())
    }

    fn swap(&self, next: Option<CancellationToken>) -> Option<CancellationToken> {
        let mut pending = self.pending.lock().unwrap_or_else(PoisonError::into_inner);
        std::mem::replace(&mut *pending, next)
    }
}

impl Drop for Debouncer {
    fn drop(&mut self) {
        self.cancel();
    }
}
