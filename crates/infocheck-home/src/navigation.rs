//! Navigation sink.
//!
//! The view never routes by itself; it hands each [`Route`] to a
//! [`Navigator`] supplied by the shell.

use infocheck_core::Route;
use std::sync::{Mutex, PoisonError};

/// Receiver of navigation requests (the client-side router).
pub trait Navigator: Send + Sync {
    /// Move to `route`.
    fn navigate(&self, route: &Route);
}

/// Navigator that only remembers where it was sent.
///
/// Used by the command-line shell and by tests.
#[derive(Debug, Default)]
pub struct RecordingNavigator {
    history: Mutex<Vec<Route>>,
}

impl RecordingNavigator {
    /// Create an empty navigator.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Every route navigated to, oldest first.
    #[must_use]
    pub fn history(&self) -> Vec<Route> {
        self.history
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// The most recent route.
    #[must_use]
    pub fn last(&self) -> Option<Route> {
        self.history
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .last()
            .cloned()
    }
}

impl Navigator for RecordingNavigator {
    fn navigate(&self, route: &Route) {
        tracing::debug!("Navigate to {}", route);
        self.history
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(route.clone());
    }
}
