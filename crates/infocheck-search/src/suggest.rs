//! Debounced autocomplete for the bank search box.
//!
//! The fetcher owns the suggestion list. Every query change restarts the
//! debounce timer; when the timer fires the lookup service is queried with the
//! untrimmed text. Each query change bumps a generation counter and a response
//! is applied only if its generation is still current, so a slow reply for an
//! older query can never overwrite a newer list.

use crate::debounce::Debouncer;
use infocheck_core::{Bank, Route, SearchConfig};
use infocheck_lookup::BankLookup;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use tokio::sync::watch;

/// Autocomplete list as rendered under the search box.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SuggestionState {
    /// Candidates in service order
    pub candidates: Vec<Bank>,
    /// Whether the dropdown is shown (never true for an empty list)
    pub visible: bool,
}

impl SuggestionState {
    fn from_candidates(candidates: Vec<Bank>) -> Self {
        let visible = !candidates.is_empty();
        Self {
            candidates,
            visible,
        }
    }
}

#[derive(Debug, Default)]
struct QueryTag {
    text: String,
    generation: u64,
}

struct Shared {
    lookup: Arc<dyn BankLookup>,
    query: Mutex<QueryTag>,
    state: watch::Sender<SuggestionState>,
}

impl Shared {
    fn query(&self) -> MutexGuard<'_, QueryTag> {
        self.query.lock().unwrap_or_else(PoisonError::into_inner)
    }

    async fn fetch(&self, term: String, generation: u64) {
        tracing::debug!("Fetching suggestions for {:?}", term);
        let result = self.lookup.autocomplete(&term).await;

        // Hold the query lock while publishing so a concurrent edit cannot
        // slip in between the generation check and the update.
        let query = self.query();
        if query.generation != generation {
            tracing::debug!("Discarding stale suggestions for {:?}", term);
            return;
        }

        let next = match result {
            Ok(banks) => SuggestionState::from_candidates(banks),
            Err(e) => {
                tracing::warn!("Suggestion lookup for {:?} failed: {}", term, e);
                SuggestionState::default()
            }
        };
        self.state.send_replace(next);
        drop(query);
    }

    fn hide(&self) {
        self.state.send_if_modified(|state| {
            let was_visible = state.visible;
            state.visible = false;
            was_visible
        });
    }
}

/// Keeps the autocomplete list in sync with the search box text.
///
/// Dropping the fetcher cancels any pending debounce or blur timer. A request
/// that is already in flight is left to finish and its result discarded.
pub struct SuggestionFetcher {
    shared: Arc<Shared>,
    min_query_chars: usize,
    debouncer: Debouncer,
    blur: Debouncer,
}

impl SuggestionFetcher {
    /// Create a fetcher over a lookup service.
    #[must_use]
    pub fn new(lookup: Arc<dyn BankLookup>, config: &SearchConfig) -> Self {
        let (state, _) = watch::channel(SuggestionState::default());
        Self {
            shared: Arc::new(Shared {
                lookup,
                query: Mutex::new(QueryTag::default()),
                state,
            }),
            min_query_chars: config.min_query_chars,
            debouncer: Debouncer::new(config.debounce()),
            blur: Debouncer::new(config.blur_grace()),
        }
    }

    /// Record a new search box value.
    ///
    /// Short queries clear the list at once; anything else (re)starts the
    /// debounce timer. Must be called from within a Tokio runtime.
    pub fn set_query(&self, text: impl Into<String>) {
        let text = text.into();
        let mut query = self.shared.query();
        query.generation += 1;
        query.text.clone_from(&text);
        let generation = query.generation;

        if text.trim().chars().count() < self.min_query_chars {
            self.debouncer.cancel();
            self.shared.state.send_replace(SuggestionState::default());
            return;
        }
        drop(query);

        let shared = Arc::clone(&self.shared);
        self.debouncer.schedule(async move {
            shared.fetch(text, generation).await;
        });
    }

    /// The search box gained focus: show the list again if there is one.
    pub fn focus(&self) {
        self.blur.cancel();
        self.shared.state.send_if_modified(|state| {
            if state.visible || state.candidates.is_empty() {
                return false;
            }
            state.visible = true;
            true
        });
    }

    /// The search box lost focus: hide the list after the grace delay, giving
    /// a pointer selection on a suggestion time to land.
    pub fn blur(&self) {
        let shared = Arc::clone(&self.shared);
        self.blur.schedule(async move {
            shared.hide();
        });
    }

    /// A suggestion was picked.
    ///
    /// The search box takes the bank's name, pending timers are dropped, the
    /// list is hidden and the bank's route is returned.
    pub fn select(&self, bank: &Bank) -> Route {
        let mut query = self.shared.query();
        query.generation += 1;
        query.text.clone_from(&bank.name);
        self.debouncer.cancel();
        self.blur.cancel();
        self.shared.hide();
        drop(query);

        tracing::debug!("Suggestion selected: {} ({})", bank.name, bank.id);
        Route::BankScams(bank.id.clone())
    }

    /// Current search box text.
    #[must_use]
    pub fn query(&self) -> String {
        self.shared.query().text.clone()
    }

    /// Snapshot of the suggestion list.
    #[must_use]
    pub fn state(&self) -> SuggestionState {
        self.shared.state.borrow().clone()
    }

    /// Receive every future change of the suggestion list.
    #[must_use]
    pub fn subscribe(&self) -> watch::Receiver<SuggestionState> {
        self.shared.state.subscribe()
    }

    /// Whether a fetch is waiting for typing to settle.
    #[must_use]
    pub fn is_debouncing(&self) -> bool {
        self.debouncer.is_pending()
    }
}
