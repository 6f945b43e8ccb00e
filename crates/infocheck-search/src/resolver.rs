//! Search submission: from the search box text to exactly one bank.

use crate::error::{Result, SearchError};
use infocheck_core::Bank;
use infocheck_lookup::BankLookup;
use std::sync::Arc;

/// Pick the navigation target among `candidates` for a trimmed search term.
///
/// A candidate whose name equals the term ignoring case wins wherever it sits
/// in the list; otherwise the first candidate is taken. Returns `None` only
/// for an empty list.
#[must_use]
pub fn select_target<'a>(candidates: &'a [Bank], term: &str) -> Option<&'a Bank> {
    let wanted = term.to_lowercase();
    candidates
        .iter()
        .find(|bank| bank.name.to_lowercase() == wanted)
        .or_else(|| candidates.first())
}

/// Resolves explicit search submissions against the lookup service.
pub struct SearchResolver {
    lookup: Arc<dyn BankLookup>,
}

impl SearchResolver {
    /// Create a resolver over a lookup service.
    #[must_use]
    pub fn new(lookup: Arc<dyn BankLookup>) -> Self {
        Self { lookup }
    }

    /// Resolve the search box text to a bank.
    ///
    /// The lookup service receives `query` as typed; matching is done on the
    /// trimmed text.
    ///
    /// # Errors
    /// - [`SearchError::EmptyQuery`] for blank input, without any lookup
    /// - [`SearchError::NotFound`] when the service has no candidates
    /// - [`SearchError::LookupFailed`] when the service cannot be queried
    pub async fn resolve(&self, query: &str) -> Result<Bank> {
        let term = query.trim();
        if term.is_empty() {
            return Err(SearchError::EmptyQuery);
        }

        let candidates = self
            .lookup
            .autocomplete(query)
            .await
            .map_err(SearchError::LookupFailed)?;

        let target = select_target(&candidates, term).ok_or(SearchError::NotFound)?;
        tracing::debug!(
            "Search {:?} resolved to {} ({}) among {} candidates",
            term,
            target.name,
            target.id,
            candidates.len()
        );
        Ok(target.clone())
    }
}
