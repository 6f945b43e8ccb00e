//! Search submission errors.

use infocheck_lookup::LookupError;
use thiserror::Error;

/// Outcome of a search submission that did not resolve to a bank.
///
/// Every variant is recovered by the view and shown as a message; none of
/// them abort the page.
#[derive(Error, Debug)]
pub enum SearchError {
    /// Nothing but whitespace was submitted
    #[error("enter a bank name to search")]
    EmptyQuery,

    /// The lookup service had no candidate for the term
    #[error("bank not found")]
    NotFound,

    /// The lookup service could not be queried
    #[error("error searching for bank: {0}")]
    LookupFailed(#[source] LookupError),
}

impl SearchError {
    /// Stable machine-readable code.
    #[must_use]
    pub fn code(&self) -> &'static str {
        match self {
            Self::EmptyQuery => "EMPTY_QUERY",
            Self::NotFound => "NOT_FOUND",
            Self::LookupFailed(_) => "LOOKUP_FAILED",
        }
    }

    /// Message shown to the user under the search box.
    #[must_use]
    pub fn user_message(&self) -> &'static str {
        match self {
            Self::EmptyQuery => "Digite o nome de um banco para buscar",
            Self::NotFound => "Banco não encontrado.",
            Self::LookupFailed(_) => "Erro ao buscar banco.",
        }
    }
}

/// Result type alias for search operations.
pub type Result<T> = std::result::Result<T, SearchError>;
