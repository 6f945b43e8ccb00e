//! User-facing error shape and session record errors.

use infocheck_search::SearchError;
use serde::Serialize;
use thiserror::Error;

/// Serializable error shown on the landing page.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ViewError {
    /// Error code for frontend handling (e.g., "`NOT_FOUND`")
    pub code: String,
    /// User-friendly message
    pub message: String,
    /// Optional debugging context
    pub details: Option<serde_json::Value>,
}

impl ViewError {
    /// Create a new view error.
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            details: None,
        }
    }

    /// Create a view error with details.
    pub fn with_details(
        code: impl Into<String>,
        message: impl Into<String>,
        details: serde_json::Value,
    ) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            details: Some(details),
        }
    }
}

impl From<&SearchError> for ViewError {
    fn from(err: &SearchError) -> Self {
        match err {
            SearchError::EmptyQuery | SearchError::NotFound => {
                Self::new(err.code(), err.user_message())
            }
            SearchError::LookupFailed(cause) => Self::with_details(
                err.code(),
                err.user_message(),
                serde_json::json!({ "cause": cause.to_string() }),
            ),
        }
    }
}

impl From<SearchError> for ViewError {
    fn from(err: SearchError) -> Self {
        Self::from(&err)
    }
}

/// Errors reading the persisted session record.
#[derive(Debug, Error)]
pub enum SessionError {
    /// The record could not be read
    #[error("failed to read session record: {0}")]
    Io(#[from] std::io::Error),

    /// The record is not a valid user
    #[error("invalid session record: {0}")]
    Parse(#[from] serde_json::Error),
}
