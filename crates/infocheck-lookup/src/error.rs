//! Error types for the lookup client.

use thiserror::Error;

/// Errors that can occur while querying the lookup service.
#[derive(Error, Debug)]
pub enum LookupError {
    /// Transport failure (DNS, connection, timeout)
    #[error("network error: {0}")]
    Network(#[from] reqwest::Error),

    /// The service answered with a non-success status
    #[error("lookup service returned status {status}: {message}")]
    Api {
        /// HTTP status code
        status: u16,
        /// Response body or reason phrase
        message: String,
    },

    /// The response body was not a list of banks
    #[error("failed to parse lookup response: {0}")]
    Parse(#[from] serde_json::Error),

    /// Internal error (client construction, invalid base URL)
    #[error("internal error: {0}")]
    Internal(String),
}

/// Result type alias for lookup operations.
pub type Result<T> = std::result::Result<T, LookupError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = LookupError::Api {
            status: 503,
            message: "Service Unavailable".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "lookup service returned status 503: Service Unavailable"
        );
    }

    #[test]
    fn test_error_from_json() {
        let json_err = serde_json::from_str::<Vec<u8>>("{").expect_err("invalid json");
        let err: LookupError = json_err.into();
        assert!(matches!(err, LookupError::Parse(_)));
    }
}
