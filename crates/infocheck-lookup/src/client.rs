//! Lookup trait and the `reqwest` implementation of the autocomplete endpoint.

use crate::error::{LookupError, Result};
use async_trait::async_trait;
use infocheck_core::{ApiConfig, Bank};
use reqwest::Client;

/// Path of the autocomplete endpoint, relative to the backend base URL.
pub const AUTOCOMPLETE_PATH: &str = "/api/bancos/autocomplete";

/// Source of bank candidates for a (possibly partial) search term.
///
/// Implementations must tolerate incrementally typed substrings and must be
/// thread-safe (Send + Sync) so they can be shared with spawned fetch tasks.
#[async_trait]
pub trait BankLookup: Send + Sync {
    /// Return the candidates matching `term`, in the service's order.
    ///
    /// An absent or empty answer is returned as an empty list.
    async fn autocomplete(&self, term: &str) -> Result<Vec<Bank>>;
}

/// HTTP client for `GET /api/bancos/autocomplete?termo=<term>`.
pub struct HttpBankLookup {
    client: Client,
    base_url: String,
}

impl HttpBankLookup {
    /// Create a client from the API settings.
    ///
    /// # Errors
    /// Returns error if the HTTP client cannot be created.
    pub fn new(config: &ApiConfig) -> Result<Self> {
        let client = Client::builder()
            .connect_timeout(config.connect_timeout())
            .timeout(config.timeout())
            .user_agent(config.user_agent.clone())
            .build()
            .map_err(|e| LookupError::Internal(format!("failed to create HTTP client: {e}")))?;

        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        })
    }

    /// Create a client for a custom base URL with default timeouts.
    ///
    /// # Errors
    /// Returns error if the HTTP client cannot be created.
    pub fn with_url(base_url: impl Into<String>) -> Result<Self> {
        let config = ApiConfig {
            base_url: base_url.into(),
            ..ApiConfig::default()
        };
        Self::new(&config)
    }

    /// Build the request URL for a search term.
    fn autocomplete_url(&self, term: &str) -> String {
        format!(
            "{}{AUTOCOMPLETE_PATH}?termo={}",
            self.base_url,
            urlencoding::encode(term)
        )
    }
}

/// Decode a response body, treating an empty body or `null` as no matches.
fn parse_banks(body: &str) -> Result<Vec<Bank>> {
    if body.trim().is_empty() {
        return Ok(Vec::new());
    }
    let banks: Option<Vec<Bank>> = serde_json::from_str(body)?;
    Ok(banks.unwrap_or_default())
}

#[async_trait]
impl BankLookup for HttpBankLookup {
    async fn autocomplete(&self, term: &str) -> Result<Vec<Bank>> {
        let url = self.autocomplete_url(term);
        tracing::debug!("GET {}", url);

        let response = self.client.get(&url).send().await?;

        let status = response.status();
        if !status.is_success() {
            let error_text = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            return Err(LookupError::Api {
                status: status.as_u16(),
                message: error_text,
            });
        }

        let body = response.text().await?;
        let banks = parse_banks(&body)?;
        tracing::debug!("Lookup for {:?} returned {} candidates", term, banks.len());
        Ok(banks)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use infocheck_core::BankId;

    #[test]
    fn test_client_creation() {
        let client = HttpBankLookup::new(&ApiConfig::default()).expect("create client");
        assert_eq!(client.base_url, "http://localhost:8080");
    }

    #[test]
    fn test_trailing_slash_is_dropped() {
        let client = HttpBankLookup::with_url("http://backend:8080/").expect("create client");
        assert_eq!(client.base_url, "http://backend:8080");
    }

    #[test]
    fn test_autocomplete_url_escapes_term() {
        let client = HttpBankLookup::with_url("http://backend:8080").expect("create client");
        assert_eq!(
            client.autocomplete_url("Banco do Brasil"),
            "http://backend:8080/api/bancos/autocomplete?termo=Banco%20do%20Brasil"
        );
        assert_eq!(
            client.autocomplete_url("C&A Pay"),
            "http://backend:8080/api/bancos/autocomplete?termo=C%26A%20Pay"
        );
    }

    #[test]
    fn test_autocomplete_url_keeps_surrounding_whitespace() {
        let client = HttpBankLookup::with_url("http://backend:8080").expect("create client");
        assert!(client.autocomplete_url(" Itaú ").ends_with("termo=%20Ita%C3%BA%20"));
    }

    #[test]
    fn test_parse_banks() {
        let banks = parse_banks(
            r#"[{"id_banco": 2, "nome_banco": "Banco X"}, {"id_banco": 1, "nome_banco": "BANCO Y"}]"#,
        )
        .expect("parse banks");
        assert_eq!(banks.len(), 2);
        assert_eq!(banks[0].id, BankId::Number(2));
        assert_eq!(banks[1].name, "BANCO Y");
    }

    #[test]
    fn test_parse_absent_bodies() {
        assert!(parse_banks("").expect("empty body").is_empty());
        assert!(parse_banks("null").expect("null body").is_empty());
        assert!(parse_banks("[]").expect("empty list").is_empty());
    }

    #[test]
    fn test_parse_rejects_garbage() {
        assert!(matches!(
            parse_banks("<html>oops</html>"),
            Err(LookupError::Parse(_))
        ));
    }
}
