//! Shared types used across the InfoCheck crates.
//!
//! This module defines the bank record returned by the lookup service and the
//! logical routes the landing page can navigate to.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Opaque bank identifier as issued by the backend.
///
/// The lookup service has emitted both numeric and textual identifiers, so
/// either JSON form is accepted and preserved.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum BankId {
    /// Numeric identifier (`"id_banco": 12`)
    Number(i64),
    /// Textual identifier (`"id_banco": "itau"`)
    Text(String),
}

impl From<i64> for BankId {
    fn from(id: i64) -> Self {
        Self::Number(id)
    }
}

impl From<&str> for BankId {
    fn from(id: &str) -> Self {
        Self::Text(id.to_string())
    }
}

impl fmt::Display for BankId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Number(n) => write!(f, "{n}"),
            Self::Text(s) => write!(f, "{s}"),
        }
    }
}

/// A bank candidate as returned by the autocomplete endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Bank {
    /// Backend identifier
    #[serde(rename = "id_banco")]
    pub id: BankId,
    /// Display name
    #[serde(rename = "nome_banco")]
    pub name: String,
}

impl Bank {
    /// Create a bank record.
    #[must_use]
    pub fn new(id: BankId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
        }
    }
}

/// Logical navigation targets reachable from the landing page.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Route {
    /// Scam reports for a single bank
    BankScams(BankId),
    /// Official contact channels of every bank
    BankChannels,
    /// Login page
    Login,
    /// Logged-in user dashboard
    Dashboard,
    /// Contact verification tool
    VerifyContact,
    /// Detailed scam report form
    FileReport,
    /// Recent scam alerts
    AlertsFeed,
    /// Public statistics
    Statistics,
}

impl Route {
    /// Render the route as a client-side path.
    #[must_use]
    pub fn path(&self) -> String {
        match self {
            Self::BankScams(id) => format!("/golpes-por-banco/{id}"),
            Self::BankChannels => "/golpes-por-banco".to_string(),
            Self::Login => "/login".to_string(),
            Self::Dashboard => "/dashboard".to_string(),
            Self::VerifyContact => "/verificar-contato".to_string(),
            Self::FileReport => "/denuncia-elaborada".to_string(),
            Self::AlertsFeed => "/feed-alertas".to_string(),
            Self::Statistics => "/estatisticas".to_string(),
        }
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.path())
    }
}
