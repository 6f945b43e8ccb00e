//! InfoCheck Core - Foundation crate for the InfoCheck landing page.
//!
//! This crate provides the shared types, error handling and configuration
//! management that the lookup, search and home crates depend on.
//!
//! # Modules
//!
//! - [`error`] - Configuration errors using thiserror
//! - [`config`] - TOML-based configuration with XDG paths
//! - [`types`] - Shared domain types (`BankId`, `Bank`, `Route`)
//!
//! # Example
//!
//! ```rust
//! use infocheck_core::{AppConfig, Bank, BankId, Route};
//!
//! let config = AppConfig::default();
//! assert_eq!(config.search.debounce_ms, 300);
//!
//! let bank = Bank::new(BankId::Number(7), "Banco do Brasil");
//! assert_eq!(Route::BankScams(bank.id).path(), "/golpes-por-banco/7");
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]

pub mod config;
pub mod error;
pub mod types;

// Re-export commonly used types
pub use config::{ApiConfig, AppConfig, SearchConfig, SessionConfig, StatsConfig};
pub use error::{ConfigError, ConfigResult};
pub use types::{Bank, BankId, Route};
