//! InfoCheck Search - incremental bank search for the landing page.
//!
//! Two cooperating components live here:
//!
//! - [`SuggestionFetcher`] watches the search box text, waits for typing to
//!   settle and keeps an autocomplete list of banks up to date.
//! - [`SearchResolver`] turns an explicit submission into exactly one bank
//!   (exact case-insensitive match first, then the first candidate) or a
//!   [`SearchError`].
//!
//! Both talk to the backend only through [`infocheck_lookup::BankLookup`].
//!
//! # Example
//!
//! ```rust,no_run
//! use infocheck_core::{ApiConfig, SearchConfig};
//! use infocheck_lookup::HttpBankLookup;
//! use infocheck_search::{SearchResolver, SuggestionFetcher};
//! use std::sync::Arc;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let lookup = Arc::new(HttpBankLookup::new(&ApiConfig::default())?);
//!
//! let fetcher = SuggestionFetcher::new(lookup.clone(), &SearchConfig::default());
//! fetcher.set_query("Banco do");
//!
//! let resolver = SearchResolver::new(lookup);
//! let bank = resolver.resolve("banco do brasil").await?;
//! println!("navigate to /golpes-por-banco/{}", bank.id);
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]

pub mod debounce;
pub mod error;
pub mod resolver;
pub mod suggest;

#[cfg(test)]
pub(crate) mod fake;

pub use debounce::Debouncer;
pub use error::{Result, SearchError};
pub use resolver::{select_target, SearchResolver};
pub use suggest::{SuggestionFetcher, SuggestionState};
