//! InfoCheck Lookup - access to the bank autocomplete endpoint.
//!
//! The landing page only ever reads one backend resource:
//! `GET /api/bancos/autocomplete?termo=<text>`. This crate models it as the
//! [`BankLookup`] trait so that the search components can be driven by the
//! real [`HttpBankLookup`] client or by an in-process fake.
//!
//! # Example
//!
//! ```rust,no_run
//! use infocheck_core::ApiConfig;
//! use infocheck_lookup::{BankLookup, HttpBankLookup};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let client = HttpBankLookup::new(&ApiConfig::default())?;
//! for bank in client.autocomplete("Banco do").await? {
//!     println!("{} -> {}", bank.name, bank.id);
//! }
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]

pub mod client;
pub mod error;

pub use client::{BankLookup, HttpBankLookup, AUTOCOMPLETE_PATH};
pub use error::{LookupError, Result};
