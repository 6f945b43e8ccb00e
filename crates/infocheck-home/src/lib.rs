//! InfoCheck Home - the landing page without its presentation layer.
//!
//! [`HomeView`] composes the search subsystem from `infocheck-search` with
//! the rest of the page state:
//!
//! - **Header**: login or dashboard affordance from the injected
//!   [`SessionContext`]
//! - **Statistics**: animated [`CountUpDisplay`] counters, pt-BR formatted
//! - **Shortcuts**: hero buttons and feature cards, with targets that depend
//!   on login state
//!
//! Navigation is emitted through the [`Navigator`] trait; the router that
//! consumes it lives outside this crate.
//!
//! ## Example
//!
//! ```rust,ignore
//! use infocheck_home::{HomeView, RecordingNavigator, SessionStore};
//!
//! let session = SessionStore::new(config.session_path()?).load()?;
//! let mut view = HomeView::new(lookup, navigator, session, &config);
//!
//! view.on_query_change("Banco do Bra");
//! let outcome = view.submit().await;
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]

pub mod countup;
pub mod error;
pub mod navigation;
pub mod session;
pub mod stats;
pub mod view;

pub use countup::{format_pt_br, CountUp, CountUpDisplay, CountUpFrame};
pub use error::{SessionError, ViewError};
pub use navigation::{Navigator, RecordingNavigator};
pub use session::{SessionContext, SessionStore, SessionUser};
pub use stats::{Statistic, StatisticsPanel, HOME_STATISTICS};
pub use view::{HeaderAction, HomeView, Shortcut};
