//! Application state management.

use anyhow::Context;
use infocheck_core::AppConfig;
use infocheck_home::{HomeView, RecordingNavigator, SessionContext, SessionStore};
use infocheck_lookup::HttpBankLookup;
use std::sync::Arc;

/// Everything the shell wires into the landing page.
pub struct AppState {
    /// Loaded configuration (file + environment)
    pub config: AppConfig,
    /// HTTP client for the autocomplete endpoint
    pub lookup: Arc<HttpBankLookup>,
    /// Navigation sink; the shell prints what it receives
    pub navigator: Arc<RecordingNavigator>,
    /// Login state read once at startup
    pub session: SessionContext,
}

impl AppState {
    /// Load configuration and the session record from their XDG locations.
    pub fn load() -> anyhow::Result<Self> {
        let config = AppConfig::load_with_env().context("failed to load configuration")?;
        Self::from_config(config)
    }

    /// Build the state from an already loaded configuration.
    ///
    /// An unreadable session record is logged and treated as logged out.
    pub fn from_config(config: AppConfig) -> anyhow::Result<Self> {
        let lookup =
            HttpBankLookup::new(&config.api).context("failed to create lookup client")?;

        let session_path = config
            .session_path()
            .context("failed to locate session record")?;
        let store = SessionStore::new(session_path);
        let session = store.load().unwrap_or_else(|e| {
            tracing::warn!("Ignoring session record {}: {}", store.path().display(), e);
            SessionContext::logged_out()
        });

        tracing::info!("Lookup service: {}", config.api.base_url);

        Ok(Self {
            config,
            lookup: Arc::new(lookup),
            navigator: Arc::new(RecordingNavigator::new()),
            session,
        })
    }

    /// Assemble the landing page.
    #[must_use]
    pub fn home_view(&self) -> HomeView {
        HomeView::new(
            self.lookup.clone(),
            self.navigator.clone(),
            self.session.clone(),
            &self.config,
        )
    }
}
