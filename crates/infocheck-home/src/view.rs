//! Landing page composition.
//!
//! [`HomeView`] wires the search box, the header, the hero buttons and the
//! shortcut cards to a [`Navigator`].

use crate::error::ViewError;
use crate::navigation::Navigator;
use crate::session::SessionContext;
use crate::stats::{StatisticsPanel, HOME_STATISTICS};
use infocheck_core::{AppConfig, Bank, Route, StatsConfig};
use infocheck_lookup::BankLookup;
use infocheck_search::{SearchResolver, SuggestionFetcher, SuggestionState};
use std::sync::Arc;
use tokio::sync::watch;

/// Account affordance in the page header.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HeaderAction {
    /// Greets the logged-in user and leads to the dashboard
    Dashboard {
        /// First word of the user's name
        first_name: String,
    },
    /// Invites an anonymous visitor to log in
    Login,
}

impl HeaderAction {
    /// Button caption.
    #[must_use]
    pub fn label(&self) -> &str {
        match self {
            Self::Dashboard { first_name } => first_name.as_str(),
            Self::Login => "Entrar",
        }
    }

    /// Where the button leads.
    #[must_use]
    pub fn route(&self) -> Route {
        match self {
            Self::Dashboard { .. } => Route::Dashboard,
            Self::Login => Route::Login,
        }
    }
}

/// A navigation button or card.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Shortcut {
    /// Caption
    pub title: &'static str,
    /// Supporting text (empty for hero buttons)
    pub description: &'static str,
    /// Target
    pub route: Route,
}

/// The landing page, minus its presentation.
///
/// Owns the suggestion fetcher, the resolver and the last submission error;
/// login state is injected at construction and never re-read.
pub struct HomeView {
    fetcher: SuggestionFetcher,
    resolver: SearchResolver,
    navigator: Arc<dyn Navigator>,
    session: SessionContext,
    stats: StatsConfig,
    error: Option<ViewError>,
}

impl HomeView {
    /// Assemble the page around its collaborators.
    #[must_use]
    pub fn new(
        lookup: Arc<dyn BankLookup>,
        navigator: Arc<dyn Navigator>,
        session: SessionContext,
        config: &AppConfig,
    ) -> Self {
        Self {
            fetcher: SuggestionFetcher::new(Arc::clone(&lookup), &config.search),
            resolver: SearchResolver::new(lookup),
            navigator,
            session,
            stats: config.stats.clone(),
            error: None,
        }
    }

    // Search box events

    /// The search box text changed.
    pub fn on_query_change(&self, text: impl Into<String>) {
        self.fetcher.set_query(text);
    }

    /// The search box gained focus.
    pub fn on_focus(&self) {
        self.fetcher.focus();
    }

    /// The search box lost focus.
    pub fn on_blur(&self) {
        self.fetcher.blur();
    }

    /// A suggestion was clicked.
    pub fn on_select(&self, bank: &Bank) -> Route {
        let route = self.fetcher.select(bank);
        self.navigator.navigate(&route);
        route
    }

    /// The search form was submitted.
    ///
    /// Clears the previous error, then either navigates to the resolved bank
    /// or records the error message; never both.
    pub async fn submit(&mut self) -> Result<Route, ViewError> {
        self.error = None;
        let query = self.fetcher.query();

        match self.resolver.resolve(&query).await {
            Ok(bank) => {
                let route = Route::BankScams(bank.id);
                self.navigator.navigate(&route);
                Ok(route)
            }
            Err(e) => {
                tracing::debug!("Search for {:?} failed: {}", query.trim(), e);
                let err = ViewError::from(&e);
                self.error = Some(err.clone());
                Err(err)
            }
        }
    }

    /// Current search box text.
    #[must_use]
    pub fn query(&self) -> String {
        self.fetcher.query()
    }

    /// Current suggestion list.
    #[must_use]
    pub fn suggestions(&self) -> SuggestionState {
        self.fetcher.state()
    }

    /// Watch the suggestion list.
    #[must_use]
    pub fn subscribe_suggestions(&self) -> watch::Receiver<SuggestionState> {
        self.fetcher.subscribe()
    }

    /// Message under the search box, if the last submission failed.
    #[must_use]
    pub fn error_message(&self) -> Option<&str> {
        self.error.as_ref().map(|e| e.message.as_str())
    }

    /// Full error of the last failed submission.
    #[must_use]
    pub fn error(&self) -> Option<&ViewError> {
        self.error.as_ref()
    }

    // Static affordances

    /// Header button for the current login state.
    #[must_use]
    pub fn header(&self) -> HeaderAction {
        match self.session.user() {
            Some(user) => HeaderAction::Dashboard {
                first_name: user.first_name().to_string(),
            },
            None => HeaderAction::Login,
        }
    }

    /// Reporting requires a login; anonymous visitors are sent to log in.
    fn report_route(&self) -> Route {
        if self.session.is_logged_in() {
            Route::FileReport
        } else {
            Route::Login
        }
    }

    /// Buttons under the hero text.
    #[must_use]
    pub fn hero_actions(&self) -> Vec<Shortcut> {
        vec![
            Shortcut {
                title: "Verificar Contato",
                description: "",
                route: Route::VerifyContact,
            },
            Shortcut {
                title: "Denunciar Golpe",
                description: "",
                route: self.report_route(),
            },
        ]
    }

    /// Feature cards grid.
    #[must_use]
    pub fn shortcuts(&self) -> Vec<Shortcut> {
        vec![
            Shortcut {
                title: "Canais Oficiais",
                description: "Acesse rapidamente os contatos verificados de todos os bancos e evite fraudes.",
                route: Route::BankChannels,
            },
            Shortcut {
                title: "Registrar Denúncia",
                description: "Contribua com a comunidade reportando números e contas suspeitas.",
                route: self.report_route(),
            },
            Shortcut {
                title: "Feed de Alertas",
                description: "Fique por dentro dos golpes mais recentes e proteja-se preventivamente.",
                route: Route::AlertsFeed,
            },
            Shortcut {
                title: "Estatísticas",
                description: "Visualize dados em tempo real sobre a segurança bancária no Brasil.",
                route: Route::Statistics,
            },
        ]
    }

    /// Follow the header button.
    pub fn activate_header(&self) -> Route {
        let route = self.header().route();
        self.navigator.navigate(&route);
        route
    }

    /// Follow a hero button or card.
    pub fn activate(&self, shortcut: &Shortcut) {
        self.navigator.navigate(&shortcut.route);
    }

    /// Start the hero statistics counters.
    ///
    /// Must be called from within a Tokio runtime.
    #[must_use]
    pub fn start_statistics(&self) -> StatisticsPanel {
        StatisticsPanel::start(&HOME_STATISTICS, &self.stats)
    }
}
