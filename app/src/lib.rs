//! InfoCheck application shell
//!
//! This is the thin shell that loads configuration and the session record,
//! wires the landing page to the HTTP lookup client, and prints what a
//! browser would render. Core logic lives in the `crates/` directory.

mod state;

pub use state::AppState;

use anyhow::bail;
use infocheck_home::{HomeView, Shortcut};
use tracing::info;

/// Initialize tracing subscriber for logging
pub fn init_tracing() {
    use tracing_subscriber::{fmt, prelude::*, EnvFilter};

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,infocheck=debug"));

    tracing_subscriber::registry()
        .with(fmt::layer().with_target(true).with_writer(std::io::stderr))
        .with(filter)
        .init();
}

/// Join command-line words into a search term; `None` when there are none.
#[must_use]
pub fn search_term(args: &[String]) -> Option<String> {
    if args.is_empty() {
        None
    } else {
        Some(args.join(" "))
    }
}

/// Text lines for the static parts of the landing page.
#[must_use]
pub fn landing_summary(view: &HomeView) -> Vec<String> {
    let header = view.header();
    let mut lines = vec![format!("[{}] -> {}", header.label(), header.route())];

    let describe = |shortcut: &Shortcut| {
        if shortcut.description.is_empty() {
            format!("{} -> {}", shortcut.title, shortcut.route)
        } else {
            format!(
                "{} -> {} ({})",
                shortcut.title, shortcut.route, shortcut.description
            )
        }
    };
    lines.extend(view.hero_actions().iter().map(describe));
    lines.extend(view.shortcuts().iter().map(describe));
    lines
}

/// Run the shell.
///
/// With a search term, resolves it and prints the route. Without, prints the
/// landing page and animates the statistics to completion.
pub async fn run(args: Vec<String>) -> anyhow::Result<()> {
    info!("Starting InfoCheck v{}", env!("CARGO_PKG_VERSION"));

    let state = AppState::load()?;
    let mut view = state.home_view();

    if let Some(term) = search_term(&args) {
        view.on_query_change(term);
        match view.submit().await {
            Ok(route) => println!("{route}"),
            Err(err) => bail!("{} ({})", err.message, err.code),
        }
        return Ok(());
    }

    for line in landing_summary(&view) {
        println!("{line}");
    }

    let panel = view.start_statistics();
    panel.finished().await;
    for line in panel.render() {
        println!("{line}");
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use infocheck_core::AppConfig;
    use infocheck_home::{RecordingNavigator, SessionContext, SessionUser};
    use infocheck_lookup::HttpBankLookup;
    use std::sync::Arc;

    fn view(session: SessionContext) -> HomeView {
        let lookup = HttpBankLookup::with_url("http://127.0.0.1:9").expect("create client");
        HomeView::new(
            Arc::new(lookup),
            Arc::new(RecordingNavigator::new()),
            session,
            &AppConfig::default(),
        )
    }

    #[test]
    fn test_search_term() {
        assert_eq!(search_term(&[]), None);
        assert_eq!(
            search_term(&["Banco".to_string(), "do".to_string(), "Brasil".to_string()]),
            Some("Banco do Brasil".to_string())
        );
    }

    #[test]
    fn test_landing_summary_logged_out() {
        let lines = landing_summary(&view(SessionContext::logged_out()));
        assert_eq!(lines[0], "[Entrar] -> /login");
        assert_eq!(lines[1], "Verificar Contato -> /verificar-contato");
        assert_eq!(lines[2], "Denunciar Golpe -> /login");
        assert!(lines[3].starts_with("Canais Oficiais -> /golpes-por-banco ("));
        assert_eq!(lines.len(), 7);
    }

    #[test]
    fn test_landing_summary_logged_in() {
        let session = SessionContext::logged_in(SessionUser::new("Rafael Alves"));
        let lines = landing_summary(&view(session));
        assert_eq!(lines[0], "[Rafael] -> /dashboard");
        assert_eq!(lines[2], "Denunciar Golpe -> /denuncia-elaborada");
        assert!(lines[4].starts_with("Registrar Denúncia -> /denuncia-elaborada"));
    }
}
