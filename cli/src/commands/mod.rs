//! Command implementations

pub mod categories;
pub mod config;
pub mod list;
pub mod version;

use crate::app::AppContext;
use crate::application::services::catalog_session::{CatalogSession, LoadOutcome};
use crate::infra::ConfiguredSource;
use crate::output::progress;

/// Build a session for this invocation and run its one load, with a spinner
/// when the bundled source is delayed and a terminal is attached.
pub async fn open_session(app: &AppContext) -> (CatalogSession<ConfiguredSource>, LoadOutcome) {
    let session = CatalogSession::new(app.agent_source());
    let outcome = load(app, &session).await;
    (session, outcome)
}

/// Run `session.load()` with progress feedback.
pub async fn load(app: &AppContext, session: &CatalogSession<ConfiguredSource>) -> LoadOutcome {
    let show_spinner = app.output.show_progress()
        && !app.is_json()
        && !session.source().simulated_delay().is_zero();
    if !show_spinner {
        return session.load().await;
    }

    let pb = progress::load_spinner();
    let outcome = session.load().await;
    progress::finish_load(&pb, outcome, &app.output.styles);
    outcome
}
