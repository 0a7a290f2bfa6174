//! `agent-catalog categories`: list the distinct categories in the dataset.

use std::process::ExitCode;

use anyhow::Result;

use crate::app::AppContext;

/// Run the categories command.
///
/// # Errors
///
/// Returns an error if rendering fails.
pub async fn run(app: &AppContext) -> Result<ExitCode> {
    let (session, outcome) = super::open_session(app).await;
    let categories = session.state().categories();
    app.renderer().render_categories(&categories)?;
    Ok(super::list::exit_code(outcome))
}
