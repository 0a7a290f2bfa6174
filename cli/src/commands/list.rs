//! `agent-catalog list`: search and filter the catalog.

use std::process::ExitCode;

use anyhow::Result;
use clap::Args;

use crate::app::AppContext;
use crate::application::services::catalog_session::{CatalogSession, LoadOutcome};
use crate::domain::{parse_pricing_model, parse_statuses};

/// Arguments for the list command.
#[derive(Args, Debug)]
pub struct ListArgs {
    /// Match agent name or description (case-insensitive substring)
    #[arg(short, long, default_value = "")]
    pub search: String,

    /// Include agents with this status: active, beta, archived (repeatable)
    #[arg(long = "status", value_name = "STATUS")]
    pub statuses: Vec<String>,

    /// Include agents in this category (repeatable, exact label)
    #[arg(long = "category", value_name = "CATEGORY")]
    pub categories: Vec<String>,

    /// Only agents with this pricing model: free-tier, subscription, per-use
    #[arg(long, value_name = "MODEL", default_value = "")]
    pub pricing: String,
}

/// Run the list command.
///
/// Criteria are applied before the load resolves; the filtered view is
/// derived from them when the records arrive.
///
/// # Errors
///
/// Returns an error if a status or pricing value is not recognized, or if
/// rendering fails.
pub async fn run(app: &AppContext, args: ListArgs) -> Result<ExitCode> {
    let statuses = parse_statuses(&args.statuses)?;
    let pricing = parse_pricing_model(&args.pricing)?;

    let session = CatalogSession::new(app.agent_source());
    session.set_search(args.search);
    session.set_status_filter(statuses);
    session.set_category_filter(args.categories);
    session.set_pricing_model_filter(pricing);

    let outcome = super::load(app, &session).await;
    app.renderer().render_catalog(&session.state())?;

    Ok(exit_code(outcome))
}

pub(crate) fn exit_code(outcome: LoadOutcome) -> ExitCode {
    match outcome {
        LoadOutcome::Failed => ExitCode::FAILURE,
        LoadOutcome::Loaded(_) | LoadOutcome::Skipped => ExitCode::SUCCESS,
    }
}
