//! Human-readable terminal renderer.

use catalog_common::Agent;
use owo_colors::OwoColorize as _;

use crate::domain::{CatalogConfig, CatalogPhase, CatalogState, FilterCriteria, summary};
use crate::output::{OutputContext, Styles};

/// Renders catalog state as human-readable terminal output using `OutputContext`.
pub struct HumanRenderer<'a> {
    ctx: &'a OutputContext,
}

impl<'a> HumanRenderer<'a> {
    /// Create a new `HumanRenderer` wrapping the given output context.
    #[must_use]
    pub fn new(ctx: &'a OutputContext) -> Self {
        Self { ctx }
    }

    /// Render the filtered catalog: title, active filters, result count, rows.
    pub fn render_catalog(&self, state: &CatalogState) {
        if state.phase() == CatalogPhase::Empty {
            self.ctx.warn("No agents available.");
            return;
        }

        self.ctx.header(&summary::title(state.criteria()));
        if let Some(chips) = filter_chips(state.criteria()) {
            self.ctx.kv("Filters:", &chips);
        }
        self.ctx
            .info(&summary::result_line(state.filtered().len(), state.criteria()));

        if state.filtered().is_empty() {
            self.ctx.info("No agents match. Try clearing some filters.");
            return;
        }

        println!();
        for agent in state.filtered() {
            println!("{}", agent_row(agent, &self.ctx.styles));
        }
    }

    /// Render the distinct category list.
    pub fn render_categories(&self, categories: &[String]) {
        if categories.is_empty() {
            self.ctx.warn("No categories available.");
            return;
        }
        self.ctx.header("Categories:");
        for category in categories {
            println!("  {category}");
        }
    }

    /// Render the effective configuration.
    pub fn render_config(&self, config: &CatalogConfig, path: &std::path::Path) {
        println!();
        println!(
            "  {}",
            format!("Configuration ({})", path.display()).style(self.ctx.styles.header)
        );
        println!();
        let data_path = config
            .data
            .path
            .as_ref()
            .map_or_else(|| "(bundled)".to_string(), |p| p.display().to_string());
        println!("  {:<20} {data_path}", "data.path:");
        println!("  {:<20} {}", "data.load_delay_ms:", config.data.load_delay_ms);
        println!();
    }

    /// Print a single configuration value, bare so it can be captured by
    /// shell scripts.
    pub fn render_config_value(&self, value: Option<&str>) {
        println!("{}", value.unwrap_or("(not set)"));
    }

    /// Render the CLI version.
    pub fn render_version(&self, version: &str) {
        println!("agent-catalog {version}");
    }
}

/// One table row: `[status] name  category  pricing` followed by the
/// indented description.
#[must_use]
pub fn agent_row(agent: &Agent, styles: &Styles) -> String {
    let status = format!("{:<8}", agent.status.as_str());
    format!(
        "  {} {:<26} {:<18} {}\n      {}",
        status.style(styles.status(agent.status)),
        agent.name.style(styles.bold),
        agent.category,
        agent.pricing_model.style(styles.dim),
        agent.description,
    )
}

/// Active constraints as removable-chip labels, or `None` when unconstrained.
#[must_use]
pub fn filter_chips(criteria: &FilterCriteria) -> Option<String> {
    let mut chips = Vec::with_capacity(criteria.active_count());
    if !criteria.search.is_empty() {
        chips.push(format!("Search: {}", criteria.search));
    }
    chips.extend(criteria.status.iter().map(ToString::to_string));
    chips.extend(criteria.category.iter().cloned());
    if let Some(model) = criteria.pricing_model {
        chips.push(model.to_string());
    }
    (!chips.is_empty()).then(|| format!("[{}] ({})", chips.join("] ["), chips.len()))
}
