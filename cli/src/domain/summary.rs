//! Presentation facts derived from criteria: the catalog title and the
//! result-count line.

use crate::domain::filter::FilterCriteria;

/// Base title shown above the catalog.
pub const CATALOG_TITLE: &str = "AI Agents Catalog";

/// Catalog title, suffixed with the active constraints when any are set.
///
/// `AI Agents Catalog - "bot" • Active, Beta • Sales • Per-Use`
#[must_use]
pub fn title(criteria: &FilterCriteria) -> String {
    let mut parts = Vec::new();
    if !criteria.search.is_empty() {
        parts.push(format!("\"{}\"", criteria.search));
    }
    if !criteria.status.is_empty() {
        let statuses: Vec<&str> = criteria.status.iter().map(|s| s.as_str()).collect();
        parts.push(statuses.join(", "));
    }
    if !criteria.category.is_empty() {
        let categories: Vec<&str> = criteria.category.iter().map(String::as_str).collect();
        parts.push(categories.join(", "));
    }
    if let Some(model) = criteria.pricing_model {
        parts.push(model.to_string());
    }

    if parts.is_empty() {
        CATALOG_TITLE.to_string()
    } else {
        format!("{CATALOG_TITLE} - {}", parts.join(" • "))
    }
}

/// `Showing 3 agents matching your criteria`
#[must_use]
pub fn result_line(count: usize, criteria: &FilterCriteria) -> String {
    let noun = if count == 1 { "agent" } else { "agents" };
    let suffix = if criteria.is_unconstrained() {
        ""
    } else {
        " matching your criteria"
    };
    format!("Showing {count} {noun}{suffix}")
}
