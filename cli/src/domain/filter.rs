//! Filter criteria and the pure evaluator that applies them.
//!
//! An empty field always means "unconstrained", never "match nothing":
//! an empty search string, an empty status set, an empty category set and
//! an absent pricing model each let every record through.

use std::collections::BTreeSet;

use catalog_common::{Agent, AgentStatus, PricingModel};
use serde::Serialize;

use crate::domain::error::CatalogError;

// ── Criteria ──────────────────────────────────────────────────────────────────

/// The user's current search/filter intent.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FilterCriteria {
    /// Case-insensitive substring matched against name and description.
    pub search: String,
    /// Statuses to include.
    pub status: BTreeSet<AgentStatus>,
    /// Categories to include.
    pub category: BTreeSet<String>,
    /// Pricing model to include.
    pub pricing_model: Option<PricingModel>,
}

impl FilterCriteria {
    /// Returns `true` when no field constrains the result.
    #[must_use]
    pub fn is_unconstrained(&self) -> bool {
        self.active_count() == 0
    }

    /// Number of active constraints, counting each selected status and
    /// category separately.
    #[must_use]
    pub fn active_count(&self) -> usize {
        self.status.len()
            + self.category.len()
            + usize::from(self.pricing_model.is_some())
            + usize::from(!self.search.is_empty())
    }
}

// ── Evaluation ────────────────────────────────────────────────────────────────

/// Criteria prepared for repeated matching: the search needle is lowercased
/// once instead of per record.
struct Predicate<'a> {
    needle: Option<String>,
    criteria: &'a FilterCriteria,
}

impl<'a> Predicate<'a> {
    fn new(criteria: &'a FilterCriteria) -> Self {
        let needle = (!criteria.search.is_empty()).then(|| criteria.search.to_lowercase());
        Self { needle, criteria }
    }

    fn test(&self, agent: &Agent) -> bool {
        let search_ok = self.needle.as_deref().is_none_or(|needle| {
            agent.name.to_lowercase().contains(needle)
                || agent.description.to_lowercase().contains(needle)
        });
        let status_ok =
            self.criteria.status.is_empty() || self.criteria.status.contains(&agent.status);
        let category_ok =
            self.criteria.category.is_empty() || self.criteria.category.contains(&agent.category);
        let pricing_ok = self
            .criteria
            .pricing_model
            .is_none_or(|model| model == agent.pricing_model);

        search_ok && status_ok && category_ok && pricing_ok
    }
}

/// Returns `true` if `agent` satisfies every constraint in `criteria`.
///
/// Pure function: no I/O, no async.
#[must_use]
pub fn matches(agent: &Agent, criteria: &FilterCriteria) -> bool {
    Predicate::new(criteria).test(agent)
}

/// Apply `criteria` to `records`, returning the matching subset.
///
/// The result keeps the relative order of `records`, never duplicates or
/// synthesizes entries, and equals `records` when `criteria` is the default.
///
/// Pure function: no I/O, no async.
#[must_use]
pub fn evaluate(records: &[Agent], criteria: &FilterCriteria) -> Vec<Agent> {
    let predicate = Predicate::new(criteria);
    records
        .iter()
        .filter(|agent| predicate.test(agent))
        .cloned()
        .collect()
}

// ── String-boundary parsing ───────────────────────────────────────────────────

/// Parse user-supplied status names into a status set.
///
/// # Errors
///
/// Returns `CatalogError::UnknownStatus` for the first value that does not
/// name a status.
pub fn parse_statuses<I, S>(values: I) -> Result<BTreeSet<AgentStatus>, CatalogError>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    values
        .into_iter()
        .map(|value| {
            let value = value.as_ref();
            value
                .parse::<AgentStatus>()
                .map_err(|e| CatalogError::UnknownStatus {
                    value: value.to_string(),
                    valid: e.expected,
                })
        })
        .collect()
}

/// Parse a user-supplied pricing model; an empty string clears the filter.
///
/// # Errors
///
/// Returns `CatalogError::UnknownPricingModel` if `value` is non-empty and
/// does not name a pricing model.
pub fn parse_pricing_model(value: &str) -> Result<Option<PricingModel>, CatalogError> {
    if value.trim().is_empty() {
        return Ok(None);
    }
    value
        .parse::<PricingModel>()
        .map(Some)
        .map_err(|e| CatalogError::UnknownPricingModel {
            value: value.to_string(),
            valid: e.expected,
        })
}

// ── Unit tests ────────────────────────────────────────────────────────────────
