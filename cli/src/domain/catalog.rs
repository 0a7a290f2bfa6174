//! The catalog state container.
//!
//! `CatalogState` is the single owner of the loaded records, the current
//! criteria, and the derived filtered view. Every mutating method re-derives
//! `filtered` before returning, so it is never observable out of date.

use std::collections::{BTreeSet, HashSet};

use catalog_common::{Agent, AgentStatus, PricingModel};
use serde::Serialize;

use crate::domain::error::CatalogError;
use crate::domain::filter::{FilterCriteria, evaluate};

/// Coarse view of the container for presentation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum CatalogPhase {
    /// The initial load is in flight.
    Loading,
    /// Records are available.
    Ready,
    /// Not loading and no records: the load failed or returned nothing.
    Empty,
}

/// Records, criteria, derived view, and loading flag.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct CatalogState {
    records: Vec<Agent>,
    filtered: Vec<Agent>,
    criteria: FilterCriteria,
    loading: bool,
}

impl CatalogState {
    /// Empty records, default criteria, not loading.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    // ── Read access ───────────────────────────────────────────────────────────

    #[must_use]
    pub fn records(&self) -> &[Agent] {
        &self.records
    }

    #[must_use]
    pub fn filtered(&self) -> &[Agent] {
        &self.filtered
    }

    #[must_use]
    pub fn criteria(&self) -> &FilterCriteria {
        &self.criteria
    }

    #[must_use]
    pub fn is_loading(&self) -> bool {
        self.loading
    }

    #[must_use]
    pub fn phase(&self) -> CatalogPhase {
        if self.loading {
            CatalogPhase::Loading
        } else if self.records.is_empty() {
            CatalogPhase::Empty
        } else {
            CatalogPhase::Ready
        }
    }

    /// Distinct categories across all records, sorted ascending.
    #[must_use]
    pub fn categories(&self) -> Vec<String> {
        self.records
            .iter()
            .map(|a| a.category.clone())
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect()
    }

    // ── Load transitions ──────────────────────────────────────────────────────

    /// Mark the load as started. Returns `false` (and changes nothing) if a
    /// load is already in flight.
    pub fn begin_load(&mut self) -> bool {
        if self.loading {
            return false;
        }
        self.loading = true;
        true
    }

    /// Accept the loaded records. `filtered` is derived from the criteria
    /// current at this moment, so filters set while loading are honored.
    pub fn finish_load(&mut self, records: Vec<Agent>) {
        self.records = records;
        self.loading = false;
        self.recompute();
    }

    /// Record a failed load: stop loading, keep whatever records exist.
    pub fn fail_load(&mut self) {
        self.loading = false;
    }

    // ── Criteria setters ──────────────────────────────────────────────────────

    pub fn set_search(&mut self, text: impl Into<String>) {
        self.criteria.search = text.into();
        self.recompute();
    }

    /// Replace the status set wholesale.
    pub fn set_status_filter(&mut self, statuses: impl IntoIterator<Item = AgentStatus>) {
        self.criteria.status = statuses.into_iter().collect();
        self.recompute();
    }

    /// Replace the category set wholesale. Blank labels are dropped.
    pub fn set_category_filter<I, S>(&mut self, categories: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.criteria.category = categories
            .into_iter()
            .map(Into::into)
            .filter(|c| !c.trim().is_empty())
            .collect();
        self.recompute();
    }

    /// Replace the pricing model; `None` clears it.
    pub fn set_pricing_model_filter(&mut self, model: Option<PricingModel>) {
        self.criteria.pricing_model = model;
        self.recompute();
    }

    /// Add or remove one status from the current set.
    pub fn toggle_status(&mut self, status: AgentStatus, checked: bool) {
        let mut next = self.criteria.status.clone();
        if checked {
            next.insert(status);
        } else {
            next.remove(&status);
        }
        self.set_status_filter(next);
    }

    /// Add or remove one category from the current set.
    pub fn toggle_category(&mut self, category: &str, checked: bool) {
        let mut next = self.criteria.category.clone();
        if checked {
            next.insert(category.to_string());
        } else {
            next.remove(category);
        }
        self.set_category_filter(next);
    }

    /// Reset criteria to defaults; the view becomes every record.
    pub fn clear_all_filters(&mut self) {
        self.criteria = FilterCriteria::default();
        self.filtered.clone_from(&self.records);
    }

    fn recompute(&mut self) {
        self.filtered = evaluate(&self.records, &self.criteria);
    }
}

/// Check that a loaded dataset has non-empty, unique ids.
///
/// # Errors
///
/// Returns `CatalogError::EmptyId` or `CatalogError::DuplicateId` for the
/// first offending record.
pub fn validate_records(records: &[Agent]) -> Result<(), CatalogError> {
    let mut seen = HashSet::with_capacity(records.len());
    for agent in records {
        if agent.id.trim().is_empty() {
            return Err(CatalogError::EmptyId);
        }
        if !seen.insert(agent.id.as_str()) {
            return Err(CatalogError::DuplicateId(agent.id.clone()));
        }
    }
    Ok(())
}

// ── Unit tests ────────────────────────────────────────────────────────────────
