//! Property-based tests for the filter evaluator and the state container.
//!
//! Uses `proptest` to verify the filter laws across many random catalogs.

#![allow(clippy::expect_used)]

use std::collections::BTreeSet;

use catalog_cli::domain::{CatalogState, FilterCriteria, evaluate, matches};
use catalog_common::{Agent, AgentStatus, PricingModel};
use proptest::prelude::*;

// ============================================================================
// Strategies
// ============================================================================

const CATEGORIES: &[&str] = &["Support", "Sales", "Marketing", "Development"];

fn status() -> impl Strategy<Value = AgentStatus> {
    prop_oneof![
        Just(AgentStatus::Active),
        Just(AgentStatus::Beta),
        Just(AgentStatus::Archived),
    ]
}

fn pricing() -> impl Strategy<Value = PricingModel> {
    prop_oneof![
        Just(PricingModel::FreeTier),
        Just(PricingModel::Subscription),
        Just(PricingModel::PerUse),
    ]
}

fn category() -> impl Strategy<Value = String> {
    prop::sample::select(CATEGORIES).prop_map(str::to_string)
}

/// Records with unique ids (their position).
fn records() -> impl Strategy<Value = Vec<Agent>> {
    prop::collection::vec(
        ("[A-Za-z ]{0,12}", "[A-Za-z ]{0,20}", status(), category(), pricing()),
        0..24,
    )
    .prop_map(|rows| {
        rows.into_iter()
            .enumerate()
            .map(|(i, (name, description, status, category, pricing_model))| Agent {
                id: i.to_string(),
                name,
                description,
                status,
                category,
                pricing_model,
            })
            .collect()
    })
}

fn criteria() -> impl Strategy<Value = FilterCriteria> {
    (
        "[a-zA-Z]{0,3}",
        prop::collection::btree_set(status(), 0..3),
        prop::collection::btree_set(category(), 0..3),
        prop::option::of(pricing()),
    )
        .prop_map(|(search, status, category, pricing_model)| FilterCriteria {
            search,
            status,
            category,
            pricing_model,
        })
}

/// `filtered` equals what the evaluator computes from scratch.
fn is_fresh(state: &CatalogState) -> bool {
    state.filtered() == evaluate(state.records(), state.criteria()).as_slice()
}

fn loaded(records: Vec<Agent>) -> CatalogState {
    let mut state = CatalogState::new();
    state.begin_load();
    state.finish_load(records);
    state
}

// ============================================================================
// Evaluator laws
// ============================================================================

proptest! {
    /// Default criteria return the records unchanged.
    #[test]
    fn prop_identity_law(records in records()) {
        prop_assert_eq!(evaluate(&records, &FilterCriteria::default()), records);
    }

    /// The result is an order-preserving subsequence of the input.
    #[test]
    fn prop_result_is_ordered_subsequence(records in records(), criteria in criteria()) {
        let result = evaluate(&records, &criteria);
        let mut cursor = records.iter();
        for kept in &result {
            prop_assert!(cursor.any(|r| r == kept), "{} out of order or synthesized", kept.id);
        }
    }

    /// Every kept record matches and every dropped record does not.
    #[test]
    fn prop_result_is_exactly_the_matching_records(records in records(), criteria in criteria()) {
        let result = evaluate(&records, &criteria);
        let kept: BTreeSet<&str> = result.iter().map(|a| a.id.as_str()).collect();
        prop_assert_eq!(kept.len(), result.len(), "duplicate in result");
        for agent in &records {
            prop_assert_eq!(kept.contains(agent.id.as_str()), matches(agent, &criteria));
        }
    }

    /// Same inputs, same output.
    #[test]
    fn prop_evaluate_is_deterministic(records in records(), criteria in criteria()) {
        prop_assert_eq!(evaluate(&records, &criteria), evaluate(&records, &criteria));
    }

    /// An empty field never narrows the result: dropping one constraint can
    /// only keep or grow the matching set.
    #[test]
    fn prop_empty_field_is_unconstrained(records in records(), criteria in criteria()) {
        let full = evaluate(&records, &criteria).len();
        let relaxed = [
            FilterCriteria { search: String::new(), ..criteria.clone() },
            FilterCriteria { status: BTreeSet::new(), ..criteria.clone() },
            FilterCriteria { category: BTreeSet::new(), ..criteria.clone() },
            FilterCriteria { pricing_model: None, ..criteria.clone() },
        ];
        for relaxed in &relaxed {
            prop_assert!(evaluate(&records, relaxed).len() >= full);
        }
    }

    /// Search ignores case.
    #[test]
    fn prop_search_ignores_case(records in records(), needle in "[a-zA-Z]{1,3}") {
        let lower = FilterCriteria { search: needle.to_lowercase(), ..FilterCriteria::default() };
        let upper = FilterCriteria { search: needle.to_uppercase(), ..FilterCriteria::default() };
        prop_assert_eq!(evaluate(&records, &lower), evaluate(&records, &upper));
    }

    /// Empty input, empty output.
    #[test]
    fn prop_empty_records_yield_empty(criteria in criteria()) {
        prop_assert!(evaluate(&[], &criteria).is_empty());
    }
}

// ============================================================================
// State container laws
// ============================================================================

proptest! {
    /// The filtered view always equals a fresh evaluation after any setter.
    #[test]
    fn prop_filtered_never_stale(records in records(), criteria in criteria()) {
        let mut state = loaded(records);
        state.set_search(criteria.search.clone());
        prop_assert!(is_fresh(&state));
        state.set_status_filter(criteria.status.clone());
        prop_assert!(is_fresh(&state));
        state.set_category_filter(criteria.category.clone());
        prop_assert!(is_fresh(&state));
        state.set_pricing_model_filter(criteria.pricing_model);
        prop_assert!(is_fresh(&state));
        prop_assert_eq!(state.criteria(), &criteria);
    }

    /// Clearing after any sequence of setters restores the full view.
    #[test]
    fn prop_clear_resets_fully(records in records(), criteria in criteria()) {
        let mut state = loaded(records);
        state.set_search(criteria.search);
        state.set_status_filter(criteria.status);
        state.set_category_filter(criteria.category);
        state.set_pricing_model_filter(criteria.pricing_model);
        state.clear_all_filters();
        prop_assert_eq!(state.criteria(), &FilterCriteria::default());
        prop_assert_eq!(state.filtered(), state.records());
    }

    /// Clearing is equivalent to re-evaluating with default criteria.
    #[test]
    fn prop_clear_matches_evaluator(records in records()) {
        let mut state = loaded(records);
        state.set_search("zzz");
        state.clear_all_filters();
        let expected = evaluate(state.records(), &FilterCriteria::default());
        prop_assert_eq!(state.filtered(), expected.as_slice());
    }

    /// Repeating a setter with the same value changes nothing.
    #[test]
    fn prop_setters_idempotent(records in records(), criteria in criteria()) {
        let mut once = loaded(records);
        once.set_search(criteria.search.clone());
        once.set_status_filter(criteria.status.clone());
        let mut twice = once.clone();
        twice.set_search(criteria.search);
        twice.set_status_filter(criteria.status);
        prop_assert_eq!(once, twice);
    }
}
