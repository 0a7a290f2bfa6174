//! Tests for the `catalog_session` application service.
//!
//! Verifies the load transitions, that criteria set while a load is pending
//! are honored when records arrive, and that concurrent or repeated loads
//! never reach the source twice.

#![allow(clippy::expect_used)]

use std::collections::BTreeSet;

use catalog_cli::application::services::catalog_session::{CatalogSession, LoadOutcome};
use catalog_cli::domain::{CatalogPhase, FilterCriteria};
use catalog_common::{AgentStatus, PricingModel};

use crate::helpers::{
    FailingSource, FlakySource, GatedSource, StaticSource, agent, ids, support_and_sales,
};

// ── Load ──────────────────────────────────────────────────────────────────────

#[tokio::test]
async fn test_load_populates_records_and_view() {
    let session = CatalogSession::new(StaticSource::new(support_and_sales()));
    assert_eq!(session.state().phase(), CatalogPhase::Empty);

    assert_eq!(session.load().await, LoadOutcome::Loaded(2));

    let state = session.state();
    assert!(!state.is_loading());
    assert_eq!(state.records(), support_and_sales().as_slice());
    assert_eq!(state.filtered(), state.records());
    assert_eq!(state.phase(), CatalogPhase::Ready);
}

#[tokio::test]
async fn test_load_failure_is_swallowed() {
    let session = CatalogSession::new(FailingSource);
    assert_eq!(session.load().await, LoadOutcome::Failed);

    let state = session.state();
    assert!(!state.is_loading());
    assert!(state.records().is_empty());
    assert!(state.filtered().is_empty());
    assert_eq!(state.phase(), CatalogPhase::Empty);
}

#[tokio::test]
async fn test_duplicate_ids_fail_the_load() {
    let records = vec![
        agent("1", "A", "a", AgentStatus::Active, "X", PricingModel::FreeTier),
        agent("1", "B", "b", AgentStatus::Beta, "Y", PricingModel::PerUse),
    ];
    let session = CatalogSession::new(StaticSource::new(records));
    assert_eq!(session.load().await, LoadOutcome::Failed);
    assert!(session.state().records().is_empty());
}

#[tokio::test]
async fn test_load_marks_loading_before_first_poll() {
    let source = StaticSource::new(support_and_sales());
    let session = CatalogSession::new(&source);

    let pending = session.load();
    assert!(session.state().is_loading());
    assert_eq!(session.state().phase(), CatalogPhase::Loading);
    assert_eq!(source.calls(), 0);

    assert_eq!(pending.await, LoadOutcome::Loaded(2));
    assert!(!session.state().is_loading());
}

#[tokio::test]
async fn test_second_load_before_first_poll_is_skipped() {
    let source = StaticSource::new(support_and_sales());
    let session = CatalogSession::new(&source);

    let first = session.load();
    let second = session.load();
    assert_eq!(second.await, LoadOutcome::Skipped);
    assert_eq!(first.await, LoadOutcome::Loaded(2));
    assert_eq!(source.calls(), 1);
}

#[tokio::test]
async fn test_abandoned_load_clears_loading() {
    let source = StaticSource::new(support_and_sales());
    let session = CatalogSession::new(&source);

    drop(session.load());
    assert!(!session.state().is_loading());
    assert_eq!(session.state().phase(), CatalogPhase::Empty);
    assert_eq!(source.calls(), 0);

    assert_eq!(session.load().await, LoadOutcome::Loaded(2));
}

#[tokio::test]
async fn test_loading_flag_set_before_source_resolves() {
    let (source, gate) = GatedSource::new(support_and_sales());
    let session = CatalogSession::new(&source);

    let (outcome, ()) = tokio::join!(session.load(), async {
        while !session.state().is_loading() {
            tokio::task::yield_now().await;
        }
        assert_eq!(session.state().phase(), CatalogPhase::Loading);
        assert!(session.state().records().is_empty());
        gate.notify_one();
    });

    assert_eq!(outcome, LoadOutcome::Loaded(2));
    assert!(!session.state().is_loading());
}

#[tokio::test]
async fn test_criteria_set_during_load_apply_on_arrival() {
    let (source, gate) = GatedSource::new(support_and_sales());
    let session = CatalogSession::new(&source);

    let (outcome, ()) = tokio::join!(session.load(), async {
        while !session.state().is_loading() {
            tokio::task::yield_now().await;
        }
        session.set_search("leads");
        assert_eq!(session.state().criteria().search, "leads");
        assert!(session.state().filtered().is_empty());
        gate.notify_one();
    });

    assert_eq!(outcome, LoadOutcome::Loaded(2));
    assert_eq!(ids(session.state().filtered()), ["2"]);
}

#[tokio::test]
async fn test_second_load_while_pending_is_skipped() {
    let (source, gate) = GatedSource::new(support_and_sales());
    let session = CatalogSession::new(&source);

    let (first, second) = tokio::join!(session.load(), async {
        while !session.state().is_loading() {
            tokio::task::yield_now().await;
        }
        let outcome = session.load().await;
        gate.notify_one();
        outcome
    });

    assert_eq!(first, LoadOutcome::Loaded(2));
    assert_eq!(second, LoadOutcome::Skipped);
    assert_eq!(source.calls(), 1);
}

#[tokio::test]
async fn test_load_after_success_is_skipped() {
    let source = StaticSource::new(support_and_sales());
    let session = CatalogSession::new(&source);
    session.load().await;
    assert_eq!(session.load().await, LoadOutcome::Skipped);
    assert_eq!(source.calls(), 1);
}

#[tokio::test]
async fn test_explicit_load_after_failure_is_allowed() {
    let session = CatalogSession::new(FlakySource::new(support_and_sales()));
    assert_eq!(session.load().await, LoadOutcome::Failed);
    assert_eq!(session.load().await, LoadOutcome::Loaded(2));
}

// ── Setters ───────────────────────────────────────────────────────────────────

async fn loaded() -> CatalogSession<StaticSource> {
    let session = CatalogSession::new(StaticSource::new(support_and_sales()));
    session.load().await;
    session
}

#[tokio::test]
async fn test_status_filter_end_to_end() {
    let session = loaded().await;
    session.set_status_filter([AgentStatus::Active]);
    assert_eq!(ids(session.state().filtered()), ["1"]);
}

#[tokio::test]
async fn test_search_filter_end_to_end() {
    let session = loaded().await;
    session.set_search("leads");
    assert_eq!(ids(session.state().filtered()), ["2"]);
}

#[tokio::test]
async fn test_pricing_filter_end_to_end() {
    let session = loaded().await;
    session.set_pricing_model_filter(Some(PricingModel::PerUse));
    assert!(session.state().filtered().is_empty());
}

#[tokio::test]
async fn test_category_toggle_round_trip() {
    let session = loaded().await;
    session.toggle_category("Sales", true);
    assert_eq!(ids(session.state().filtered()), ["2"]);
    session.toggle_category("Sales", false);
    assert_eq!(ids(session.state().filtered()), ["1", "2"]);
}

#[tokio::test]
async fn test_status_toggle_builds_set() {
    let session = loaded().await;
    session.toggle_status(AgentStatus::Beta, true);
    session.toggle_status(AgentStatus::Archived, true);
    assert_eq!(
        session.state().criteria().status,
        BTreeSet::from([AgentStatus::Beta, AgentStatus::Archived])
    );
    assert_eq!(ids(session.state().filtered()), ["2"]);
}

#[tokio::test]
async fn test_repeated_search_is_idempotent() {
    let once = loaded().await;
    once.set_search("a");
    let twice = loaded().await;
    twice.set_search("a");
    twice.set_search("a");
    assert_eq!(once.snapshot(), twice.snapshot());
}

#[tokio::test]
async fn test_clear_all_filters_restores_everything() {
    let session = loaded().await;
    session.set_search("bot");
    session.set_status_filter([AgentStatus::Archived]);
    session.set_category_filter(["Support"]);
    session.set_pricing_model_filter(Some(PricingModel::Subscription));
    assert!(session.state().filtered().is_empty());

    session.clear_all_filters();

    let state = session.state();
    assert_eq!(state.criteria(), &FilterCriteria::default());
    assert_eq!(state.filtered(), state.records());
}

#[tokio::test]
async fn test_snapshot_is_detached_from_later_changes() {
    let session = loaded().await;
    let before = session.snapshot();
    session.set_search("support");
    assert_eq!(before.filtered().len(), 2);
    assert_eq!(session.state().filtered().len(), 1);
}
