//! Application service: the catalog session.
//!
//! `CatalogSession` is the explicitly constructed owner of one
//! `CatalogState` and the `AgentSource` that fills it. The presentation
//! layer holds the session and threads `&CatalogSession` wherever it needs
//! to read or mutate; there is no process-wide instance.
//!
//! The model is single-threaded and cooperative. `load()` marks the state
//! loading as soon as it is called; the future it returns is the only thing
//! that suspends, and it never holds a borrow of the state across that
//! suspension, so setters issued on the same task while a load is
//! pending update the criteria immediately and are applied when the records
//! arrive.

use std::cell::{Ref, RefCell};

use catalog_common::{AgentStatus, PricingModel};

use crate::application::ports::AgentSource;
use crate::domain::catalog::{CatalogState, validate_records};

/// What a call to [`CatalogSession::load`] did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadOutcome {
    /// Records were accepted; carries the record count.
    Loaded(usize),
    /// The source failed; state keeps no records and is no longer loading.
    Failed,
    /// A load was already in flight or had already succeeded; the source
    /// was not called.
    Skipped,
}

/// Clears `loading` if a started load is abandoned before the source
/// resolves.
struct InFlight<'a> {
    state: &'a RefCell<CatalogState>,
    armed: bool,
}

impl InFlight<'_> {
    fn disarm(&mut self) {
        self.armed = false;
    }
}

impl Drop for InFlight<'_> {
    fn drop(&mut self) {
        if !self.armed {
            return;
        }
        if let Ok(mut state) = self.state.try_borrow_mut() {
            state.fail_load();
            tracing::debug!("load abandoned");
        }
    }
}

/// Owns the catalog state and its load gateway for one session.
pub struct CatalogSession<S> {
    state: RefCell<CatalogState>,
    source: S,
}

impl<S: AgentSource> CatalogSession<S> {
    /// New session with empty records and default criteria.
    #[must_use]
    pub fn new(source: S) -> Self {
        Self {
            state: RefCell::new(CatalogState::new()),
            source,
        }
    }

    /// Fetch records from the source and install them.
    ///
    /// The skip checks and `loading = true` happen here, before the returned
    /// future is first polled, so a caller that renders before awaiting
    /// already sees `Loading`. Failures are logged and swallowed: the state
    /// stops loading and keeps no records. Dropping the future unfinished
    /// ends the load the same way a failure does.
    pub fn load(&self) -> impl Future<Output = LoadOutcome> + '_ {
        let in_flight = self.begin_load();
        async move {
            let Some(mut in_flight) = in_flight else {
                return LoadOutcome::Skipped;
            };
            tracing::info!("load started");

            let fetched = self.source.fetch_agents().await.and_then(|records| {
                validate_records(&records)?;
                Ok(records)
            });
            in_flight.disarm();

            let mut state = self.state.borrow_mut();
            match fetched {
                Ok(records) => {
                    let count = records.len();
                    state.finish_load(records);
                    tracing::info!(count, matched = state.filtered().len(), "load complete");
                    LoadOutcome::Loaded(count)
                }
                Err(e) => {
                    state.fail_load();
                    tracing::warn!(error = %e, "load failed");
                    LoadOutcome::Failed
                }
            }
        }
    }

    fn begin_load(&self) -> Option<InFlight<'_>> {
        let mut state = self.state.borrow_mut();
        if !state.records().is_empty() {
            tracing::debug!(reason = "already loaded", "load skipped");
            return None;
        }
        if !state.begin_load() {
            tracing::debug!(reason = "load in flight", "load skipped");
            return None;
        }
        Some(InFlight {
            state: &self.state,
            armed: true,
        })
    }

    /// The load gateway this session reads from.
    #[must_use]
    pub fn source(&self) -> &S {
        &self.source
    }

    /// Borrow the current state. Do not hold the guard across an `.await`.
    pub fn state(&self) -> Ref<'_, CatalogState> {
        self.state.borrow()
    }

    /// Owned copy of the current state.
    #[must_use]
    pub fn snapshot(&self) -> CatalogState {
        self.state.borrow().clone()
    }

    pub fn set_search(&self, text: impl Into<String>) {
        self.mutate("search", |state| state.set_search(text));
    }

    pub fn set_status_filter(&self, statuses: impl IntoIterator<Item = AgentStatus>) {
        self.mutate("status", |state| state.set_status_filter(statuses));
    }

    pub fn set_category_filter<I, T>(&self, categories: I)
    where
        I: IntoIterator<Item = T>,
        T: Into<String>,
    {
        self.mutate("category", |state| state.set_category_filter(categories));
    }

    pub fn set_pricing_model_filter(&self, model: Option<PricingModel>) {
        self.mutate("pricing_model", |state| {
            state.set_pricing_model_filter(model);
        });
    }

    pub fn toggle_status(&self, status: AgentStatus, checked: bool) {
        self.mutate("status", |state| state.toggle_status(status, checked));
    }

    pub fn toggle_category(&self, category: &str, checked: bool) {
        self.mutate("category", |state| state.toggle_category(category, checked));
    }

    pub fn clear_all_filters(&self) {
        self.mutate("all", CatalogState::clear_all_filters);
    }

    fn mutate(&self, field: &'static str, apply: impl FnOnce(&mut CatalogState)) {
        let mut state = self.state.borrow_mut();
        apply(&mut *state);
        tracing::debug!(
            field,
            active = state.criteria().active_count(),
            matched = state.filtered().len(),
            "criteria changed"
        );
    }
}
