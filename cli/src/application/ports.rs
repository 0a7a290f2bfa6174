//! Seams between the catalog session and the outside world.
//!
//! `infra` provides the production implementations; tests supply their own.

use std::path::PathBuf;

use anyhow::Result;
use catalog_common::Agent;

use crate::domain::CatalogConfig;

// ── Load Gateway ──────────────────────────────────────────────────────────────

/// Supplies the catalog records. Called once per session.
///
/// Any backing store satisfies the contract as long as it resolves to
/// well-formed agents or fails; the caller does not inspect the error beyond
/// logging it.
#[allow(async_fn_in_trait)]
pub trait AgentSource {
    /// Fetch every agent record.
    async fn fetch_agents(&self) -> Result<Vec<Agent>>;
}

impl<T: AgentSource + ?Sized> AgentSource for &T {
    async fn fetch_agents(&self) -> Result<Vec<Agent>> {
        (**self).fetch_agents().await
    }
}

// ── Configuration Port ────────────────────────────────────────────────────────

/// Abstracts configuration loading so commands can be tested without `$HOME`.
pub trait ConfigStore {
    /// Load configuration, returning defaults when none is stored.
    fn load(&self) -> Result<CatalogConfig>;
    /// Location the configuration is read from.
    fn path(&self) -> Result<PathBuf>;
}
