//! Infrastructure implementations of the `AgentSource` port.
//!
//! `BundledAgentSource` serves the dataset compiled into the binary behind a
//! simulated network delay. `FileAgentSource` reads a JSON dataset from disk
//! on a blocking task.

use std::path::PathBuf;
use std::time::Duration;

use anyhow::{Context, Result};
use catalog_common::Agent;

use crate::application::ports::AgentSource;

/// The dataset shipped with the binary.
const BUNDLED_AGENTS: &str = include_str!("../../data/agents.json");

/// Parse a JSON array of agents.
///
/// # Errors
///
/// Returns an error if `json` is not an array of well-formed agent records.
pub fn parse_agents(json: &str) -> Result<Vec<Agent>> {
    serde_json::from_str(json).context("parsing agent dataset")
}

/// Serves [`BUNDLED_AGENTS`] after an optional delay.
pub struct BundledAgentSource {
    delay: Duration,
}

impl BundledAgentSource {
    #[must_use]
    pub fn new(delay: Duration) -> Self {
        Self { delay }
    }

    #[must_use]
    pub fn delay(&self) -> Duration {
        self.delay
    }
}

impl AgentSource for BundledAgentSource {
    async fn fetch_agents(&self) -> Result<Vec<Agent>> {
        if !self.delay.is_zero() {
            tokio::time::sleep(self.delay).await;
        }
        parse_agents(BUNDLED_AGENTS)
    }
}

/// Reads agents from a JSON file.
pub struct FileAgentSource {
    path: PathBuf,
}

impl FileAgentSource {
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl AgentSource for FileAgentSource {
    async fn fetch_agents(&self) -> Result<Vec<Agent>> {
        let path = self.path.clone();
        let content = tokio::task::spawn_blocking(move || {
            std::fs::read_to_string(&path)
                .with_context(|| format!("reading dataset {}", path.display()))
        })
        .await
        .context("dataset read task panicked")??;
        parse_agents(&content).with_context(|| format!("in {}", self.path.display()))
    }
}

/// Either gateway, chosen at startup from flags and configuration.
pub enum ConfiguredSource {
    Bundled(BundledAgentSource),
    File(FileAgentSource),
}

impl ConfiguredSource {
    /// Simulated latency before records resolve. Only the bundled dataset is
    /// delayed; files are read as fast as the disk allows.
    #[must_use]
    pub fn simulated_delay(&self) -> Duration {
        match self {
            ConfiguredSource::Bundled(source) => source.delay(),
            ConfiguredSource::File(_) => Duration::ZERO,
        }
    }
}

impl AgentSource for ConfiguredSource {
    async fn fetch_agents(&self) -> Result<Vec<Agent>> {
        match self {
            ConfiguredSource::Bundled(source) => source.fetch_agents().await,
            ConfiguredSource::File(source) => source.fetch_agents().await,
        }
    }
}
