//! Domain types and validators for catalog configuration.
//!
//! Pure functions only: no I/O, no async, no filesystem access.

use std::path::PathBuf;

use anyhow::Result;
use serde::{Deserialize, Serialize};

use crate::domain::error::ConfigError;

// ── Constants ────────────────────────────────────────────────────────────────

pub const VALID_CONFIG_KEYS: &[&str] = &["data.path", "data.load_delay_ms"];

/// Simulated gateway latency of the bundled dataset, in milliseconds.
pub const DEFAULT_LOAD_DELAY_MS: u64 = 0;

// ── Config schema ────────────────────────────────────────────────────────────

/// Top-level configuration stored in `~/.agent-catalog/config.yaml`.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(default)]
pub struct CatalogConfig {
    /// Where agent records come from.
    pub data: DataConfig,
}

/// Data source settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct DataConfig {
    /// JSON dataset to load instead of the bundled one.
    pub path: Option<PathBuf>,
    /// Delay applied before the bundled dataset resolves.
    pub load_delay_ms: u64,
}

impl Default for DataConfig {
    fn default() -> Self {
        Self {
            path: None,
            load_delay_ms: DEFAULT_LOAD_DELAY_MS,
        }
    }
}

// ── Validators ───────────────────────────────────────────────────────────────

/// Validates a configuration key against the whitelist.
///
/// # Errors
///
/// Returns an error if the key is not in the allowed list.
pub fn validate_config_key(key: &str) -> Result<()> {
    if !VALID_CONFIG_KEYS.contains(&key) {
        return Err(ConfigError::UnknownKey {
            key: key.to_string(),
            valid: VALID_CONFIG_KEYS.join(", "),
        }
        .into());
    }
    Ok(())
}

// ── Unit tests ───────────────────────────────────────────────────────────────
