//! Application service: configuration use-cases.

use anyhow::Result;

use crate::application::ports::ConfigStore;
use crate::domain::config::{CatalogConfig, validate_config_key};

/// Load configuration.
pub fn load_config(store: &impl ConfigStore) -> Result<CatalogConfig> {
    store.load()
}

/// Look up a single configuration value by dotted key.
///
/// Returns `None` when the key is valid but has no value (`data.path`
/// unset).
///
/// # Errors
///
/// Returns an error if the key is unknown or the configuration cannot be
/// loaded.
pub fn get_config_value(store: &impl ConfigStore, key: &str) -> Result<Option<String>> {
    validate_config_key(key)?;
    let config = store.load()?;
    let value = match key {
        "data.path" => config.data.path.map(|p| p.display().to_string()),
        "data.load_delay_ms" => Some(config.data.load_delay_ms.to_string()),
        _ => anyhow::bail!("Unknown setting: {key}"),
    };
    Ok(value)
}
