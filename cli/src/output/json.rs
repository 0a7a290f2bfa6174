//! JSON output helpers.
//!
//! Every `--json` code path prints exactly one pretty-printed document on
//! stdout: either the requested view or an error object.

use anyhow::{Context, Result};
use catalog_common::Agent;
use serde::Serialize;

use crate::domain::{CatalogPhase, CatalogState, FilterCriteria, summary};

/// The observable catalog state as emitted by `list --json`.
#[derive(Debug, Serialize)]
pub struct CatalogView<'a> {
    pub title: String,
    pub phase: CatalogPhase,
    pub criteria: &'a FilterCriteria,
    pub total: usize,
    pub matched: usize,
    pub agents: &'a [Agent],
}

impl<'a> CatalogView<'a> {
    #[must_use]
    pub fn new(state: &'a CatalogState) -> Self {
        Self {
            title: summary::title(state.criteria()),
            phase: state.phase(),
            criteria: state.criteria(),
            total: state.records().len(),
            matched: state.filtered().len(),
            agents: state.filtered(),
        }
    }
}

/// Serialize any view as pretty JSON.
///
/// # Errors
///
/// Returns an error if serialization fails.
pub fn to_pretty<T: Serialize>(value: &T) -> Result<String> {
    serde_json::to_string_pretty(value).context("JSON serialization failed")
}

/// Format a JSON error object.
///
/// Output (pretty-printed):
/// ```json
/// {
///   "error": true,
///   "message": "...",
///   "code": "..."
/// }
/// ```
///
/// # Errors
///
/// Returns an error if JSON serialization fails.
pub fn format_error(message: &str, code: &str) -> Result<String> {
    let obj = serde_json::json!({
        "error": true,
        "message": message,
        "code": code,
    });
    to_pretty(&obj)
}

/// Stateless JSON renderer.
pub struct JsonRenderer;

impl JsonRenderer {
    /// Print the filtered catalog.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails.
    pub fn render_catalog(&self, state: &CatalogState) -> Result<()> {
        println!("{}", to_pretty(&CatalogView::new(state))?);
        Ok(())
    }

    /// Print the derived category list.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails.
    pub fn render_categories(&self, categories: &[String]) -> Result<()> {
        println!("{}", to_pretty(&serde_json::json!({ "categories": categories }))?);
        Ok(())
    }

    /// Print the effective configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails.
    pub fn render_config(
        &self,
        config: &crate::domain::CatalogConfig,
        path: &std::path::Path,
    ) -> Result<()> {
        let obj = serde_json::json!({ "path": path, "config": config });
        println!("{}", to_pretty(&obj)?);
        Ok(())
    }

    /// Print a single configuration value; unset values are `null`.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails.
    pub fn render_config_value(&self, key: &str, value: Option<&str>) -> Result<()> {
        println!("{}", to_pretty(&serde_json::json!({ "key": key, "value": value }))?);
        Ok(())
    }

    /// Print the version.
    pub fn render_version(&self, version: &str) {
        println!(r#"{{"version":"{version}"}}"#);
    }
}
