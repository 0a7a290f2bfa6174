//! Errors raised by dataset validation, filter parsing, and config lookups.

use thiserror::Error;

// ── Catalog errors ────────────────────────────────────────────────────────────

/// Errors raised while loading records or interpreting filter input.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CatalogError {
    #[error("Agent dataset contains an entry with an empty id.")]
    EmptyId,

    #[error("Agent id '{0}' appears more than once in the dataset.")]
    DuplicateId(String),

    #[error("Unknown status '{value}'. Valid statuses: {valid}")]
    UnknownStatus { value: String, valid: String },

    #[error("Unknown pricing model '{value}'. Valid pricing models: {valid}")]
    UnknownPricingModel { value: String, valid: String },
}

// ── Config errors ─────────────────────────────────────────────────────────────

/// Errors related to configuration key validation.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Unknown setting: {key}\n\nValid settings: {valid}")]
    UnknownKey { key: String, valid: String },
}
