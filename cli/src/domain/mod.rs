//! Catalog records, filter criteria, and the state that ties them together.
//!
//! Everything here is synchronous and free of I/O. Loading and timing live in
//! `application`; this layer only answers "given these records and these
//! criteria, what is visible".

pub mod catalog;
pub mod config;
pub mod error;
pub mod filter;
pub mod summary;

pub use catalog::{CatalogPhase, CatalogState, validate_records};
pub use config::{CatalogConfig, DataConfig, validate_config_key};
pub use error::{CatalogError, ConfigError};
pub use filter::{FilterCriteria, evaluate, matches, parse_pricing_model, parse_statuses};
