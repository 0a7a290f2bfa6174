//! Dataset sources and the YAML config store.

pub mod config;
pub mod source;

pub use config::YamlConfigStore;
pub use source::{BundledAgentSource, ConfiguredSource, FileAgentSource};
