//! Catalog use-cases and the ports they load through.

pub mod ports;
pub mod services;

pub use ports::{AgentSource, ConfigStore};
