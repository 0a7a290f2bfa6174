//! Use-cases: the stateful catalog session and configuration lookups.

pub mod catalog_session;
pub mod config_service;
