use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Lifecycle status of a catalog agent
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum AgentStatus {
    Active,
    Beta,
    Archived,
}

impl AgentStatus {
    /// Every status, in display order.
    pub const ALL: [AgentStatus; 3] = [
        AgentStatus::Active,
        AgentStatus::Beta,
        AgentStatus::Archived,
    ];

    /// Wire name as it appears in the dataset.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            AgentStatus::Active => "Active",
            AgentStatus::Beta => "Beta",
            AgentStatus::Archived => "Archived",
        }
    }
}

impl fmt::Display for AgentStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for AgentStatus {
    type Err = ParseEnumError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match normalize(s).as_str() {
            "active" => Ok(AgentStatus::Active),
            "beta" => Ok(AgentStatus::Beta),
            "archived" => Ok(AgentStatus::Archived),
            _ => Err(ParseEnumError::new("status", s, &AgentStatus::ALL.map(AgentStatus::as_str))),
        }
    }
}

/// How an agent is billed
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum PricingModel {
    #[serde(rename = "Free Tier")]
    FreeTier,
    Subscription,
    #[serde(rename = "Per-Use")]
    PerUse,
}

impl PricingModel {
    /// Every pricing model, in display order.
    pub const ALL: [PricingModel; 3] = [
        PricingModel::FreeTier,
        PricingModel::Subscription,
        PricingModel::PerUse,
    ];

    /// Wire name as it appears in the dataset.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            PricingModel::FreeTier => "Free Tier",
            PricingModel::Subscription => "Subscription",
            PricingModel::PerUse => "Per-Use",
        }
    }
}

impl fmt::Display for PricingModel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PricingModel {
    type Err = ParseEnumError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match normalize(s).as_str() {
            "freetier" | "free" => Ok(PricingModel::FreeTier),
            "subscription" => Ok(PricingModel::Subscription),
            "peruse" => Ok(PricingModel::PerUse),
            _ => Err(ParseEnumError::new(
                "pricing model",
                s,
                &PricingModel::ALL.map(PricingModel::as_str),
            )),
        }
    }
}

/// Lowercase and strip separators so `Free Tier`, `free-tier` and `FreeTier`
/// all compare equal.
fn normalize(s: &str) -> String {
    s.trim()
        .chars()
        .filter(|c| !matches!(c, ' ' | '-' | '_'))
        .flat_map(char::to_lowercase)
        .collect()
}

/// A string did not name any variant of a closed enumeration
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown {kind} '{value}' (expected one of: {expected})")]
pub struct ParseEnumError {
    pub kind: &'static str,
    pub value: String,
    pub expected: String,
}

impl ParseEnumError {
    fn new(kind: &'static str, value: &str, expected: &[&str]) -> Self {
        Self {
            kind,
            value: value.to_string(),
            expected: expected.join(", "),
        }
    }
}

/// One catalog entry
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Agent {
    /// Opaque identifier, unique within a dataset
    pub id: String,
    pub name: String,
    pub description: String,
    pub status: AgentStatus,
    /// Free-form label; the set of categories is derived from the data
    pub category: String,
    pub pricing_model: PricingModel,
}
