use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StrategyStatus {
    Active,
    Testing,
    Inactive,
}

impl StrategyStatus {
    /// Anything other than `active` or `testing` counts as inactive.
    pub fn from_str_loose(s: &str) -> StrategyStatus {
        match s {
            "active" => StrategyStatus::Active,
            "testing" => StrategyStatus::Testing,
            _ => StrategyStatus::Inactive,
        }
    }
}

impl fmt::Display for StrategyStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StrategyStatus::Active => write!(f, "active"),
            StrategyStatus::Testing => write!(f, "testing"),
            StrategyStatus::Inactive => write!(f, "inactive"),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StrategyRecord {
    pub id: String,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub status: String,
}

impl StrategyRecord {
    pub fn status(&self) -> StrategyStatus {
        StrategyStatus::from_str_loose(&self.status)
    }

    pub fn is_active(&self) -> bool {
        self.status() == StrategyStatus::Active
    }

    /// Display label: the name when set, otherwise the id.
    pub fn label(&self) -> &str {
        match self.name.as_deref() {
            Some(n) if !n.is_empty() => n,
            _ => &self.id,
        }
    }
}
