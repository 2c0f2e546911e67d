//! Rule origin enum.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Where a rule came from.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RuleType {
    #[default]
    User,
    System,
    Predictive,
}

impl fmt::Display for RuleType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RuleType::User => write!(f, "user"),
            RuleType::System => write!(f, "system"),
            RuleType::Predictive => write!(f, "predictive"),
        }
    }
}

impl FromStr for RuleType {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s {
            "user" => Ok(RuleType::User),
            "system" => Ok(RuleType::System),
            "predictive" => Ok(RuleType::Predictive),
            other => Err(format!("unknown rule type: '{}'", other)),
        }
    }
}
