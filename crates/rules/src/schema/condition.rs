//! Alarm condition tree: single comparisons combined by AND/OR groups.
//!
//! Conditions are only structurally validated here; evaluation against live
//! variable values happens in the alarm runtime.

use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;

use sentinel_core::VariableId;
use serde::{Deserialize, Serialize};

use crate::validation::{validate_condition, ValidationError};

/// A condition leaf or nested group.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(untagged)]
pub enum Condition {
    /// A comparison of one variable against a threshold.
    Single(SingleCondition),
    /// A nested group for recursive boolean logic.
    Group(ConditionGroup),
}

impl Condition {
    /// Single comparison against a static threshold.
    pub fn compare(variable_id: VariableId, operator: CompareOp, value: f64) -> Self {
        Condition::Single(SingleCondition {
            variable_id,
            operator,
            value: Some(value),
            value_var_id: None,
            deadband: 0.0,
            delay_ms: 0,
        })
    }

    pub fn all(conditions: Vec<Condition>) -> Self {
        Condition::Group(ConditionGroup {
            logic: LogicOp::And,
            conditions,
        })
    }

    pub fn any(conditions: Vec<Condition>) -> Self {
        Condition::Group(ConditionGroup {
            logic: LogicOp::Or,
            conditions,
        })
    }

    /// Every variable id this condition reads, deduplicated and sorted.
    pub fn variables(&self) -> Vec<VariableId> {
        let mut ids = BTreeSet::new();
        self.collect_variables(&mut ids);
        ids.into_iter().collect()
    }

    pub(crate) fn collect_variables(&self, ids: &mut BTreeSet<VariableId>) {
        match self {
            Condition::Single(single) => {
                ids.insert(single.variable_id);
                if let Some(threshold_var) = single.value_var_id {
                    ids.insert(threshold_var);
                }
            }
            Condition::Group(group) => {
                for child in &group.conditions {
                    child.collect_variables(ids);
                }
            }
        }
    }

    /// Structural validation of this condition tree. Error paths are rooted
    /// at `path`, e.g. `"condition"` or `"enable_cond"`.
    pub fn validate(&self, path: &str) -> Result<(), ValidationError> {
        validate_condition(self, path)
    }
}

/// A single variable comparison.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct SingleCondition {
    pub variable_id: VariableId,
    pub operator: CompareOp,
    /// Static threshold.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value: Option<f64>,
    /// Read the threshold from another variable instead.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value_var_id: Option<VariableId>,
    #[serde(default)]
    pub deadband: f64,
    #[serde(default)]
    pub delay_ms: u64,
}

/// Boolean combination of child conditions.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct ConditionGroup {
    pub logic: LogicOp,
    pub conditions: Vec<Condition>,
}

/// Comparison operators, including edge triggers for bit alarms.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CompareOp {
    #[serde(rename = ">")]
    Gt,
    #[serde(rename = "<")]
    Lt,
    #[serde(rename = ">=", alias = "=>")]
    Gte,
    #[serde(rename = "<=", alias = "=<")]
    Lte,
    #[serde(rename = "=", alias = "==")]
    Eq,
    #[serde(rename = "!=", alias = "<>")]
    Neq,
    #[serde(rename = "0->1", alias = "0→1", alias = "rising_edge")]
    Rise,
    #[serde(rename = "1->0", alias = "1→0", alias = "falling_edge")]
    Fall,
}

impl CompareOp {
    pub fn is_edge(self) -> bool {
        matches!(self, CompareOp::Rise | CompareOp::Fall)
    }
}

impl fmt::Display for CompareOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            CompareOp::Gt => ">",
            CompareOp::Lt => "<",
            CompareOp::Gte => ">=",
            CompareOp::Lte => "<=",
            CompareOp::Eq => "=",
            CompareOp::Neq => "!=",
            CompareOp::Rise => "0->1",
            CompareOp::Fall => "1->0",
        };
        write!(f, "{s}")
    }
}

impl FromStr for CompareOp {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s {
            ">" => Ok(CompareOp::Gt),
            "<" => Ok(CompareOp::Lt),
            ">=" | "=>" => Ok(CompareOp::Gte),
            "<=" | "=<" => Ok(CompareOp::Lte),
            "=" | "==" => Ok(CompareOp::Eq),
            "!=" | "<>" => Ok(CompareOp::Neq),
            "0->1" | "0→1" | "rising_edge" => Ok(CompareOp::Rise),
            "1->0" | "1→0" | "falling_edge" => Ok(CompareOp::Fall),
            other => Err(format!("unknown compare operator: '{}'", other)),
        }
    }
}

/// Logical operators for condition groups.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogicOp {
    #[serde(alias = "AND", alias = "&", alias = "&&")]
    And,
    #[serde(alias = "OR", alias = "|", alias = "||")]
    Or,
}

impl fmt::Display for LogicOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LogicOp::And => write!(f, "AND"),
            LogicOp::Or => write!(f, "OR"),
        }
    }
}

impl FromStr for LogicOp {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s {
            "AND" | "and" | "&" | "&&" => Ok(LogicOp::And),
            "OR" | "or" | "|" | "||" => Ok(LogicOp::Or),
            other => Err(format!("unknown logic operator: '{}'", other)),
        }
    }
}
