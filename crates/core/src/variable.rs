use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

pub type VariableId = u64;

/// Current value of a monitored variable.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum VariableValue {
    Bool(bool),
    Int(i64),
    Float(f64),
    Text(String),
}

impl Default for VariableValue {
    fn default() -> Self {
        VariableValue::Int(0)
    }
}

/// Data quality reported by the acquisition layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Quality {
    #[default]
    Good,
    Bad,
    Uncertain,
}

/// A monitored variable as held by the realtime store.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Variable {
    pub id: VariableId,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub value: VariableValue,
    #[serde(default)]
    pub quality: Quality,
    #[serde(default = "Utc::now")]
    pub timestamp: DateTime<Utc>,
}

impl Variable {
    pub fn new(id: VariableId, value: VariableValue) -> Self {
        Self {
            id,
            name: None,
            value,
            quality: Quality::Good,
            timestamp: Utc::now(),
        }
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }
}
