//! Structural validation of candidate alarm rules.
//!
//! Checks run in a fixed order and the first failure wins: id, name,
//! category, level, condition, enable condition, trigger message, recovery
//! message. Dynamic messages additionally require every listed variable to
//! exist in the variable store.

mod condition_checks;
mod message_checks;

#[cfg(test)]
mod tests;

use sentinel_core::{AlarmLevel, Storage};
use serde::{Deserialize, Serialize};

use crate::schema::AlarmRule;

pub(crate) use condition_checks::validate_condition;
pub use message_checks::validate_message;

/// A blocking validation error.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, thiserror::Error)]
#[error("{path}: {message}")]
pub struct ValidationError {
    /// Field path, e.g. `"condition.conditions[1].variable_id"`.
    pub path: String,
    pub message: String,
}

impl ValidationError {
    pub(crate) fn new(path: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            message: message.into(),
        }
    }
}

/// Validate a candidate rule. Returns the first violated invariant.
pub fn validate_rule(rule: &AlarmRule, storage: &dyn Storage) -> Result<(), ValidationError> {
    if rule.id.is_empty() {
        return Err(ValidationError::new("id", "rule id must not be empty"));
    }
    if rule.name.is_empty() {
        return Err(ValidationError::new("name", "rule name must not be empty"));
    }
    if rule.category.is_empty() {
        return Err(ValidationError::new("category", "rule category must not be empty"));
    }
    if AlarmLevel::try_from(rule.level).is_err() {
        return Err(ValidationError::new(
            "level",
            format!("alarm level must be between 1 and 4, got {}", rule.level),
        ));
    }

    match &rule.condition {
        Some(cond) => cond.validate("condition")?,
        None => return Err(ValidationError::new("condition", "alarm condition is required")),
    }
    if let Some(cond) = &rule.enable_cond {
        cond.validate("enable_cond")?;
    }

    match &rule.trigger_msg {
        Some(msg) => validate_message(msg, "trigger_msg", storage)?,
        None => return Err(ValidationError::new("trigger_msg", "trigger message is required")),
    }
    if let Some(msg) = &rule.recover_msg {
        validate_message(msg, "recover_msg", storage)?;
    }

    Ok(())
}
