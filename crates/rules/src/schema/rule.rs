//! The alarm rule definition.

use std::collections::BTreeSet;

use chrono::{DateTime, Utc};
use sentinel_core::{AlarmLevel, VariableId};
use serde::{Deserialize, Serialize};

use super::{AlarmMessage, Condition, RuleType};

/// A named, categorized, leveled condition definition.
///
/// `condition` and `trigger_msg` are optional at the type level so that
/// partially assembled rules (editor drafts, imported files) can be handed to
/// the validator, which reports what is missing.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct AlarmRule {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub rule_type: RuleType,
    pub category: String,
    /// Severity 1..=4, see [`AlarmLevel`].
    pub level: i64,
    #[serde(default = "default_true")]
    pub enabled: bool,
    #[serde(default)]
    pub condition: Option<Condition>,
    /// Gates whether the rule is considered at all.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub enable_cond: Option<Condition>,
    #[serde(default)]
    pub trigger_msg: Option<AlarmMessage>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub recover_msg: Option<AlarmMessage>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub responsible: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_by: Option<String>,
}

pub(crate) fn default_true() -> bool {
    true
}

impl AlarmRule {
    /// A fully specified, enabled rule.
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        category: impl Into<String>,
        level: AlarmLevel,
        condition: Condition,
        trigger_msg: AlarmMessage,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            rule_type: RuleType::User,
            category: category.into(),
            level: level.as_i64(),
            enabled: true,
            condition: Some(condition),
            enable_cond: None,
            trigger_msg: Some(trigger_msg),
            recover_msg: None,
            responsible: Vec::new(),
            created_at: None,
            updated_at: None,
            created_by: None,
        }
    }

    pub fn with_enable_cond(mut self, cond: Condition) -> Self {
        self.enable_cond = Some(cond);
        self
    }

    pub fn with_recover_msg(mut self, msg: AlarmMessage) -> Self {
        self.recover_msg = Some(msg);
        self
    }

    pub fn disabled(mut self) -> Self {
        self.enabled = false;
        self
    }

    /// Typed severity, `None` when `level` is out of range.
    pub fn alarm_level(&self) -> Option<AlarmLevel> {
        AlarmLevel::try_from(self.level).ok()
    }

    /// Every variable whose change may flip this rule: condition and enable
    /// condition operands plus dynamic message variables. Sorted, deduplicated.
    pub fn variable_ids(&self) -> Vec<VariableId> {
        let mut ids = BTreeSet::new();
        if let Some(cond) = &self.condition {
            cond.collect_variables(&mut ids);
        }
        if let Some(cond) = &self.enable_cond {
            cond.collect_variables(&mut ids);
        }
        for msg in self.trigger_msg.iter().chain(self.recover_msg.iter()) {
            ids.extend(msg.variables().iter().copied());
        }
        ids.into_iter().collect()
    }
}
