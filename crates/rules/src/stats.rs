//! Aggregate counts over the rule catalog.
//!
//! Recomputed with a full pass after every effective mutation. Catalogs are
//! administrative in size and mutations are rare next to reads.

use std::collections::HashMap;

use sentinel_core::AlarmLevel;
use serde::{Deserialize, Serialize};

use crate::schema::AlarmRule;

/// Summary counts for a rule catalog.
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RuleStats {
    pub total_rules: usize,
    pub enabled_rules: usize,
    pub disabled_rules: usize,
    pub rules_by_category: HashMap<String, usize>,
    pub rules_by_level: HashMap<AlarmLevel, usize>,
}

impl RuleStats {
    /// Recount from scratch.
    pub fn compute<'a>(rules: impl IntoIterator<Item = &'a AlarmRule>) -> Self {
        let mut stats = RuleStats::default();
        for rule in rules {
            stats.total_rules += 1;
            if rule.enabled {
                stats.enabled_rules += 1;
            } else {
                stats.disabled_rules += 1;
            }
            *stats
                .rules_by_category
                .entry(rule.category.clone())
                .or_insert(0) += 1;
            // Admitted rules always carry a valid level.
            if let Some(level) = rule.alarm_level() {
                *stats.rules_by_level.entry(level).or_insert(0) += 1;
            }
        }
        stats
    }

    pub fn category_count(&self, category: &str) -> usize {
        self.rules_by_category.get(category).copied().unwrap_or(0)
    }

    pub fn level_count(&self, level: AlarmLevel) -> usize {
        self.rules_by_level.get(&level).copied().unwrap_or(0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::{AlarmMessage, CompareOp, Condition};

    fn rule(id: &str, category: &str, level: AlarmLevel, enabled: bool) -> AlarmRule {
        let mut rule = AlarmRule::new(
            id,
            id,
            category,
            level,
            Condition::compare(1, CompareOp::Gt, 0.0),
            AlarmMessage::text("x"),
        );
        rule.enabled = enabled;
        rule
    }

    #[test]
    fn empty_catalog_is_all_zero() {
        let stats = RuleStats::compute(std::iter::empty());
        assert_eq!(stats, RuleStats::default());
    }

    #[test]
    fn counts_by_state_category_and_level() {
        let rules = [
            rule("a", "temp", AlarmLevel::High, true),
            rule("b", "temp", AlarmLevel::Low, false),
            rule("c", "pressure", AlarmLevel::High, true),
        ];
        let stats = RuleStats::compute(&rules);

        assert_eq!(stats.total_rules, 3);
        assert_eq!(stats.enabled_rules, 2);
        assert_eq!(stats.disabled_rules, 1);
        assert_eq!(stats.category_count("temp"), 2);
        assert_eq!(stats.category_count("pressure"), 1);
        assert_eq!(stats.category_count("flow"), 0);
        assert_eq!(stats.level_count(AlarmLevel::High), 2);
        assert_eq!(stats.level_count(AlarmLevel::Critical), 0);
    }

    #[test]
    fn serializes_levels_as_integer_keys() {
        let rules = [rule("a", "temp", AlarmLevel::Critical, true)];
        let json = serde_json::to_value(RuleStats::compute(&rules)).unwrap();
        assert_eq!(json["rules_by_level"]["4"], 1);
        assert_eq!(json["rules_by_category"]["temp"], 1);
    }
}
