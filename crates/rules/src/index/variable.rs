//! [`VariableRuleIndex`]: which rules must be reconsidered when a variable changes.

use std::collections::{HashMap, HashSet};

use sentinel_core::VariableId;
use serde::{Deserialize, Serialize};

use crate::schema::AlarmRule;

/// Reverse index from variable id to the ids of rules referencing it.
///
/// Keeps a forward map (rule -> variables) as well, so removing a rule only
/// touches the buckets it was in.
#[derive(Debug, Default, Clone)]
pub struct VariableRuleIndex {
    variable_to_rules: HashMap<VariableId, HashSet<String>>,
    rule_to_variables: HashMap<String, Vec<VariableId>>,
}

/// Shape of the index, for diagnostics.
#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
pub struct IndexStats {
    pub total_rules: usize,
    pub total_variables: usize,
    /// Mean number of variables per indexed rule.
    pub average_variables: f64,
    /// Mean number of rules per referenced variable.
    pub average_rules: f64,
    /// Largest bucket size.
    pub max_rules: usize,
}

impl VariableRuleIndex {
    pub fn new() -> Self {
        Self::default()
    }

    /// Index every variable the rule references.
    pub fn add_rule(&mut self, rule: &AlarmRule) {
        let variable_ids = rule.variable_ids();
        for variable_id in &variable_ids {
            self.variable_to_rules
                .entry(*variable_id)
                .or_default()
                .insert(rule.id.clone());
        }
        self.rule_to_variables.insert(rule.id.clone(), variable_ids);
    }

    /// Drop the rule from every bucket it appears in. Empty buckets are removed.
    pub fn remove_rule(&mut self, rule_id: &str) {
        let Some(variable_ids) = self.rule_to_variables.remove(rule_id) else {
            return;
        };
        for variable_id in variable_ids {
            if let Some(rules) = self.variable_to_rules.get_mut(&variable_id) {
                rules.remove(rule_id);
                if rules.is_empty() {
                    self.variable_to_rules.remove(&variable_id);
                }
            }
        }
    }

    /// Re-index a rule whose references may have changed.
    pub fn update_rule(&mut self, rule: &AlarmRule) {
        self.remove_rule(&rule.id);
        self.add_rule(rule);
    }

    /// Rule ids referencing the variable; empty when none do.
    pub fn get_rules_by_variable(&self, variable_id: VariableId) -> Vec<String> {
        self.variable_to_rules
            .get(&variable_id)
            .map(|rules| rules.iter().cloned().collect())
            .unwrap_or_default()
    }

    pub fn get_variables_by_rule(&self, rule_id: &str) -> Vec<VariableId> {
        self.rule_to_variables
            .get(rule_id)
            .cloned()
            .unwrap_or_default()
    }

    pub fn contains_rule(&self, rule_id: &str) -> bool {
        self.rule_to_variables.contains_key(rule_id)
    }

    pub fn contains_variable(&self, variable_id: VariableId) -> bool {
        self.variable_to_rules.contains_key(&variable_id)
    }

    pub fn rule_count(&self, variable_id: VariableId) -> usize {
        self.variable_to_rules
            .get(&variable_id)
            .map_or(0, HashSet::len)
    }

    pub fn variable_count(&self, rule_id: &str) -> usize {
        self.rule_to_variables.get(rule_id).map_or(0, Vec::len)
    }

    pub fn total_rules(&self) -> usize {
        self.rule_to_variables.len()
    }

    pub fn total_variables(&self) -> usize {
        self.variable_to_rules.len()
    }

    /// Every variable referenced by at least one rule, sorted.
    pub fn all_variables(&self) -> Vec<VariableId> {
        let mut ids: Vec<_> = self.variable_to_rules.keys().copied().collect();
        ids.sort_unstable();
        ids
    }

    /// Variables referenced by both rules, in `b`'s order.
    pub fn shared_variables(&self, a: &str, b: &str) -> Vec<VariableId> {
        let (Some(vars_a), Some(vars_b)) =
            (self.rule_to_variables.get(a), self.rule_to_variables.get(b))
        else {
            return Vec::new();
        };
        let set_a: HashSet<_> = vars_a.iter().collect();
        vars_b.iter().filter(|v| set_a.contains(v)).copied().collect()
    }

    pub fn clear(&mut self) {
        self.variable_to_rules.clear();
        self.rule_to_variables.clear();
    }

    pub fn stats(&self) -> IndexStats {
        let total_rules = self.rule_to_variables.len();
        let total_variables = self.variable_to_rules.len();
        let references: usize = self.variable_to_rules.values().map(HashSet::len).sum();
        let max_rules = self
            .variable_to_rules
            .values()
            .map(HashSet::len)
            .max()
            .unwrap_or(0);

        IndexStats {
            total_rules,
            total_variables,
            average_variables: if total_rules > 0 {
                references as f64 / total_rules as f64
            } else {
                0.0
            },
            average_rules: if total_variables > 0 {
                references as f64 / total_variables as f64
            } else {
                0.0
            },
            max_rules,
        }
    }
}
