//! [`CategoryIndex`]: rule ids grouped by free-form category label.

use std::collections::HashMap;

/// Category label -> rule ids, in insertion order.
///
/// Categories exist only while they hold at least one rule.
#[derive(Debug, Default, Clone)]
pub struct CategoryIndex {
    categories: HashMap<String, Vec<String>>,
}

impl CategoryIndex {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, category: &str, rule_id: &str) {
        let ids = self.categories.entry(category.to_string()).or_default();
        if !ids.iter().any(|id| id == rule_id) {
            ids.push(rule_id.to_string());
        }
    }

    pub fn remove(&mut self, category: &str, rule_id: &str) {
        if let Some(ids) = self.categories.get_mut(category) {
            ids.retain(|id| id != rule_id);
            if ids.is_empty() {
                self.categories.remove(category);
            }
        }
    }

    /// Move a rule between buckets. No-op when the label is unchanged.
    pub fn relocate(&mut self, rule_id: &str, from: &str, to: &str) {
        if from == to {
            return;
        }
        self.remove(from, rule_id);
        self.insert(to, rule_id);
    }

    pub fn rule_ids(&self, category: &str) -> &[String] {
        self.categories
            .get(category)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    /// Categories currently holding rules, sorted.
    pub fn categories(&self) -> Vec<String> {
        let mut names: Vec<_> = self.categories.keys().cloned().collect();
        names.sort();
        names
    }

    pub fn contains(&self, category: &str) -> bool {
        self.categories.contains_key(category)
    }

    pub fn len(&self) -> usize {
        self.categories.len()
    }

    pub fn is_empty(&self) -> bool {
        self.categories.is_empty()
    }

    pub fn clear(&mut self) {
        self.categories.clear();
    }
}
