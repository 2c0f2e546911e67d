//! [`RuleManager`]: the lock-guarded owner of the rule catalog and its indexes.

use std::collections::HashMap;
use std::sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard};

use sentinel_core::{Storage, VariableId};
use tracing::{debug, info, warn};

use crate::index::{CategoryIndex, IndexStats, VariableRuleIndex};
use crate::schema::AlarmRule;
use crate::stats::RuleStats;
use crate::validation::{validate_rule, ValidationError};

use super::error::{Result, RuleError};

/// Everything guarded by the manager lock. Mutated only as a unit.
#[derive(Default)]
struct Catalog {
    rules: HashMap<String, AlarmRule>,
    variables: VariableRuleIndex,
    categories: CategoryIndex,
    stats: RuleStats,
}

impl Catalog {
    fn refresh_stats(&mut self) {
        self.stats = RuleStats::compute(self.rules.values());
    }

    fn copies<'a>(&self, ids: impl IntoIterator<Item = &'a String>) -> Vec<AlarmRule> {
        ids.into_iter()
            .filter_map(|id| self.rules.get(id))
            .cloned()
            .collect()
    }
}

/// In-memory alarm rule catalog.
///
/// One instance per device or tenant context; share it behind an `Arc`.
/// Reads take the shared lock and may run concurrently. Mutations validate
/// the candidate first (this is where the variable store is consulted), then
/// take the exclusive lock for the existence check and the update of the
/// catalog, both indexes and the stats.
pub struct RuleManager {
    storage: Arc<dyn Storage>,
    catalog: RwLock<Catalog>,
}

impl RuleManager {
    /// Create an empty manager validating against `storage`.
    pub fn new(storage: Arc<dyn Storage>) -> Self {
        Self {
            storage,
            catalog: RwLock::new(Catalog::default()),
        }
    }

    fn read(&self) -> RwLockReadGuard<'_, Catalog> {
        self.catalog.read().expect("rule catalog lock poisoned")
    }

    fn write(&self) -> RwLockWriteGuard<'_, Catalog> {
        self.catalog.write().expect("rule catalog lock poisoned")
    }

    /// Run the validator without touching the catalog.
    pub fn validate(&self, rule: &AlarmRule) -> std::result::Result<(), ValidationError> {
        validate_rule(rule, self.storage.as_ref())
    }

    fn validate_for(&self, op: &str, rule: &AlarmRule) -> Result<()> {
        self.validate(rule).map_err(|e| {
            warn!(rule_id = %rule.id, op, error = %e, "rule rejected");
            RuleError::Validation(e)
        })
    }

    // ── Mutations ───────────────────────────────────────────────────

    /// Admit a new rule.
    ///
    /// Fails with [`RuleError::Validation`] if the rule is malformed and
    /// [`RuleError::Conflict`] if the id is taken. Nothing changes on failure.
    pub fn add_rule(&self, rule: AlarmRule) -> Result<()> {
        self.validate_for("add", &rule)?;

        let mut catalog = self.write();
        if catalog.rules.contains_key(&rule.id) {
            warn!(rule_id = %rule.id, "rule already exists");
            return Err(RuleError::Conflict(rule.id));
        }

        catalog.variables.add_rule(&rule);
        catalog.categories.insert(&rule.category, &rule.id);
        info!(
            rule_id = %rule.id,
            category = %rule.category,
            level = rule.level,
            enabled = rule.enabled,
            "added rule"
        );
        catalog.rules.insert(rule.id.clone(), rule);
        catalog.refresh_stats();
        Ok(())
    }

    /// Remove a rule and every index trace of it. The id may be reused.
    pub fn remove_rule(&self, rule_id: &str) -> Result<()> {
        let mut catalog = self.write();
        let Some(rule) = catalog.rules.remove(rule_id) else {
            return Err(RuleError::NotFound(rule_id.to_string()));
        };

        catalog.variables.remove_rule(rule_id);
        catalog.categories.remove(&rule.category, rule_id);
        catalog.refresh_stats();
        info!(rule_id = %rule_id, category = %rule.category, "removed rule");
        Ok(())
    }

    /// Replace an existing rule wholesale.
    ///
    /// Re-validates the full rule, re-indexes its variables and moves it to
    /// the new category if the label changed.
    pub fn update_rule(&self, rule: AlarmRule) -> Result<()> {
        self.validate_for("update", &rule)?;

        let mut catalog = self.write();
        let Some(previous) = catalog.rules.get(&rule.id) else {
            warn!(rule_id = %rule.id, "update of unknown rule");
            return Err(RuleError::NotFound(rule.id));
        };
        let previous_category = previous.category.clone();

        catalog.variables.update_rule(&rule);
        catalog
            .categories
            .relocate(&rule.id, &previous_category, &rule.category);
        info!(
            rule_id = %rule.id,
            from_category = %previous_category,
            category = %rule.category,
            "updated rule"
        );
        catalog.rules.insert(rule.id.clone(), rule);
        catalog.refresh_stats();
        Ok(())
    }

    pub fn enable_rule(&self, rule_id: &str) -> Result<()> {
        self.set_enabled(rule_id, true)
    }

    pub fn disable_rule(&self, rule_id: &str) -> Result<()> {
        self.set_enabled(rule_id, false)
    }

    /// Toggle without re-validation. Already in the target state is a no-op.
    fn set_enabled(&self, rule_id: &str, enabled: bool) -> Result<()> {
        let mut catalog = self.write();
        let Some(rule) = catalog.rules.get_mut(rule_id) else {
            return Err(RuleError::NotFound(rule_id.to_string()));
        };

        if rule.enabled == enabled {
            debug!(rule_id = %rule_id, enabled, "rule already in requested state");
            return Ok(());
        }

        rule.enabled = enabled;
        catalog.refresh_stats();
        info!(rule_id = %rule_id, enabled, "toggled rule");
        Ok(())
    }

    /// Drop every rule and reset all indexes and stats.
    pub fn clear(&self) {
        let mut catalog = self.write();
        let dropped = catalog.rules.len();
        *catalog = Catalog::default();
        info!(dropped, "cleared rule catalog");
    }

    // ── Reads ───────────────────────────────────────────────────────

    /// Copy of the rule, `None` if absent.
    pub fn get_rule(&self, rule_id: &str) -> Option<AlarmRule> {
        self.read().rules.get(rule_id).cloned()
    }

    pub fn contains_rule(&self, rule_id: &str) -> bool {
        self.read().rules.contains_key(rule_id)
    }

    pub fn len(&self) -> usize {
        self.read().rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.read().rules.is_empty()
    }

    pub fn list_rules(&self) -> Vec<AlarmRule> {
        self.read().rules.values().cloned().collect()
    }

    pub fn list_enabled_rules(&self) -> Vec<AlarmRule> {
        self.read()
            .rules
            .values()
            .filter(|r| r.enabled)
            .cloned()
            .collect()
    }

    /// Rules to re-evaluate when `variable_id` changes.
    pub fn get_rules_by_variable(&self, variable_id: VariableId) -> Vec<AlarmRule> {
        let catalog = self.read();
        let ids = catalog.variables.get_rules_by_variable(variable_id);
        catalog.copies(&ids)
    }

    pub fn get_rules_by_category(&self, category: &str) -> Vec<AlarmRule> {
        let catalog = self.read();
        catalog.copies(catalog.categories.rule_ids(category))
    }

    /// Categories holding at least one rule, sorted.
    pub fn get_categories(&self) -> Vec<String> {
        self.read().categories.categories()
    }

    pub fn get_stats(&self) -> RuleStats {
        self.read().stats.clone()
    }

    pub fn get_variables_by_rule(&self, rule_id: &str) -> Vec<VariableId> {
        self.read().variables.get_variables_by_rule(rule_id)
    }

    /// Every variable at least one rule depends on, sorted.
    pub fn watched_variables(&self) -> Vec<VariableId> {
        self.read().variables.all_variables()
    }

    pub fn index_stats(&self) -> IndexStats {
        self.read().variables.stats()
    }
}
