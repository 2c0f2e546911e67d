//! YAML rule-file import and export.
//!
//! A rule file is a YAML document with a top-level `rules` list. Seeding a
//! manager goes through [`RuleManager::add_rule`] one rule at a time, so every
//! rule is validated and a bad rule never blocks the rest of the file.


use std::fs;
use std::path::Path;

use sentinel_core::{MemoryStorage, Variable};
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::manager::{Result, RuleError, RuleManager};
use crate::schema::AlarmRule;

/// A set of rule definitions as stored on disk.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct RuleFile {
    #[serde(default)]
    pub rules: Vec<AlarmRule>,
}

impl RuleFile {
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        Ok(serde_yaml::from_str(yaml)?)
    }

    pub fn read(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path)?;
        let file = Self::from_yaml(&contents)?;
        info!(path = %path.display(), rules = file.rules.len(), "read rule file");
        Ok(file)
    }

    /// Snapshot of a manager's catalog, ordered by rule id.
    pub fn from_manager(manager: &RuleManager) -> Self {
        let mut rules = manager.list_rules();
        rules.sort_by(|a, b| a.id.cmp(&b.id));
        Self { rules }
    }

    pub fn to_yaml(&self) -> Result<String> {
        Ok(serde_yaml::to_string(self)?)
    }
}

/// Seed data for the in-memory variable store.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct VariableFile {
    #[serde(default)]
    pub variables: Vec<Variable>,
}

impl VariableFile {
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        Ok(serde_yaml::from_str(yaml)?)
    }

    pub fn read(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path)?;
        Self::from_yaml(&contents)
    }

    /// Build the variable store. A reserved (zero) id rejects the whole file.
    pub fn into_storage(self) -> Result<MemoryStorage> {
        let count = self.variables.len();
        let storage = MemoryStorage::with_variables(self.variables).map_err(|e| {
            warn!(error = %e, "rejected variable seed");
            RuleError::Storage(e)
        })?;
        info!(variables = count, "seeded variable store");
        Ok(storage)
    }
}

/// Outcome of importing a single rule.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct LoadResult {
    pub rule_id: String,
    pub status: LoadStatus,
}

/// Status of a single rule import attempt.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum LoadStatus {
    /// Rule was admitted to the catalog.
    Loaded,
    /// Validation or conflict error; the rule was not admitted.
    Failed { error: String },
}

impl LoadResult {
    pub fn is_loaded(&self) -> bool {
        matches!(self.status, LoadStatus::Loaded)
    }
}

/// Add every rule to the manager, reporting each outcome. Never aborts early.
pub fn seed_manager(
    manager: &RuleManager,
    rules: impl IntoIterator<Item = AlarmRule>,
) -> Vec<LoadResult> {
    let mut results = Vec::new();
    for rule in rules {
        let rule_id = rule.id.clone();
        let status = match manager.add_rule(rule) {
            Ok(()) => LoadStatus::Loaded,
            Err(e) => {
                warn!(rule_id = %rule_id, error = %e, "failed to load rule");
                LoadStatus::Failed {
                    error: e.to_string(),
                }
            }
        };
        results.push(LoadResult { rule_id, status });
    }

    let loaded = results.iter().filter(|r| r.is_loaded()).count();
    info!(loaded, failed = results.len() - loaded, "seeded rule manager");
    results
}
