//! Integration tests that load the example catalog in `data/` through the
//! public API.

use std::sync::Arc;

use sentinel_core::AlarmLevel;
use sentinel_rules::loader::{seed_manager, RuleFile, VariableFile};
use sentinel_rules::schema::{CompareOp, Condition, LogicOp, RuleType};
use sentinel_rules::RuleManager;

/// Integration tests run from the crate directory, so we go up two levels.
fn data_dir() -> std::path::PathBuf {
    let manifest = std::path::Path::new(env!("CARGO_MANIFEST_DIR"));
    manifest.join("../../data")
}

fn load_example() -> RuleManager {
    let storage = VariableFile::read(&data_dir().join("variables.yml"))
        .unwrap_or_else(|e| panic!("Failed to read variables.yml: {e}"))
        .into_storage()
        .unwrap_or_else(|e| panic!("Failed to seed variables: {e}"));
    let file = RuleFile::read(&data_dir().join("rules/alarm-rules.yml"))
        .unwrap_or_else(|e| panic!("Failed to read alarm-rules.yml: {e}"));

    let manager = RuleManager::new(Arc::new(storage));
    let results = seed_manager(&manager, file.rules);
    for result in &results {
        assert!(result.is_loaded(), "{} failed: {:?}", result.rule_id, result.status);
    }
    manager
}

fn ids(manager: &RuleManager, variable: u64) -> Vec<String> {
    let mut ids: Vec<_> = manager
        .get_rules_by_variable(variable)
        .into_iter()
        .map(|r| r.id)
        .collect();
    ids.sort();
    ids
}

#[test]
fn example_catalog_loads() {
    let manager = load_example();
    let stats = manager.get_stats();

    assert_eq!(stats.total_rules, 3);
    assert_eq!(stats.enabled_rules, 2);
    assert_eq!(stats.disabled_rules, 1);
    assert_eq!(stats.level_count(AlarmLevel::Critical), 1);
    assert_eq!(manager.get_categories(), vec!["pressure", "pump", "temp"]);
}

#[test]
fn boiler_overheat_shape() {
    let manager = load_example();
    let rule = manager.get_rule("boiler-overheat").unwrap();

    assert_eq!(rule.rule_type, RuleType::System);
    assert_eq!(rule.responsible, vec!["shift-lead"]);
    let Some(Condition::Group(group)) = &rule.condition else {
        panic!("expected group condition");
    };
    assert_eq!(group.logic, LogicOp::And);
    let Condition::Single(first) = &group.conditions[0] else {
        panic!("expected single condition");
    };
    assert_eq!(first.operator, CompareOp::Gte);
    assert_eq!(first.delay_ms, 2000);
}

#[test]
fn example_variable_routing() {
    let manager = load_example();

    assert_eq!(ids(&manager, 1001), vec!["boiler-overheat"]);
    // Enable condition operands route too.
    assert_eq!(ids(&manager, 1010), vec!["boiler-overheat"]);
    // Threshold variables route too.
    assert_eq!(ids(&manager, 1004), vec!["feedwater-low-pressure"]);
    // Disabled rules stay indexed.
    assert_eq!(ids(&manager, 1006), vec!["pump-trip"]);
    assert!(ids(&manager, 4242).is_empty());

    assert_eq!(
        manager.watched_variables(),
        vec![1001, 1002, 1003, 1004, 1005, 1006, 1010]
    );
}
