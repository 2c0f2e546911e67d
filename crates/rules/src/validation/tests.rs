//! Tests for rule validation.

use sentinel_core::{AlarmLevel, MemoryStorage, Variable, VariableValue};

use super::*;
use crate::schema::{AlarmMessage, CompareOp, Condition, SingleCondition};

fn storage() -> MemoryStorage {
    MemoryStorage::with_variables([
        Variable::new(10, VariableValue::Float(20.0)),
        Variable::new(20, VariableValue::Float(1.5)),
    ])
    .unwrap()
}

fn valid_rule() -> AlarmRule {
    AlarmRule::new(
        "r1",
        "High Temp",
        "temp",
        AlarmLevel::Medium,
        Condition::compare(10, CompareOp::Gt, 80.0),
        AlarmMessage::text("High Temp"),
    )
}

fn err_path(rule: &AlarmRule) -> String {
    validate_rule(rule, &storage()).unwrap_err().path
}

#[test]
fn valid_rule_passes() {
    assert!(validate_rule(&valid_rule(), &storage()).is_ok());
}

#[test]
fn empty_required_fields_fail_in_order() {
    let mut rule = valid_rule();
    rule.id.clear();
    rule.name.clear();
    assert_eq!(err_path(&rule), "id", "id is checked before name");

    let mut rule = valid_rule();
    rule.name.clear();
    rule.category.clear();
    assert_eq!(err_path(&rule), "name");

    let mut rule = valid_rule();
    rule.category.clear();
    rule.level = 9;
    assert_eq!(err_path(&rule), "category");
}

#[test]
fn level_outside_range_fails() {
    for level in [0, 5, -3] {
        let mut rule = valid_rule();
        rule.level = level;
        let err = validate_rule(&rule, &storage()).unwrap_err();
        assert_eq!(err.path, "level");
        assert!(err.message.contains(&level.to_string()));
    }
    for level in 1..=4 {
        let mut rule = valid_rule();
        rule.level = level;
        assert!(validate_rule(&rule, &storage()).is_ok());
    }
}

#[test]
fn missing_condition_fails() {
    let mut rule = valid_rule();
    rule.condition = None;
    rule.trigger_msg = None;
    assert_eq!(err_path(&rule), "condition");
}

#[test]
fn single_condition_needs_variable_and_threshold() {
    let mut rule = valid_rule();
    rule.condition = Some(Condition::compare(0, CompareOp::Gt, 1.0));
    assert_eq!(err_path(&rule), "condition.variable_id");

    let mut rule = valid_rule();
    rule.condition = Some(Condition::Single(SingleCondition {
        variable_id: 10,
        operator: CompareOp::Lt,
        value: None,
        value_var_id: None,
        deadband: 0.0,
        delay_ms: 0,
    }));
    assert_eq!(err_path(&rule), "condition.value");

    let mut rule = valid_rule();
    rule.condition = Some(Condition::Single(SingleCondition {
        variable_id: 10,
        operator: CompareOp::Lt,
        value: None,
        value_var_id: Some(20),
        deadband: 0.0,
        delay_ms: 0,
    }));
    assert!(validate_rule(&rule, &storage()).is_ok(), "threshold variable suffices");
}

#[test]
fn negative_deadband_fails() {
    let mut rule = valid_rule();
    rule.condition = Some(Condition::Single(SingleCondition {
        variable_id: 10,
        operator: CompareOp::Gt,
        value: Some(1.0),
        value_var_id: None,
        deadband: -0.1,
        delay_ms: 0,
    }));
    assert_eq!(err_path(&rule), "condition.deadband");
}

#[test]
fn nested_group_errors_name_child_path() {
    let mut rule = valid_rule();
    rule.condition = Some(Condition::all(vec![
        Condition::compare(10, CompareOp::Gt, 1.0),
        Condition::any(vec![
            Condition::compare(20, CompareOp::Lt, 1.0),
            Condition::compare(0, CompareOp::Lt, 1.0),
        ]),
    ]));
    assert_eq!(err_path(&rule), "condition.conditions[1].conditions[1].variable_id");
}

#[test]
fn empty_group_fails() {
    let mut rule = valid_rule();
    rule.condition = Some(Condition::any(vec![]));
    let err = validate_rule(&rule, &storage()).unwrap_err();
    assert_eq!(err.path, "condition.conditions");
    assert!(err.message.contains("OR"));
}

#[test]
fn invalid_enable_cond_fails_after_condition() {
    let mut rule = valid_rule().with_enable_cond(Condition::all(vec![]));
    assert_eq!(err_path(&rule), "enable_cond.conditions");

    rule.condition = Some(Condition::compare(0, CompareOp::Gt, 1.0));
    assert_eq!(err_path(&rule), "condition.variable_id");
}

#[test]
fn trigger_message_is_required() {
    let mut rule = valid_rule();
    rule.trigger_msg = None;
    assert_eq!(err_path(&rule), "trigger_msg");
}

#[test]
fn empty_message_content_fails_per_kind() {
    for (msg, path) in [
        (AlarmMessage::text(""), "trigger_msg.content"),
        (AlarmMessage::library(""), "trigger_msg.content"),
        (AlarmMessage::template("", vec![10]), "trigger_msg.content"),
        (AlarmMessage::template("{var:10}", vec![]), "trigger_msg.variables"),
    ] {
        let mut rule = valid_rule();
        rule.trigger_msg = Some(msg);
        assert_eq!(err_path(&rule), path);
    }
}

#[test]
fn dynamic_message_with_missing_variable_fails() {
    let mut rule = valid_rule();
    rule.trigger_msg = Some(AlarmMessage::template("Value {var:99}", vec![99]));
    let err = validate_rule(&rule, &storage()).unwrap_err();
    assert_eq!(err.path, "trigger_msg.variables[0]");
    assert!(err.message.contains("99"));
}

#[test]
fn dynamic_message_with_existing_variables_passes() {
    let mut rule = valid_rule();
    rule.trigger_msg = Some(AlarmMessage::template("{var:10} / {var:20}", vec![10, 20]));
    assert!(validate_rule(&rule, &storage()).is_ok());
}

#[test]
fn recover_message_is_validated_when_present() {
    let rule = valid_rule().with_recover_msg(AlarmMessage::template("{var:42}", vec![42]));
    assert_eq!(err_path(&rule), "recover_msg.variables[0]");

    let rule = valid_rule().with_recover_msg(AlarmMessage::library("temp.ok"));
    assert!(validate_rule(&rule, &storage()).is_ok());
}

#[test]
fn error_display_includes_path() {
    let err = ValidationError::new("level", "out of range");
    assert_eq!(err.to_string(), "level: out of range");
}

#[test]
fn condition_validate_roots_paths_at_caller_field() {
    let rule = valid_rule().with_enable_cond(Condition::all(vec![]));

    let err = rule.enable_cond.as_ref().unwrap().validate("enable_cond").unwrap_err();
    assert_eq!(err.path, "enable_cond.conditions");

    let err = rule.enable_cond.as_ref().unwrap().validate("condition").unwrap_err();
    assert_eq!(err.path, "condition.conditions");

    assert!(rule.condition.as_ref().unwrap().validate("condition").is_ok());
}
