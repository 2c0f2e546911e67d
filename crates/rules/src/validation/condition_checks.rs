//! Condition tree checks: operands, thresholds, group structure.

use crate::schema::{Condition, ConditionGroup, SingleCondition};

use super::ValidationError;

pub(crate) fn validate_condition(cond: &Condition, path: &str) -> Result<(), ValidationError> {
    match cond {
        Condition::Single(single) => validate_single(single, path),
        Condition::Group(group) => validate_group(group, path),
    }
}

fn validate_single(cond: &SingleCondition, path: &str) -> Result<(), ValidationError> {
    if cond.variable_id == 0 {
        return Err(ValidationError::new(
            format!("{path}.variable_id"),
            "variable id must be set",
        ));
    }

    match (cond.value, cond.value_var_id) {
        (None, None) => {
            return Err(ValidationError::new(
                format!("{path}.value"),
                "either a threshold value or a threshold variable must be set",
            ));
        }
        (Some(v), _) if !v.is_finite() => {
            return Err(ValidationError::new(
                format!("{path}.value"),
                format!("threshold must be finite, got {v}"),
            ));
        }
        (_, Some(0)) => {
            return Err(ValidationError::new(
                format!("{path}.value_var_id"),
                "threshold variable id must not be 0",
            ));
        }
        _ => {}
    }

    if !cond.deadband.is_finite() || cond.deadband < 0.0 {
        return Err(ValidationError::new(
            format!("{path}.deadband"),
            format!("deadband must be a non-negative number, got {}", cond.deadband),
        ));
    }

    Ok(())
}

fn validate_group(group: &ConditionGroup, path: &str) -> Result<(), ValidationError> {
    if group.conditions.is_empty() {
        return Err(ValidationError::new(
            format!("{path}.conditions"),
            format!("{} group must contain at least one condition", group.logic),
        ));
    }

    for (i, child) in group.conditions.iter().enumerate() {
        validate_condition(child, &format!("{path}.conditions[{i}]"))?;
    }
    Ok(())
}
