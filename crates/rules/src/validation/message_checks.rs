//! Alarm message checks, including variable existence for dynamic content.

use sentinel_core::Storage;

use crate::schema::AlarmMessage;

use super::ValidationError;

/// Validate one message. Dynamic content hits the variable store once per
/// listed variable.
pub fn validate_message(
    msg: &AlarmMessage,
    path: &str,
    storage: &dyn Storage,
) -> Result<(), ValidationError> {
    match msg {
        AlarmMessage::Static { content } => {
            if content.is_empty() {
                return Err(ValidationError::new(
                    format!("{path}.content"),
                    "static content must not be empty",
                ));
            }
        }
        AlarmMessage::Dynamic { content, variables } => {
            if content.is_empty() {
                return Err(ValidationError::new(
                    format!("{path}.content"),
                    "dynamic content template must not be empty",
                ));
            }
            if variables.is_empty() {
                return Err(ValidationError::new(
                    format!("{path}.variables"),
                    "dynamic content must list its variables",
                ));
            }
            for (i, var_id) in variables.iter().enumerate() {
                if let Err(e) = storage.read_var(*var_id) {
                    return Err(ValidationError::new(
                        format!("{path}.variables[{i}]"),
                        format!("variable {var_id} does not exist: {e}"),
                    ));
                }
            }
        }
        AlarmMessage::Library { content } => {
            if content.is_empty() {
                return Err(ValidationError::new(
                    format!("{path}.content"),
                    "text library key must not be empty",
                ));
            }
        }
    }
    Ok(())
}
