//! Alarm message content: static text, variable templates, or text-library keys.

use serde::{Deserialize, Serialize};
use std::fmt;

use sentinel_core::VariableId;

/// Content attached to a rule for trigger or recovery.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum AlarmMessage {
    /// Literal text.
    Static { content: String },
    /// Template with `{var:ID}` placeholders over the listed variables.
    Dynamic {
        content: String,
        #[serde(default)]
        variables: Vec<VariableId>,
    },
    /// Key into the external multi-language text library.
    Library { content: String },
}

/// Discriminant of [`AlarmMessage`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ContentType {
    Static,
    Dynamic,
    Library,
}

impl fmt::Display for ContentType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ContentType::Static => write!(f, "static"),
            ContentType::Dynamic => write!(f, "dynamic"),
            ContentType::Library => write!(f, "library"),
        }
    }
}

impl AlarmMessage {
    pub fn text(content: impl Into<String>) -> Self {
        AlarmMessage::Static {
            content: content.into(),
        }
    }

    pub fn template(content: impl Into<String>, variables: Vec<VariableId>) -> Self {
        AlarmMessage::Dynamic {
            content: content.into(),
            variables,
        }
    }

    pub fn library(key: impl Into<String>) -> Self {
        AlarmMessage::Library {
            content: key.into(),
        }
    }

    pub fn content_type(&self) -> ContentType {
        match self {
            AlarmMessage::Static { .. } => ContentType::Static,
            AlarmMessage::Dynamic { .. } => ContentType::Dynamic,
            AlarmMessage::Library { .. } => ContentType::Library,
        }
    }

    /// Variables referenced by the message; only dynamic content has any.
    pub fn variables(&self) -> &[VariableId] {
        match self {
            AlarmMessage::Dynamic { variables, .. } => variables,
            AlarmMessage::Static { .. } | AlarmMessage::Library { .. } => &[],
        }
    }
}
