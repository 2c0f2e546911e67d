//! Error type for rule catalog operations.

use sentinel_core::StorageError;

use crate::validation::ValidationError;

/// Errors that can occur during rule management and rule-file import.
#[derive(Debug, thiserror::Error)]
pub enum RuleError {
    /// Candidate rule violates a structural invariant.
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    /// A rule with this id is already in the catalog.
    #[error("Rule already exists: {0}")]
    Conflict(String),

    /// No rule with this id is in the catalog.
    #[error("Rule not found: {0}")]
    NotFound(String),

    /// Variable store rejected a seed entry.
    #[error("Storage error: {0}")]
    Storage(#[from] StorageError),

    /// Filesystem I/O error while reading a rule file.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// YAML parse/deserialization error.
    #[error("YAML parse error: {0}")]
    Parse(#[from] serde_yaml::Error),
}

impl RuleError {
    pub fn is_validation(&self) -> bool {
        matches!(self, RuleError::Validation(_))
    }

    pub fn is_conflict(&self) -> bool {
        matches!(self, RuleError::Conflict(_))
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, RuleError::NotFound(_))
    }
}

/// Result alias for rule operations.
pub type Result<T> = std::result::Result<T, RuleError>;
