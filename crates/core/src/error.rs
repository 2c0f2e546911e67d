use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StorageError {
    #[error("Variable not found: {0}")]
    VariableNotFound(u64),

    #[error("Invalid variable id: {0}")]
    InvalidVariableId(u64),
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CoreError {
    #[error("Invalid alarm level: {0}")]
    InvalidLevel(i64),
}
