//! Realtime variable store seam.
//!
//! The rule engine only needs to confirm that a variable exists, so the trait
//! is kept to a single read. [`MemoryStorage`] backs tests and the CLI.

use std::collections::HashMap;
use std::sync::RwLock;

use crate::error::StorageError;
use crate::variable::{Variable, VariableId};

/// Read access to the realtime variable store.
pub trait Storage: Send + Sync {
    fn read_var(&self, id: VariableId) -> Result<Variable, StorageError>;

    fn contains_var(&self, id: VariableId) -> bool {
        self.read_var(id).is_ok()
    }
}

/// In-memory variable store.
///
/// Thread-safe via `std::sync::RwLock`.
#[derive(Debug, Default)]
pub struct MemoryStorage {
    vars: RwLock<HashMap<VariableId, Variable>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed a store. Fails on the first reserved (zero) id.
    pub fn with_variables(
        vars: impl IntoIterator<Item = Variable>,
    ) -> Result<Self, StorageError> {
        let storage = Self::new();
        for var in vars {
            storage.write_var(var)?;
        }
        Ok(storage)
    }

    /// Insert or replace a variable. Id 0 is reserved as "unset".
    pub fn write_var(&self, var: Variable) -> Result<(), StorageError> {
        if var.id == 0 {
            return Err(StorageError::InvalidVariableId(var.id));
        }
        self.vars
            .write()
            .expect("variable store lock poisoned")
            .insert(var.id, var);
        Ok(())
    }

    pub fn remove_var(&self, id: VariableId) -> Option<Variable> {
        self.vars
            .write()
            .expect("variable store lock poisoned")
            .remove(&id)
    }

    pub fn len(&self) -> usize {
        self.vars.read().expect("variable store lock poisoned").len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl Storage for MemoryStorage {
    fn read_var(&self, id: VariableId) -> Result<Variable, StorageError> {
        self.vars
            .read()
            .expect("variable store lock poisoned")
            .get(&id)
            .cloned()
            .ok_or(StorageError::VariableNotFound(id))
    }
}
