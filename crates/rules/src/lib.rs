//! In-memory alarm rule catalog for the device gateway.
//!
//! This crate provides:
//! - Alarm rule schema types (conditions, messages) with serde support
//! - Structural validation of candidate rules against the variable store
//! - A reverse index from monitored variable to the rules referencing it
//! - Category grouping and aggregate statistics
//! - [`RuleManager`], the lock-guarded facade owning all of the above
//! - YAML rule-file import for seeding a manager

pub mod index;
pub mod loader;
pub mod manager;
pub mod schema;
pub mod stats;
pub mod validation;

pub use manager::{Result, RuleError, RuleManager};
pub use schema::{AlarmMessage, AlarmRule, Condition};
pub use stats::RuleStats;
