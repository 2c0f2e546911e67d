//! Derived lookup structures over the rule catalog.
//!
//! Both indexes are caches of the catalog and carry no locking of their own;
//! [`RuleManager`](crate::RuleManager) updates them under its write lock in
//! the same critical section as the catalog change.

mod category;
mod variable;


pub use self::category::CategoryIndex;
pub use self::variable::{IndexStats, VariableRuleIndex};
