//! Rule catalog facade.
//!
//! [`RuleManager`] owns the rule catalog, the variable and category indexes
//! and the aggregate stats behind one `RwLock`. Every read hands back owned
//! copies; every mutation is validated first and applied to all four
//! structures inside a single write critical section.

mod core;
mod error;


pub use self::core::RuleManager;
pub use self::error::{Result, RuleError};
