//! Alarm rule schema types with serde support.
//!
//! Defines the type hierarchy for alarm rule definitions:
//! - `AlarmRule`: a named, categorized, leveled condition definition
//! - `Condition`: single comparison or nested AND/OR group
//! - `AlarmMessage`: static, dynamic (variable template) or text-library content
//! - `RuleType`: user-defined, system or predictive origin

mod condition;
mod kind;
mod message;
mod rule;

pub use condition::*;
pub use kind::*;
pub use message::*;
pub use rule::*;
