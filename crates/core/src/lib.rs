pub mod config;
pub mod error;
pub mod level;
pub mod storage;
pub mod variable;

pub use config::Config;
pub use error::*;
pub use level::*;
pub use storage::*;
pub use variable::*;
