pub mod common;
pub mod logging;

pub use logging::{Logger, Severity};
