pub mod collector;
pub mod result;

pub use collector::ResultCollector;
pub use result::{CheckResult, Severity};
