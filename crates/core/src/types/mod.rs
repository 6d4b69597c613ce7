pub mod ecosystem;
pub mod mode;
pub mod result;

// Re-export commonly used types
pub use ecosystem::Ecosystem;
pub use mode::Mode;
pub use result::{RunReport, RunStats, TestResult, TestStatus};
