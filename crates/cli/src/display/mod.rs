pub mod formatter;
pub mod progress;
pub mod summary;

pub use progress::{ConsoleProgress, render_event};
pub use summary::{NO_TESTS_NOTICE, render_summary};
