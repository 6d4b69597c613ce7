//! Progress events emitted while a run is in flight

use std::path::Path;
use std::time::Duration;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RunEvent<'a> {
    Detecting { root: &'a Path },
    Started { label: &'a str, command: &'a str },
    /// `preview` is the tail of stdout
    Passed { label: &'a str, duration: Duration, preview: Vec<&'a str> },
    /// `diagnostic` is the tail of stderr, or of stdout when stderr is empty
    Failed { label: &'a str, duration: Duration, diagnostic: Vec<&'a str> },
    Errored { label: &'a str, message: &'a str },
    Skipped { label: &'a str, reason: &'a str },
}

pub trait ProgressListener {
    fn on_event(&mut self, event: RunEvent<'_>);
}

#[derive(Debug, Default)]
pub struct SilentListener;

impl ProgressListener for SilentListener {
    fn on_event(&mut self, _event: RunEvent<'_>) {}
}
