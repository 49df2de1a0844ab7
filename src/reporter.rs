//! User-facing notifications emitted while a render writes its output.

use std::path::Path;

/// Receives one notification per written file and one when the render is done.
pub trait Reporter {
    /// Called after `path` (relative to the working directory) has been written.
    fn added(&self, path: &Path);

    /// Called once after every file of the plan has been written.
    fn finished(&self);
}

/// Prints notifications to stdout.
#[derive(Debug, Default)]
pub struct ConsoleReporter;

impl ConsoleReporter {
    pub fn new() -> Self {
        Self
    }
}

impl Reporter for ConsoleReporter {
    fn added(&self, path: &Path) {
        println!("added: {}", path.display());
    }

    fn finished(&self) {
        println!("\nHappy editing!\n");
    }
}
