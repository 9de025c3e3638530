//! Console rendering of bootstrap progress messages

use crate::output;
use gitinit_core::types::LogLevel;
use gitinit_core::Reporter;

/// Prints leveled messages with the terminal output styles
///
/// In quiet mode only warnings and errors are shown.
#[derive(Debug, Clone, Copy, Default)]
pub struct ConsoleReporter {
    quiet: bool,
}

impl ConsoleReporter {
    pub fn new(quiet: bool) -> Self {
        Self { quiet }
    }
}

impl Reporter for ConsoleReporter {
    fn report(&self, level: LogLevel, message: &str) {
        match level {
            LogLevel::Done if !self.quiet => output::success(message),
            LogLevel::Info if !self.quiet => output::info(message),
            LogLevel::Warning => output::warning(message),
            LogLevel::Error => output::error(message),
            LogLevel::Done | LogLevel::Info => {}
        }
    }
}
