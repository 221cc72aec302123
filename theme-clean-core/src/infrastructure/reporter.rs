// theme-clean-core/src/infrastructure/reporter.rs

use crate::ports::reporter::{CleanWarning, Reporter};

/// Writes warnings verbatim to stderr.
#[derive(Debug, Default, Clone, Copy)]
pub struct ConsoleReporter;

impl Reporter for ConsoleReporter {
    fn warn(&self, warning: CleanWarning) {
        eprintln!("{}", warning);
    }
}
