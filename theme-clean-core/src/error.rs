// theme-clean-core/src/error.rs

use crate::domain::error::DomainError;
use crate::infrastructure::error::InfrastructureError;
use miette::Diagnostic;
use thiserror::Error;

#[derive(Error, Debug, Diagnostic)]
pub enum ThemeCleanError {
    // --- DOMAIN ERRORS (malformed manifests) ---
    #[error(transparent)]
    #[diagnostic(transparent)]
    Domain(#[from] DomainError),

    // --- INFRASTRUCTURE ERRORS (IO, config parsing) ---
    #[error(transparent)]
    #[diagnostic(transparent)]
    Infrastructure(#[from] InfrastructureError),
}

// Manual implementation to avoid a duplicate variant but keep `?` ergonomics
impl From<std::io::Error> for ThemeCleanError {
    fn from(err: std::io::Error) -> Self {
        ThemeCleanError::Infrastructure(InfrastructureError::Io(err))
    }
}
