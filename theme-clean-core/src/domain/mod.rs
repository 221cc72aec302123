pub mod bundle;
pub mod error;
pub mod manifest;

// Handy re-exports to shorten imports elsewhere
pub use bundle::{HookContext, OutputArtifact, OutputBundle};
pub use error::DomainError;
