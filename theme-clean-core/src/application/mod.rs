// theme-clean-core/src/application/mod.rs

pub mod coordinator;
pub mod delete;

// --- RE-EXPORTS (FACADE PATTERN) ---
// Lets a host write `use theme_clean_core::application::CleanupCoordinator;`
pub use coordinator::{BaselineLoad, CleanReport, CleanupCoordinator, SkipReason};
pub use delete::{DeleteOutcome, remove_asset};
