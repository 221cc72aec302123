// theme-clean-core/src/infrastructure/mod.rs

pub mod config;
pub mod error;
pub mod fs;
pub mod reporter;

pub use fs::LocalAssetStore;
pub use reporter::ConsoleReporter;
