// theme-clean-core/src/ports/mod.rs

pub mod asset_store;
pub mod reporter;

pub use asset_store::AssetStore;
pub use reporter::{CleanWarning, Reporter};
