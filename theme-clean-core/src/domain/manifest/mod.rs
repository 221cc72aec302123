// theme-clean-core/src/domain/manifest/mod.rs

pub mod live_files;
pub mod model;

pub use live_files::{LiveFileSet, PRIVATE_MARKER, basename, compute_live_files, live_basenames};
pub use model::{Manifest, ManifestEntry};
