// theme-clean-core/src/lib.rs

#![allow(missing_docs)]
// Memory safety
#![deny(unsafe_code)]
// Robustness
#![warn(clippy::unwrap_used)]
#![warn(clippy::expect_used)]
// Performance
#![warn(clippy::perf)]

// --- HEXAGONAL MODULES ---

// 1. Ports (Interfaces / Traits)
// Filesystem access and diagnostics output.
pub mod ports;

// 2. Domain
// Manifest model, live-file interpretation, bundle shapes.
// Depends on nothing else in the crate.
pub mod domain;

// 3. Infrastructure (Adapters)
// Local filesystem, console reporter, option loading.
pub mod infrastructure;

// 4. Application (Use Cases)
// Cleanup coordinator and its deletion helpers.
pub mod application;

// --- GLOBAL ERROR HANDLING ---
pub mod error;

// --- RE-EXPORTS (FACADE) ---
pub use application::{CleanReport, CleanupCoordinator};
pub use domain::manifest::{Manifest, ManifestEntry, compute_live_files};
pub use error::ThemeCleanError;
