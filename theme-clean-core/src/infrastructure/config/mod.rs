pub mod options;

pub use options::{CleanOptions, ResolvedOptions, load_clean_options};
