// theme-clean/src/commands/mod.rs

pub mod clean;
pub mod live_files;
pub mod reconcile;

use anyhow::Context;
use theme_clean_core::infrastructure::config::{CleanOptions, ResolvedOptions, load_clean_options};

use crate::cli::OptionArgs;

/// Defaults < config file < environment < CLI flags.
pub fn resolve_options(args: OptionArgs) -> anyhow::Result<ResolvedOptions> {
    let layered = load_clean_options(&args.config_dir)
        .with_context(|| format!("Failed to load options from {:?}", args.config_dir))?;

    let flags = CleanOptions {
        manifest_file_name: args.manifest_file_name,
        theme_root: args.theme_root,
    };

    Ok(layered.merge(flags).resolve()?)
}
