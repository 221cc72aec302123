// theme-clean/src/cli.rs
//
// Single source of truth for all CLI definitions (Clap structs).

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "theme-clean")]
#[command(about = "Removes stale hashed build assets from a theme's assets folder", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Enable debug logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Overrides layered on top of the config file and environment.
#[derive(Args, Debug, Clone)]
pub struct OptionArgs {
    /// Theme root; assets are looked up in <THEME_ROOT>/assets
    #[arg(long)]
    pub theme_root: Option<PathBuf>,

    /// Manifest path relative to the assets folder
    #[arg(long)]
    pub manifest_file_name: Option<String>,

    /// Directory holding theme-clean.yaml
    #[arg(long, default_value = ".")]
    pub config_dir: PathBuf,
}

#[derive(Subcommand)]
pub enum Commands {
    /// 🧹 Deletes every asset the on-disk manifest lists (previous build output)
    Clean {
        #[command(flatten)]
        options: OptionArgs,
    },

    /// ♻️  Deletes assets live in the on-disk manifest but absent from a new one
    Reconcile {
        /// Freshly built manifest to reconcile against
        #[arg(long)]
        current: PathBuf,

        #[command(flatten)]
        options: OptionArgs,
    },

    /// 📋 Prints the live files of a manifest
    LiveFiles {
        /// Manifest JSON file
        manifest: PathBuf,

        /// Print a JSON array instead of one file per line
        #[arg(long)]
        json: bool,
    },
}

#[cfg(test)]
mod tests {
    use super::*;
    use anyhow::{Result, bail};
    use clap::Parser;

    #[test]
    fn test_cli_parse_clean_defaults() -> Result<()> {
        let args = Cli::parse_from(["theme-clean", "clean"]);
        match args.command {
            Commands::Clean { options } => {
                assert_eq!(options.theme_root, None);
                assert_eq!(options.manifest_file_name, None);
                assert_eq!(options.config_dir.to_string_lossy(), ".");
                assert!(!args.verbose);
                Ok(())
            }
            _ => bail!("Expected Clean command"),
        }
    }

    #[test]
    fn test_cli_parse_clean_overrides() -> Result<()> {
        let args = Cli::parse_from([
            "theme-clean",
            "clean",
            "--theme-root",
            "themes/dawn",
            "--manifest-file-name",
            "manifest.json",
            "-v",
        ]);
        match args.command {
            Commands::Clean { options } => {
                assert_eq!(options.theme_root, Some(PathBuf::from("themes/dawn")));
                assert_eq!(options.manifest_file_name.as_deref(), Some("manifest.json"));
                assert!(args.verbose);
                Ok(())
            }
            _ => bail!("Expected Clean command"),
        }
    }

    #[test]
    fn test_cli_parse_reconcile() -> Result<()> {
        let args = Cli::parse_from(["theme-clean", "reconcile", "--current", "dist/manifest.json"]);
        match args.command {
            Commands::Reconcile { current, .. } => {
                assert_eq!(current, PathBuf::from("dist/manifest.json"));
                Ok(())
            }
            _ => bail!("Expected Reconcile command"),
        }
    }

    #[test]
    fn test_cli_reconcile_requires_current() {
        assert!(Cli::try_parse_from(["theme-clean", "reconcile"]).is_err());
    }

    #[test]
    fn test_cli_parse_live_files() -> Result<()> {
        let args = Cli::parse_from(["theme-clean", "live-files", "manifest.json", "--json"]);
        match args.command {
            Commands::LiveFiles { manifest, json } => {
                assert_eq!(manifest, PathBuf::from("manifest.json"));
                assert!(json);
                Ok(())
            }
            _ => bail!("Expected LiveFiles command"),
        }
    }
}
