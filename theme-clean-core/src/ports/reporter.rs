// theme-clean-core/src/ports/reporter.rs

use std::fmt;
use std::path::PathBuf;

/// User-facing warnings. The rendered text is stable so build logs stay greppable.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CleanWarning {
    MissingAssetsDir {
        assets_dir: PathBuf,
    },
    MissingManifest {
        manifest_file_name: String,
        assets_dir: PathBuf,
    },
    DeleteFailed {
        location: PathBuf,
        message: String,
    },
}

impl fmt::Display for CleanWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CleanWarning::MissingAssetsDir { assets_dir } => write!(
                f,
                "WARNING: No assets folder located at {}. No clean attempted.",
                assets_dir.display()
            ),
            CleanWarning::MissingManifest {
                manifest_file_name,
                assets_dir,
            } => write!(
                f,
                "WARNING: No {} in {}. No clean attempted.",
                manifest_file_name,
                assets_dir.display()
            ),
            CleanWarning::DeleteFailed { location, message } => write!(
                f,
                "WARNING: Failed to delete asset {}: {}",
                location.display(),
                message
            ),
        }
    }
}

pub trait Reporter: Send + Sync {
    fn warn(&self, warning: CleanWarning);
}
