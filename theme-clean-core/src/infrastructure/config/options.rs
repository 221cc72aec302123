// theme-clean-core/src/infrastructure/config/options.rs

use serde::Deserialize;
use std::fs;
use std::io;
use std::path::{Component, Path, PathBuf};
use tracing::{debug, info, instrument};

use crate::infrastructure::error::InfrastructureError;

pub const DEFAULT_MANIFEST_FILE_NAME: &str = ".vite/manifest.json";
pub const DEFAULT_THEME_ROOT: &str = "./";

pub const ENV_MANIFEST_FILE_NAME: &str = "THEME_CLEAN_MANIFEST_FILE_NAME";
pub const ENV_THEME_ROOT: &str = "THEME_CLEAN_THEME_ROOT";

const CONFIG_CANDIDATES: [&str; 2] = ["theme-clean.yaml", "theme-clean.yml"];

/// User-supplied options. Every field is optional; see [`CleanOptions::resolve`].
#[derive(Debug, Deserialize, Clone, Default, PartialEq)]
#[serde(rename_all = "kebab-case", deny_unknown_fields)]
pub struct CleanOptions {
    #[serde(default, alias = "manifestFileName")]
    pub manifest_file_name: Option<String>,

    #[serde(default, alias = "themeRoot")]
    pub theme_root: Option<PathBuf>,
}

/// Options with defaults applied and the theme root normalized.
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedOptions {
    pub manifest_file_name: String,
    pub theme_root: PathBuf,
}

impl CleanOptions {
    /// Layers `other` on top of `self`: fields set in `other` win.
    pub fn merge(self, other: CleanOptions) -> CleanOptions {
        CleanOptions {
            manifest_file_name: other.manifest_file_name.or(self.manifest_file_name),
            theme_root: other.theme_root.or(self.theme_root),
        }
    }

    pub fn resolve(self) -> Result<ResolvedOptions, InfrastructureError> {
        let manifest_file_name = self
            .manifest_file_name
            .unwrap_or_else(|| DEFAULT_MANIFEST_FILE_NAME.to_string());

        if manifest_file_name.trim().is_empty() {
            return Err(InfrastructureError::ConfigError(
                "manifest-file-name must not be empty".to_string(),
            ));
        }
        // The manifest always lives inside the assets folder
        if Path::new(&manifest_file_name).is_absolute() {
            return Err(InfrastructureError::ConfigError(format!(
                "manifest-file-name must be relative to the assets folder, got '{}'",
                manifest_file_name
            )));
        }

        let theme_root = self
            .theme_root
            .unwrap_or_else(|| PathBuf::from(DEFAULT_THEME_ROOT));

        Ok(ResolvedOptions {
            manifest_file_name,
            theme_root: normalize(&theme_root),
        })
    }
}

impl Default for ResolvedOptions {
    fn default() -> Self {
        Self {
            manifest_file_name: DEFAULT_MANIFEST_FILE_NAME.to_string(),
            theme_root: normalize(Path::new(DEFAULT_THEME_ROOT)),
        }
    }
}

impl ResolvedOptions {
    /// `<theme_root>/assets`, made absolute against the working directory.
    pub fn assets_dir(&self) -> io::Result<PathBuf> {
        std::path::absolute(self.theme_root.join("assets"))
    }
}

/// Lexical normalization: drops `.`, folds `..` where possible, never touches the disk.
pub fn normalize(path: &Path) -> PathBuf {
    let mut out = PathBuf::new();
    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => match out.components().next_back() {
                Some(Component::Normal(_)) => {
                    out.pop();
                }
                Some(Component::RootDir) | Some(Component::Prefix(_)) => {}
                _ => out.push(".."),
            },
            other => out.push(other.as_os_str()),
        }
    }

    if out.as_os_str().is_empty() {
        PathBuf::from(".")
    } else {
        out
    }
}

// --- LOADER ---

/// Builds options from the optional config file in `dir`, then environment overrides.
#[instrument(skip(dir))]
pub fn load_clean_options(dir: &Path) -> Result<CleanOptions, InfrastructureError> {
    let from_file = match find_config_file(dir) {
        Some(path) => {
            info!(path = ?path, "Loading cleanup options");
            load_config_file(&path)?
        }
        None => {
            debug!(dir = ?dir, "No config file, using defaults");
            CleanOptions::default()
        }
    };

    Ok(apply_env_overrides(from_file, |key| std::env::var(key).ok()))
}

fn find_config_file(root: &Path) -> Option<PathBuf> {
    CONFIG_CANDIDATES
        .iter()
        .map(|filename| root.join(filename))
        .find(|p| p.is_file())
}

fn load_config_file(path: &Path) -> Result<CleanOptions, InfrastructureError> {
    let content = fs::read_to_string(path)?;
    if content.trim().is_empty() {
        return Ok(CleanOptions::default());
    }
    serde_yaml::from_str(&content).map_err(|source| InfrastructureError::YamlError {
        path: path.display().to_string(),
        source,
    })
}

/// Environment layer. Allows `THEME_CLEAN_THEME_ROOT=themes/dawn theme-clean clean`.
pub fn apply_env_overrides<F>(options: CleanOptions, lookup: F) -> CleanOptions
where
    F: Fn(&str) -> Option<String>,
{
    let env = CleanOptions {
        manifest_file_name: lookup(ENV_MANIFEST_FILE_NAME).filter(|v| !v.is_empty()),
        theme_root: lookup(ENV_THEME_ROOT)
            .filter(|v| !v.is_empty())
            .map(PathBuf::from),
    };

    if let Some(val) = &env.manifest_file_name {
        info!(new = ?val, "Overriding manifest file name via ENV");
    }
    if let Some(val) = &env.theme_root {
        info!(new = ?val, "Overriding theme root via ENV");
    }

    options.merge(env)
}
