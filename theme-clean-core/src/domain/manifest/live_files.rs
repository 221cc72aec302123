// theme-clean-core/src/domain/manifest/live_files.rs

use std::collections::{BTreeSet, HashSet};

use super::model::Manifest;

/// Basename prefix the build tool gives to shared chunks that are not entries.
pub const PRIVATE_MARKER: char = '_';

/// Output basenames confirmed live by one manifest read.
pub type LiveFileSet = BTreeSet<String>;

/// Returns every output file the manifest vouches for, in manifest order.
///
/// Entries whose key basename starts with [`PRIVATE_MARKER`] only count when
/// some entry lists them in `imports`. The check is one hop deep: a private
/// chunk imported only by another unreachable private chunk still counts.
/// Duplicates are kept.
pub fn compute_live_files(manifest: &Manifest) -> Vec<String> {
    let imported: HashSet<&str> = manifest
        .entries()
        .flat_map(|entry| entry.imports.iter().map(String::as_str))
        .collect();

    manifest
        .iter()
        .filter(|(key, _)| !basename(key).starts_with(PRIVATE_MARKER) || imported.contains(key))
        .flat_map(|(_, entry)| {
            std::iter::once(&entry.file)
                .chain(&entry.css)
                .chain(&entry.assets)
                .cloned()
        })
        .collect()
}

/// Reduces output paths to the basenames looked up in the asset directory.
pub fn live_basenames<I, S>(files: I) -> LiveFileSet
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    files
        .into_iter()
        .map(|file| basename(file.as_ref()).to_string())
        .filter(|base| !base.is_empty())
        .collect()
}

/// Last `/`-separated segment of a manifest path.
pub fn basename(path: &str) -> &str {
    let trimmed = path.trim_end_matches('/');
    trimmed.rsplit('/').next().unwrap_or(trimmed)
}
