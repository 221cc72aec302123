// theme-clean-core/src/application/delete.rs

use futures::StreamExt;
use std::io;
use std::path::{Path, PathBuf};
use tracing::debug;

use crate::ports::asset_store::AssetStore;
use crate::ports::reporter::{CleanWarning, Reporter};

/// How a single deletion settled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum DeleteOutcome {
    Deleted,
    AlreadyGone,
    Failed,
}

/// Removes one asset. A missing file counts as success; other failures are
/// reported as warnings and swallowed.
pub async fn remove_asset(
    store: &dyn AssetStore,
    reporter: &dyn Reporter,
    location: &Path,
) -> DeleteOutcome {
    match store.remove_file(location).await {
        Ok(()) => {
            debug!(path = ?location, "🗑️  Asset removed");
            DeleteOutcome::Deleted
        }
        Err(err) if err.kind() == io::ErrorKind::NotFound => DeleteOutcome::AlreadyGone,
        Err(err) => {
            reporter.warn(CleanWarning::DeleteFailed {
                location: location.to_path_buf(),
                message: err.to_string(),
            });
            DeleteOutcome::Failed
        }
    }
}

/// Upper bound on deletions in flight at once.
pub const MAX_CONCURRENT_DELETES: usize = 16;

/// Removes `<assets_dir>/<basename>` for every basename, concurrently.
/// Waits for every deletion to settle. Outcomes come back in completion order.
pub async fn remove_assets<'a, I>(
    store: &dyn AssetStore,
    reporter: &dyn Reporter,
    assets_dir: &Path,
    basenames: I,
) -> Vec<(PathBuf, DeleteOutcome)>
where
    I: IntoIterator<Item = &'a String>,
{
    let deletions = basenames.into_iter().map(move |base| {
        let location = assets_dir.join(base);
        async move {
            let outcome = remove_asset(store, reporter, &location).await;
            (location, outcome)
        }
    });

    futures::stream::iter(deletions)
        .buffer_unordered(MAX_CONCURRENT_DELETES)
        .collect()
        .await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::fs::LocalAssetStore;
    use anyhow::Result;
    use std::fs;
    use std::sync::Mutex;
    use tempfile::tempdir;

    #[derive(Default)]
    struct CountingReporter(Mutex<usize>);

    impl Reporter for CountingReporter {
        fn warn(&self, _warning: CleanWarning) {
            if let Ok(mut count) = self.0.lock() {
                *count += 1;
            }
        }
    }

    #[tokio::test]
    async fn test_remove_assets_settles_every_path() -> Result<()> {
        let dir = tempdir()?;
        fs::write(dir.path().join("a-1.js"), "a")?;
        fs::write(dir.path().join("b-1.css"), "b")?;
        let reporter = CountingReporter::default();
        let names = vec![
            "a-1.js".to_string(),
            "missing-1.js".to_string(),
            "b-1.css".to_string(),
        ];

        let mut outcomes = remove_assets(&LocalAssetStore, &reporter, dir.path(), &names).await;
        outcomes.sort();

        assert_eq!(
            outcomes,
            vec![
                (dir.path().join("a-1.js"), DeleteOutcome::Deleted),
                (dir.path().join("b-1.css"), DeleteOutcome::Deleted),
                (dir.path().join("missing-1.js"), DeleteOutcome::AlreadyGone),
            ]
        );
        assert_eq!(*reporter.0.lock().map_err(|e| anyhow::anyhow!("{e}"))?, 0);
        Ok(())
    }
}
