// theme-clean-core/src/infrastructure/fs.rs

use async_trait::async_trait;
use std::io;
use std::path::Path;

use crate::ports::asset_store::AssetStore;

/// [`AssetStore`] backed by the local disk through `tokio::fs`.
#[derive(Debug, Default, Clone, Copy)]
pub struct LocalAssetStore;

#[async_trait]
impl AssetStore for LocalAssetStore {
    async fn exists(&self, path: &Path) -> bool {
        // Unreadable parents count as missing, like a plain existence check.
        tokio::fs::try_exists(path).await.unwrap_or(false)
    }

    async fn read_to_string(&self, path: &Path) -> io::Result<String> {
        tokio::fs::read_to_string(path).await
    }

    async fn remove_file(&self, path: &Path) -> io::Result<()> {
        tokio::fs::remove_file(path).await
    }
}
