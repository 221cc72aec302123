// theme-clean-core/src/ports/asset_store.rs

// What the coordinator needs from a filesystem, without knowing which one.
// Missing files must surface as `io::ErrorKind::NotFound`.

use async_trait::async_trait;
use std::io;
use std::path::Path;

#[async_trait]
pub trait AssetStore: Send + Sync {
    async fn exists(&self, path: &Path) -> bool;

    async fn read_to_string(&self, path: &Path) -> io::Result<String>;

    async fn remove_file(&self, path: &Path) -> io::Result<()>;
}
