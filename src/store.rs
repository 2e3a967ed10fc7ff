use std::path::Path;

use crate::error::Error;

/// Storage seam for the extractor. A failure here is fatal to the run.
#[async_trait::async_trait]
pub trait Store: Send + Sync {
    async fn write(&self, path: &Path, body: &[u8]) -> Result<(), Error>;
}

/// Writes straight to the local filesystem.
pub struct FsStore;

#[async_trait::async_trait]
impl Store for FsStore {
    async fn write(&self, path: &Path, body: &[u8]) -> Result<(), Error> {
        tokio::fs::write(path, body)
            .await
            .map_err(|source| Error::Storage {
                path: path.to_path_buf(),
                source,
            })
    }
}
