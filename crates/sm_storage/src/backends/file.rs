use std::path::{Path, PathBuf};

use async_trait::async_trait;
use sm_core::{Error, Result, Snapshot, SnapshotStore};
use tracing::debug;

/// Writes each snapshot kind to a fixed JSON file, overwriting the previous one.
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    dir: PathBuf,
}

impl JsonFileStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    pub fn path_for(&self, snapshot: &Snapshot) -> PathBuf {
        self.dir.join(snapshot.kind.file_name())
    }
}

#[async_trait]
impl SnapshotStore for JsonFileStore {
    async fn save(&self, snapshot: &Snapshot) -> Result<()> {
        let path = self.path_for(snapshot);
        let body = serde_json::to_vec_pretty(snapshot)?;

        tokio::fs::create_dir_all(&self.dir)
            .await
            .map_err(|e| Error::Storage(format!("could not create {}: {}", self.dir.display(), e)))?;
        tokio::fs::write(&path, body)
            .await
            .map_err(|e| Error::Storage(format!("could not write {}: {}", path.display(), e)))?;

        debug!("Saved {} articles to {}", snapshot.articles.len(), path.display());
        Ok(())
    }
}
