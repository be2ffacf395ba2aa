use std::path::PathBuf;
use std::sync::Arc;

use sm_core::SnapshotStore;
use tracing::info;

pub mod backends;

pub use backends::*;

/// File-backed store when a directory is configured, in-memory otherwise.
pub fn create_store(dir: Option<PathBuf>) -> Arc<dyn SnapshotStore> {
    match dir {
        Some(dir) => {
            info!("💾 Snapshots will be written to {}", dir.display());
            Arc::new(JsonFileStore::new(dir))
        }
        None => {
            info!("💾 Snapshots kept in memory");
            Arc::new(MemoryStore::new())
        }
    }
}

pub mod prelude {
    pub use super::backends::*;
    pub use super::create_store;
    pub use sm_core::{Snapshot, SnapshotKind, SnapshotStore};
}

#[cfg(test)]
mod tests {
    use super::*;
    use sm_core::{Article, Snapshot};

    #[tokio::test]
    async fn test_create_store_with_directory() {
        let dir = tempfile::tempdir().unwrap();
        let store = create_store(Some(dir.path().to_path_buf()));
        let articles = vec![Article::new("Acme", "Acme profits rose", "https://example.com", "Wire")];

        store.save(&Snapshot::sentiment("Acme", &articles)).await.unwrap();
        assert!(dir.path().join("sentiment_data.json").exists());
    }

    #[tokio::test]
    async fn test_create_store_without_directory() {
        let store = create_store(None);
        store.save(&Snapshot::sentiment("Acme", &[])).await.unwrap();
    }
}
