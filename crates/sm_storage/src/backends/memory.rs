use std::collections::HashMap;

use async_trait::async_trait;
use sm_core::{Result, Snapshot, SnapshotKind, SnapshotStore};
use tokio::sync::RwLock;

/// Keeps the latest snapshot of each kind in memory.
#[derive(Debug, Default)]
pub struct MemoryStore {
    snapshots: RwLock<HashMap<SnapshotKind, Snapshot>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn snapshots(&self) -> Vec<Snapshot> {
        self.snapshots.read().await.values().cloned().collect()
    }

    pub async fn latest(&self, kind: SnapshotKind) -> Option<Snapshot> {
        self.snapshots.read().await.get(&kind).cloned()
    }
}

#[async_trait]
impl SnapshotStore for MemoryStore {
    async fn save(&self, snapshot: &Snapshot) -> Result<()> {
        self.snapshots.write().await.insert(snapshot.kind, snapshot.clone());
        Ok(())
    }
}
