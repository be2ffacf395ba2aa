use std::fmt;
use std::path::PathBuf;
use std::sync::Arc;

use sm_analysis::NewsPipeline;
use sm_core::SnapshotStore;
use uuid::Uuid;

/// Service handles shared by every request.
#[derive(Clone)]
pub struct AppState {
    pub pipeline: Arc<NewsPipeline>,
    pub snapshots: Arc<dyn SnapshotStore>,
    pub audio_dir: PathBuf,
}

impl fmt::Debug for AppState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AppState")
            .field("pipeline", &self.pipeline)
            .field("snapshots", &"<dyn SnapshotStore>")
            .field("audio_dir", &self.audio_dir)
            .finish()
    }
}

impl AppState {
    pub fn new(pipeline: Arc<NewsPipeline>, snapshots: Arc<dyn SnapshotStore>, audio_dir: impl Into<PathBuf>) -> Self {
        Self {
            pipeline,
            snapshots,
            audio_dir: audio_dir.into(),
        }
    }

    /// A fresh output path, so concurrent requests never share an audio file
    pub fn audio_path(&self) -> PathBuf {
        self.audio_dir.join(format!("news_summary-{}.mp3", Uuid::new_v4()))
    }
}
