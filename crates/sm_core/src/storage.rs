use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::types::{Article, Report};
use crate::Result;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SnapshotKind {
    News,
    Sentiment,
}

impl SnapshotKind {
    pub fn file_name(&self) -> &'static str {
        match self {
            SnapshotKind::News => "news_data.json",
            SnapshotKind::Sentiment => "sentiment_data.json",
        }
    }
}

/// Debug copy of the latest result set. Written, never read back.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Snapshot {
    pub kind: SnapshotKind,
    pub company: String,
    pub saved_at: DateTime<Utc>,
    pub articles: Vec<Article>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub report: Option<Report>,
}

impl Snapshot {
    pub fn news(company: &str, articles: &[Article], report: &Report) -> Self {
        Self {
            kind: SnapshotKind::News,
            company: company.to_string(),
            saved_at: Utc::now(),
            articles: articles.to_vec(),
            report: Some(report.clone()),
        }
    }

    pub fn sentiment(company: &str, articles: &[Article]) -> Self {
        Self {
            kind: SnapshotKind::Sentiment,
            company: company.to_string(),
            saved_at: Utc::now(),
            articles: articles.to_vec(),
            report: None,
        }
    }
}

#[async_trait]
pub trait SnapshotStore: Send + Sync {
    /// Overwrite the snapshot of the given kind
    async fn save(&self, snapshot: &Snapshot) -> Result<()>;

    /// Save, logging a failure at warn instead of returning it
    async fn save_or_warn(&self, snapshot: &Snapshot) {
        if let Err(e) = self.save(snapshot).await {
            warn!("⚠️ Could not save {}: {}", snapshot.kind.file_name(), e);
        }
    }
}
