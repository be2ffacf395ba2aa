pub mod config;
pub mod error;
pub mod logging;
pub mod services;
pub mod storage;
pub mod text;
pub mod types;

pub use error::{Error, Result};
pub use services::{EntityRecognizer, NewsSource, SentimentSignal, SpeechRenderer, Translator};
pub use storage::{Snapshot, SnapshotKind, SnapshotStore};
pub use types::{Article, Entity, EntityLabel, Language, NarrationScript, NewsAnalysis, Report, Sentiment};

pub mod prelude {
    pub use crate::config::Settings;
    pub use crate::{Article, Error, Language, Report, Result, Sentiment};
}
