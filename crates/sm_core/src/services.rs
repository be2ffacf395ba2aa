use async_trait::async_trait;

use crate::types::{Article, Entity, Language};
use crate::Result;

#[async_trait]
pub trait NewsSource: Send + Sync {
    fn name(&self) -> &str;

    /// Fetch and normalize the latest articles mentioning a company
    async fn fetch_articles(&self, company: &str) -> Result<Vec<Article>>;
}

#[async_trait]
pub trait Translator: Send + Sync {
    fn name(&self) -> &str;

    async fn translate(&self, text: &str, from: Language, to: Language) -> Result<String>;
}

#[async_trait]
pub trait SpeechRenderer: Send + Sync {
    fn name(&self) -> &str;

    /// Render text to encoded audio (MP3)
    async fn render(&self, text: &str, language: Language) -> Result<Vec<u8>>;
}

pub trait EntityRecognizer: Send + Sync {
    /// Spans in text order; spans never overlap
    fn recognize(&self, text: &str) -> Vec<Entity>;
}

/// One independent polarity estimate over a piece of text.
pub trait SentimentSignal: Send + Sync {
    fn name(&self) -> &str;

    /// Polarity in [-1, 1]
    fn score(&self, text: &str) -> f64;
}
