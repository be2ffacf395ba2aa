//! In-process stand-ins for the network collaborators, used by the unit tests.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;
use std::time::Duration;

use async_trait::async_trait;
use sm_core::{Article, Error, Language, NewsSource, Result, SpeechRenderer, Translator};

/// Wraps each sentence as `HI(<sentence>)`.
///
/// Sentences containing `FAIL` error out, `EMPTY` translates to whitespace and
/// `SLOW` stalls for a second.
#[derive(Debug, Default)]
pub struct EchoTranslator {
    pub calls: AtomicUsize,
}

#[async_trait]
impl Translator for EchoTranslator {
    fn name(&self) -> &str {
        "echo"
    }

    async fn translate(&self, text: &str, _from: Language, _to: Language) -> Result<String> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if text.contains("FAIL") {
            return Err(Error::upstream("echo", "status 503"));
        }
        if text.contains("SLOW") {
            tokio::time::sleep(Duration::from_secs(1)).await;
        }
        if text.contains("EMPTY") {
            return Ok("  ".to_string());
        }
        Ok(format!("HI({})", text))
    }
}

/// Returns fixed bytes, or fails when built with `failing()`.
#[derive(Debug, Default)]
pub struct StubRenderer {
    pub fail: bool,
    pub audio: Vec<u8>,
    pub requests: Mutex<Vec<String>>,
}

impl StubRenderer {
    pub fn new() -> Self {
        Self {
            audio: b"ID3stub".to_vec(),
            ..Default::default()
        }
    }

    pub fn failing() -> Self {
        Self {
            fail: true,
            ..Default::default()
        }
    }

    pub fn requests(&self) -> Vec<String> {
        self.requests.lock().unwrap().clone()
    }
}

#[async_trait]
impl SpeechRenderer for StubRenderer {
    fn name(&self) -> &str {
        "stub"
    }

    async fn render(&self, text: &str, _language: Language) -> Result<Vec<u8>> {
        self.requests.lock().unwrap().push(text.to_string());
        if self.fail {
            return Err(Error::upstream("stub", "status 500"));
        }
        Ok(self.audio.clone())
    }
}

/// Serves a fixed article list, or an upstream failure when `articles` is `None`.
#[derive(Debug, Default)]
pub struct StubSource {
    pub articles: Option<Vec<Article>>,
}

impl StubSource {
    pub fn with_articles(articles: Vec<Article>) -> Self {
        Self {
            articles: Some(articles),
        }
    }

    pub fn unavailable() -> Self {
        Self { articles: None }
    }
}

#[async_trait]
impl NewsSource for StubSource {
    fn name(&self) -> &str {
        "stub"
    }

    async fn fetch_articles(&self, _company: &str) -> Result<Vec<Article>> {
        self.articles
            .clone()
            .ok_or_else(|| Error::upstream("stub", "connection refused"))
    }
}

pub fn article(title: &str, summary: &str) -> Article {
    Article::new(title, summary, "https://example.com/news", "Wire")
}
