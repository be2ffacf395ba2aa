use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::types::Language;
use crate::{Error, Result};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub news: NewsSettings,
    pub translation: TranslationSettings,
    pub speech: SpeechSettings,
    pub output: OutputSettings,
    pub server: ServerSettings,
}

impl Settings {
    pub fn validate(&self) -> Result<()> {
        if self.news.page_size == 0 || self.news.page_size > 100 {
            return Err(Error::Config(format!("page size must be between 1 and 100, got {}", self.news.page_size)));
        }
        if self.translation.timeout_secs == 0 || self.speech.timeout_secs == 0 || self.news.timeout_secs == 0 {
            return Err(Error::Config("timeouts must be at least one second".to_string()));
        }
        Ok(())
    }
}

#[derive(Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct NewsSettings {
    pub api_key: Option<String>,
    pub base_url: String,
    pub language: String,
    pub page_size: u32,
    pub timeout_secs: u64,
}

impl NewsSettings {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    pub fn require_api_key(&self) -> Result<&str> {
        self.api_key
            .as_deref()
            .filter(|key| !key.trim().is_empty())
            .ok_or_else(|| Error::Config("a NewsAPI key is required (set NEWS_API_KEY)".to_string()))
    }
}

impl Default for NewsSettings {
    fn default() -> Self {
        Self {
            api_key: None,
            base_url: "https://newsapi.org".to_string(),
            language: "en".to_string(),
            page_size: 10,
            timeout_secs: 10,
        }
    }
}

impl fmt::Debug for NewsSettings {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NewsSettings")
            .field("api_key", &self.api_key.as_ref().map(|_| "<redacted>"))
            .field("base_url", &self.base_url)
            .field("language", &self.language)
            .field("page_size", &self.page_size)
            .field("timeout_secs", &self.timeout_secs)
            .finish()
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TranslationProvider {
    #[default]
    Google,
    /// Pass-through, for offline runs
    Noop,
}

impl FromStr for TranslationProvider {
    type Err = Error;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "google" => Ok(Self::Google),
            "noop" | "none" => Ok(Self::Noop),
            other => Err(Error::Config(format!("Unknown translation provider: {}", other))),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct TranslationSettings {
    pub provider: TranslationProvider,
    pub endpoint: String,
    pub timeout_secs: u64,
}

impl TranslationSettings {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

impl Default for TranslationSettings {
    fn default() -> Self {
        Self {
            provider: TranslationProvider::default(),
            endpoint: "https://translate.googleapis.com/translate_a/single".to_string(),
            timeout_secs: 15,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SpeechSettings {
    pub endpoint: String,
    pub language: Language,
    pub timeout_secs: u64,
    pub clean_for_speech: bool,
}

impl SpeechSettings {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

impl Default for SpeechSettings {
    fn default() -> Self {
        Self {
            endpoint: "https://translate.google.com/translate_tts".to_string(),
            language: Language::Hindi,
            timeout_secs: 30,
            clean_for_speech: false,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputSettings {
    /// Where request-scoped audio files are written before being served
    pub audio_dir: PathBuf,
    /// Where debug snapshots go; `None` disables them
    pub snapshot_dir: Option<PathBuf>,
}

impl Default for OutputSettings {
    fn default() -> Self {
        Self {
            audio_dir: std::env::temp_dir().join("samachar"),
            snapshot_dir: Some(PathBuf::from(".")),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerSettings {
    pub bind: String,
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            bind: "127.0.0.1:8000".to_string(),
        }
    }
}
