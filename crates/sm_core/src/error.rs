use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("{service} unavailable: {reason}")]
    UpstreamUnavailable { service: String, reason: String },

    #[error("{0}")]
    NotFound(String),

    #[error("{0}")]
    NoContent(String),

    #[error("Translation failed: {0}")]
    TranslationFailed(String),

    #[error("Speech synthesis failed: {0}")]
    SynthesisFailed(String),

    #[error("Storage error: {0}")]
    Storage(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("External error: {0}")]
    External(#[from] anyhow::Error),
}

impl Error {
    pub fn upstream(service: impl Into<String>, reason: impl ToString) -> Self {
        Self::UpstreamUnavailable {
            service: service.into(),
            reason: reason.to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;
