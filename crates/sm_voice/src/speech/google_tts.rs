use std::fmt;

use async_trait::async_trait;
use reqwest::Client;
use sm_core::config::SpeechSettings;
use sm_core::{Error, Language, Result, SpeechRenderer};
use tracing::{debug, info};
use url::Url;

use super::chunk::split_for_speech;

const SERVICE: &str = "Google TTS";

/// Longest text the translate-TTS endpoint accepts per request
pub const MAX_CHUNK_CHARS: usize = 100;

/// Renders speech through the translate-TTS endpoint, one request per chunk.
///
/// The endpoint returns self-contained MP3 frames, so the chunk responses
/// concatenate into one playable stream.
pub struct GoogleTtsRenderer {
    client: Client,
    endpoint: Url,
}

impl GoogleTtsRenderer {
    pub fn new(settings: &SpeechSettings) -> Result<Self> {
        let endpoint = Url::parse(&settings.endpoint)
            .map_err(|e| Error::Config(format!("Invalid speech endpoint '{}': {}", settings.endpoint, e)))?;
        let client = Client::builder().timeout(settings.timeout()).build()?;
        Ok(Self { client, endpoint })
    }

    async fn render_chunk(&self, chunk: &str, language: Language, idx: usize, total: usize) -> Result<Vec<u8>> {
        let idx = idx.to_string();
        let total = total.to_string();
        let textlen = chunk.chars().count().to_string();
        let response = self
            .client
            .get(self.endpoint.clone())
            .query(&[
                ("ie", "UTF-8"),
                ("q", chunk),
                ("tl", language.code()),
                ("client", "tw-ob"),
                ("ttsspeed", "1"),
                ("total", total.as_str()),
                ("idx", idx.as_str()),
                ("textlen", textlen.as_str()),
            ])
            .send()
            .await
            .map_err(|e| Error::upstream(SERVICE, e))?;

        let status = response.status();
        if !status.is_success() {
            return Err(Error::upstream(SERVICE, format!("status {} for chunk {}", status.as_u16(), idx)));
        }

        let bytes = response.bytes().await.map_err(|e| Error::upstream(SERVICE, e))?;
        Ok(bytes.to_vec())
    }
}

impl fmt::Debug for GoogleTtsRenderer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GoogleTtsRenderer")
            .field("client", &"<reqwest::Client>")
            .field("endpoint", &self.endpoint.as_str())
            .finish()
    }
}

#[async_trait]
impl SpeechRenderer for GoogleTtsRenderer {
    fn name(&self) -> &str {
        SERVICE
    }

    async fn render(&self, text: &str, language: Language) -> Result<Vec<u8>> {
        let chunks = split_for_speech(text, MAX_CHUNK_CHARS);
        if chunks.is_empty() {
            return Err(Error::SynthesisFailed("nothing to speak".to_string()));
        }

        info!("🗣️ Rendering {} speech chunks ({})", chunks.len(), language);
        let mut audio = Vec::new();
        for (idx, chunk) in chunks.iter().enumerate() {
            let bytes = self.render_chunk(chunk, language, idx, chunks.len()).await?;
            debug!("Chunk {}/{}: {} bytes", idx + 1, chunks.len(), bytes.len());
            audio.extend_from_slice(&bytes);
        }
        Ok(audio)
    }
}
