use std::fmt;
use std::sync::Arc;
use std::time::Duration;

use sm_core::{Article, Error, Language, NarrationScript, Result, Translator};
use tracing::{debug, info, warn};

pub mod sentences;
pub mod speech;

pub use sentences::SentenceSplitter;
pub use speech::clean_for_speech;

/// Prefix of every narrated article ("news")
pub const NEWS_LABEL: &str = "समाचार";
/// Prefix of the line read out when an article could not be translated ("translation failed")
pub const TRANSLATION_FAILED_LABEL: &str = "अनुवाद विफल हुआ";
pub const DEFAULT_TRANSLATION_TIMEOUT: Duration = Duration::from_secs(15);

/// Builds the Hindi narration script from English articles.
pub struct NarrationBuilder {
    translator: Arc<dyn Translator>,
    splitter: SentenceSplitter,
    timeout: Duration,
    clean_for_speech: bool,
}

impl fmt::Debug for NarrationBuilder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NarrationBuilder")
            .field("translator", &self.translator.name())
            .field("timeout", &self.timeout)
            .field("clean_for_speech", &self.clean_for_speech)
            .finish()
    }
}

impl NarrationBuilder {
    pub fn new(translator: Arc<dyn Translator>) -> Self {
        Self {
            translator,
            splitter: SentenceSplitter::new(),
            timeout: DEFAULT_TRANSLATION_TIMEOUT,
            clean_for_speech: false,
        }
    }

    /// Upper bound for a single translation call
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn with_speech_cleanup(mut self, enabled: bool) -> Self {
        self.clean_for_speech = enabled;
        self
    }

    /// One line per article that produced text, numbered by output position.
    ///
    /// Articles without text, or whose translation comes back empty, are
    /// skipped without using a number. An article whose translation fails keeps
    /// its number and is read out untranslated behind [`TRANSLATION_FAILED_LABEL`].
    /// Returns `None` when no article produced a line.
    pub async fn build(&self, articles: &[Article]) -> Option<NarrationScript> {
        let mut lines: Vec<String> = Vec::new();

        for (position, article) in articles.iter().enumerate() {
            let text = article.summary_or_title().trim();
            if text.is_empty() {
                debug!("Skipping article {}: no text", position + 1);
                continue;
            }

            match self.translate_paragraph(text).await {
                Ok(paragraph) if paragraph.is_empty() => {
                    debug!("Skipping article {}: empty translation", position + 1);
                }
                Ok(paragraph) => {
                    lines.push(format!("{} {}: {}", NEWS_LABEL, lines.len() + 1, paragraph));
                }
                Err(e) => {
                    warn!("⚠️ Translation failed for article {}: {}", position + 1, e);
                    let fallback = format!("{}: {}", TRANSLATION_FAILED_LABEL, text);
                    lines.push(format!("{} {}: {}", NEWS_LABEL, lines.len() + 1, fallback));
                }
            }
        }

        info!("📝 Narration built: {} of {} articles", lines.len(), articles.len());
        NarrationScript::from_lines(lines)
    }

    async fn translate_paragraph(&self, text: &str) -> Result<String> {
        let mut translated = Vec::new();

        for sentence in self.splitter.split(text) {
            let hindi = tokio::time::timeout(
                self.timeout,
                self.translator.translate(&sentence, Language::English, Language::Hindi),
            )
            .await
            .map_err(|_| Error::TranslationFailed(format!("no response within {:?}", self.timeout)))??;

            let hindi = if self.clean_for_speech {
                clean_for_speech(&hindi)
            } else {
                hindi.trim().to_string()
            };
            if !hindi.is_empty() {
                translated.push(hindi);
            }
        }

        Ok(translated.join(" "))
    }
}
