use std::fmt;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use sm_core::config::Settings;
use sm_core::{
    Article, Error, Language, NarrationScript, NewsAnalysis, NewsSource, Result, SpeechRenderer, Translator,
};
use tracing::info;

use crate::narration::NarrationBuilder;
use crate::report::aggregate;
use crate::sentiment::SentimentScorer;
use crate::synthesis::SpeechSynthesizer;
use crate::topics::TopicExtractor;

/// Request-scoped processing over long-lived service handles:
/// fetch, then score and extract, then report or narrate and synthesize.
pub struct NewsPipeline {
    source: Arc<dyn NewsSource>,
    scorer: SentimentScorer,
    topics: TopicExtractor,
    narrator: NarrationBuilder,
    synthesizer: SpeechSynthesizer,
    language: Language,
}

impl fmt::Debug for NewsPipeline {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NewsPipeline")
            .field("source", &self.source.name())
            .field("scorer", &self.scorer)
            .field("narrator", &self.narrator)
            .field("synthesizer", &self.synthesizer)
            .field("language", &self.language)
            .finish()
    }
}

impl NewsPipeline {
    pub fn new(
        source: Arc<dyn NewsSource>,
        translator: Arc<dyn Translator>,
        renderer: Arc<dyn SpeechRenderer>,
    ) -> Self {
        Self {
            source,
            scorer: SentimentScorer::default(),
            topics: TopicExtractor::default(),
            narrator: NarrationBuilder::new(translator),
            synthesizer: SpeechSynthesizer::new(renderer),
            language: Language::Hindi,
        }
    }

    /// Apply translation timeout, speech cleanup and voice language from settings.
    pub fn with_settings(mut self, settings: &Settings) -> Self {
        self.narrator = self
            .narrator
            .with_timeout(settings.translation.timeout())
            .with_speech_cleanup(settings.speech.clean_for_speech);
        self.language = settings.speech.language;
        self
    }

    pub fn with_scorer(mut self, scorer: SentimentScorer) -> Self {
        self.scorer = scorer;
        self
    }

    pub fn with_topics(mut self, topics: TopicExtractor) -> Self {
        self.topics = topics;
        self
    }

    pub fn language(&self) -> Language {
        self.language
    }

    /// Articles for a company; an empty result is `NotFound`.
    pub async fn fetch(&self, company: &str) -> Result<Vec<Article>> {
        info!("🔍 Fetching news for '{}' from {}...", company, self.source.name());
        let articles = self.source.fetch_articles(company).await?;
        if articles.is_empty() {
            return Err(Error::NotFound(format!("No news articles found for '{}'.", company)));
        }
        info!("✅ Retrieved {} articles.", articles.len());
        Ok(articles)
    }

    /// Articles with sentiment and topics attached, plus the aggregate report.
    pub async fn analyze(&self, company: &str) -> Result<NewsAnalysis> {
        let mut articles = self.fetch(company).await?;
        self.scorer.apply(&mut articles);
        self.topics.apply(&mut articles);
        let report = aggregate(&articles);
        info!("📊 Report ready: {} unique topics", report.unique_topics.len());

        Ok(NewsAnalysis {
            company: company.to_string(),
            articles,
            report,
        })
    }

    /// Articles with sentiment only.
    pub async fn sentiment(&self, company: &str) -> Result<Vec<Article>> {
        let mut articles = self.fetch(company).await?;
        self.scorer.apply(&mut articles);
        Ok(articles)
    }

    pub async fn narrate(&self, articles: &[Article]) -> Result<NarrationScript> {
        if !articles.iter().any(Article::has_usable_text) {
            return Err(Error::NoContent("No valid news summaries for TTS".to_string()));
        }
        self.narrator
            .build(articles)
            .await
            .ok_or_else(|| Error::NoContent("No news summaries could be narrated in Hindi".to_string()))
    }

    /// Fetch, narrate and synthesize the Hindi audio summary to `output`.
    pub async fn generate_audio(&self, company: &str, output: &Path) -> Result<PathBuf> {
        let articles = self.fetch(company).await?;
        let script = self.narrate(&articles).await?;
        info!("📝 Narration has {} lines", script.len());
        self.synthesizer.synthesize(&script.text(), output, self.language).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::stubs::{article, EchoTranslator, StubRenderer, StubSource};
    use sm_core::Sentiment;

    fn pipeline(source: StubSource, renderer: StubRenderer) -> NewsPipeline {
        NewsPipeline::new(Arc::new(source), Arc::new(EchoTranslator::default()), Arc::new(renderer))
    }

    fn acme() -> StubSource {
        StubSource::with_articles(vec![article("", "Acme profits rose sharply"), article("", "")])
    }

    #[tokio::test]
    async fn test_acme_end_to_end() {
        let pipeline = pipeline(acme(), StubRenderer::new());

        let scored = pipeline.sentiment("Acme").await.unwrap();
        let labels: Vec<_> = scored.iter().map(|a| a.sentiment).collect();
        assert_eq!(labels, vec![Some(Sentiment::Positive), Some(Sentiment::Unknown)]);
        assert!(scored.iter().all(|a| a.topics.is_none()));

        let script = pipeline.narrate(&scored).await.unwrap();
        assert_eq!(script.len(), 1);
        assert!(script.lines()[0].starts_with("समाचार 1: "));
    }

    #[tokio::test]
    async fn test_empty_fetch_is_not_found() {
        let pipeline = pipeline(StubSource::with_articles(Vec::new()), StubRenderer::new());
        let err = pipeline.analyze("Nobody").await.unwrap_err();
        assert!(matches!(&err, Error::NotFound(_)));
        assert_eq!(err.to_string(), "No news articles found for 'Nobody'.");
    }

    #[tokio::test]
    async fn test_upstream_failure_propagates() {
        let pipeline = pipeline(StubSource::unavailable(), StubRenderer::new());
        let err = pipeline.fetch("Acme").await.unwrap_err();
        assert!(matches!(err, Error::UpstreamUnavailable { .. }));
    }

    #[tokio::test]
    async fn test_analyze_attaches_sentiment_topics_and_report() {
        let source = StubSource::with_articles(vec![
            article("Deal", "Tesla signed a $2 billion deal in India."),
            article("Slump", "Tesla shares plunged after the fraud scandal."),
            article("Title only", ""),
        ]);
        let analysis = pipeline(source, StubRenderer::new()).analyze("Tesla").await.unwrap();

        assert_eq!(analysis.company, "Tesla");
        assert_eq!(analysis.articles.len(), 3);
        assert_eq!(analysis.articles[1].sentiment, Some(Sentiment::Negative));
        assert_eq!(
            analysis.articles[0].topics,
            Some(vec!["Tesla".to_string(), "2 billion".to_string(), "India".to_string()])
        );
        assert_eq!(analysis.articles[2].topics, Some(Vec::new()));
        assert_eq!(analysis.report.most_common_topics[0], ("Tesla".to_string(), 2));
        assert_eq!(analysis.report.sentiment_distribution.values().sum::<usize>(), 3);
    }

    #[tokio::test]
    async fn test_narrate_without_text_is_no_content() {
        let pipeline = pipeline(acme(), StubRenderer::new());
        let err = pipeline.narrate(&[article("", ""), article(" ", "")]).await.unwrap_err();
        assert!(matches!(&err, Error::NoContent(_)));
        assert_eq!(err.to_string(), "No valid news summaries for TTS");
    }

    #[tokio::test]
    async fn test_narrate_with_only_empty_translations_is_no_content() {
        let pipeline = pipeline(acme(), StubRenderer::new());
        let err = pipeline.narrate(&[article("", "EMPTY text")]).await.unwrap_err();
        assert!(matches!(err, Error::NoContent(_)));
    }

    #[tokio::test]
    async fn test_generate_audio_writes_file() {
        let dir = tempfile::tempdir().unwrap();
        let output = dir.path().join("news_summary.mp3");
        let renderer = Arc::new(StubRenderer::new());
        let pipeline = NewsPipeline::new(Arc::new(acme()), Arc::new(EchoTranslator::default()), renderer.clone());

        let path = pipeline.generate_audio("Acme", &output).await.unwrap();
        assert_eq!(path, output);
        assert!(output.exists());
        assert_eq!(renderer.requests(), vec!["समाचार 1: HI(Acme profits rose sharply)".to_string()]);
    }

    #[tokio::test]
    async fn test_generate_audio_failure_leaves_no_file() {
        let dir = tempfile::tempdir().unwrap();
        let output = dir.path().join("news_summary.mp3");
        let pipeline = pipeline(acme(), StubRenderer::failing());

        let err = pipeline.generate_audio("Acme", &output).await.unwrap_err();
        assert!(matches!(err, Error::SynthesisFailed(_)));
        assert!(!output.exists());
    }

    #[tokio::test]
    async fn test_settings_are_applied() {
        let mut settings = Settings::default();
        settings.speech.language = Language::English;
        let pipeline = pipeline(acme(), StubRenderer::new()).with_settings(&settings);
        assert_eq!(pipeline.language(), Language::English);
    }
}
