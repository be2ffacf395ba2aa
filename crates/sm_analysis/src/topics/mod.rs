use std::fmt;
use std::sync::Arc;

use sm_core::{Article, EntityRecognizer};
use tracing::debug;

pub mod clean;
pub mod recognizer;

pub use clean::{clean_topic, is_clean_topic};
pub use recognizer::PatternRecognizer;

/// Turns the organizations, places, sums, laws and events an article names into topic strings.
pub struct TopicExtractor {
    recognizer: Arc<dyn EntityRecognizer>,
}

impl fmt::Debug for TopicExtractor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TopicExtractor")
            .field("recognizer", &"<dyn EntityRecognizer>")
            .finish()
    }
}

impl Default for TopicExtractor {
    fn default() -> Self {
        Self::new(Arc::new(PatternRecognizer::new()))
    }
}

impl TopicExtractor {
    pub fn new(recognizer: Arc<dyn EntityRecognizer>) -> Self {
        Self { recognizer }
    }

    /// Cleaned topic strings, deduplicated in first-seen order.
    pub fn extract_text(&self, text: &str) -> Vec<String> {
        if text.trim().is_empty() {
            return Vec::new();
        }

        let mut topics: Vec<String> = Vec::new();
        for entity in self.recognizer.recognize(text) {
            if !entity.label.is_topic() {
                continue;
            }
            let topic = clean_topic(&entity.text);
            if topic.is_empty() || topics.contains(&topic) {
                continue;
            }
            topics.push(topic);
        }

        debug!("Extracted {} topics", topics.len());
        topics
    }

    /// Reads the summary only; a title-only article yields no topics.
    pub fn extract(&self, article: &Article) -> Vec<String> {
        self.extract_text(&article.summary)
    }

    pub fn apply(&self, articles: &mut [Article]) {
        for article in articles.iter_mut() {
            article.topics = Some(self.extract(article));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sm_core::{Entity, EntityLabel};

    struct FixedRecognizer(Vec<(&'static str, EntityLabel)>);

    impl EntityRecognizer for FixedRecognizer {
        fn recognize(&self, _text: &str) -> Vec<Entity> {
            self.0
                .iter()
                .map(|(text, label)| Entity {
                    text: text.to_string(),
                    label: *label,
                    start: 0,
                    end: text.len(),
                })
                .collect()
        }
    }

    #[test]
    fn test_keeps_topic_labels_only() {
        let extractor = TopicExtractor::new(Arc::new(FixedRecognizer(vec![
            ("Acme Corp", EntityLabel::Org),
            ("Jane Doe", EntityLabel::Person),
            ("India", EntityLabel::Gpe),
            ("last Tuesday", EntityLabel::Date),
            ("$5 billion", EntityLabel::Money),
            ("Companies Act", EntityLabel::Law),
            ("G20 Summit", EntityLabel::Event),
            ("Hindi", EntityLabel::Language),
        ])));

        assert_eq!(
            extractor.extract_text("anything"),
            vec!["Acme Corp", "India", "5 billion", "Companies Act", "G20 Summit"]
        );
    }

    #[test]
    fn test_cleans_and_deduplicates() {
        let extractor = TopicExtractor::new(Arc::new(FixedRecognizer(vec![
            ("Acme\u{FFFD} Corp", EntityLabel::Org),
            ("Acme  Corp", EntityLabel::Org),
            ("€", EntityLabel::Money),
            ("«India»", EntityLabel::Gpe),
        ])));

        let topics = extractor.extract_text("anything");
        assert_eq!(topics, vec!["Acme Corp", "India"]);
        assert!(topics.iter().all(|topic| is_clean_topic(topic)));
    }

    #[test]
    fn test_empty_text_yields_no_topics() {
        let extractor = TopicExtractor::new(Arc::new(FixedRecognizer(vec![("Acme Corp", EntityLabel::Org)])));
        assert!(extractor.extract_text("").is_empty());
        assert!(extractor.extract_text("   ").is_empty());
    }

    #[test]
    fn test_reads_summary_not_title() {
        let extractor = TopicExtractor::default();
        let title_only = Article::new("Tesla opens a plant in India", "", "https://example.com/1", "Wire");
        assert!(extractor.extract(&title_only).is_empty());

        let with_summary = Article::new(
            "Plant opening",
            "Tesla opens a plant in India after talks with the Reserve Bank of India.",
            "https://example.com/2",
            "Wire",
        );
        assert_eq!(extractor.extract(&with_summary), vec!["Tesla", "India", "Reserve Bank of India"]);
    }

    #[test]
    fn test_apply_sets_topics() {
        let extractor = TopicExtractor::default();
        let mut articles = vec![
            Article::new("", "Apple Inc. paid $5 billion.", "https://example.com/1", "Wire"),
            Article::new("Title only", "", "https://example.com/2", "Wire"),
        ];
        extractor.apply(&mut articles);

        assert_eq!(articles[0].topics, Some(vec!["Apple Inc.".to_string(), "5 billion".to_string()]));
        assert_eq!(articles[1].topics, Some(Vec::new()));
        assert!(articles[0].sentiment.is_none());
    }
}
