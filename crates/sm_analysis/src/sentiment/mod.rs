use std::collections::{HashMap, HashSet};
use std::fmt;
use std::sync::Arc;

use lazy_static::lazy_static;
use sm_core::{Article, Sentiment, SentimentSignal};
use tracing::debug;

pub mod lexicon;
pub mod pattern;

pub use lexicon::LexiconAnalyzer;
pub use pattern::PatternAnalyzer;

/// The compound score must clear this margin before it counts as polar
pub const COMPOUND_THRESHOLD: f64 = 0.05;

lazy_static! {
    static ref NEGATIONS: HashSet<&'static str> = [
        "not", "no", "never", "none", "nobody", "nothing", "neither", "nor", "nowhere",
        "cannot", "without", "rarely", "seldom", "despite", "aint", "dont", "doesnt",
        "didnt", "isnt", "arent", "wasnt", "werent", "wont", "cant", "couldnt",
        "shouldnt", "wouldnt", "hasnt", "havent", "hadnt",
    ]
    .into_iter()
    .collect();
}

/// Split on whitespace and strip surrounding punctuation, keeping inner apostrophes.
pub(crate) fn tokenize(text: &str) -> Vec<&str> {
    text.split_whitespace()
        .map(|word| word.trim_matches(|c: char| !c.is_alphanumeric()))
        .filter(|word| !word.is_empty())
        .collect()
}

pub(crate) fn is_negation(lowered: &str) -> bool {
    NEGATIONS.contains(lowered) || lowered.ends_with("n't") || lowered.ends_with("n\u{2019}t")
}

/// Parse a `word<TAB>score` table, skipping blank lines, comments and malformed rows.
pub(crate) fn parse_lexicon(data: &str) -> HashMap<String, f64> {
    data.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .filter_map(|line| {
            let (word, value) = line.split_once('\t')?;
            let value = value.trim().parse::<f64>().ok()?;
            Some((word.trim().to_lowercase(), value))
        })
        .collect()
}

/// Labels articles by requiring two independent polarity signals to agree.
pub struct SentimentScorer {
    compound: Arc<dyn SentimentSignal>,
    polarity: Arc<dyn SentimentSignal>,
}

impl fmt::Debug for SentimentScorer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SentimentScorer")
            .field("compound", &self.compound.name())
            .field("polarity", &self.polarity.name())
            .finish()
    }
}

impl Default for SentimentScorer {
    fn default() -> Self {
        Self::new(Arc::new(LexiconAnalyzer::new()), Arc::new(PatternAnalyzer::new()))
    }
}

impl SentimentScorer {
    pub fn new(compound: Arc<dyn SentimentSignal>, polarity: Arc<dyn SentimentSignal>) -> Self {
        Self { compound, polarity }
    }

    pub fn score_text(&self, text: &str) -> Sentiment {
        if text.trim().is_empty() {
            return Sentiment::Unknown;
        }

        let compound = self.compound.score(text);
        let polarity = self.polarity.score(text);
        debug!("Sentiment signals: {}={:.3} {}={:.3}", self.compound.name(), compound, self.polarity.name(), polarity);

        if compound > COMPOUND_THRESHOLD && polarity > 0.0 {
            Sentiment::Positive
        } else if compound < -COMPOUND_THRESHOLD && polarity < 0.0 {
            Sentiment::Negative
        } else {
            Sentiment::Neutral
        }
    }

    /// Scores the summary, or the title when the summary is empty.
    pub fn score(&self, article: &Article) -> Sentiment {
        self.score_text(article.summary_or_title())
    }

    pub fn apply(&self, articles: &mut [Article]) {
        for article in articles.iter_mut() {
            article.sentiment = Some(self.score(article));
        }
    }
}
