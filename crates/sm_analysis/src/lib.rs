pub mod narration;
pub mod pipeline;
pub mod report;
pub mod sentiment;
pub mod synthesis;
pub mod topics;

#[cfg(test)]
pub(crate) mod stubs;

pub use narration::{NarrationBuilder, SentenceSplitter};
pub use pipeline::NewsPipeline;
pub use report::aggregate;
pub use sentiment::{LexiconAnalyzer, PatternAnalyzer, SentimentScorer};
pub use synthesis::SpeechSynthesizer;
pub use topics::{PatternRecognizer, TopicExtractor};

pub mod prelude {
    pub use super::{aggregate, NarrationBuilder, NewsPipeline, SentimentScorer, SpeechSynthesizer, TopicExtractor};
    pub use sm_core::{Article, Error, NarrationScript, NewsAnalysis, Report, Result, Sentiment};
}
