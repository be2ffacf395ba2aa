use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::Error;

/// Placeholder used when an upstream record carries no publication date
pub const UNKNOWN_DATE: &str = "Unknown";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Article {
    pub title: String,
    pub summary: String,
    pub link: String,
    pub source: String,
    pub published_date: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sentiment: Option<Sentiment>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub topics: Option<Vec<String>>,
}

impl Article {
    pub fn new(title: impl Into<String>, summary: impl Into<String>, link: impl Into<String>, source: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            summary: summary.into(),
            link: link.into(),
            source: source.into(),
            published_date: UNKNOWN_DATE.to_string(),
            sentiment: None,
            topics: None,
        }
    }

    pub fn with_published_date(mut self, published_date: impl Into<String>) -> Self {
        self.published_date = published_date.into();
        self
    }

    /// The summary, or the title when the summary is empty.
    pub fn summary_or_title(&self) -> &str {
        if self.summary.is_empty() {
            &self.title
        } else {
            &self.summary
        }
    }

    /// Whether any downstream stage has text to work with.
    pub fn has_usable_text(&self) -> bool {
        !self.summary_or_title().trim().is_empty()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Sentiment {
    Positive,
    Negative,
    Neutral,
    Unknown,
}

impl Sentiment {
    pub fn as_str(&self) -> &'static str {
        match self {
            Sentiment::Positive => "Positive",
            Sentiment::Negative => "Negative",
            Sentiment::Neutral => "Neutral",
            Sentiment::Unknown => "Unknown",
        }
    }
}

impl fmt::Display for Sentiment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    English,
    Hindi,
}

impl Language {
    /// ISO 639-1 code understood by the translation and speech endpoints
    pub fn code(&self) -> &'static str {
        match self {
            Language::English => "en",
            Language::Hindi => "hi",
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for Language {
    type Err = Error;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "en" | "english" => Ok(Language::English),
            "hi" | "hindi" => Ok(Language::Hindi),
            other => Err(Error::Config(format!("Unsupported language: {}", other))),
        }
    }
}

/// Named-entity categories, using the OntoNotes label set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum EntityLabel {
    Person,
    Norp,
    Fac,
    Org,
    Gpe,
    Loc,
    Product,
    Event,
    WorkOfArt,
    Law,
    Language,
    Date,
    Time,
    Percent,
    Money,
    Quantity,
    Ordinal,
    Cardinal,
}

impl EntityLabel {
    pub fn as_str(&self) -> &'static str {
        match self {
            EntityLabel::Person => "PERSON",
            EntityLabel::Norp => "NORP",
            EntityLabel::Fac => "FAC",
            EntityLabel::Org => "ORG",
            EntityLabel::Gpe => "GPE",
            EntityLabel::Loc => "LOC",
            EntityLabel::Product => "PRODUCT",
            EntityLabel::Event => "EVENT",
            EntityLabel::WorkOfArt => "WORK_OF_ART",
            EntityLabel::Law => "LAW",
            EntityLabel::Language => "LANGUAGE",
            EntityLabel::Date => "DATE",
            EntityLabel::Time => "TIME",
            EntityLabel::Percent => "PERCENT",
            EntityLabel::Money => "MONEY",
            EntityLabel::Quantity => "QUANTITY",
            EntityLabel::Ordinal => "ORDINAL",
            EntityLabel::Cardinal => "CARDINAL",
        }
    }

    /// Categories that count as article topics
    pub fn is_topic(&self) -> bool {
        matches!(
            self,
            EntityLabel::Org | EntityLabel::Gpe | EntityLabel::Money | EntityLabel::Law | EntityLabel::Event
        )
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Entity {
    pub text: String,
    pub label: EntityLabel,
    /// Byte offset of the span in the analysed text
    pub start: usize,
    pub end: usize,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Report {
    #[serde(rename = "Sentiment Distribution")]
    pub sentiment_distribution: BTreeMap<Sentiment, usize>,
    #[serde(rename = "Most Common Topics")]
    pub most_common_topics: Vec<(String, usize)>,
    #[serde(rename = "Unique Topics")]
    pub unique_topics: Vec<String>,
}

/// Hindi narration, one formatted line per article that produced output.
///
/// Never empty: a run that yields no lines has no script at all.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NarrationScript {
    lines: Vec<String>,
}

impl NarrationScript {
    pub fn from_lines(lines: Vec<String>) -> Option<Self> {
        if lines.is_empty() {
            None
        } else {
            Some(Self { lines })
        }
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// The text handed to speech synthesis
    pub fn text(&self) -> String {
        self.lines.join("\n\n").trim().to_string()
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewsAnalysis {
    pub company: String,
    pub articles: Vec<Article>,
    pub report: Report,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_article_json_omits_missing_analysis() {
        let article = Article::new("Acme rises", "Acme profits rose", "https://example.com/a", "Wire");
        let json = serde_json::to_value(&article).unwrap();
        assert_eq!(json["published_date"], "Unknown");
        assert!(json.get("sentiment").is_none());
        assert!(json.get("topics").is_none());

        let mut analysed = article.clone();
        analysed.sentiment = Some(Sentiment::Positive);
        analysed.topics = Some(vec!["Acme".to_string()]);
        let json = serde_json::to_value(&analysed).unwrap();
        assert_eq!(json["sentiment"], "Positive");
        assert_eq!(json["topics"][0], "Acme");
    }

    #[test]
    fn test_summary_falls_back_to_title() {
        let article = Article::new("Title only", "", "https://example.com", "Wire");
        assert_eq!(article.summary_or_title(), "Title only");
        assert!(article.has_usable_text());

        let blank = Article::new("  ", "", "https://example.com", "Wire");
        assert!(!blank.has_usable_text());
    }

    #[test]
    fn test_report_json_shape() {
        let mut report = Report::default();
        report.sentiment_distribution.insert(Sentiment::Positive, 2);
        report.most_common_topics.push(("Acme".to_string(), 2));
        report.unique_topics.push("Acme".to_string());

        let json = serde_json::to_value(&report).unwrap();
        assert_eq!(json["Sentiment Distribution"]["Positive"], 2);
        assert_eq!(json["Most Common Topics"][0][0], "Acme");
        assert_eq!(json["Most Common Topics"][0][1], 2);
        assert_eq!(json["Unique Topics"][0], "Acme");
    }

    #[test]
    fn test_narration_script_requires_lines() {
        assert!(NarrationScript::from_lines(vec![]).is_none());

        let script = NarrationScript::from_lines(vec!["समाचार 1: क".to_string(), "समाचार 2: ख".to_string()]).unwrap();
        assert_eq!(script.len(), 2);
        assert_eq!(script.text(), "समाचार 1: क\n\nसमाचार 2: ख");
    }

    #[test]
    fn test_language_parsing() {
        assert_eq!("hi".parse::<Language>().unwrap(), Language::Hindi);
        assert_eq!("English".parse::<Language>().unwrap(), Language::English);
        assert!("fr".parse::<Language>().is_err());
    }

    #[test]
    fn test_topic_labels() {
        assert!(EntityLabel::Org.is_topic());
        assert!(EntityLabel::Money.is_topic());
        assert!(!EntityLabel::Person.is_topic());
        assert!(!EntityLabel::Date.is_topic());
    }
}
