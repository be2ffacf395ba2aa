use std::collections::HashMap;
use std::fmt;

use lazy_static::lazy_static;
use sm_core::SentimentSignal;

use super::{is_negation, parse_lexicon, tokenize};

const POLARITY_DATA: &str = include_str!("../../data/polarity_lexicon.tsv");

const NEGATION_FACTOR: f64 = -0.5;
/// Tokens a negator stays in effect for
const NEGATION_WINDOW: usize = 3;

lazy_static! {
    static ref POLARITIES: HashMap<String, f64> = parse_lexicon(POLARITY_DATA);
    static ref INTENSIFIERS: HashMap<&'static str, f64> = HashMap::from([
        ("very", 1.3),
        ("really", 1.3),
        ("highly", 1.3),
        ("sharply", 1.3),
        ("significantly", 1.3),
        ("extremely", 1.5),
        ("incredibly", 1.5),
        ("hugely", 1.5),
        ("somewhat", 0.8),
        ("slightly", 0.5),
        ("barely", 0.5),
    ]);
}

/// Averaged term polarity over a second, independent lexicon.
#[derive(Clone)]
pub struct PatternAnalyzer {
    lexicon: HashMap<String, f64>,
}

impl fmt::Debug for PatternAnalyzer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PatternAnalyzer")
            .field("entries", &self.lexicon.len())
            .finish()
    }
}

impl Default for PatternAnalyzer {
    fn default() -> Self {
        Self::new()
    }
}

impl PatternAnalyzer {
    pub fn new() -> Self {
        Self {
            lexicon: POLARITIES.clone(),
        }
    }

    pub fn with_lexicon(lexicon: HashMap<String, f64>) -> Self {
        Self { lexicon }
    }

    pub fn polarity(&self, text: &str) -> f64 {
        let mut assessments = Vec::new();
        let mut intensity: Option<f64> = None;
        let mut negation_left = 0usize;

        for token in tokenize(text) {
            let word = token.to_lowercase();

            if is_negation(&word) {
                negation_left = NEGATION_WINDOW;
                intensity = None;
                continue;
            }

            if let Some(&factor) = INTENSIFIERS.get(word.as_str()) {
                intensity = Some(intensity.unwrap_or(1.0) * factor);
                continue;
            }

            if let Some(&polarity) = self.lexicon.get(&word) {
                let mut value = polarity * intensity.take().unwrap_or(1.0);
                if negation_left > 0 {
                    value *= NEGATION_FACTOR;
                    negation_left = 0;
                }
                assessments.push(value.clamp(-1.0, 1.0));
                continue;
            }

            intensity = None;
            negation_left = negation_left.saturating_sub(1);
        }

        if assessments.is_empty() {
            return 0.0;
        }
        let mean = assessments.iter().sum::<f64>() / assessments.len() as f64;
        mean.clamp(-1.0, 1.0)
    }
}

impl SentimentSignal for PatternAnalyzer {
    fn name(&self) -> &str {
        "pattern"
    }

    fn score(&self, text: &str) -> f64 {
        self.polarity(text)
    }
}
