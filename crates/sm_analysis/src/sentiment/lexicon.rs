use std::collections::HashMap;
use std::fmt;

use lazy_static::lazy_static;
use sm_core::SentimentSignal;

use super::{is_negation, parse_lexicon, tokenize};

const VALENCE_DATA: &str = include_str!("../../data/valence_lexicon.tsv");

const BOOSTER_INCREMENT: f64 = 0.293;
const CAPS_INCREMENT: f64 = 0.733;
const NEGATION_SCALAR: f64 = -0.74;
const EXCLAMATION_INCREMENT: f64 = 0.292;
const MAX_EXCLAMATIONS: usize = 4;
const QUESTION_INCREMENT: f64 = 0.18;
const MAX_QUESTION_EMPHASIS: f64 = 0.96;
/// Approximates the maximum expected sum of valences
const NORMALIZATION_ALPHA: f64 = 15.0;

lazy_static! {
    static ref VALENCES: HashMap<String, f64> = parse_lexicon(VALENCE_DATA);
    static ref BOOSTERS: HashMap<&'static str, f64> = {
        let increase = [
            "absolutely", "amazingly", "completely", "considerably", "deeply", "dramatically",
            "enormously", "entirely", "especially", "exceptionally", "extremely", "fully",
            "greatly", "highly", "hugely", "incredibly", "intensely", "massively",
            "particularly", "purely", "really", "remarkably", "sharply", "significantly",
            "so", "strongly", "substantially", "thoroughly", "totally", "tremendously", "very",
        ];
        let decrease = [
            "almost", "barely", "hardly", "less", "little", "marginally", "occasionally",
            "partly", "scarcely", "slightly", "somewhat",
        ];
        increase
            .into_iter()
            .map(|word| (word, BOOSTER_INCREMENT))
            .chain(decrease.into_iter().map(|word| (word, -BOOSTER_INCREMENT)))
            .collect()
    };
}

/// Rule-based valence scorer producing a normalized compound score.
///
/// Each lexicon hit is adjusted by preceding boosters, negations within three
/// tokens and upper-case emphasis; a contrastive "but" shifts weight towards the
/// clause that follows it, and exclamation marks amplify the final sum.
#[derive(Clone)]
pub struct LexiconAnalyzer {
    lexicon: HashMap<String, f64>,
}

impl fmt::Debug for LexiconAnalyzer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LexiconAnalyzer")
            .field("entries", &self.lexicon.len())
            .finish()
    }
}

impl Default for LexiconAnalyzer {
    fn default() -> Self {
        Self::new()
    }
}

impl LexiconAnalyzer {
    pub fn new() -> Self {
        Self {
            lexicon: VALENCES.clone(),
        }
    }

    pub fn with_lexicon(lexicon: HashMap<String, f64>) -> Self {
        Self { lexicon }
    }

    pub fn compound(&self, text: &str) -> f64 {
        let tokens = tokenize(text);
        if tokens.is_empty() {
            return 0.0;
        }

        let lowered: Vec<String> = tokens.iter().map(|token| token.to_lowercase()).collect();
        let mut valences = self.valences(&tokens, &lowered);
        apply_but_rule(&lowered, &mut valences);

        let mut sum: f64 = valences.iter().sum();
        let emphasis = punctuation_emphasis(text);
        if sum > 0.0 {
            sum += emphasis;
        } else if sum < 0.0 {
            sum -= emphasis;
        }

        normalize(sum)
    }

    fn valences(&self, tokens: &[&str], lowered: &[String]) -> Vec<f64> {
        let cap_differential = has_cap_differential(tokens);
        let mut valences = Vec::with_capacity(tokens.len());

        for (i, word) in lowered.iter().enumerate() {
            let base = match self.lexicon.get(word) {
                Some(&value) if !BOOSTERS.contains_key(word.as_str()) => value,
                _ => {
                    valences.push(0.0);
                    continue;
                }
            };

            let mut valence = base;
            if cap_differential && is_all_caps(tokens[i]) {
                valence += CAPS_INCREMENT.copysign(valence);
            }

            for distance in 1..=3 {
                if i < distance {
                    break;
                }
                let j = i - distance;
                if self.lexicon.contains_key(&lowered[j]) {
                    continue;
                }

                let decay = match distance {
                    2 => 0.95,
                    3 => 0.9,
                    _ => 1.0,
                };
                valence += booster_scalar(tokens[j], &lowered[j], valence, cap_differential) * decay;

                if is_negation(&lowered[j]) {
                    valence *= NEGATION_SCALAR;
                }
            }

            valences.push(valence);
        }

        valences
    }
}

impl SentimentSignal for LexiconAnalyzer {
    fn name(&self) -> &str {
        "lexicon"
    }

    fn score(&self, text: &str) -> f64 {
        self.compound(text)
    }
}

fn booster_scalar(token: &str, lowered: &str, valence: f64, cap_differential: bool) -> f64 {
    let Some(&increment) = BOOSTERS.get(lowered) else {
        return 0.0;
    };

    let mut scalar = if valence < 0.0 { -increment } else { increment };
    if cap_differential && is_all_caps(token) {
        scalar += CAPS_INCREMENT.copysign(valence);
    }
    scalar
}

fn apply_but_rule(lowered: &[String], valences: &mut [f64]) {
    let Some(pivot) = lowered.iter().position(|word| word == "but") else {
        return;
    };

    for (i, valence) in valences.iter_mut().enumerate() {
        if i < pivot {
            *valence *= 0.5;
        } else if i > pivot {
            *valence *= 1.5;
        }
    }
}

fn punctuation_emphasis(text: &str) -> f64 {
    let exclamations = text.matches('!').count().min(MAX_EXCLAMATIONS) as f64 * EXCLAMATION_INCREMENT;
    let questions = match text.matches('?').count() {
        0 | 1 => 0.0,
        n @ 2..=3 => n as f64 * QUESTION_INCREMENT,
        _ => MAX_QUESTION_EMPHASIS,
    };
    exclamations + questions
}

fn normalize(sum: f64) -> f64 {
    (sum / (sum * sum + NORMALIZATION_ALPHA).sqrt()).clamp(-1.0, 1.0)
}

fn is_all_caps(token: &str) -> bool {
    token.chars().any(char::is_alphabetic) && !token.chars().any(char::is_lowercase)
}

/// True when some, but not all, tokens are shouted.
fn has_cap_differential(tokens: &[&str]) -> bool {
    let shouted = tokens.iter().filter(|token| is_all_caps(token)).count();
    shouted > 0 && shouted < tokens.len()
}
