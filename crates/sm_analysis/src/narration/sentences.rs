use std::collections::HashSet;

use lazy_static::lazy_static;
use unicode_segmentation::UnicodeSegmentation;

lazy_static! {
    static ref ABBREVIATIONS: HashSet<&'static str> = [
        "mr", "mrs", "ms", "dr", "prof", "sr", "jr", "st", "mt", "inc", "corp", "co", "ltd",
        "bros", "vs", "etc", "e.g", "i.e", "u.s", "u.k", "u.n", "e.u", "jan", "feb", "mar",
        "apr", "jun", "jul", "aug", "sep", "sept", "oct", "nov", "dec", "gen", "gov",
        "sen", "rep", "rs", "approx", "est", "dept", "fig",
    ]
    .into_iter()
    .collect();
}

/// UAX #29 sentence segmentation with abbreviation repair.
///
/// The Unicode rules already keep decimals such as `3.5` intact and do not
/// break before a lowercase word. They do break after `Mr.` or `Inc.` when a
/// capitalized word follows, so a segment ending in a known abbreviation is
/// merged with the next one. `No.` merges only before a number, and a single
/// initial only inside a name such as `J. K. Rowling`.
#[derive(Debug, Clone, Default)]
pub struct SentenceSplitter;

impl SentenceSplitter {
    pub fn new() -> Self {
        Self
    }

    pub fn split(&self, text: &str) -> Vec<String> {
        let mut sentences = Vec::new();
        let mut pending = String::new();

        let mut segments = text.split_sentence_bounds().peekable();
        while let Some(segment) = segments.next() {
            pending.push_str(segment);
            if joins_next(pending.trim_end(), segments.peek().copied()) {
                continue;
            }
            push_trimmed(&mut sentences, &pending);
            pending.clear();
        }
        push_trimmed(&mut sentences, &pending);

        sentences
    }
}

fn push_trimmed(sentences: &mut Vec<String>, pending: &str) {
    let sentence = pending.trim();
    if !sentence.is_empty() {
        sentences.push(sentence.to_string());
    }
}

fn joins_next(text: &str, next: Option<&str>) -> bool {
    let Some(stem) = text.strip_suffix('.') else {
        return false;
    };
    let mut words = stem
        .split_whitespace()
        .rev()
        .map(|word| word.trim_start_matches(|c: char| !c.is_alphanumeric()));
    let Some(token) = words.next().filter(|token| !token.is_empty()) else {
        return false;
    };

    let lower = token.to_lowercase();
    if lower == "no" {
        return next.map_or(false, |next| next.trim_start().starts_with(|c: char| c.is_ascii_digit()));
    }
    if ABBREVIATIONS.contains(lower.as_str()) {
        return true;
    }
    is_initial(token) && in_name_run(words)
}

fn is_initial(token: &str) -> bool {
    let mut chars = token.chars();
    matches!((chars.next(), chars.next()), (Some(c), None) if c.is_uppercase())
}

/// The capitalized words before an initial either open the sentence or number at least two.
fn in_name_run<'a>(preceding: impl Iterator<Item = &'a str>) -> bool {
    let mut run = 0;
    for word in preceding {
        if !word.starts_with(char::is_uppercase) {
            return run >= 2;
        }
        run += 1;
    }
    true
}
