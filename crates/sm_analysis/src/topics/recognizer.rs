use std::collections::HashSet;

use lazy_static::lazy_static;
use regex::Regex;
use sm_core::{Entity, EntityLabel, EntityRecognizer};

lazy_static! {
    static ref MONEY: Regex = Regex::new(concat!(
        r"(?i)(?:[$€£₹¥]|\b(?:usd|eur|gbp|inr|rs\.?)\s?)\d[\d,]*(?:\.\d+)?",
        r"(?:\s?(?:trillion|billion|million|thousand|crore|lakh|bn|mn|tn|[mbk])\b)?",
        r"|\b\d[\d,]*(?:\.\d+)?\s?(?:trillion|billion|million|thousand|crore|lakh)?\s?",
        r"(?:dollars|euros|pounds|rupees|yen|yuan)\b",
    ))
    .unwrap();
    static ref LEGAL_SECTION: Regex = Regex::new(r"\b(?:Section|Article|Clause)\s+\d+[A-Z]?\b").unwrap();
    static ref DATE: Regex = Regex::new(concat!(
        r"\b(?:Monday|Tuesday|Wednesday|Thursday|Friday|Saturday|Sunday)\b",
        r"|\b(?:January|February|March|April|June|July|August|September|October|November|December)",
        r"(?:\s+\d{1,2}(?:st|nd|rd|th)?)?(?:,?\s+\d{4})?\b",
        r"|\bMay\s+(?:\d{1,2}(?:st|nd|rd|th)?(?:,?\s+\d{4})?|\d{4})\b",
        r"|\b(?:19|20)\d{2}\b",
    ))
    .unwrap();
    /// Capitalized words, optionally joined by `of`, `for` or `&`
    static ref CAPITALIZED_RUN: Regex = Regex::new(
        r"\p{Lu}[\p{L}\p{M}\p{N}&'’.\-]*(?:\s+(?:(?:of|for|&)\s+)?\p{Lu}[\p{L}\p{M}\p{N}&'’.\-]*)*"
    )
    .unwrap();
    static ref WORD: Regex = Regex::new(r"\S+").unwrap();
    static ref ACRONYM: Regex = Regex::new(r"^(?:\p{Lu}{2,5}|(?:\p{Lu}\.){2,4})$").unwrap();
    static ref INITIALISM: Regex = Regex::new(r"^(?:\p{Lu}\.){2,4}$").unwrap();

    static ref ORG_TERMS: HashSet<&'static str> = set(&[
        "Inc", "Corp", "Corporation", "Ltd", "LLC", "PLC", "Plc", "Co", "Company", "Group",
        "Holdings", "Bank", "Motors", "Technologies", "Systems", "Airlines", "Airways",
        "Industries", "Partners", "Capital", "Labs", "Pharmaceuticals", "Pharma", "Ventures",
        "Enterprises", "Securities", "Insurance", "Energy", "Media", "University", "Ministry",
        "Agency", "Commission", "Council", "Court", "Department", "Association", "Foundation",
        "Institute", "Authority", "Exchange", "Bureau", "Board", "Party", "Fund", "Trust",
    ]);
    static ref KNOWN_ORGS: HashSet<&'static str> = set(&[
        "Apple", "Google", "Alphabet", "Microsoft", "Amazon", "Meta", "Facebook", "Tesla",
        "Nvidia", "Intel", "Samsung", "Sony", "Netflix", "Reuters", "Bloomberg", "OpenAI",
        "SpaceX", "Twitter", "Boeing", "Airbus", "Toyota", "Reliance", "Infosys", "Wipro",
        "Tata", "Adani", "Walmart", "Disney", "Uber", "Oracle", "Qualcomm", "TikTok",
        "ByteDance", "Alibaba", "Tencent", "Huawei", "Volkswagen", "Pfizer", "Moderna",
        "Zomato", "Flipkart", "Paytm", "JPMorgan", "Goldman Sachs", "Morgan Stanley",
        "Johnson & Johnson", "European Union", "United Nations", "World Bank",
        "Federal Reserve", "Supreme Court", "White House", "Congress", "Parliament",
    ]);
    static ref GPE: HashSet<&'static str> = set(&[
        "India", "China", "Japan", "Russia", "Ukraine", "Germany", "France", "Italy", "Spain",
        "Canada", "Mexico", "Brazil", "Argentina", "Australia", "Pakistan", "Bangladesh",
        "Nepal", "Sri Lanka", "Indonesia", "Vietnam", "Thailand", "Singapore", "Malaysia",
        "Korea", "South Korea", "North Korea", "Iran", "Iraq", "Israel", "Egypt",
        "Saudi Arabia", "Turkey", "South Africa", "Nigeria", "Kenya", "United States",
        "America", "United Kingdom", "Britain", "Great Britain", "England", "Scotland",
        "Ireland", "Netherlands", "Switzerland", "Sweden", "Norway", "Poland", "Taiwan",
        "Hong Kong", "New Zealand", "Qatar", "UAE", "US", "U.S.", "USA", "U.S.A.", "UK",
        "U.K.", "California", "Texas", "Florida", "New York", "Washington", "Maharashtra",
        "Karnataka", "Gujarat", "Tamil Nadu", "Kerala", "Uttar Pradesh", "Bihar", "Punjab",
        "Delhi", "West Bengal", "Telangana", "Mumbai", "New Delhi", "Bengaluru", "Bangalore",
        "Chennai", "Kolkata", "Hyderabad", "Pune", "Ahmedabad", "London", "Paris", "Berlin",
        "Tokyo", "Beijing", "Shanghai", "Moscow", "Kyiv", "Dubai", "Sydney", "Toronto",
        "San Francisco", "Los Angeles", "Chicago", "Boston", "Seattle", "Brussels", "Geneva",
    ]);
    static ref LAW_TERMS: HashSet<&'static str> = set(&[
        "Act", "Bill", "Code", "Regulation", "Regulations", "Directive", "Treaty", "Amendment",
        "Constitution", "Law", "Ordinance", "Rules", "Agreement", "Accord",
    ]);
    static ref EVENT_TERMS: HashSet<&'static str> = set(&[
        "Summit", "Conference", "Olympics", "Games", "Cup", "War", "Battle", "Festival", "Expo",
        "Championship", "Championships", "Election", "Elections", "Forum", "Awards",
        "Marathon", "Tournament",
    ]);
    static ref PERSON_TITLES: HashSet<&'static str> = set(&[
        "Mr", "Mr.", "Mrs", "Mrs.", "Ms", "Ms.", "Dr", "Dr.", "Prof", "Prof.", "Sir", "President",
        "CEO", "Chairman", "Chairperson", "Chairwoman", "Minister", "Senator", "Governor",
        "Judge", "Secretary", "Director", "Founder", "Spokesperson",
    ]);
    /// Abbreviations that do not end a sentence inside a capitalized run
    static ref ABBREVIATIONS: HashSet<&'static str> = set(&[
        "Inc.", "Corp.", "Co.", "Ltd.", "Jr.", "Sr.", "St.", "Bros.", "Mt.",
    ]);
    /// Capitalized words that only start sentences or name dates
    static ref LEADING_NOISE: HashSet<&'static str> = set(&[
        "The", "A", "An", "This", "That", "These", "Those", "In", "On", "At", "By", "For",
        "From", "With", "As", "After", "Before", "But", "And", "Or", "If", "When", "While",
        "Its", "It", "His", "Her", "Their", "Our", "We", "They", "He", "She", "I", "According",
        "Monday", "Tuesday", "Wednesday", "Thursday", "Friday", "Saturday", "Sunday",
        "January", "February", "March", "April", "May", "June", "July", "August",
        "September", "October", "November", "December",
    ]);
    static ref NOT_ENTITIES: HashSet<&'static str> = set(&[
        "CFO", "CTO", "COO", "AI", "IPO", "GDP", "EV", "EVS", "TV", "PM", "AM", "UTC", "GMT",
        "IST", "IT", "OK", "USD", "EUR", "GBP", "INR", "FY", "YOY", "ESG", "API", "AGM", "EPS",
        "VC", "HR", "PR", "LIVE", "NEWS",
    ]);
}

const CONNECTORS: [&str; 3] = ["of", "for", "&"];

fn set(words: &[&'static str]) -> HashSet<&'static str> {
    words.iter().copied().collect()
}

#[derive(Debug, Clone, Copy)]
struct Word<'a> {
    text: &'a str,
    start: usize,
    end: usize,
}

#[derive(Debug, Clone, Copy)]
struct Candidate {
    start: usize,
    end: usize,
    label: EntityLabel,
}

/// Rank used to settle overlapping spans; lower wins.
fn priority(label: EntityLabel) -> u8 {
    match label {
        EntityLabel::Money => 0,
        EntityLabel::Law => 1,
        EntityLabel::Event => 2,
        EntityLabel::Org => 3,
        EntityLabel::Gpe => 4,
        EntityLabel::Date => 5,
        EntityLabel::Person => 6,
        _ => 7,
    }
}

/// Gazetteer and pattern based entity recognizer.
///
/// Produces OntoNotes labels without any model files: regular expressions for
/// money, legal sections and dates, and capitalized-run heuristics backed by
/// small gazetteers for organizations, places, laws, events and people.
#[derive(Debug, Clone, Copy, Default)]
pub struct PatternRecognizer;

impl PatternRecognizer {
    pub fn new() -> Self {
        Self
    }

    fn classify_run(&self, text: &str, offset: usize, run: &str, out: &mut Vec<Candidate>) {
        let words = WORD.find_iter(run).map(|m| Word {
            text: m.as_str(),
            start: offset + m.start(),
            end: offset + m.end(),
        });

        let mut current: Vec<Word> = Vec::new();
        let mut after_title = false;
        for word in words {
            if PERSON_TITLES.contains(word.text) {
                self.classify_segment(text, &current, after_title, out);
                current.clear();
                after_title = true;
                continue;
            }

            let (word, boundary) = trim_word(word);
            if !word.text.is_empty() {
                current.push(word);
            }
            if boundary {
                self.classify_segment(text, &current, after_title, out);
                current.clear();
                after_title = false;
            }
        }
        self.classify_segment(text, &current, after_title, out);
    }

    fn classify_segment(&self, text: &str, words: &[Word], after_title: bool, out: &mut Vec<Candidate>) {
        let words = trim_segment(words);
        let (Some(first), Some(last)) = (words.first(), words.last()) else {
            return;
        };

        let span = &text[first.start..last.end];
        if let Some(label) = label_segment(words, span, after_title) {
            out.push(Candidate {
                start: first.start,
                end: last.end,
                label,
            });
            return;
        }

        if words.len() == 1 {
            return;
        }

        let pieces: Vec<&[Word]> = words.split(|word| CONNECTORS.contains(&word.text)).collect();
        if pieces.len() > 1 {
            for piece in pieces {
                self.classify_segment(text, piece, false, out);
            }
            return;
        }

        for word in words {
            if let Some(label) = gazetteer_label(word.text) {
                out.push(Candidate {
                    start: word.start,
                    end: word.end,
                    label,
                });
            }
        }
    }
}

impl EntityRecognizer for PatternRecognizer {
    fn recognize(&self, text: &str) -> Vec<Entity> {
        let mut candidates = Vec::new();

        for m in MONEY.find_iter(text) {
            let trimmed = m.as_str().trim_end_matches(|c: char| c == ',' || c == '.');
            candidates.push(Candidate {
                start: m.start(),
                end: m.start() + trimmed.len(),
                label: EntityLabel::Money,
            });
        }
        for m in LEGAL_SECTION.find_iter(text) {
            candidates.push(Candidate {
                start: m.start(),
                end: m.end(),
                label: EntityLabel::Law,
            });
        }
        for m in DATE.find_iter(text) {
            candidates.push(Candidate {
                start: m.start(),
                end: m.end(),
                label: EntityLabel::Date,
            });
        }
        for m in CAPITALIZED_RUN.find_iter(text) {
            self.classify_run(text, m.start(), m.as_str(), &mut candidates);
        }

        resolve(text, candidates)
    }
}

/// Keep the highest-priority span wherever candidates overlap, then restore text order.
fn resolve(text: &str, mut candidates: Vec<Candidate>) -> Vec<Entity> {
    candidates.sort_by_key(|c| (priority(c.label), c.start));

    let mut accepted: Vec<Candidate> = Vec::with_capacity(candidates.len());
    for candidate in candidates {
        if candidate.start >= candidate.end {
            continue;
        }
        let overlaps = accepted
            .iter()
            .any(|kept| candidate.start < kept.end && kept.start < candidate.end);
        if !overlaps {
            accepted.push(candidate);
        }
    }

    accepted.sort_by_key(|c| c.start);
    accepted
        .into_iter()
        .map(|c| Entity {
            text: text[c.start..c.end].to_string(),
            label: c.label,
            start: c.start,
            end: c.end,
        })
        .collect()
}

/// Strip a trailing possessive or sentence-final period. The flag reports
/// whether the word closes the current segment.
fn trim_word(word: Word) -> (Word, bool) {
    let mut word = word;
    let mut boundary = false;

    for suffix in ["'s", "’s", "'", "’"] {
        if let Some(stripped) = word.text.strip_suffix(suffix) {
            word.text = stripped;
            word.end -= suffix.len();
            boundary = true;
            break;
        }
    }

    if word.text.ends_with('.') && !ABBREVIATIONS.contains(word.text) && !INITIALISM.is_match(word.text) {
        let stripped = word.text.trim_end_matches('.');
        word.end -= word.text.len() - stripped.len();
        word.text = stripped;
        boundary = true;
    }

    let stripped = word.text.trim_end_matches('-');
    word.end -= word.text.len() - stripped.len();
    word.text = stripped;

    (word, boundary)
}

fn trim_segment<'s, 'a>(words: &'s [Word<'a>]) -> &'s [Word<'a>] {
    let mut words = words;
    while let Some((first, rest)) = words.split_first() {
        if LEADING_NOISE.contains(first.text) || CONNECTORS.contains(&first.text) {
            words = rest;
        } else {
            break;
        }
    }
    while let Some((last, rest)) = words.split_last() {
        if CONNECTORS.contains(&last.text) {
            words = rest;
        } else {
            break;
        }
    }
    words
}

fn bare(word: &str) -> &str {
    word.trim_end_matches('.')
}

/// A term from `terms` directly followed by `of`, as in "Bank of America".
fn head_before_of(words: &[Word], terms: &HashSet<&'static str>) -> bool {
    words
        .windows(2)
        .any(|pair| pair[1].text == "of" && terms.contains(bare(pair[0].text)))
}

fn is_name_word(word: &str) -> bool {
    let mut chars = word.chars();
    let starts_upper = chars.next().map_or(false, char::is_uppercase);
    starts_upper
        && word.chars().skip(1).any(char::is_lowercase)
        && word.chars().all(|c| c.is_alphabetic() || c == '-' || c == '\'')
}

fn in_any_gazetteer(word: &str) -> bool {
    let word = bare(word);
    KNOWN_ORGS.contains(word)
        || GPE.contains(word)
        || ORG_TERMS.contains(word)
        || LAW_TERMS.contains(word)
        || EVENT_TERMS.contains(word)
}

fn gazetteer_label(span: &str) -> Option<EntityLabel> {
    if KNOWN_ORGS.contains(span) {
        Some(EntityLabel::Org)
    } else if GPE.contains(span) {
        Some(EntityLabel::Gpe)
    } else {
        None
    }
}

fn label_segment(words: &[Word], span: &str, after_title: bool) -> Option<EntityLabel> {
    let first = bare(words.first()?.text);
    let last = bare(words.last()?.text);
    let multi = words.len() > 1;

    if (multi && LAW_TERMS.contains(last)) || head_before_of(words, &LAW_TERMS) {
        return Some(EntityLabel::Law);
    }
    if (multi && EVENT_TERMS.contains(last)) || head_before_of(words, &EVENT_TERMS) {
        return Some(EntityLabel::Event);
    }

    let acronym = !multi && !after_title && ACRONYM.is_match(span) && !GPE.contains(span) && !NOT_ENTITIES.contains(span);
    if KNOWN_ORGS.contains(span)
        || (multi && ORG_TERMS.contains(last))
        || head_before_of(words, &ORG_TERMS)
        || (multi && KNOWN_ORGS.contains(first))
        || acronym
    {
        return Some(EntityLabel::Org);
    }
    if GPE.contains(span) {
        return Some(EntityLabel::Gpe);
    }

    let names = words.iter().all(|word| is_name_word(word.text));
    if after_title && names {
        return Some(EntityLabel::Person);
    }
    if (2..=3).contains(&words.len()) && names && !words.iter().any(|word| in_any_gazetteer(word.text)) {
        return Some(EntityLabel::Person);
    }

    None
}
