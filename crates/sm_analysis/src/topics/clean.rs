use lazy_static::lazy_static;
use regex::Regex;
use sm_core::text::collapse_whitespace;

lazy_static! {
    static ref DISALLOWED: Regex = Regex::new(r"[^\w\s.,'\-]").unwrap();
}

/// Reduce an entity span to word characters, whitespace and `. , ' -`.
///
/// Invalid UTF-8 sequences are decoded lossily and the resulting replacement
/// characters dropped, so the output never contains U+FFFD.
pub fn clean_topic(raw: impl AsRef<[u8]>) -> String {
    let decoded = String::from_utf8_lossy(raw.as_ref());
    let without_replacement: String = decoded.chars().filter(|&c| c != char::REPLACEMENT_CHARACTER).collect();
    let allowed = DISALLOWED.replace_all(&without_replacement, "");
    collapse_whitespace(&allowed)
}

/// Whether a string only uses the characters `clean_topic` keeps.
pub fn is_clean_topic(topic: &str) -> bool {
    !topic.contains(char::REPLACEMENT_CHARACTER) && !DISALLOWED.is_match(topic) && topic.trim() == topic
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strips_disallowed_characters() {
        assert_eq!(clean_topic("Acme, Inc.™"), "Acme, Inc.");
        assert_eq!(clean_topic("$5 billion"), "5 billion");
        assert_eq!(clean_topic("O'Brien-Smith (Holdings)"), "O'Brien-Smith Holdings");
        assert_eq!(clean_topic("  Reserve \t Bank\nof   India "), "Reserve Bank of India");
    }

    #[test]
    fn test_drops_invalid_bytes() {
        let raw = b"Acme\xff\xfe Corp";
        let cleaned = clean_topic(raw);
        assert_eq!(cleaned, "Acme Corp");
        assert!(!cleaned.contains('\u{FFFD}'));

        assert_eq!(clean_topic("Tata\u{FFFD} Motors"), "Tata Motors");
    }

    #[test]
    fn test_keeps_unicode_word_characters() {
        assert_eq!(clean_topic("São Paulo"), "São Paulo");
        assert_eq!(clean_topic("भारत सरकार"), "भारत सरकार");
    }

    #[test]
    fn test_empty_input() {
        assert_eq!(clean_topic(""), "");
        assert_eq!(clean_topic("€£"), "");
    }

    #[test]
    fn test_output_is_always_clean() {
        for raw in ["€5bn deal!", "«Reuters»", "U.S.-China \u{FFFD}trade", "\u{200B}Acme\u{200B}", "a  b"] {
            let cleaned = clean_topic(raw);
            assert!(is_clean_topic(&cleaned), "{:?} -> {:?}", raw, cleaned);
        }
    }
}
