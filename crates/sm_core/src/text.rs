use lazy_static::lazy_static;
use regex::Regex;
use unicode_normalization::UnicodeNormalization;

lazy_static! {
    static ref ZERO_WIDTH: Regex = Regex::new(r"[\u{200B}-\u{200D}\u{FEFF}]").unwrap();
    static ref WHITESPACE: Regex = Regex::new(r"\s+").unwrap();
    static ref PARAGRAPH_BREAK: Regex = Regex::new(r"\n\s*\n").unwrap();
}

/// Compatibility decomposition for article display fields.
///
/// Repairs mojibake-prone forms such as full-width punctuation and ligatures.
pub fn normalize_display(text: &str) -> String {
    text.nfkd().collect()
}

/// NFKC, zero-width characters removed, whitespace collapsed and trimmed.
pub fn normalize_text(text: &str) -> String {
    let composed: String = text.nfkc().collect();
    let visible = ZERO_WIDTH.replace_all(&composed, "");
    WHITESPACE.replace_all(&visible, " ").trim().to_string()
}

/// Like [`normalize_text`], but paragraphs separated by blank lines stay
/// separated by exactly one blank line.
pub fn normalize_paragraphs(text: &str) -> String {
    let composed: String = text.nfkc().collect();
    let visible = ZERO_WIDTH.replace_all(&composed, "");
    PARAGRAPH_BREAK
        .split(&visible)
        .map(collapse_whitespace)
        .filter(|paragraph| !paragraph.is_empty())
        .collect::<Vec<_>>()
        .join("\n\n")
}

/// Collapse whitespace runs to a single space and trim.
pub fn collapse_whitespace(text: &str) -> String {
    WHITESPACE.replace_all(text, " ").trim().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_text() {
        assert_eq!(normalize_text("  Acme\u{200B}  Corp\n"), "Acme Corp");
        assert_eq!(normalize_text("ﬁnance"), "finance");
    }

    #[test]
    fn test_normalize_paragraphs_keeps_breaks() {
        assert_eq!(
            normalize_paragraphs(" समाचार 1:  पहला\u{200B}\n\nसमाचार 2: दूसरा \n \n\n ﬁn "),
            "समाचार 1: पहला\n\nसमाचार 2: दूसरा\n\nfin"
        );
        assert_eq!(normalize_paragraphs("one\nline"), "one line");
        assert_eq!(normalize_paragraphs(" \n\n \u{200B}"), "");
    }

    #[test]
    fn test_normalize_display_decomposes() {
        let decomposed = normalize_display("café");
        assert_eq!(decomposed.chars().count(), 5);
        assert_eq!(normalize_display("ＡＣＭＥ"), "ACME");
    }

    #[test]
    fn test_collapse_whitespace() {
        assert_eq!(collapse_whitespace(" a \t b\n\nc "), "a b c");
    }
}
