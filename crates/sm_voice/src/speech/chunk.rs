//! Request-sized chunking for speech endpoints with a per-request character cap.

/// Clause boundaries, including the Devanagari danda and double danda
const BOUNDARIES: &[char] = &['.', '!', '?', '।', '॥', ';', ':', ',', '\n'];

/// Split text into pieces of at most `max_chars` characters.
///
/// Cuts at clause punctuation first, then between words, and only splits
/// inside a word when the word alone exceeds the limit. Adjacent short
/// pieces are merged back together so the request count stays low.
pub fn split_for_speech(text: &str, max_chars: usize) -> Vec<String> {
    let max_chars = max_chars.max(1);
    let mut pieces = Vec::new();

    for clause in split_clauses(text) {
        if char_len(&clause) <= max_chars {
            pieces.push(clause);
        } else {
            pieces.extend(split_words(&clause, max_chars));
        }
    }

    merge_short(pieces, max_chars)
}

fn split_clauses(text: &str) -> Vec<String> {
    let mut clauses = Vec::new();
    let mut current = String::new();
    for c in text.chars() {
        current.push(c);
        if BOUNDARIES.contains(&c) {
            push_trimmed(&mut clauses, &current);
            current.clear();
        }
    }
    push_trimmed(&mut clauses, &current);
    clauses
}

fn split_words(clause: &str, max_chars: usize) -> Vec<String> {
    let mut pieces = Vec::new();
    let mut current = String::new();

    for word in clause.split_whitespace() {
        if char_len(word) > max_chars {
            push_trimmed(&mut pieces, &current);
            current.clear();
            let chars: Vec<char> = word.chars().collect();
            for part in chars.chunks(max_chars) {
                pieces.push(part.iter().collect());
            }
            continue;
        }

        let needed = if current.is_empty() { char_len(word) } else { char_len(&current) + 1 + char_len(word) };
        if needed > max_chars {
            push_trimmed(&mut pieces, &current);
            current.clear();
        }
        if !current.is_empty() {
            current.push(' ');
        }
        current.push_str(word);
    }
    push_trimmed(&mut pieces, &current);
    pieces
}

fn merge_short(pieces: Vec<String>, max_chars: usize) -> Vec<String> {
    let mut merged: Vec<String> = Vec::new();
    for piece in pieces {
        match merged.last_mut() {
            Some(last) if char_len(last) + 1 + char_len(&piece) <= max_chars => {
                last.push(' ');
                last.push_str(&piece);
            }
            _ => merged.push(piece),
        }
    }
    merged
}

fn push_trimmed(out: &mut Vec<String>, piece: &str) {
    let piece = piece.trim();
    if !piece.is_empty() {
        out.push(piece.to_string());
    }
}

fn char_len(s: &str) -> usize {
    s.chars().count()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_short_text_is_one_piece() {
        assert_eq!(split_for_speech("समाचार 1: एक्मे का मुनाफा बढ़ा।", 100), vec!["समाचार 1: एक्मे का मुनाफा बढ़ा।"]);
    }

    #[test]
    fn test_pieces_respect_limit() {
        let text = "पहला वाक्य काफी लंबा है और इसमें कई शब्द हैं। दूसरा वाक्य भी है, जिसमें अल्पविराम है। तीसरा वाक्य!";
        let pieces = split_for_speech(text, 30);
        assert!(pieces.len() > 1);
        for piece in &pieces {
            assert!(piece.chars().count() <= 30, "piece too long: {}", piece);
        }
        let rejoined: String = pieces.join(" ").split_whitespace().collect::<Vec<_>>().join(" ");
        let original: String = text.split_whitespace().collect::<Vec<_>>().join(" ");
        assert_eq!(rejoined, original);
    }

    #[test]
    fn test_overlong_word_is_hard_split() {
        let word = "a".repeat(25);
        let pieces = split_for_speech(&word, 10);
        assert_eq!(pieces, vec!["a".repeat(10), "a".repeat(10), "a".repeat(5)]);
    }

    #[test]
    fn test_blank_text_has_no_pieces() {
        assert!(split_for_speech("  \n ", 100).is_empty());
    }
}
