use lazy_static::lazy_static;
use regex::Regex;
use sm_core::text::collapse_whitespace;

/// English words that translation tends to leave untouched, spelled the way
/// a Hindi voice should say them.
const TRANSLITERATIONS: &[(&str, &str)] = &[
    ("Elon Musk", "एलन मस्क"),
    ("Tesla", "टेस्ला"),
    ("Apple", "एप्पल"),
    ("Google", "गूगल"),
    ("Microsoft", "माइक्रोसॉफ्ट"),
    ("Amazon", "अमेज़न"),
    ("Meta", "मेटा"),
    ("Netflix", "नेटफ्लिक्स"),
    ("Nvidia", "एनवीडिया"),
    ("Samsung", "सैमसंग"),
    ("Reliance", "रिलायंस"),
    ("Tata", "टाटा"),
    ("Infosys", "इंफोसिस"),
    ("CEO", "सीईओ"),
    ("AI", "एआई"),
    ("company", "कंपनी"),
    ("market", "बाज़ार"),
    ("stock", "स्टॉक"),
    ("shares", "शेयर"),
    ("billion", "बिलियन"),
    ("million", "मिलियन"),
    ("percent", "प्रतिशत"),
];

lazy_static! {
    static ref RULES: Vec<(Regex, &'static str)> = TRANSLITERATIONS
        .iter()
        .map(|(word, hindi)| (Regex::new(&format!(r"(?i)\b{}\b", regex::escape(word))).unwrap(), *hindi))
        .collect();
    /// Anything besides Latin letters, Devanagari, digits, whitespace and basic punctuation
    static ref UNSPEAKABLE: Regex = Regex::new(r"[^A-Za-z\x{0900}-\x{097F}0-9\s.,:!?()]").unwrap();
}

/// Prepare translated narration for a Hindi voice.
pub fn clean_for_speech(text: &str) -> String {
    let mut cleaned = text.to_string();
    for (pattern, hindi) in RULES.iter() {
        cleaned = pattern.replace_all(&cleaned, *hindi).into_owned();
    }
    let speakable = UNSPEAKABLE.replace_all(&cleaned, " ");
    collapse_whitespace(&speakable)
}
