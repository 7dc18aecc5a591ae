use once_cell::sync::Lazy;
use regex::Regex;

pub static LINK_DEFINITION_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^\[(?P<id>[^\]]+)\]:\s*(?P<url>\S.*?)\s*$")
        .expect("Failed to compile link definition regex")
});

pub static DATE_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\d{4}-\d{2}-\d{2}$").expect("Failed to compile date regex"));

pub static TAG_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\[(?P<tag>[^\s\[\]]+)\]$").expect("Failed to compile tag regex"));

pub static INLINE_LINK_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^\[(?P<text>.*?)\]\((?P<url>.*?)\)$").expect("Failed to compile inline link regex")
});

pub static REFERENCE_LINK_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^\[(?P<text>.*?)\]\[(?P<id>.*?)\]$")
        .expect("Failed to compile reference link regex")
});

pub static BRACKETED_NAME_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^\[(?P<text>.*)\]$").expect("Failed to compile bracketed name regex")
});

/// Uppercases the first letter of every word and lowercases the rest.
/// Any non-alphabetic character starts a new word.
pub fn title_case(text: &str) -> String {
    let mut result = String::with_capacity(text.len());
    let mut at_word_start = true;

    for c in text.chars() {
        if c.is_alphabetic() {
            if at_word_start {
                result.extend(c.to_uppercase());
            } else {
                result.extend(c.to_lowercase());
            }
            at_word_start = false;
        } else {
            result.push(c);
            at_word_start = true;
        }
    }

    result
}
