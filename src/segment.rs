// Text segmentation: words, sentences and paragraphs
use lazy_static::lazy_static;
use memchr::memmem;
use regex::Regex;

lazy_static! {
    static ref WORD_REGEX: Regex = Regex::new(r"\w+").unwrap();
    static ref SENTENCE_END_REGEX: Regex = Regex::new(r"[.!?]+").unwrap();
}

const PARAGRAPH_BREAK: &[u8] = b"\n\n";

/// Convert `\r\n` and lone `\r` line endings to `\n`.
pub fn normalize_newlines(text: String) -> String {
    if !text.contains('\r') {
        return text;
    }
    text.replace("\r\n", "\n").replace('\r', "\n")
}

/// Lowercased word tokens in order of appearance.
pub fn words(text: &str) -> Vec<String> {
    let lowered = text.to_lowercase();
    WORD_REGEX
        .find_iter(&lowered)
        .map(|m| m.as_str().to_string())
        .collect()
}

/// Segments between runs of `.`, `!` and `?`, blank ones included.
pub fn sentences(text: &str) -> Vec<&str> {
    SENTENCE_END_REGEX.split(text).collect()
}

pub fn sentence_count(text: &str) -> usize {
    sentences(text)
        .into_iter()
        .filter(|s| !s.trim().is_empty())
        .count()
}

/// Split on blank-line separators. Separators are consumed left to right
/// without overlap, so "a\n\n\nb" yields "a" and "\nb".
pub fn paragraphs(text: &str) -> Vec<&str> {
    let mut parts = Vec::new();
    let mut start = 0;

    for pos in memmem::find_iter(text.as_bytes(), PARAGRAPH_BREAK) {
        parts.push(&text[start..pos]);
        start = pos + PARAGRAPH_BREAK.len();
    }
    parts.push(&text[start..]);

    parts
}

pub fn paragraph_count(text: &str) -> usize {
    paragraphs(text)
        .into_iter()
        .filter(|p| !p.trim().is_empty())
        .count()
}
