use lazy_static::lazy_static;
use regex::{Regex, RegexBuilder};
use serde::{Deserialize, Serialize};

/// Email addresses: local part, `@`, domain, and a TLD of two or more letters.
pub const EMAIL_PATTERN: &str = r"\b[A-Za-z0-9._%+-]+@[A-Za-z0-9.-]+\.[A-Z|a-z]{2,}\b";

/// http(s) URLs: host characters (or percent escapes) followed by an optional
/// path/query tail. Stops at whitespace or the first character outside the sets.
pub const URL_PATTERN: &str = r"https?://(?:[-\w.]|%[\da-fA-F]{2})+(?:[/?\#][/\w.%?=\&\#+\~-]*)?";

lazy_static! {
    static ref EMAIL_REGEX: Regex = build_regex(EMAIL_PATTERN).unwrap();
    static ref URL_REGEX: Regex = build_regex(URL_PATTERN).unwrap();
}

/// What a stored pattern search was looking for. The report picks its
/// optional blocks from this tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PatternKind {
    Email,
    Url,
    Custom,
}

fn build_regex(pattern: &str) -> Result<Regex, regex::Error> {
    RegexBuilder::new(pattern).case_insensitive(true).build()
}

/// A compiled, case-insensitive search.
pub struct PatternSearch {
    kind: PatternKind,
    pattern: String,
    regex: Regex,
}

impl PatternSearch {
    /// Compile an arbitrary user pattern
    pub fn custom(pattern: &str) -> Result<Self, regex::Error> {
        Ok(Self {
            kind: PatternKind::Custom,
            pattern: pattern.to_string(),
            regex: build_regex(pattern)?,
        })
    }

    pub fn email() -> Self {
        Self {
            kind: PatternKind::Email,
            pattern: EMAIL_PATTERN.to_string(),
            regex: EMAIL_REGEX.clone(),
        }
    }

    pub fn url() -> Self {
        Self {
            kind: PatternKind::Url,
            pattern: URL_PATTERN.to_string(),
            regex: URL_REGEX.clone(),
        }
    }

    pub fn kind(&self) -> PatternKind {
        self.kind
    }

    pub fn pattern(&self) -> &str {
        &self.pattern
    }

    /// All non-overlapping matches, in order of appearance
    pub fn find_all(&self, text: &str) -> Vec<String> {
        self.regex
            .find_iter(text)
            .map(|m| m.as_str().to_string())
            .collect()
    }
}
