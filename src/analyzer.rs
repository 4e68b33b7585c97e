use std::cmp::Reverse;
use std::fs;
use std::path::Path;

use chrono::Local;
use log::{debug, error, info};
use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use crate::error::AnalyzerError;
use crate::formatter;
use crate::patterns::{PatternKind, PatternSearch};
use crate::segment;

/// Number of entries kept in the word-frequency table by default
pub const DEFAULT_TOP_N: usize = 10;

const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Statistics {
    pub char_count: usize,
    pub word_count: usize,
    pub sentence_count: usize,
    pub paragraph_count: usize,
    pub avg_word_length: f64,
    pub avg_sentence_length: f64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WordFrequency {
    /// Most frequent words, count descending, ties in first-seen order
    pub top_words: Vec<(String, usize)>,
    pub unique_words: usize,
    pub top_n: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PatternMatches {
    pub pattern: String,
    pub kind: PatternKind,
    pub matches: Vec<String>,
    pub count: usize,
}

/// Everything computed for one file. Sections stay `None` until the step
/// that fills them succeeds.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AnalysisResult {
    pub file_name: Option<String>,
    pub load_time: Option<String>,
    pub statistics: Option<Statistics>,
    pub word_frequency: Option<WordFrequency>,
    pub pattern_matches: Option<PatternMatches>,
}

pub struct TextAnalyzer {
    content: String,
    results: AnalysisResult,
    top_n: usize,
}

impl Default for TextAnalyzer {
    fn default() -> Self {
        Self::new()
    }
}

impl TextAnalyzer {
    pub fn new() -> Self {
        TextAnalyzer {
            content: String::new(),
            results: AnalysisResult::default(),
            top_n: DEFAULT_TOP_N,
        }
    }

    /// Size of the frequency table built by [`TextAnalyzer::analyze`]
    pub fn with_top_n(mut self, top_n: usize) -> Self {
        self.top_n = top_n;
        self
    }

    /// Read the whole file into memory. On failure nothing is changed.
    pub fn load<P: AsRef<Path>>(&mut self, path: P) -> Result<(), AnalyzerError> {
        let path = path.as_ref();

        let content = match fs::read_to_string(path) {
            Ok(content) => content,
            Err(source) => {
                let err = AnalyzerError::Load {
                    path: path.to_path_buf(),
                    source,
                };
                error!("{}", err);
                return Err(err);
            }
        };

        self.content = segment::normalize_newlines(content);
        self.results.file_name = Some(
            path.file_name()
                .map(|name| name.to_string_lossy().into_owned())
                .unwrap_or_else(|| path.display().to_string()),
        );
        self.results.load_time = Some(Local::now().format(TIMESTAMP_FORMAT).to_string());

        info!(
            "Loaded {} ({} bytes)",
            path.display(),
            self.content.len()
        );
        Ok(())
    }

    fn loaded_content(&self) -> Result<&str, AnalyzerError> {
        if self.content.is_empty() {
            return Err(AnalyzerError::EmptyContent);
        }
        Ok(&self.content)
    }

    pub fn compute_statistics(&mut self) -> Result<(), AnalyzerError> {
        let content = self.loaded_content()?;

        let words = segment::words(content);
        let sentence_count = segment::sentence_count(content);

        let word_count = words.len();
        let total_word_chars: usize = words.iter().map(|w| w.chars().count()).sum();

        let avg_word_length = if word_count > 0 {
            total_word_chars as f64 / word_count as f64
        } else {
            0.0
        };
        let avg_sentence_length = if sentence_count > 0 {
            word_count as f64 / sentence_count as f64
        } else {
            0.0
        };

        let stats = Statistics {
            char_count: content.chars().count(),
            word_count,
            sentence_count,
            paragraph_count: segment::paragraph_count(content),
            avg_word_length,
            avg_sentence_length,
        };

        debug!("Statistics: {:?}", stats);
        self.results.statistics = Some(stats);
        Ok(())
    }

    pub fn compute_word_frequency(&mut self, top_n: usize) -> Result<(), AnalyzerError> {
        let content = self.loaded_content()?;

        // Counts kept in first-seen order so the stable sort breaks ties by it
        let mut index: FxHashMap<String, usize> = FxHashMap::default();
        let mut counts: Vec<(String, usize)> = Vec::new();

        for word in segment::words(content) {
            match index.get(&word) {
                Some(&slot) => counts[slot].1 += 1,
                None => {
                    index.insert(word.clone(), counts.len());
                    counts.push((word, 1));
                }
            }
        }

        let unique_words = counts.len();
        counts.sort_by_key(|&(_, count)| Reverse(count));
        counts.truncate(top_n);

        self.results.word_frequency = Some(WordFrequency {
            top_words: counts,
            unique_words,
            top_n,
        });
        Ok(())
    }

    /// Case-insensitive search for an arbitrary regex. Replaces any earlier
    /// pattern result.
    pub fn find_pattern(&mut self, pattern: &str) -> Result<(), AnalyzerError> {
        self.loaded_content()?;
        let search = PatternSearch::custom(pattern).map_err(|e| {
            error!("Invalid pattern {}: {}", pattern, e);
            AnalyzerError::from(e)
        })?;
        self.run_search(&search)
    }

    pub fn extract_emails(&mut self) -> Result<(), AnalyzerError> {
        self.run_search(&PatternSearch::email())
    }

    pub fn extract_urls(&mut self) -> Result<(), AnalyzerError> {
        self.run_search(&PatternSearch::url())
    }

    fn run_search(&mut self, search: &PatternSearch) -> Result<(), AnalyzerError> {
        let content = self.loaded_content()?;
        let matches = search.find_all(content);

        debug!("{:?} search found {} matches", search.kind(), matches.len());
        self.results.pattern_matches = Some(PatternMatches {
            pattern: search.pattern().to_string(),
            kind: search.kind(),
            count: matches.len(),
            matches,
        });
        Ok(())
    }

    /// Load `path` and run every step. Only the URL search survives in
    /// `pattern_matches`, since each search overwrites the previous one.
    pub fn analyze<P: AsRef<Path>>(&mut self, path: P) -> Result<&AnalysisResult, AnalyzerError> {
        self.load(path)?;

        if let Err(e) = self.compute_statistics() {
            debug!("Skipping statistics: {}", e);
        }
        if let Err(e) = self.compute_word_frequency(self.top_n) {
            debug!("Skipping word frequency: {}", e);
        }
        if let Err(e) = self.extract_emails() {
            debug!("Skipping email extraction: {}", e);
        }
        if let Err(e) = self.extract_urls() {
            debug!("Skipping URL extraction: {}", e);
        }

        Ok(&self.results)
    }

    /// Write the text report for the current results
    pub fn save_results<P: AsRef<Path>>(&self, output_path: P) -> Result<(), AnalyzerError> {
        formatter::save_report(&self.results, output_path)
    }

    pub fn content(&self) -> &str {
        &self.content
    }

    pub fn results(&self) -> &AnalysisResult {
        &self.results
    }

    pub fn into_results(self) -> AnalysisResult {
        self.results
    }

    pub fn statistics(&self) -> Option<&Statistics> {
        self.results.statistics.as_ref()
    }

    pub fn word_frequency(&self) -> Option<&WordFrequency> {
        self.results.word_frequency.as_ref()
    }

    pub fn pattern_matches(&self) -> Option<&PatternMatches> {
        self.results.pattern_matches.as_ref()
    }
}
