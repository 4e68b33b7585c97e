use crate::analyzer::{AnalysisResult, DEFAULT_TOP_N};
use crate::error::AnalyzerError;
use crate::patterns::PatternKind;
use log::{error, info};
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;

const MAX_EMAILS_SHOWN: usize = 5;
const MAX_URLS_SHOWN: usize = 3;

/// Write the fixed-layout text report. Missing sections fall back to
/// "N/A" or zero.
pub fn write_report<W: Write>(result: &AnalysisResult, writer: &mut W) -> io::Result<()> {
    writeln!(writer, "Text File Analysis Report")?;
    writeln!(writer, "{}", "=".repeat(40))?;
    writeln!(
        writer,
        "File: {}",
        result.file_name.as_deref().unwrap_or("N/A")
    )?;
    writeln!(
        writer,
        "Analyzed at: {}\n",
        result.load_time.as_deref().unwrap_or("N/A")
    )?;

    let stats = result.statistics.clone().unwrap_or_default();
    writeln!(writer, "Basic Statistics:")?;
    writeln!(writer, "- Characters: {}", stats.char_count)?;
    writeln!(writer, "- Words: {}", stats.word_count)?;
    writeln!(writer, "- Sentences: {}", stats.sentence_count)?;
    writeln!(writer, "- Paragraphs: {}", stats.paragraph_count)?;
    writeln!(writer, "- Avg word length: {:.2}", stats.avg_word_length)?;
    writeln!(
        writer,
        "- Avg sentence length: {:.2} words\n",
        stats.avg_sentence_length
    )?;

    writeln!(writer, "Word Frequency:")?;
    match &result.word_frequency {
        Some(freq) => {
            writeln!(writer, "- Unique words: {}", freq.unique_words)?;
            writeln!(writer, "- Top {} words:", freq.top_n)?;
            for (word, count) in &freq.top_words {
                writeln!(writer, "  {}: {}", word, count)?;
            }
        }
        None => {
            writeln!(writer, "- Unique words: 0")?;
            writeln!(writer, "- Top {} words:", DEFAULT_TOP_N)?;
        }
    }
    writeln!(writer)?;

    if let Some(found) = &result.pattern_matches {
        match found.kind {
            PatternKind::Email if found.count > 0 => {
                writeln!(writer, "Email addresses found: {}", found.count)?;
                for email in found.matches.iter().take(MAX_EMAILS_SHOWN) {
                    writeln!(writer, "- {}", email)?;
                }
                if found.count > MAX_EMAILS_SHOWN {
                    writeln!(writer, "- ... and {} more", found.count - MAX_EMAILS_SHOWN)?;
                }
                writeln!(writer)?;
            }
            PatternKind::Url if found.count > 0 => {
                writeln!(writer, "URLs found: {}", found.count)?;
                for url in found.matches.iter().take(MAX_URLS_SHOWN) {
                    writeln!(writer, "- {}", url)?;
                }
                if found.count > MAX_URLS_SHOWN {
                    writeln!(writer, "- ... and {} more", found.count - MAX_URLS_SHOWN)?;
                }
            }
            // Custom searches and empty results have no report block
            _ => {}
        }
    }

    Ok(())
}

/// Render the report into a string
pub fn render_report(result: &AnalysisResult) -> String {
    let mut buffer = Vec::new();
    // Writing into a Vec cannot fail
    let _ = write_report(result, &mut buffer);
    String::from_utf8_lossy(&buffer).into_owned()
}

/// Write the report to `output_path`, replacing any existing file.
pub fn save_report<P: AsRef<Path>>(
    result: &AnalysisResult,
    output_path: P,
) -> Result<(), AnalyzerError> {
    let path = output_path.as_ref();

    let write_file = || -> io::Result<()> {
        let mut writer = BufWriter::new(File::create(path)?);
        write_report(result, &mut writer)?;
        writer.flush()
    };

    write_file().map_err(|source| {
        let err = AnalyzerError::Write {
            path: path.to_path_buf(),
            source,
        };
        error!("{}", err);
        err
    })?;

    info!("Report saved to {}", path.display());
    Ok(())
}

/// Pretty-printed JSON of the whole result record
pub fn render_json(result: &AnalysisResult) -> serde_json::Result<String> {
    serde_json::to_string_pretty(result)
}

/// Short console summary of the headline numbers
pub fn print_summary<W: Write>(result: &AnalysisResult, writer: &mut W) -> io::Result<()> {
    let word_count = result.statistics.as_ref().map_or(0, |s| s.word_count);
    let unique_words = result.word_frequency.as_ref().map_or(0, |f| f.unique_words);

    writeln!(writer, "Summary of findings:")?;
    writeln!(writer, "- Word count: {}", word_count)?;
    writeln!(writer, "- Unique words: {}", unique_words)?;

    match &result.pattern_matches {
        Some(found) => {
            let label = match found.kind {
                PatternKind::Email => "Emails found",
                PatternKind::Url => "URLs found",
                PatternKind::Custom => "Pattern matches",
            };
            writeln!(writer, "- {}: {}", label, found.count)?;
        }
        None => writeln!(writer, "- Pattern matches: 0")?,
    }

    Ok(())
}
