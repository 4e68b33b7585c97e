pub mod analyzer;
pub mod cli;
pub mod error;
pub mod formatter;
pub mod patterns;
pub mod segment;

use std::path::Path;

// Re-export key types for convenience
pub use analyzer::{
    AnalysisResult, DEFAULT_TOP_N, PatternMatches, Statistics, TextAnalyzer, WordFrequency,
};
pub use cli::Args;
pub use error::AnalyzerError;
pub use patterns::PatternKind;

/// Analyze `input` and write the text report to `output`.
pub fn run<P: AsRef<Path>, Q: AsRef<Path>>(
    input: P,
    output: Q,
) -> Result<AnalysisResult, AnalyzerError> {
    let mut analyzer = TextAnalyzer::new();
    analyzer.analyze(input)?;
    analyzer.save_results(output)?;
    Ok(analyzer.into_results())
}
