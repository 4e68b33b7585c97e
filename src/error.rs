use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Everything that can go wrong while analyzing a text file.
#[derive(Debug, Error)]
pub enum AnalyzerError {
    /// The input file is missing, unreadable, or not valid UTF-8
    #[error("Error loading file {}: {source}", .path.display())]
    Load {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// A compute step ran before any content was loaded
    #[error("No content loaded")]
    EmptyContent,

    /// The report could not be written
    #[error("Error saving results to {}: {source}", .path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Invalid pattern: {0}")]
    InvalidPattern(#[from] regex::Error),
}
