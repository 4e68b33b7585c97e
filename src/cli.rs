use clap::Parser;

use crate::analyzer::DEFAULT_TOP_N;

#[derive(Parser, Debug)]
#[clap(name = "textscope")]
#[clap(about = "Textscope: statistics, word frequency and pattern extraction for text files", long_about = None)]
#[clap(version = env!("CARGO_PKG_VERSION"))]
pub struct Args {
    /// Text file to analyze
    pub file: String,

    /// Where to write the report
    #[clap(short, long, default_value = "analysis_report.txt")]
    pub output: String,

    /// Number of most frequent words to list
    #[clap(long, default_value_t = DEFAULT_TOP_N)]
    pub top: usize,

    /// Extra regex to search for after the standard analysis (case-insensitive)
    #[clap(short, long)]
    pub pattern: Option<String>,

    /// Print the result record as JSON instead of the summary
    #[clap(long)]
    pub json: bool,

    /// Don't echo the report to stdout
    #[clap(short, long)]
    pub quiet: bool,
}
