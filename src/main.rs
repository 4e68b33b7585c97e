use clap::Parser;
use env_logger::Env;
use std::io;
use std::process::ExitCode;

use textscope::analyzer::TextAnalyzer;
use textscope::cli::Args;
use textscope::formatter::{print_summary, render_json, render_report};

fn main() -> ExitCode {
    env_logger::Builder::from_env(Env::default().default_filter_or("warn")).init();

    let args = Args::parse();
    println!("\nAnalyzing file: {}", args.file);

    let mut analyzer = TextAnalyzer::new().with_top_n(args.top);
    if let Err(e) = analyzer.analyze(&args.file) {
        eprintln!("File analysis failed: {}", e);
        return ExitCode::FAILURE;
    }

    // A custom search replaces the stored URL matches, so run it last
    if let Some(pattern) = &args.pattern {
        match analyzer.find_pattern(pattern) {
            Ok(()) => {
                if let Some(found) = analyzer.pattern_matches() {
                    println!("Pattern '{}' matched {} time(s)", pattern, found.count);
                    for m in &found.matches {
                        println!("  {}", m);
                    }
                }
            }
            Err(e) => {
                eprintln!("Pattern search failed: {}", e);
                return ExitCode::FAILURE;
            }
        }
    }

    if let Err(e) = analyzer.save_results(&args.output) {
        eprintln!("Failed to save analysis results: {}", e);
        return ExitCode::FAILURE;
    }
    println!("Analysis complete. Report saved to {}", args.output);

    let results = analyzer.results();
    if args.json {
        match render_json(results) {
            Ok(json) => println!("{}", json),
            Err(e) => {
                eprintln!("Failed to serialize results: {}", e);
                return ExitCode::FAILURE;
            }
        }
    } else {
        println!();
        if let Err(e) = print_summary(results, &mut io::stdout()) {
            eprintln!("Failed to print summary: {}", e);
            return ExitCode::FAILURE;
        }
    }

    if !args.quiet {
        println!("\nReport content:");
        print!("{}", render_report(results));
    }

    ExitCode::SUCCESS
}
