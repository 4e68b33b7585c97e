use std::env;
use std::fs::File;
use std::io::{self, Write};
use std::path::Path;

const SAMPLE_TEXT: &str = "This is a sample text file for testing the AI text parser.

The parser should be able to analyze this content and extract useful information.
For example, it can find email addresses like test@example.com or contact@company.org.

It can also identify URLs like https://www.example.com or http://test.site/path?query=string.

The word frequency analysis will show that common words like 'the' and 'is' appear often,
while specific terms might appear less frequently.

For pattern matching, we can include special numbers like 123-45-6789 or dates like 2023-01-15.

Let's include another paragraph here to test paragraph counting.

And one more for good measure!";

/// Writes the sample document used to demonstrate the analyzer.
fn main() -> io::Result<()> {
    let args: Vec<String> = env::args().collect();
    if args.len() > 2 {
        eprintln!("Usage: {} [output-file]", args[0]);
        std::process::exit(1);
    }

    let file_path = args.get(1).map(String::as_str).unwrap_or("sample_input.txt");

    create_sample_text(file_path)?;
    println!("Sample input file created at {}", file_path);

    Ok(())
}

fn create_sample_text(file_path: &str) -> io::Result<()> {
    // Create output directory if needed
    if let Some(parent) = Path::new(file_path).parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)?;
        }
    }

    let mut file = File::create(file_path)?;
    file.write_all(SAMPLE_TEXT.as_bytes())?;

    Ok(())
}
