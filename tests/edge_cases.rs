// tests/edge_cases.rs
use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use std::io::Write;
use tempfile::{NamedTempFile, tempdir};
use textscope::analyzer::TextAnalyzer;

#[test]
fn test_empty_file() {
    let temp_file = NamedTempFile::new().unwrap();
    let dir = tempdir().unwrap();
    let output = dir.path().join("report.txt");

    let mut cmd = Command::cargo_bin("textscope").unwrap();
    let assert = cmd.arg(temp_file.path()).arg("-o").arg(&output).assert();

    assert
        .success()
        .stdout(predicate::str::contains("- Word count: 0"));

    let report = fs::read_to_string(&output).unwrap();
    assert!(report.contains("- Characters: 0\n"));
    assert!(report.contains("- Unique words: 0\n"));
    assert!(!report.contains("URLs found"));
}

#[test]
fn test_whitespace_only_file() {
    let mut temp_file = NamedTempFile::new().unwrap();
    write!(temp_file, "   \n\n\t\n\n  ").unwrap();

    let mut analyzer = TextAnalyzer::new();
    let result = analyzer.analyze(temp_file.path()).unwrap();
    let stats = result.statistics.as_ref().unwrap();

    assert_eq!(stats.char_count, 10);
    assert_eq!(stats.word_count, 0);
    assert_eq!(stats.sentence_count, 0);
    assert_eq!(stats.paragraph_count, 0);
    assert_eq!(result.pattern_matches.as_ref().unwrap().count, 0);
}

#[test]
fn test_non_ascii_characters() {
    let mut temp_file = NamedTempFile::new().unwrap();
    writeln!(temp_file, "Résumé upload failed. Ümlaut encoding issue!").unwrap();
    writeln!(temp_file, "你好，世界! (Hello, world!)").unwrap();

    let mut analyzer = TextAnalyzer::new();
    let result = analyzer.analyze(temp_file.path()).unwrap();
    let freq = result.word_frequency.as_ref().unwrap();

    assert!(freq.top_words.iter().any(|(w, _)| w == "résumé"));
    assert!(freq.top_words.iter().any(|(w, _)| w == "ümlaut"));
}

#[test]
fn test_many_urls_elided_in_report() {
    let mut temp_file = NamedTempFile::new().unwrap();
    for i in 0..6 {
        writeln!(temp_file, "Link {} is http://host{}.example.com/page", i, i).unwrap();
    }
    let dir = tempdir().unwrap();
    let output = dir.path().join("report.txt");

    Command::cargo_bin("textscope")
        .unwrap()
        .arg(temp_file.path())
        .arg("-o")
        .arg(&output)
        .arg("--quiet")
        .assert()
        .success();

    let report = fs::read_to_string(&output).unwrap();
    assert!(report.contains("URLs found: 6\n"));
    assert!(report.contains("- http://host2.example.com/page\n"));
    assert!(!report.contains("host3"));
    assert!(report.ends_with("- ... and 3 more\n"));
}
