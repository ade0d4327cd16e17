// Colored terminal output for statistics, summaries, topics and batch runs.
//
// This module handles all terminal-specific formatting. The main.rs command
// handlers delegate here unless `--json` is set.

use colored::Colorize;

use crate::analysis::TextStats;
use crate::language::Detection;
use crate::pipeline::batch::BatchReport;
use crate::summarize::{Strategy, Summary};

/// Display text statistics as an aligned table.
pub fn display_stats(stats: &TextStats) {
    println!("\n{}", "=== Text Statistics ===".bold());
    println!();

    let rows = [
        ("Total words", stats.total_words),
        ("Total characters", stats.total_characters),
        ("Total sentences", stats.total_sentences),
        ("Words repeated twice", stats.single_repeated),
        ("Words repeated 3 times", stats.double_repeated),
        ("Words repeated 4 times", stats.triple_repeated),
    ];
    for (label, value) in rows {
        println!("  {:<24} {:>8}", label.dimmed(), value);
    }
    println!();
}

/// Display a summary with the strategy that produced it.
pub fn display_summary(summary: &Summary) {
    println!(
        "\n{}",
        format!(
            "=== Summary ({} of {} sentences, {}) ===",
            summary.selected.len(),
            summary.total_sentences,
            colorize_strategy(summary.strategy)
        )
        .bold()
    );
    println!();

    if summary.text.is_empty() {
        println!("  {}", "Nothing to summarize.".dimmed());
    } else {
        println!("{}", summary.text);
    }
    println!();
}

/// Display a ranked topic list.
pub fn display_topics(topics: &[String]) {
    println!("\n{}", format!("=== Topics ({}) ===", topics.len()).bold());
    println!();

    if topics.is_empty() {
        println!("  {}", "No qualifying topics found.".dimmed());
    }
    for (i, topic) in topics.iter().enumerate() {
        println!("  {:>2}. {}", i + 1, topic.bright_green());
    }
    println!();
}

/// Display a language detection result.
pub fn display_language(detection: Option<&Detection>) {
    match detection {
        Some(d) => println!(
            "Language: {} ({}) {}",
            d.label().bold(),
            d.short_code(),
            format!(
                "[{:.0}% confidence{}]",
                d.confidence * 100.0,
                if d.reliable { "" } else { ", unreliable" }
            )
            .dimmed()
        ),
        None => println!("Language: {}", "could not detect".yellow()),
    }
}

/// Display one line per document of a batch run, then any failures.
pub fn display_batch(report: &BatchReport) {
    println!(
        "\n{}",
        format!("=== Batch Report ({} documents) ===", report.documents.len()).bold()
    );
    println!();

    println!(
        "  {:<28} {:>7} {:>6}  {:<11} {:<5}  {}",
        "Document".dimmed(),
        "Words".dimmed(),
        "Sents".dimmed(),
        "Strategy".dimmed(),
        "Lang".dimmed(),
        "Topics".dimmed(),
    );
    println!("  {}", "-".repeat(78).dimmed());

    for doc in &report.documents {
        let lang = doc.language.as_ref().map_or("?", Detection::short_code);
        println!(
            "  {:<28} {:>7} {:>6}  {:<11} {:<5}  {}",
            super::truncate_chars(&doc.name, 25),
            doc.stats.total_words,
            doc.stats.total_sentences,
            colorize_strategy(doc.summary.strategy),
            lang,
            doc.topics.join(", "),
        );
        if !doc.summary.text.is_empty() {
            println!("      {}", super::truncate_chars(&doc.summary.text, 140).dimmed());
        }
    }
    println!();

    if !report.failed.is_empty() {
        println!(
            "  {} {} documents failed: {}",
            "!".bright_red(),
            report.failed.len(),
            report.failed.join(", ")
        );
    }
}

/// Colorize a strategy name.
fn colorize_strategy(strategy: Strategy) -> colored::ColoredString {
    match strategy {
        Strategy::Lsa => strategy.as_str().green(),
        Strategy::Frequency => strategy.as_str().yellow(),
        Strategy::Passthrough => strategy.as_str().dimmed(),
    }
}
