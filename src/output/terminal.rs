// Colored terminal output for keyword lists and token dumps.
//
// The CLI delegates all human-readable rendering here; `--json` output goes
// straight to stdout from main.rs instead.

use colored::Colorize;

use crate::keywords::keyword::{Keyword, Language};

const BAR_WIDTH: usize = 20;

/// Display a ranked keyword list as a bar chart.
pub fn display_keywords(title: &str, keywords: &[Keyword]) {
    println!("\n{}", format!("=== {title} ===").bold());
    println!();

    if keywords.is_empty() {
        println!("  {}", "No keywords found.".dimmed());
        println!();
        return;
    }

    for (i, keyword) in keywords.iter().enumerate() {
        println!(
            "  {:>2}. {:<30} {} {:.3}",
            i + 1,
            keyword.word.bold(),
            weight_bar(keyword.weight),
            keyword.weight
        );
    }
    println!();
}

/// Display one language's result of a bilingual extraction.
pub fn display_language(language: Language, keywords: Option<&[Keyword]>) {
    let title = format!("Keywords ({language})");
    match keywords {
        Some(keywords) => display_keywords(&title, keywords),
        None => {
            println!("\n{}", format!("=== {title} ===").bold());
            println!(
                "  {}\n",
                "No result (text or corpus missing, or nothing extracted)".dimmed()
            );
        }
    }
}

/// One line per document in a session run: id, then its top keywords.
pub fn display_session_row(id: &str, keywords: &[Keyword], max_words: usize) {
    let words: Vec<&str> = keywords
        .iter()
        .take(max_words)
        .map(|k| k.word.as_str())
        .collect();
    let id = super::truncate_chars(id, 24);

    if words.is_empty() {
        println!("  {:<28} {}", id, "(no keywords)".dimmed());
    } else {
        println!("  {:<28} {}", id, super::truncate_chars(&words.join(", "), 90));
    }
}

/// Print tokens comma-separated, with a count header.
pub fn display_tokens(tokens: &[String]) {
    println!("{} tokens", tokens.len().to_string().bold());
    if !tokens.is_empty() {
        println!("{}", tokens.join(", ").dimmed());
    }
}

fn weight_bar(weight: f64) -> colored::ColoredString {
    let filled = ((weight * BAR_WIDTH as f64).round() as usize).min(BAR_WIDTH);
    let bar = format!(
        "[{}{}]",
        "=".repeat(filled),
        " ".repeat(BAR_WIDTH - filled)
    );

    // Color the bar based on weight
    if weight >= 0.66 {
        bar.bright_green()
    } else if weight >= 0.33 {
        bar.bright_yellow()
    } else {
        bar.bright_blue()
    }
}
