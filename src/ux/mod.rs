use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};

use crate::wire::{BatchEntry, GenerateRequest};

pub fn print_single_result(result: &str) {
    println!("\n{}", "=== ENHANCED PROMPT ===".bold());
    println!("{}\n", result);
}

pub fn print_error(message: &str) {
    eprintln!("{} {}", "error:".red().bold(), message);
}

pub fn batch_progress_bar(total: usize) -> ProgressBar {
    let bar = ProgressBar::new(total as u64);
    bar.set_style(
        ProgressStyle::with_template("{bar:30.cyan/blue} Processing prompt {pos} of {len}...")
            .unwrap_or_else(|_| ProgressStyle::default_bar()),
    );
    bar
}

fn label_for(index: usize, submitted: &[GenerateRequest]) -> String {
    let base = format!("Prompt #{}", index + 1);
    match submitted.get(index).map(|item| item.prompt.as_str()) {
        Some(prompt) if !prompt.is_empty() => {
            let short: String = prompt.chars().take(50).collect();
            let ellipsis = if prompt.chars().count() > 50 { "..." } else { "" };
            format!("{base} — {short}{ellipsis}")
        }
        _ => base,
    }
}

pub fn print_batch_results(results: &[BatchEntry], submitted: &[GenerateRequest]) {
    let ok = results.iter().filter(|r| r.result.is_some()).count();
    println!(
        "\n{} ({} of {} successful)",
        "=== GENERATED PROMPTS ===".bold(),
        ok,
        results.len()
    );

    for entry in results {
        println!("\n{}", label_for(entry.index, submitted).cyan().bold());
        match (&entry.result, &entry.error) {
            (Some(result), _) => println!("{}", result),
            (None, Some(error)) => println!("{} {}", "[FAILED]".red().bold(), error),
            (None, None) => {}
        }
    }
    println!();
}
