use crate::Suggestion;
use colored::*;
use serde::Serialize;
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy)]
pub enum OutputFormat {
    Text,
    Json,
}

impl FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "text" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            _ => Err(format!("Unknown format: {}", s)),
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OutputFormat::Text => write!(f, "text"),
            OutputFormat::Json => write!(f, "json"),
        }
    }
}

/// One checked address and the correction found for it, if any
#[derive(Debug, Clone, Serialize)]
pub struct CheckedEmail {
    pub email: String,
    pub suggestion: Option<Suggestion>,
}

#[derive(Debug, Serialize)]
struct JsonOutput<'a> {
    checked: usize,
    suggested: usize,
    results: &'a [CheckedEmail],
}

pub fn suggestion_count(results: &[CheckedEmail]) -> usize {
    results.iter().filter(|r| r.suggestion.is_some()).count()
}

pub fn print_results(
    results: &[CheckedEmail],
    colored_output: bool,
    format: &OutputFormat,
) -> serde_json::Result<()> {
    match format {
        OutputFormat::Text => {
            print_text_results(results, colored_output);
            Ok(())
        }
        OutputFormat::Json => print_json_results(results),
    }
}

fn print_text_results(results: &[CheckedEmail], colored_output: bool) {
    for result in results {
        let Some(suggestion) = &result.suggestion else {
            continue;
        };

        if colored_output {
            println!(
                "{} {} did you mean {}?",
                result.email.red().bold(),
                "→".dimmed(),
                suggestion.full.green().bold()
            );
        } else {
            println!("{} → did you mean {}?", result.email, suggestion.full);
        }
    }
}

fn print_json_results(results: &[CheckedEmail]) -> serde_json::Result<()> {
    let output = JsonOutput {
        checked: results.len(),
        suggested: suggestion_count(results),
        results,
    };

    println!("{}", serde_json::to_string_pretty(&output)?);
    Ok(())
}

pub fn print_summary(total_suggested: usize, total_checked: usize, colored: bool) {
    println!();
    let address_word = if total_checked == 1 { "address" } else { "addresses" };
    if total_suggested == 0 {
        if colored {
            println!(
                "{} {}",
                "✓ No likely typos found in".green().bold(),
                format!("{} {}", total_checked, address_word).green().bold()
            );
        } else {
            println!("✓ No likely typos found in {} {}", total_checked, address_word);
        }
    } else {
        let suggestion_word = if total_suggested == 1 {
            "suggestion"
        } else {
            "suggestions"
        };
        if colored {
            println!(
                "{} {} {} for {} {}",
                "✗".red().bold(),
                total_suggested.to_string().red().bold(),
                suggestion_word,
                total_checked,
                address_word
            );
        } else {
            println!(
                "✗ {} {} for {} {}",
                total_suggested, suggestion_word, total_checked, address_word
            );
        }
    }
}
