//! Command-line interface for statute pattern matching.

use std::fs;
use std::io::Read;
use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand};
use console::style;

use crate::details::StatuteDetails;
use crate::error::Result;
use crate::extract::{count_rules, extract_rules};
use crate::rule::Rule;

/// Statute Patterns - Detect Philippine statute citations in text.
#[derive(Parser)]
#[command(name = "statute-patterns")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// List every statute rule mentioned in the input text.
    Extract {
        /// Text to scan; read from stdin when omitted.
        text: Option<String>,

        /// Read the text from a file instead.
        #[arg(short, long, conflicts_with = "text")]
        file: Option<PathBuf>,

        /// Emit JSON instead of plain lines.
        #[arg(long)]
        json: bool,
    },

    /// Count mentions per unique rule in the input text.
    Count {
        /// Text to scan; read from stdin when omitted.
        text: Option<String>,

        /// Read the text from a file instead.
        #[arg(short, long, conflicts_with = "text")]
        file: Option<PathBuf>,

        /// Emit JSON instead of plain lines.
        #[arg(long)]
        json: bool,
    },

    /// Show the canonical serial title of a rule.
    Title {
        /// Category code (e.g., ra, pd, const)
        category: String,

        /// Serial identifier (e.g., 386)
        id: String,
    },

    /// Load statute details for a rule from a local corpus.
    Details {
        /// Category code (e.g., ra, pd, const)
        category: String,

        /// Serial identifier (e.g., 386)
        id: String,

        /// Base directory of the statute corpus.
        #[arg(short, long)]
        base: PathBuf,
    },
}

/// Run the CLI.
pub fn run() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Extract { text, file, json } => {
            let input = read_input(text, file.as_deref())?;
            extract_command(&input, json)
        }
        Commands::Count { text, file, json } => {
            let input = read_input(text, file.as_deref())?;
            count_command(&input, json)
        }
        Commands::Title { category, id } => title_command(&category, &id),
        Commands::Details { category, id, base } => details_command(&category, &id, &base),
    }
}

/// Resolve the input text from an argument, a file, or stdin.
fn read_input(text: Option<String>, file: Option<&Path>) -> Result<String> {
    if let Some(text) = text {
        return Ok(text);
    }
    if let Some(path) = file {
        return Ok(fs::read_to_string(path)?);
    }
    let mut buffer = String::new();
    std::io::stdin().read_to_string(&mut buffer)?;
    Ok(buffer)
}

fn extract_command(text: &str, json: bool) -> Result<()> {
    let rules = extract_rules(text);
    if json {
        println!("{}", serde_json::to_string_pretty(&rules)?);
        return Ok(());
    }
    if rules.is_empty() {
        println!("{}", style("No statute citations found.").yellow());
        return Ok(());
    }
    for rule in rules {
        println!(
            "{} {}",
            style(rule.category.code()).cyan(),
            style(&rule.id).green()
        );
    }
    Ok(())
}

fn count_command(text: &str, json: bool) -> Result<()> {
    let counts = count_rules(text);
    if json {
        println!("{}", serde_json::to_string_pretty(&counts)?);
        return Ok(());
    }
    if counts.is_empty() {
        println!("{}", style("No statute citations found.").yellow());
        return Ok(());
    }
    for count in counts {
        println!(
            "{} {} {}",
            style(count.category.code()).cyan(),
            style(&count.id).green(),
            style(format!("x{}", count.mentions)).bold()
        );
    }
    Ok(())
}

fn title_command(category: &str, id: &str) -> Result<()> {
    let rule = Rule::from_parts(category, id)?;
    println!("{}", rule.serial_title()?);
    Ok(())
}

fn details_command(category: &str, id: &str, base: &Path) -> Result<()> {
    let rule = Rule::from_parts(category, id)?;
    match StatuteDetails::from_rule(&rule, base)? {
        Some(details) => println!("{}", serde_json::to_string_pretty(&details)?),
        None => println!(
            "{} {}",
            style("No details found for").yellow(),
            style(rule.to_string()).cyan()
        ),
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_parse_extract() {
        let cli = Cli::parse_from(["statute-patterns", "extract", "R.A. 386"]);

        let Commands::Extract { text, file, json } = cli.command else {
            panic!("expected extract command");
        };
        assert_eq!(text, Some("R.A. 386".to_string()));
        assert!(file.is_none());
        assert!(!json);
    }

    #[test]
    fn test_cli_parse_count_json() {
        let cli = Cli::parse_from(["statute-patterns", "count", "--json", "R.A. 386"]);

        let Commands::Count { text, json, .. } = cli.command else {
            panic!("expected count command");
        };
        assert_eq!(text, Some("R.A. 386".to_string()));
        assert!(json);
    }

    #[test]
    fn test_cli_parse_title() {
        let cli = Cli::parse_from(["statute-patterns", "title", "ra", "386"]);

        let Commands::Title { category, id } = cli.command else {
            panic!("expected title command");
        };
        assert_eq!(category, "ra");
        assert_eq!(id, "386");
    }
}
