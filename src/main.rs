//! # fsa-kleene CLI Entry Point
//!
//! Reads an automaton description, writes the derived expression or the
//! diagnostic.

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use fsa_kleene::{FsaError, Outcome, RawInput, Validator};
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use tracing_subscriber::EnvFilter;

/// Validate a finite-state automaton and convert it to a regular expression.
#[derive(Parser, Debug)]
#[command(name = "fsa-kleene", version, about)]
struct Cli {
    /// Five-line automaton description.
    #[arg(short, long, default_value = "fsa.txt")]
    input: PathBuf,

    /// Destination of the result; `-` writes to stdout.
    #[arg(short, long, default_value = "result.txt")]
    output: PathBuf,

    /// Output format.
    #[arg(short, long, value_enum, default_value_t = Format::Text)]
    format: Format,

    /// List every defect instead of only the highest-priority one.
    #[arg(long)]
    all_errors: bool,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum Format {
    Text,
    Json,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let text = fs::read_to_string(&cli.input)
        .with_context(|| format!("failed to read {}", cli.input.display()))?;
    let raw = RawInput::from_text(&text);
    let validator = Validator::new();

    let outcome = fsa_kleene::convert_with(&validator, &raw);
    let rendered = if cli.all_errors && outcome.is_error() {
        render_all(&validator.diagnose(&raw), cli.format)?
    } else {
        render(&outcome, cli.format)?
    };

    write_output(&cli.output, &rendered)
}

fn render(outcome: &Outcome, format: Format) -> Result<String> {
    match format {
        Format::Text => Ok(outcome.to_string()),
        Format::Json => Ok(serde_json::to_string_pretty(&outcome.report())?),
    }
}

fn render_all(errors: &[FsaError], format: Format) -> Result<String> {
    match format {
        Format::Text => {
            let mut text = String::from("Error:");
            for error in errors {
                text.push('\n');
                text.push_str(&error.to_string());
            }
            Ok(text)
        }
        Format::Json => {
            let reports: Vec<_> = errors
                .iter()
                .map(|error| Outcome::Error(error.clone()).report())
                .collect();
            Ok(serde_json::to_string_pretty(&reports)?)
        }
    }
}

fn write_output(path: &Path, rendered: &str) -> Result<()> {
    if path.as_os_str() == "-" {
        let mut stdout = std::io::stdout().lock();
        writeln!(stdout, "{rendered}")?;
        return Ok(());
    }

    tracing::debug!(path = %path.display(), "writing result");
    fs::write(path, rendered).with_context(|| format!("failed to write {}", path.display()))
}
