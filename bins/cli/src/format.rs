//! Output format helpers for CLI commands.

use crate::error::CliError;
use clap::{Args, ValueEnum};
use outcome_shared::Outcome;
use serde::Serialize;
use std::fmt::{self, Write as _};

/// Output format choices for CLI responses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Human-friendly text output.
    Text,
    /// Machine-friendly JSON output.
    Json,
}

/// Output-related CLI flags.
#[derive(Debug, Args)]
pub struct OutputArgs {
    /// Output format for command responses.
    #[arg(long = "output", global = true, value_enum, default_value = "text")]
    pub format: OutputFormat,
}

/// Render an outcome in the requested format.
pub fn render_outcome<T>(outcome: &Outcome<T>, format: OutputFormat) -> Result<String, CliError>
where
    T: fmt::Display + Serialize,
{
    match format {
        OutputFormat::Text => Ok(render_outcome_text(outcome)),
        OutputFormat::Json => {
            let mut output = serde_json::to_string_pretty(outcome)?;
            output.push('\n');
            Ok(output)
        },
    }
}

fn render_outcome_text<T: fmt::Display>(outcome: &Outcome<T>) -> String {
    match outcome {
        Outcome::Success(value) => format!("status: success\nvalue: {value}\n"),
        Outcome::Failure(error) => {
            let mut output = format!("status: failure\nerror: {error}\n");
            for cause in error.causes() {
                let _ = writeln!(output, "cause: {cause}");
            }
            output
        },
    }
}
