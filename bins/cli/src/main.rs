//! CLI binary entrypoint.

mod commands;
mod config;
mod error;
mod format;
mod logging;

use clap::{Parser, Subcommand};
use commands::{run_discount, run_info, run_lookup, run_resolve};
use config::load_directory;
use error::{CliError, ExitCode};
use format::OutputArgs;
use std::io::{self, Write};
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(
    name = "outcome",
    version,
    about = "User directory lookups rendered as outcomes",
    long_about = None
)]
struct Cli {
    #[command(flatten)]
    output: OutputArgs,

    /// Directory config file (JSON). Defaults to the built-in rules.
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Emit debug logs on stderr (`OUTCOME_LOG` takes precedence).
    #[arg(long, short, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Show build and version details.
    Info,
    /// Look up a user by id.
    Lookup {
        /// User id.
        #[arg(long, allow_negative_numbers = true)]
        id: i64,
    },
    /// Compute the discount label for a user id.
    Discount {
        /// User id.
        #[arg(long, allow_negative_numbers = true)]
        id: i64,
    },
    /// Resolve a customer name, falling back to the guest name.
    Resolve {
        /// User id.
        #[arg(long, allow_negative_numbers = true)]
        id: i64,
    },
}

pub(crate) struct CliOutput {
    stdout: String,
    exit_code: ExitCode,
}

fn main() -> std::process::ExitCode {
    let cli = Cli::parse();
    logging::init_logging(cli.verbose);

    match run(&cli) {
        Ok(output) => match write_output(&output) {
            Ok(()) => std::process::ExitCode::from(output.exit_code.as_u8()),
            Err(error) => exit_with_error(&error),
        },
        Err(error) => exit_with_error(&error),
    }
}

fn exit_with_error(error: &CliError) -> std::process::ExitCode {
    tracing::error!(error = %error, "command failed");
    let _ = writeln!(io::stderr(), "error: {error}");
    std::process::ExitCode::from(error.exit_code().as_u8())
}

fn run(cli: &Cli) -> Result<CliOutput, CliError> {
    let format = cli.output.format;
    match cli.command {
        Commands::Info => run_info(format),
        Commands::Lookup { id } => run_lookup(&load_directory(cli.config.as_deref())?, id, format),
        Commands::Discount { id } => {
            run_discount(&load_directory(cli.config.as_deref())?, id, format)
        },
        Commands::Resolve { id } => {
            run_resolve(&load_directory(cli.config.as_deref())?, id, format)
        },
    }
}

fn write_output(output: &CliOutput) -> Result<(), CliError> {
    let mut stdout = io::stdout();
    stdout.write_all(output.stdout.as_bytes())?;
    stdout.flush()?;
    Ok(())
}
