//! User directory command handlers.

use crate::CliOutput;
use crate::error::{CliError, ExitCode};
use crate::format::{OutputFormat, render_outcome};
use outcome_domain::{Outcome, UserDirectory};
use serde::Serialize;
use std::fmt;

/// Run the lookup command.
pub fn run_lookup(
    directory: &UserDirectory,
    id: i64,
    format: OutputFormat,
) -> Result<CliOutput, CliError> {
    tracing::info!(user_id = id, "looking up user");
    outcome_output(&directory.find_user_by_id(id), format)
}

/// Run the discount command.
pub fn run_discount(
    directory: &UserDirectory,
    id: i64,
    format: OutputFormat,
) -> Result<CliOutput, CliError> {
    tracing::info!(user_id = id, "computing discount");
    outcome_output(&directory.discount_label(id), format)
}

/// Run the resolve command.
pub fn run_resolve(
    directory: &UserDirectory,
    id: i64,
    format: OutputFormat,
) -> Result<CliOutput, CliError> {
    tracing::info!(user_id = id, "resolving customer");
    outcome_output(&directory.resolve_customer(id), format)
}

fn outcome_output<T>(outcome: &Outcome<T>, format: OutputFormat) -> Result<CliOutput, CliError>
where
    T: fmt::Display + Serialize,
{
    let exit_code = match outcome {
        Outcome::Success(_) => ExitCode::Ok,
        Outcome::Failure(error) => {
            tracing::info!(error = %error, "operation produced a failure");
            ExitCode::DomainFailure
        },
    };

    Ok(CliOutput {
        stdout: render_outcome(outcome, format)?,
        exit_code,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lookup_success_exits_ok() -> Result<(), CliError> {
        let output = run_lookup(&UserDirectory::default(), 42, OutputFormat::Text)?;
        assert_eq!(output.exit_code, ExitCode::Ok);
        assert_eq!(output.stdout, "status: success\nvalue: User42\n");
        Ok(())
    }

    #[test]
    fn lookup_failure_exits_with_domain_failure() -> Result<(), CliError> {
        let output = run_lookup(&UserDirectory::default(), -1, OutputFormat::Text)?;
        assert_eq!(output.exit_code, ExitCode::DomainFailure);
        assert!(output.stdout.contains("Invalid user ID: -1"));
        Ok(())
    }

    #[test]
    fn resolve_recovers_to_guest() -> Result<(), CliError> {
        let output = run_resolve(&UserDirectory::default(), 2000, OutputFormat::Text)?;
        assert_eq!(output.exit_code, ExitCode::Ok);
        assert_eq!(output.stdout, "status: success\nvalue: GuestUser\n");
        Ok(())
    }
}
