//! Info command handler.

use crate::CliOutput;
use crate::error::{CliError, ExitCode};
use crate::format::OutputFormat;
use outcome_domain::{domain_crate_version, shared_crate_version};

/// Run the info command.
pub fn run_info(format: OutputFormat) -> Result<CliOutput, CliError> {
    let name = env!("CARGO_PKG_NAME");
    let version = env!("CARGO_PKG_VERSION");

    let stdout = match format {
        OutputFormat::Text => format!(
            "status: ok\nname: {name}\nversion: {version}\nshared: {}\ndomain: {}\n",
            shared_crate_version(),
            domain_crate_version()
        ),
        OutputFormat::Json => {
            let payload = serde_json::json!({
                "status": "ok",
                "build": {
                    "name": name,
                    "version": version,
                    "sharedVersion": shared_crate_version(),
                    "domainVersion": domain_crate_version(),
                }
            });
            let mut output = serde_json::to_string_pretty(&payload)?;
            output.push('\n');
            output
        },
    };

    Ok(CliOutput {
        stdout,
        exit_code: ExitCode::Ok,
    })
}
