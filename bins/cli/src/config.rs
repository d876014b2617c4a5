//! Directory config loading.

use crate::error::CliError;
use outcome_domain::{DirectoryConfig, ErrorInfo, UserDirectory};
use std::fs;
use std::path::Path;

/// Build the user directory from an optional JSON config file.
pub fn load_directory(path: Option<&Path>) -> Result<UserDirectory, CliError> {
    let config = match path {
        Some(path) => read_config(path)?,
        None => DirectoryConfig::default(),
    };

    UserDirectory::new(config)
        .into_result()
        .map_err(CliError::InvalidConfig)
}

fn read_config(path: &Path) -> Result<DirectoryConfig, CliError> {
    let raw = fs::read_to_string(path)?;
    let config = serde_json::from_str::<DirectoryConfig>(&raw).map_err(|error| {
        CliError::InvalidConfig(ErrorInfo::with_cause(
            format!("failed to parse {}", path.display()),
            error,
        ))
    })?;
    tracing::debug!(path = %path.display(), "loaded directory config");
    Ok(config)
}
