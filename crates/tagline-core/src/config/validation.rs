//! Semantic checks on a parsed config

use tracing::debug;

use crate::error::{ConfigError, Result};
use crate::types::SortOrder;

use super::types::Config;

fn invalid(field: &str, message: &str) -> ConfigError {
    ConfigError::InvalidValue {
        field: field.to_string(),
        message: message.to_string(),
    }
}

/// Reject values that deserialize fine but cannot drive a run
pub fn validate_config(config: &Config) -> Result<()> {
    let changelog = &config.changelog;

    if let Err(e) = changelog.sort.parse::<SortOrder>() {
        return Err(invalid("changelog.sort", &e).into());
    }
    if changelog.enabled && changelog.file.as_os_str().is_empty() {
        return Err(invalid("changelog.file", "must name a file while the changelog is enabled").into());
    }

    debug!("config validated");
    Ok(())
}
