//! Shape of `tagline.toml` / `tagline.yaml`

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Everything a config file can set; missing keys take defaults
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub versioning: VersioningConfig,

    pub changelog: ChangelogConfig,
}

/// `[versioning]` table
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct VersioningConfig {
    /// Remove a leading `v` from the current tag before calculating
    pub strip_prefix: bool,

    /// Drop any prerelease on the current tag before bumping it
    pub ignore_existing_prerelease: bool,
}

/// `[changelog]` table
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ChangelogConfig {
    /// Set to false to skip changelog generation entirely
    pub enabled: bool,

    /// Relative to the working directory
    pub file: PathBuf,

    /// Commit order within a release (`asc` or `desc`)
    pub sort: String,

    /// Regex patterns; when non-empty a commit must match one of them
    pub include: Vec<String>,

    /// Regex patterns; a commit matching any of them is dropped
    pub exclude: Vec<String>,

    /// Keep the full commit message instead of the first line
    pub multiline: bool,

    /// Discard lines that precede the conventional commit header
    pub trim_header: bool,

    /// Leave prerelease tags out of the changelog
    pub skip_prerelease: bool,

    /// Regenerate a section for every tag
    pub all: bool,
}

impl Default for ChangelogConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            file: PathBuf::from("CHANGELOG.md"),
            sort: "desc".to_string(),
            include: Vec::new(),
            exclude: Vec::new(),
            multiline: false,
            trim_header: false,
            skip_prerelease: false,
            all: false,
        }
    }
}
