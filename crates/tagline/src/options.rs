//! Per-invocation release options

use std::path::PathBuf;

use tagline_changelog::{AssemblerOptions, MessageStyle};
use tagline_core::config::Config;
use tagline_core::error::{ConfigError, Result};
use tagline_core::SortOrder;
use tagline_git::ScmLinks;
use tagline_version::{parse_prerelease_suffix, NextVersionOptions};

/// Everything one run of tagline needs to know, fixed before it starts
#[derive(Debug, Clone)]
pub struct ReleaseOptions {
    /// Remove a leading `v` from the current tag before calculating
    pub strip_prefix: bool,
    /// Drop any prerelease on the current tag before bumping it
    pub ignore_existing_prerelease: bool,
    /// Prerelease to stamp onto the next version
    pub prerelease: String,
    /// Build metadata to stamp onto the next version
    pub metadata: String,

    pub changelog_enabled: bool,
    pub changelog_file: PathBuf,
    pub sort: SortOrder,
    pub include: Vec<String>,
    pub exclude: Vec<String>,
    pub multiline: bool,
    pub trim_header: bool,
    pub skip_prerelease: bool,
    /// Regenerate the whole changelog from every tag
    pub all: bool,
    /// Write changelog sections to a stream instead of the file
    pub diff_only: bool,
    /// Create a transient tag for the next version before assembling
    pub pre_tag: bool,
    pub links: Option<ScmLinks>,
}

impl Default for ReleaseOptions {
    fn default() -> Self {
        Self {
            strip_prefix: false,
            ignore_existing_prerelease: false,
            prerelease: String::new(),
            metadata: String::new(),
            changelog_enabled: true,
            changelog_file: PathBuf::from("CHANGELOG.md"),
            sort: SortOrder::Desc,
            include: Vec::new(),
            exclude: Vec::new(),
            multiline: false,
            trim_header: false,
            skip_prerelease: false,
            all: false,
            diff_only: false,
            pre_tag: true,
            links: None,
        }
    }
}

impl ReleaseOptions {
    /// Options taken from a loaded configuration
    pub fn from_config(config: &Config) -> Result<Self> {
        let sort = config
            .changelog
            .sort
            .parse::<SortOrder>()
            .map_err(|message| ConfigError::InvalidValue {
                field: "changelog.sort".to_string(),
                message,
            })?;

        Ok(Self {
            strip_prefix: config.versioning.strip_prefix,
            ignore_existing_prerelease: config.versioning.ignore_existing_prerelease,
            changelog_enabled: config.changelog.enabled,
            changelog_file: config.changelog.file.clone(),
            sort,
            include: config.changelog.include.clone(),
            exclude: config.changelog.exclude.clone(),
            multiline: config.changelog.multiline,
            trim_header: config.changelog.trim_header,
            skip_prerelease: config.changelog.skip_prerelease,
            all: config.changelog.all,
            ..Default::default()
        })
    }

    /// Request a prerelease such as `beta.1` or `beta.1+12345`
    pub fn with_prerelease(mut self, suffix: &str) -> Result<Self> {
        let (prerelease, metadata) = parse_prerelease_suffix(suffix)?;
        self.prerelease = prerelease;
        if !metadata.is_empty() {
            self.metadata = metadata;
        }
        Ok(self)
    }

    pub fn with_metadata(mut self, metadata: impl Into<String>) -> Self {
        self.metadata = metadata.into();
        self
    }

    pub fn with_diff_only(mut self, diff_only: bool) -> Self {
        self.diff_only = diff_only;
        self
    }

    pub fn with_pre_tag(mut self, pre_tag: bool) -> Self {
        self.pre_tag = pre_tag;
        self
    }

    pub fn with_changelog_file(mut self, file: impl Into<PathBuf>) -> Self {
        self.changelog_file = file.into();
        self
    }

    pub fn with_links(mut self, links: Option<ScmLinks>) -> Self {
        self.links = links;
        self
    }

    /// Whether a prerelease channel was requested for this run
    pub fn wants_prerelease(&self) -> bool {
        !self.prerelease.is_empty()
    }

    pub(crate) fn next_version_options(&self) -> NextVersionOptions {
        NextVersionOptions {
            strip_prefix: self.strip_prefix,
            ignore_existing_prerelease: self.ignore_existing_prerelease,
            prerelease: self.prerelease.clone(),
            metadata: self.metadata.clone(),
        }
    }

    pub(crate) fn assembler_options(&self) -> AssemblerOptions {
        AssemblerOptions {
            include: self.include.clone(),
            exclude: self.exclude.clone(),
            sort: self.sort,
            style: MessageStyle::new(self.multiline, self.trim_header),
            skip_prerelease: self.skip_prerelease,
            links: self.links.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tagline_core::TaglineError;

    #[test]
    fn test_from_config() {
        let mut config = Config::default();
        config.versioning.strip_prefix = true;
        config.changelog.sort = "ASC".to_string();
        config.changelog.exclude = vec!["^chore".to_string()];
        config.changelog.multiline = true;

        let options = ReleaseOptions::from_config(&config).unwrap();
        assert!(options.strip_prefix);
        assert_eq!(options.sort, SortOrder::Asc);
        assert_eq!(options.exclude, vec!["^chore"]);
        assert!(options.assembler_options().style.multiline);
        assert!(options.pre_tag);
    }

    #[test]
    fn test_from_config_rejects_bad_sort() {
        let mut config = Config::default();
        config.changelog.sort = "sideways".to_string();
        assert!(matches!(
            ReleaseOptions::from_config(&config),
            Err(TaglineError::Config(ConfigError::InvalidValue { .. }))
        ));
    }

    #[test]
    fn test_with_prerelease() {
        let options = ReleaseOptions::default()
            .with_prerelease("-beta.1+12345")
            .unwrap();
        assert!(options.wants_prerelease());

        let next = options.next_version_options();
        assert_eq!(next.prerelease, "beta.1");
        assert_eq!(next.metadata, "12345");

        assert!(ReleaseOptions::default().with_prerelease("beta..1").is_err());
    }
}
