//! Next version calculation

use semver::{BuildMetadata, Prerelease};
use tracing::{debug, instrument};

use tagline_core::error::VersionError;
use tagline_core::{Increment, Version};

/// Baseline used when the repository has no version tag yet
const INITIAL_VERSION: &str = "v0.0.0";

/// Flags influencing how the next version is derived
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NextVersionOptions {
    /// Remove a leading `v` from the baseline before parsing it; the
    /// result still carries the prefix of the latest tag
    pub strip_prefix: bool,
    /// Clear prerelease and metadata on the baseline before bumping
    pub ignore_existing_prerelease: bool,
    /// Prerelease to stamp onto the result
    pub prerelease: String,
    /// Build metadata to stamp onto the result
    pub metadata: String,
}

/// Outcome of a version calculation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VersionResult {
    /// The baseline tag name, `v0.0.0` when none exists
    pub current: String,
    /// `None` when no commit warranted a release
    pub next: Option<Version>,
    pub increment: Increment,
}

impl VersionResult {
    /// True when there is nothing to release
    pub fn is_unchanged(&self) -> bool {
        self.next.is_none()
    }
}

/// Applies an increment to the latest version tag
#[derive(Debug, Clone, Default)]
pub struct VersionCalculator {
    options: NextVersionOptions,
}

impl VersionCalculator {
    pub fn new(options: NextVersionOptions) -> Self {
        Self { options }
    }

    pub fn options(&self) -> &NextVersionOptions {
        &self.options
    }

    /// Compute the version following `latest`.
    ///
    /// An [`Increment::None`] is not an error; it yields a result whose
    /// [`is_unchanged`](VersionResult::is_unchanged) is true. The result
    /// carries the prefix of `latest`, or none when there is no tag yet.
    #[instrument(skip(self))]
    pub fn calculate(
        &self,
        latest: Option<&str>,
        increment: Increment,
    ) -> Result<VersionResult, VersionError> {
        let current = latest.unwrap_or(INITIAL_VERSION).to_string();

        if increment == Increment::None {
            debug!(%current, "no version change");
            return Ok(VersionResult {
                current,
                next: None,
                increment,
            });
        }

        let baseline = if self.options.strip_prefix {
            current.strip_prefix('v').unwrap_or(&current)
        } else {
            current.as_str()
        };
        let baseline = Version::parse(baseline)?;
        let prefix = match latest {
            Some(tag) => Version::parse(tag)?.prefix().to_string(),
            None => String::new(),
        };

        let mut next = baseline.as_semver().clone();
        if self.options.ignore_existing_prerelease {
            next.pre = Prerelease::EMPTY;
            next.build = BuildMetadata::EMPTY;
        }

        bump(&mut next, increment);

        if !self.options.prerelease.is_empty() || !self.options.metadata.is_empty() {
            next.pre = parse_prerelease(&self.options.prerelease)?;
            next.build = parse_metadata(&self.options.metadata)?;
        }

        let next = Version::from_parts(prefix, next);
        debug!(%current, %next, %increment, "calculated next version");

        Ok(VersionResult {
            current,
            next: Some(next),
            increment,
        })
    }
}

fn bump(version: &mut semver::Version, increment: Increment) {
    match increment {
        Increment::Major => {
            version.major += 1;
            version.minor = 0;
            version.patch = 0;
            version.pre = Prerelease::EMPTY;
        }
        Increment::Minor => {
            version.minor += 1;
            version.patch = 0;
            version.pre = Prerelease::EMPTY;
        }
        Increment::Patch => {
            // A prerelease of this patch is released rather than skipped
            if version.pre.is_empty() {
                version.patch += 1;
            } else {
                version.pre = Prerelease::EMPTY;
            }
        }
        Increment::None => return,
    }

    version.build = BuildMetadata::EMPTY;
}

fn parse_prerelease(value: &str) -> Result<Prerelease, VersionError> {
    Prerelease::new(value)
        .map_err(|e| VersionError::InvalidPrerelease(value.to_string(), e.to_string()))
}

fn parse_metadata(value: &str) -> Result<BuildMetadata, VersionError> {
    BuildMetadata::new(value)
        .map_err(|e| VersionError::InvalidPrerelease(value.to_string(), e.to_string()))
}

/// Split a combined suffix such as `beta.1+12345` into prerelease and
/// metadata. A leading `-` is accepted, and both parts are validated.
pub fn parse_prerelease_suffix(suffix: &str) -> Result<(String, String), VersionError> {
    let trimmed = suffix.strip_prefix('-').unwrap_or(suffix);
    let (pre, meta) = trimmed.split_once('+').unwrap_or((trimmed, ""));

    if pre.is_empty() {
        return Err(VersionError::InvalidPrerelease(
            suffix.to_string(),
            "prerelease identifier is empty".to_string(),
        ));
    }

    parse_prerelease(pre)?;
    parse_metadata(meta)?;

    Ok((pre.to_string(), meta.to_string()))
}
