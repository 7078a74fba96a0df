//! Semantic version carrying an optional `v` prefix

use std::cmp::Ordering;

use serde::{Deserialize, Serialize};

use crate::error::VersionError;

/// A semantic version as it appears in a tag name.
///
/// The structured fields live in a [`semver::Version`]; the raw string is
/// always rebuilt from them, so it cannot drift.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Version {
    prefix: String,
    inner: semver::Version,
}

impl Version {
    /// Parse a tag name such as `v1.2.3-beta.1+build.5`.
    ///
    /// A single leading `v` is kept as the prefix; the remainder must be a
    /// strict SemVer 2.0 version.
    pub fn parse(raw: &str) -> Result<Self, VersionError> {
        let (prefix, rest) = match raw.strip_prefix('v') {
            Some(rest) => ("v", rest),
            None => ("", raw),
        };

        let inner = semver::Version::parse(rest)
            .map_err(|e| VersionError::ParseFailed(raw.to_string(), e.to_string()))?;

        Ok(Self {
            prefix: prefix.to_string(),
            inner,
        })
    }

    /// Build a version from a prefix and already-validated components
    pub fn from_parts(prefix: impl Into<String>, inner: semver::Version) -> Self {
        Self {
            prefix: prefix.into(),
            inner,
        }
    }

    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    pub fn major(&self) -> u64 {
        self.inner.major
    }

    pub fn minor(&self) -> u64 {
        self.inner.minor
    }

    pub fn patch(&self) -> u64 {
        self.inner.patch
    }

    /// Prerelease identifiers without the leading `-`, or an empty string
    pub fn prerelease(&self) -> &str {
        self.inner.pre.as_str()
    }

    /// Build metadata without the leading `+`, or an empty string
    pub fn metadata(&self) -> &str {
        self.inner.build.as_str()
    }

    pub fn is_prerelease(&self) -> bool {
        !self.inner.pre.is_empty()
    }

    /// The structured version without its prefix
    pub fn as_semver(&self) -> &semver::Version {
        &self.inner
    }

    /// Canonical `<prefix><major>.<minor>.<patch>[-<pre>][+<meta>]` form
    pub fn raw(&self) -> String {
        format!("{}{}", self.prefix, self.inner)
    }
}

impl std::fmt::Display for Version {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}{}", self.prefix, self.inner)
    }
}

impl std::str::FromStr for Version {
    type Err = VersionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<String> for Version {
    type Error = VersionError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        Self::parse(&s)
    }
}

impl From<Version> for String {
    fn from(v: Version) -> Self {
        v.raw()
    }
}

impl Ord for Version {
    fn cmp(&self, other: &Self) -> Ordering {
        // Prefix only breaks ties so the ordering agrees with Eq
        self.inner
            .cmp(&other.inner)
            .then_with(|| self.prefix.cmp(&other.prefix))
    }
}

impl PartialOrd for Version {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}
