//! Error types shared by the tagline crates

use std::path::PathBuf;
use thiserror::Error;

/// Result alias over [`TaglineError`]
pub type Result<T> = std::result::Result<T, TaglineError>;

/// Any failure surfaced by a tagline operation
#[derive(Debug, Error)]
pub enum TaglineError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Git(#[from] GitError),

    #[error(transparent)]
    Version(#[from] VersionError),

    #[error(transparent)]
    Changelog(#[from] ChangelogError),

    #[error("I/O failure: {0}")]
    Io(#[from] std::io::Error),
}

/// Problems finding, parsing or validating a config file
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("No tagline config found above {0}")]
    NotFound(PathBuf),

    /// A field parsed but holds a value tagline cannot use
    #[error("Bad value for {field}: {message}")]
    InvalidValue { field: String, message: String },

    #[error("Could not parse YAML config: {0}")]
    YamlError(#[from] serde_yaml::Error),

    #[error("Could not parse TOML config: {0}")]
    TomlError(#[from] toml::de::Error),

    #[error("Could not read config: {0}")]
    Io(#[from] std::io::Error),
}

/// Failures talking to the repository
#[derive(Debug, Error)]
pub enum GitError {
    #[error("No repository at {0}")]
    RepositoryNotFound(PathBuf),

    /// Discovery walked to the filesystem root without finding `.git`
    #[error("{0} is not inside a git repository")]
    NotARepository(PathBuf),

    #[error("Could not open repository: {0}")]
    OpenFailed(String),

    #[error("Tag {0} already exists")]
    TagExists(String),

    #[error("Tag not found: {0}")]
    TagNotFound(String),

    /// Reference could not be resolved to a commit
    #[error("Cannot resolve reference: {0}")]
    UnknownRef(String),

    #[error("No remote named {0}")]
    RemoteNotFound(String),

    /// Tag glob pattern could not be compiled
    #[error("Invalid tag pattern '{0}': {1}")]
    InvalidTagPattern(String, String),

    #[error("libgit2: {0}")]
    Git2(#[from] git2::Error),
}

/// Versions that cannot be parsed or produced
#[derive(Debug, Error)]
pub enum VersionError {
    #[error("'{0}' is not a semantic version: {1}")]
    ParseFailed(String, String),

    /// Requested prerelease or metadata is not valid semver
    #[error("Invalid prerelease suffix '{0}': {1}")]
    InvalidPrerelease(String, String),
}

/// Failures reading, filtering or writing the changelog
#[derive(Debug, Error)]
pub enum ChangelogError {
    /// The existing changelog lacks the insertion anchor
    #[error("Changelog {0} is missing the '## Unreleased' anchor")]
    MissingAnchor(PathBuf),

    /// An include or exclude pattern failed to compile
    #[error("Invalid commit filter pattern '{pattern}': {source}")]
    InvalidPattern {
        pattern: String,
        #[source]
        source: regex::Error,
    },

    #[error("Failed to write changelog {path}: {source}")]
    WriteFailed {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to read changelog {path}: {source}")]
    ReadFailed {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_anchor_display() {
        let err = ChangelogError::MissingAnchor(PathBuf::from("CHANGELOG.md"));
        assert_eq!(
            err.to_string(),
            "Changelog CHANGELOG.md is missing the '## Unreleased' anchor"
        );
    }

    #[test]
    fn test_transparent_wrapping() {
        let err: TaglineError =
            VersionError::InvalidPrerelease("beta..1".to_string(), "empty identifier".to_string())
                .into();
        assert_eq!(
            err.to_string(),
            "Invalid prerelease suffix 'beta..1': empty identifier"
        );
        assert!(matches!(err, TaglineError::Version(_)));
    }

    #[test]
    fn test_invalid_pattern_keeps_source() {
        let source = regex::Regex::new("(").unwrap_err();
        let err = ChangelogError::InvalidPattern {
            pattern: "(".to_string(),
            source,
        };
        assert!(err.to_string().starts_with("Invalid commit filter pattern '('"));
        assert!(std::error::Error::source(&err).is_some());
    }
}
