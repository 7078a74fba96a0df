//! Include/exclude commit filtering

use regex::Regex;
use std::sync::LazyLock;
use tracing::debug;

use tagline_core::error::ChangelogError;
use tagline_git::CommitInfo;

/// Subject prefix of the commits tagline authors itself
pub const RELEASE_COMMIT_PREFIX: &str = "ci(tagline): release version ";

/// Matches release commits written by tagline
static RELEASE_COMMIT_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(&format!("^{}", regex::escape(RELEASE_COMMIT_PREFIX))).expect("Invalid regex")
});

/// Selects which commits appear in the changelog.
///
/// Include patterns are a union: with any present, a commit must match at
/// least one. Exclude patterns then drop every commit matching any of them.
/// Release commits written by tagline are always excluded.
#[derive(Debug, Clone)]
pub struct CommitFilter {
    include: Vec<Regex>,
    exclude: Vec<Regex>,
}

impl CommitFilter {
    /// Compile the patterns, failing on the first invalid one
    pub fn new(include: &[String], exclude: &[String]) -> Result<Self, ChangelogError> {
        let include = compile(include)?;
        let mut exclude = compile(exclude)?;
        exclude.push(RELEASE_COMMIT_REGEX.clone());

        Ok(Self { include, exclude })
    }

    /// Whether `commit` survives the filter
    pub fn keep(&self, commit: &CommitInfo) -> bool {
        let message = commit.message.as_str();

        if !self.include.is_empty() && !self.include.iter().any(|re| re.is_match(message)) {
            return false;
        }

        !self.exclude.iter().any(|re| re.is_match(message))
    }

    /// Retain the surviving commits, preserving order
    pub fn apply(&self, commits: Vec<CommitInfo>) -> Vec<CommitInfo> {
        let total = commits.len();
        let kept: Vec<_> = commits.into_iter().filter(|c| self.keep(c)).collect();
        debug!(total, kept = kept.len(), "filtered commits");
        kept
    }
}

impl Default for CommitFilter {
    fn default() -> Self {
        Self {
            include: Vec::new(),
            exclude: vec![RELEASE_COMMIT_REGEX.clone()],
        }
    }
}

fn compile(patterns: &[String]) -> Result<Vec<Regex>, ChangelogError> {
    patterns.iter().map(|p| compile_one(p)).collect()
}

fn compile_one(pattern: &str) -> Result<Regex, ChangelogError> {
    Regex::new(pattern).map_err(|source| ChangelogError::InvalidPattern {
        pattern: pattern.to_string(),
        source,
    })
}
