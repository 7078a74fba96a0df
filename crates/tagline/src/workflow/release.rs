//! Release workflow orchestration

use std::io::Write;

use tracing::{info, instrument};

use tagline_changelog::RELEASE_COMMIT_PREFIX;
use tagline_core::error::Result;
use tagline_core::Version;
use tagline_git::Vcs;
use tagline_version::VersionResult;

use crate::options::ReleaseOptions;
use crate::workflow::changelog::{changelog, ChangelogOutcome};
use crate::workflow::version::next_version;

/// What a release run decided and produced
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReleasePlan {
    pub version: VersionResult,
    pub changelog: ChangelogOutcome,
    /// Message for the release commit, when there is something to release
    pub commit_message: Option<String>,
}

/// Commit message for releasing `version`.
///
/// Commits carrying it never show up in a generated changelog.
pub fn release_commit_message(version: &Version) -> String {
    format!("{}{}", RELEASE_COMMIT_PREFIX, version)
}

/// Calculate the next version and write its changelog section
#[instrument(skip(vcs, options, out))]
pub fn prepare_release<V: Vcs + ?Sized>(
    vcs: &V,
    options: &ReleaseOptions,
    out: &mut dyn Write,
) -> Result<ReleasePlan> {
    let version = next_version(vcs, options)?;
    let changelog = changelog(vcs, options, version.next.as_ref(), out)?;
    let commit_message = version.next.as_ref().map(release_commit_message);

    info!(
        next = version.next.as_ref().map(|v| v.raw()).unwrap_or_default(),
        "release prepared"
    );

    Ok(ReleasePlan {
        version,
        changelog,
        commit_message,
    })
}
