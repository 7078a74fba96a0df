//! Changelog workflow operations

use std::io::Write;
use std::path::PathBuf;

use tracing::{debug, info, instrument};

use tagline_changelog::{ChangelogAssembler, ChangelogFile, WriteMode};
use tagline_core::error::Result;
use tagline_core::Version;
use tagline_git::{PreTag, TagFilter, TagResolver, Vcs};

use crate::options::ReleaseOptions;

/// Why a changelog run did nothing
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkipReason {
    /// No commit warranted a new version
    NoVersionChange,
    /// Changelog generation is turned off
    Disabled,
    /// The target is a prerelease and prereleases are skipped
    Prerelease,
    /// Every commit in range was filtered out
    NoCommits,
}

/// Result of a changelog run
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ChangelogOutcome {
    Skipped(SkipReason),
    /// Sections were written to the changelog file
    Written { path: PathBuf, releases: usize },
    /// Sections were streamed to the diff output
    Diff { releases: usize },
}

/// Generate the changelog for `target`, the version about to be released.
///
/// `target = None` means no version change. When enabled, a transient tag
/// for `target` is created if it does not exist yet and removed again before
/// returning. In diff-only mode sections go to `out` and no file is touched.
#[instrument(skip(vcs, options, out))]
pub fn changelog<V: Vcs + ?Sized>(
    vcs: &V,
    options: &ReleaseOptions,
    target: Option<&Version>,
    out: &mut dyn Write,
) -> Result<ChangelogOutcome> {
    let Some(target) = target else {
        return Ok(skipped(SkipReason::NoVersionChange));
    };
    if !options.changelog_enabled {
        return Ok(skipped(SkipReason::Disabled));
    }
    if options.skip_prerelease && target.is_prerelease() {
        return Ok(skipped(SkipReason::Prerelease));
    }

    let assembler = ChangelogAssembler::new(vcs, options.assembler_options())?;
    let tag = target.raw();

    let _pre_tag = if options.pre_tag && vcs.tag_details(&tag)?.is_none() {
        Some(PreTag::acquire(vcs, &tag)?)
    } else {
        None
    };

    let (releases, mode) = if options.all {
        (assembler.all_releases()?, WriteMode::Create)
    } else {
        match assembler.single_release(&tag)? {
            Some(release) => {
                let file = ChangelogFile::new(&options.changelog_file);
                let mode = if file.exists() {
                    WriteMode::Append
                } else {
                    WriteMode::Create
                };
                (vec![release], mode)
            }
            None => return Ok(skipped(SkipReason::NoCommits)),
        }
    };

    if options.diff_only {
        assembler.write_diff(out, &releases)?;
        debug!(releases = releases.len(), "changelog diff written");
        return Ok(ChangelogOutcome::Diff {
            releases: releases.len(),
        });
    }

    let file = ChangelogFile::new(&options.changelog_file);
    assembler.write(&file, &releases, mode)?;
    info!(path = %file.path().display(), releases = releases.len(), ?mode, "changelog updated");

    Ok(ChangelogOutcome::Written {
        path: file.path().to_path_buf(),
        releases: releases.len(),
    })
}

/// Generate the changelog for the latest existing version tag
pub fn changelog_for_latest<V: Vcs + ?Sized>(
    vcs: &V,
    options: &ReleaseOptions,
    out: &mut dyn Write,
) -> Result<ChangelogOutcome> {
    let filter = TagFilter::new().skip_prerelease(options.skip_prerelease);
    let latest = TagResolver::new(vcs).latest(&filter)?;
    changelog(vcs, options, latest.as_ref().map(|t| &t.version), out)
}

fn skipped(reason: SkipReason) -> ChangelogOutcome {
    info!(?reason, "skipping changelog");
    ChangelogOutcome::Skipped(reason)
}
