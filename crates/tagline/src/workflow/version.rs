//! Version workflow operations

use tracing::{debug, info, instrument};

use tagline_core::error::Result;
use tagline_git::{ResolvedTag, TagFilter, TagResolver, Vcs};
use tagline_version::{ConventionalParser, RangeAggregator, VersionCalculator, VersionResult};

use crate::options::ReleaseOptions;

/// Calculate the version following the latest tag from the commits since it
#[instrument(skip(vcs, options))]
pub fn next_version<V: Vcs + ?Sized>(vcs: &V, options: &ReleaseOptions) -> Result<VersionResult> {
    let latest = TagResolver::new(vcs).latest(&TagFilter::new())?;
    let from = latest.as_ref().map(|t| t.name());

    let commits = vcs.log(from, "HEAD")?;
    debug!(latest = from.unwrap_or(""), commits = commits.len(), "inspecting commits");

    let parser = ConventionalParser::new().with_trim_header(options.trim_header);
    let increment = RangeAggregator::new(parser).aggregate(&commits);

    let result = VersionCalculator::new(options.next_version_options()).calculate(from, increment)?;

    match &result.next {
        Some(next) => info!(current = %result.current, %next, %increment, "next version"),
        None => info!(current = %result.current, "no version change"),
    }
    Ok(result)
}

/// The latest version tag, or the latest on the requested prerelease channel
#[instrument(skip(vcs, options))]
pub fn current_version<V: Vcs + ?Sized>(
    vcs: &V,
    options: &ReleaseOptions,
) -> Result<Option<ResolvedTag>> {
    let resolver = TagResolver::new(vcs);

    let current = if options.wants_prerelease() {
        resolver.latest_on_channel(&options.prerelease, &options.metadata)?
    } else {
        resolver.latest(&TagFilter::new())?
    };

    debug!(current = current.as_ref().map(|t| t.name()).unwrap_or(""), "current version");
    Ok(current)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tagline_core::Increment;
    use tagline_git::MockRepo;

    fn raw(result: &VersionResult) -> String {
        result.next.as_ref().map(|v| v.raw()).unwrap_or_default()
    }

    #[test]
    fn test_first_release_without_tags() {
        let repo = MockRepo::new();
        repo.commit("feat: x");
        repo.commit("fix: y");

        let result = next_version(&repo, &ReleaseOptions::default()).unwrap();
        assert_eq!(result.increment, Increment::Minor);
        assert_eq!(raw(&result), "0.1.0");
    }

    #[test]
    fn test_strip_prefix_keeps_latest_tag_prefix() {
        let repo = MockRepo::new();
        repo.commit("feat: x");
        repo.tag("v1.2.3");
        repo.commit("fix: y");

        let options = ReleaseOptions {
            strip_prefix: true,
            ..Default::default()
        };
        let result = next_version(&repo, &options).unwrap();
        assert_eq!(raw(&result), "v1.2.4");
    }

    #[test]
    fn test_only_commits_since_latest_tag_count() {
        let repo = MockRepo::new();
        repo.commit("feat!: breaking");
        repo.tag("v1.2.3");
        repo.commit("fix: small");

        let result = next_version(&repo, &ReleaseOptions::default()).unwrap();
        assert_eq!(result.current, "v1.2.3");
        assert_eq!(raw(&result), "v1.2.4");
    }

    #[test]
    fn test_no_releasable_commits() {
        let repo = MockRepo::new();
        repo.commit("feat: x");
        repo.tag("v1.0.0");
        repo.commit("docs: readme");

        let result = next_version(&repo, &ReleaseOptions::default()).unwrap();
        assert!(result.is_unchanged());
    }

    #[test]
    fn test_prerelease_requested() {
        let repo = MockRepo::new();
        repo.commit("feat: x");
        repo.tag("v0.1.0");
        repo.commit("feat: y");

        let options = ReleaseOptions::default()
            .with_prerelease("beta.1+12345")
            .unwrap();
        let result = next_version(&repo, &options).unwrap();
        assert_eq!(raw(&result), "v0.2.0-beta.1+12345");
    }

    #[test]
    fn test_vcs_failure_propagates() {
        let repo = MockRepo::new();
        repo.commit("feat: x");
        repo.fail_with("broken");
        assert!(next_version(&repo, &ReleaseOptions::default()).is_err());
    }

    #[test]
    fn test_current_version_on_channel() {
        let repo = MockRepo::new();
        repo.commit("feat: x");
        repo.tag("v1.0.0-beta.1");
        repo.commit("feat: y");
        repo.tag("v1.0.0");

        let latest = current_version(&repo, &ReleaseOptions::default()).unwrap();
        assert_eq!(latest.unwrap().name(), "v1.0.0");

        let options = ReleaseOptions::default().with_prerelease("beta.1").unwrap();
        let beta = current_version(&repo, &options).unwrap();
        assert_eq!(beta.unwrap().name(), "v1.0.0-beta.1");
    }
}
