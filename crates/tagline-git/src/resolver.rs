//! Version tag discovery
//!
//! Tags are listed through a [`Vcs`] with a coarse glob, parsed as strict
//! semantic versions, ordered newest first and narrowed by a [`TagFilter`].

use std::cmp::Ordering;

use tracing::{debug, instrument};

use tagline_core::Version;

use crate::repository::Result;
use crate::types::TagInfo;
use crate::vcs::Vcs;

/// Glob every version tag must match before it is parsed
pub const VERSION_TAG_GLOB: &str = "*.*.*";

/// A tag whose name parsed as a semantic version
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedTag {
    pub info: TagInfo,
    pub version: Version,
}

impl ResolvedTag {
    pub fn name(&self) -> &str {
        &self.info.name
    }
}

/// Narrowing applied to resolved tags
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TagFilter {
    /// Drop tags carrying a prerelease
    pub skip_prerelease: bool,
    /// Keep only tags ending in `-<prerelease>` or `-<prerelease>+<metadata>`.
    /// An empty metadata accepts any metadata.
    pub channel: Option<(String, String)>,
    /// Maximum number of tags returned
    pub limit: Option<usize>,
}

impl TagFilter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn skip_prerelease(mut self, skip: bool) -> Self {
        self.skip_prerelease = skip;
        self
    }

    pub fn channel(mut self, prerelease: impl Into<String>, metadata: impl Into<String>) -> Self {
        self.channel = Some((prerelease.into(), metadata.into()));
        self
    }

    pub fn limit(mut self, limit: usize) -> Self {
        self.limit = Some(limit);
        self
    }

    fn on_channel(&self, name: &str) -> bool {
        let Some((pre, meta)) = &self.channel else {
            return true;
        };

        name.ends_with(&format!("-{}", pre)) || name.ends_with(&format!("-{}+{}", pre, meta))
    }
}

/// Resolves version tags from a repository
pub struct TagResolver<'a, V: Vcs + ?Sized> {
    vcs: &'a V,
}

impl<'a, V: Vcs + ?Sized> TagResolver<'a, V> {
    pub fn new(vcs: &'a V) -> Self {
        Self { vcs }
    }

    /// All version tags passing `filter`, newest first.
    ///
    /// Tags are ordered by creation date, then version, then name, all
    /// descending. Names that are not strict semantic versions are skipped.
    #[instrument(skip(self))]
    pub fn resolve(&self, filter: &TagFilter) -> Result<Vec<ResolvedTag>> {
        let candidates = self.vcs.list_tags(VERSION_TAG_GLOB)?;
        let listed = candidates.len();

        let mut tags: Vec<ResolvedTag> = candidates
            .into_iter()
            .filter_map(|info| match Version::parse(&info.name) {
                Ok(version) => Some(ResolvedTag { info, version }),
                Err(e) => {
                    debug!(tag = %info.name, error = %e, "skipping non-version tag");
                    None
                }
            })
            .collect();

        tags.sort_by(newest_first);

        let mut tags: Vec<ResolvedTag> = tags
            .into_iter()
            .filter(|t| !(filter.skip_prerelease && t.version.is_prerelease()))
            .filter(|t| filter.on_channel(t.name()))
            .collect();

        if let Some(limit) = filter.limit {
            tags.truncate(limit);
        }

        debug!(listed, resolved = tags.len(), "resolved version tags");
        Ok(tags)
    }

    /// Newest version tag passing `filter`
    pub fn latest(&self, filter: &TagFilter) -> Result<Option<ResolvedTag>> {
        let filter = TagFilter {
            limit: Some(1),
            ..filter.clone()
        };
        Ok(self.resolve(&filter)?.into_iter().next())
    }

    /// Newest tag on a prerelease channel such as `beta.1`
    pub fn latest_on_channel(
        &self,
        prerelease: &str,
        metadata: &str,
    ) -> Result<Option<ResolvedTag>> {
        self.latest(&TagFilter::new().channel(prerelease, metadata))
    }
}

fn newest_first(a: &ResolvedTag, b: &ResolvedTag) -> Ordering {
    b.info
        .created()
        .cmp(&a.info.created())
        .then_with(|| b.version.cmp(&a.version))
        .then_with(|| b.info.name.cmp(&a.info.name))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mock::MockRepo;
    use chrono::{TimeZone, Utc};

    fn names(tags: &[ResolvedTag]) -> Vec<&str> {
        tags.iter().map(|t| t.name()).collect()
    }

    fn repo() -> MockRepo {
        let repo = MockRepo::new();
        repo.commit("feat: one");
        repo.tag("v0.1.0");
        repo.commit("feat: two");
        repo.tag("v0.2.0-beta.1");
        repo.commit("fix: three");
        repo.tag("v0.2.0");
        repo.tag("release-candidate");
        repo.tag("v0.2.x.y");
        repo
    }

    #[test]
    fn test_resolve_orders_newest_first() {
        let repo = repo();
        let tags = TagResolver::new(&repo).resolve(&TagFilter::new()).unwrap();
        assert_eq!(names(&tags), vec!["v0.2.0", "v0.2.0-beta.1", "v0.1.0"]);
    }

    #[test]
    fn test_malformed_tags_are_skipped() {
        let repo = repo();
        let tags = TagResolver::new(&repo).resolve(&TagFilter::new()).unwrap();
        assert!(tags.iter().all(|t| t.name() != "v0.2.x.y"));
    }

    #[test]
    fn test_same_commit_ties_break_on_version() {
        let repo = MockRepo::new();
        repo.commit("feat: one");
        repo.tag("1.0.0");
        repo.tag("1.1.0");
        repo.tag("1.0.1");

        let tags = TagResolver::new(&repo).resolve(&TagFilter::new()).unwrap();
        assert_eq!(names(&tags), vec!["1.1.0", "1.0.1", "1.0.0"]);
    }

    #[test]
    fn test_annotation_date_wins_over_commit_date() {
        let repo = MockRepo::new();
        repo.commit("feat: one");
        repo.annotated_tag("v1.0.0", Utc.with_ymd_and_hms(2030, 1, 1, 0, 0, 0).unwrap());
        repo.commit("feat: two");
        repo.tag("v1.1.0");

        let latest = TagResolver::new(&repo).latest(&TagFilter::new()).unwrap();
        assert_eq!(latest.unwrap().name(), "v1.0.0");
    }

    #[test]
    fn test_skip_prerelease_applies_before_limit() {
        let repo = MockRepo::new();
        repo.commit("feat: one");
        repo.tag("v1.0.0");
        repo.commit("feat: two");
        repo.tag("v1.1.0-rc.1");

        let filter = TagFilter::new().skip_prerelease(true).limit(1);
        let tags = TagResolver::new(&repo).resolve(&filter).unwrap();
        assert_eq!(names(&tags), vec!["v1.0.0"]);
    }

    #[test]
    fn test_latest_on_channel() {
        let repo = MockRepo::new();
        repo.commit("feat: one");
        repo.tag("v1.0.0-beta.1+100");
        repo.commit("feat: two");
        repo.tag("v1.0.0-alpha.1");
        repo.commit("feat: three");
        repo.tag("v1.0.0");

        let resolver = TagResolver::new(&repo);
        let exact = resolver.latest_on_channel("beta.1", "100").unwrap().unwrap();
        assert_eq!(exact.name(), "v1.0.0-beta.1+100");

        // metadata on the tag must match what was asked for
        assert!(resolver.latest_on_channel("beta.1", "").unwrap().is_none());
        assert!(resolver.latest_on_channel("beta.1", "200").unwrap().is_none());
        assert!(resolver.latest_on_channel("rc.1", "").unwrap().is_none());
    }

    #[test]
    fn test_plain_prerelease_tag_matches_requested_metadata() {
        let repo = MockRepo::new();
        repo.commit("feat: one");
        repo.tag("v1.0.0-beta.1");
        repo.commit("feat: two");
        repo.tag("v1.0.0-beta.10");

        let resolver = TagResolver::new(&repo);
        let found = resolver.latest_on_channel("beta.1", "200").unwrap().unwrap();
        assert_eq!(found.name(), "v1.0.0-beta.1");

        let plain = resolver.latest_on_channel("beta.1", "").unwrap().unwrap();
        assert_eq!(plain.name(), "v1.0.0-beta.1");
    }

    #[test]
    fn test_no_tags() {
        let repo = MockRepo::new();
        repo.commit("feat: one");
        let latest = TagResolver::new(&repo).latest(&TagFilter::new()).unwrap();
        assert!(latest.is_none());
    }

    #[test]
    fn test_vcs_failure_propagates() {
        let repo = MockRepo::new();
        repo.fail_with("tag listing unavailable");
        assert!(TagResolver::new(&repo).resolve(&TagFilter::new()).is_err());
    }
}
