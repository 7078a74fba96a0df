//! Building release sections from repository history

use std::io::Write;

use tracing::{debug, info, instrument};

use tagline_core::error::GitError;
use tagline_core::{Result, SortOrder, Version};
use tagline_git::{ResolvedTag, ScmLinks, TagFilter, TagInfo, TagResolver, Vcs};

use crate::document::ChangelogFile;
use crate::filter::CommitFilter;
use crate::format::MessageStyle;
use crate::markdown::MarkdownRenderer;
use crate::release::Release;

/// Settings for a [`ChangelogAssembler`]
#[derive(Debug, Clone, Default)]
pub struct AssemblerOptions {
    /// Regex patterns a commit must match one of, when non-empty
    pub include: Vec<String>,
    /// Regex patterns dropping any commit they match
    pub exclude: Vec<String>,
    pub sort: SortOrder,
    pub style: MessageStyle,
    /// Leave prerelease tags out when resolving release boundaries
    pub skip_prerelease: bool,
    pub links: Option<ScmLinks>,
}

/// Where rendered sections end up
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WriteMode {
    /// Replace the file with a fresh document
    Create,
    /// Splice into the existing document
    Append,
}

/// Assembles changelog releases from a [`Vcs`]
pub struct ChangelogAssembler<'a, V: Vcs + ?Sized> {
    vcs: &'a V,
    filter: CommitFilter,
    renderer: MarkdownRenderer,
    sort: SortOrder,
    skip_prerelease: bool,
    links: Option<ScmLinks>,
}

impl<'a, V: Vcs + ?Sized> ChangelogAssembler<'a, V> {
    /// Fails on an invalid include or exclude pattern
    pub fn new(vcs: &'a V, options: AssemblerOptions) -> Result<Self> {
        let filter = CommitFilter::new(&options.include, &options.exclude)?;

        Ok(Self {
            vcs,
            filter,
            renderer: MarkdownRenderer::new(options.style),
            sort: options.sort,
            skip_prerelease: options.skip_prerelease,
            links: options.links,
        })
    }

    /// The release introduced by `target`, measured from the newest other
    /// version tag that is not newer than it (or the start of history).
    ///
    /// Returns `None` when no commit survives filtering.
    #[instrument(skip(self))]
    pub fn single_release(&self, target: &str) -> Result<Option<Release>> {
        let tag = self
            .vcs
            .tag_details(target)?
            .ok_or_else(|| GitError::TagNotFound(target.to_string()))?;

        let filter = TagFilter::new().skip_prerelease(self.skip_prerelease);
        let target_version = Version::parse(target).ok();
        let previous = TagResolver::new(self.vcs)
            .resolve(&filter)?
            .into_iter()
            .find(|t| t.name() != target && !is_newer(t, &tag, target_version.as_ref()));
        let previous = previous.as_ref().map(|t| t.name());

        debug!(target, previous = previous.unwrap_or(""), "release boundaries");
        let release = self.build(tag, previous)?;

        if release.is_empty() {
            info!(target, "no commits to record");
            return Ok(None);
        }
        Ok(Some(release))
    }

    /// One release per version tag, newest first, each measured against the
    /// next older tag. Releases without commits are kept.
    #[instrument(skip(self))]
    pub fn all_releases(&self) -> Result<Vec<Release>> {
        let filter = TagFilter::new().skip_prerelease(self.skip_prerelease);
        let tags = TagResolver::new(self.vcs).resolve(&filter)?;

        let mut releases = Vec::with_capacity(tags.len());
        for (idx, tag) in tags.iter().enumerate() {
            let previous = tags.get(idx + 1).map(|t| t.name());
            releases.push(self.build(tag.info.clone(), previous)?);
        }

        debug!(releases = releases.len(), "assembled all releases");
        Ok(releases)
    }

    fn build(&self, tag: TagInfo, previous: Option<&str>) -> Result<Release> {
        let commits = self.vcs.log(previous, &tag.name)?;
        let mut commits = self.filter.apply(commits);

        if self.sort == SortOrder::Asc {
            commits.reverse();
        }

        Ok(Release::new(tag, commits).with_links(self.links.clone()))
    }

    /// Markdown for `releases` without preamble or anchor
    pub fn render(&self, releases: &[Release]) -> String {
        self.renderer.render_sections(releases)
    }

    /// Write `releases` to `file`, building the whole document before a
    /// single write
    #[instrument(skip(self, file, releases), fields(path = %file.path().display()))]
    pub fn write(&self, file: &ChangelogFile, releases: &[Release], mode: WriteMode) -> Result<()> {
        match mode {
            WriteMode::Create => file.write(&self.renderer.render_document(releases))?,
            WriteMode::Append => file.append(&self.render(releases))?,
        }
        Ok(())
    }

    /// Stream the sections to `out` instead of touching any file
    pub fn write_diff<W: Write + ?Sized>(&self, out: &mut W, releases: &[Release]) -> Result<()> {
        out.write_all(self.render(releases).as_bytes())?;
        out.flush()?;
        Ok(())
    }
}

fn is_newer(candidate: &ResolvedTag, target: &TagInfo, version: Option<&Version>) -> bool {
    let (a, b) = (candidate.info.created(), target.created());
    a > b || (a == b && version.is_some_and(|v| candidate.version > *v))
}
