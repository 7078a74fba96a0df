//! Tag operations

use chrono::{DateTime, TimeZone, Utc};
use tracing::{debug, info, instrument};

use crate::repository::{GitRepo, Result};
use crate::types::{CommitInfo, TagInfo};
use crate::vcs::Vcs;
use tagline_core::error::GitError;

/// Out-of-range timestamps map to the epoch, matching commit dates
fn to_utc(time: git2::Time) -> DateTime<Utc> {
    Utc.timestamp_opt(time.seconds(), 0)
        .single()
        .unwrap_or_default()
}

impl GitRepo {
    /// Get tags whose names match a glob pattern
    #[instrument(skip(self))]
    pub fn tags_matching(&self, pattern: &str) -> Result<Vec<TagInfo>> {
        let names = self.repo.tag_names(Some(pattern))?;
        let mut tags = Vec::with_capacity(names.len());

        for name in names.iter().flatten() {
            if let Some(tag) = self.find_tag(name)? {
                tags.push(tag);
            }
        }

        debug!(pattern, count = tags.len(), "listed tags");
        Ok(tags)
    }

    /// Find a specific tag by name
    pub fn find_tag(&self, name: &str) -> Result<Option<TagInfo>> {
        let tag_ref = format!("refs/tags/{}", name);

        let reference = match self.repo.find_reference(&tag_ref) {
            Ok(reference) => reference,
            Err(e) if e.code() == git2::ErrorCode::NotFound => return Ok(None),
            Err(e) => return Err(GitError::Git2(e)),
        };

        let commit = reference.peel_to_commit()?;
        let mut info = TagInfo::new(name, commit.id().to_string(), to_utc(commit.time()));

        // Annotated tags point at a tag object carrying its own date
        if let Some(target) = reference.target() {
            if let Ok(tag) = self.repo.find_tag(target) {
                if let Some(tagger) = tag.tagger() {
                    info = info.with_annotated_date(to_utc(tagger.when()));
                }
            }
        }

        Ok(Some(info))
    }

    /// Create a lightweight tag on HEAD
    #[instrument(skip(self))]
    pub fn create_tag(&self, name: &str) -> Result<TagInfo> {
        if self.find_tag(name)?.is_some() {
            return Err(GitError::TagExists(name.to_string()));
        }

        let head = self.head_commit()?;
        self.repo.tag_lightweight(name, head.as_object(), false)?;

        info!(name, "created tag");
        Ok(TagInfo::new(
            name,
            head.id().to_string(),
            to_utc(head.time()),
        ))
    }

    /// Delete a tag
    #[instrument(skip(self))]
    pub fn delete_tag(&self, name: &str) -> Result<()> {
        self.repo.tag_delete(name).map_err(|e| {
            if e.code() == git2::ErrorCode::NotFound {
                GitError::TagNotFound(name.to_string())
            } else {
                GitError::Git2(e)
            }
        })?;
        info!(name, "deleted tag");
        Ok(())
    }
}

impl Vcs for GitRepo {
    fn list_tags(&self, pattern: &str) -> Result<Vec<TagInfo>> {
        self.tags_matching(pattern)
    }

    fn log(&self, from: Option<&str>, to: &str) -> Result<Vec<CommitInfo>> {
        self.commits_between(from, to)
    }

    fn tag_details(&self, name: &str) -> Result<Option<TagInfo>> {
        self.find_tag(name)
    }

    fn create_local_tag(&self, name: &str) -> Result<()> {
        self.create_tag(name).map(|_| ())
    }

    fn delete_local_tag(&self, name: &str) -> Result<()> {
        self.delete_tag(name)
    }
}
