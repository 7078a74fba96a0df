//! Version control collaborator

use crate::repository::Result;
use crate::types::{CommitInfo, TagInfo};

/// The repository queries tagline needs.
///
/// Every call is synchronous; failures are returned as-is and never retried.
/// [`GitRepo`](crate::GitRepo) implements it on top of git2 and
/// [`MockRepo`](crate::MockRepo) keeps everything in memory for tests.
pub trait Vcs {
    /// Tags whose name matches a shell glob such as `*.*.*`, in no
    /// particular order
    fn list_tags(&self, pattern: &str) -> Result<Vec<TagInfo>>;

    /// Commits reachable from `to` but not from `from`, newest first.
    ///
    /// `from = None` walks to the start of history.
    fn log(&self, from: Option<&str>, to: &str) -> Result<Vec<CommitInfo>>;

    /// Details of a single tag, or `None` if it does not exist
    fn tag_details(&self, name: &str) -> Result<Option<TagInfo>>;

    /// Create a lightweight, local-only tag at HEAD
    fn create_local_tag(&self, name: &str) -> Result<()>;

    /// Delete a local tag
    fn delete_local_tag(&self, name: &str) -> Result<()>;
}
