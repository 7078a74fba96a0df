//! A single release section

use chrono::NaiveDate;

use tagline_git::{CommitInfo, ScmLinks, TagInfo};

/// One tag and the commits it introduced, ready to render
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Release {
    pub tag: TagInfo,
    /// Filtered and sorted
    pub commits: Vec<CommitInfo>,
    pub links: Option<ScmLinks>,
}

impl Release {
    pub fn new(tag: TagInfo, commits: Vec<CommitInfo>) -> Self {
        Self {
            tag,
            commits,
            links: None,
        }
    }

    pub fn with_links(mut self, links: Option<ScmLinks>) -> Self {
        self.links = links;
        self
    }

    /// Annotation date for annotated tags, commit date otherwise
    pub fn date(&self) -> NaiveDate {
        self.tag.created().date_naive()
    }

    pub fn is_empty(&self) -> bool {
        self.commits.is_empty()
    }
}
