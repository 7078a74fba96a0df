//! In-memory [`Vcs`] for tests
//!
//! History is linear: every commit sits on top of the previous one and HEAD
//! is always the newest commit.

use std::cell::RefCell;

use chrono::{DateTime, Duration, TimeZone, Utc};

use tagline_core::error::GitError;

use crate::repository::Result;
use crate::types::{CommitInfo, TagInfo};
use crate::vcs::Vcs;

#[derive(Debug, Clone)]
struct MockTag {
    name: String,
    commit: usize,
    annotated_date: Option<DateTime<Utc>>,
}

#[derive(Debug, Default)]
struct State {
    /// Oldest first
    commits: Vec<CommitInfo>,
    tags: Vec<MockTag>,
    failure: Option<String>,
    created: Vec<String>,
    deleted: Vec<String>,
}

/// A repository held entirely in memory
#[derive(Debug, Default)]
pub struct MockRepo {
    state: RefCell<State>,
}

impl MockRepo {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a commit one minute after the previous one and return its hash
    pub fn commit(&self, message: &str) -> String {
        let base = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).single();
        let index = self.state.borrow().commits.len();
        let timestamp = base.unwrap_or_else(Utc::now) + Duration::minutes(index as i64);
        self.commit_at(message, timestamp)
    }

    /// Add a commit with an explicit timestamp and return its hash
    pub fn commit_at(&self, message: &str, timestamp: DateTime<Utc>) -> String {
        let mut state = self.state.borrow_mut();
        let hash = fake_hash(state.commits.len());
        state.commits.push(CommitInfo::new(
            hash.clone(),
            message,
            "Test",
            "test@example.com",
            timestamp,
        ));
        hash
    }

    /// Lightweight tag on HEAD
    pub fn tag(&self, name: &str) {
        self.push_tag(name, None);
    }

    /// Annotated tag on HEAD dated `date`
    pub fn annotated_tag(&self, name: &str, date: DateTime<Utc>) {
        self.push_tag(name, Some(date));
    }

    /// Make every tag listing and log query fail with `message`
    pub fn fail_with(&self, message: &str) {
        self.state.borrow_mut().failure = Some(message.to_string());
    }

    /// Names passed to `create_local_tag`, in call order
    pub fn created_tags(&self) -> Vec<String> {
        self.state.borrow().created.clone()
    }

    /// Names passed to `delete_local_tag`, in call order
    pub fn deleted_tags(&self) -> Vec<String> {
        self.state.borrow().deleted.clone()
    }

    /// Current tag names in creation order
    pub fn tag_names(&self) -> Vec<String> {
        self.state
            .borrow()
            .tags
            .iter()
            .map(|t| t.name.clone())
            .collect()
    }

    fn push_tag(&self, name: &str, annotated_date: Option<DateTime<Utc>>) {
        let mut state = self.state.borrow_mut();
        let commit = state.commits.len().saturating_sub(1);
        state.tags.retain(|t| t.name != name);
        state.tags.push(MockTag {
            name: name.to_string(),
            commit,
            annotated_date,
        });
    }

    fn check_failure(&self) -> Result<()> {
        match &self.state.borrow().failure {
            Some(message) => Err(GitError::Git2(git2::Error::from_str(message))),
            None => Ok(()),
        }
    }
}

impl State {
    fn info(&self, tag: &MockTag) -> Option<TagInfo> {
        let commit = self.commits.get(tag.commit)?;
        let mut info = TagInfo::new(&tag.name, &commit.hash, commit.timestamp);
        if let Some(date) = tag.annotated_date {
            info = info.with_annotated_date(date);
        }
        Some(info)
    }

    fn resolve(&self, rev: &str) -> Result<usize> {
        if rev == "HEAD" && !self.commits.is_empty() {
            return Ok(self.commits.len() - 1);
        }
        if let Some(tag) = self.tags.iter().find(|t| t.name == rev) {
            return Ok(tag.commit);
        }
        if rev.len() >= 7 {
            if let Some(index) = self.commits.iter().position(|c| c.hash.starts_with(rev)) {
                return Ok(index);
            }
        }
        Err(GitError::UnknownRef(rev.to_string()))
    }
}

impl Vcs for MockRepo {
    fn list_tags(&self, pattern: &str) -> Result<Vec<TagInfo>> {
        self.check_failure()?;
        let glob = glob::Pattern::new(pattern)
            .map_err(|e| GitError::InvalidTagPattern(pattern.to_string(), e.to_string()))?;

        let state = self.state.borrow();
        Ok(state
            .tags
            .iter()
            .filter(|t| glob.matches(&t.name))
            .filter_map(|t| state.info(t))
            .collect())
    }

    fn log(&self, from: Option<&str>, to: &str) -> Result<Vec<CommitInfo>> {
        self.check_failure()?;
        let state = self.state.borrow();

        let end = state.resolve(to)?;
        let start = match from {
            Some(from) => state.resolve(from)? + 1,
            None => 0,
        };

        if start > end {
            return Ok(Vec::new());
        }
        Ok(state.commits[start..=end].iter().rev().cloned().collect())
    }

    fn tag_details(&self, name: &str) -> Result<Option<TagInfo>> {
        let state = self.state.borrow();
        Ok(state
            .tags
            .iter()
            .find(|t| t.name == name)
            .and_then(|t| state.info(t)))
    }

    fn create_local_tag(&self, name: &str) -> Result<()> {
        {
            let mut state = self.state.borrow_mut();
            if state.tags.iter().any(|t| t.name == name) {
                return Err(GitError::TagExists(name.to_string()));
            }
            if state.commits.is_empty() {
                return Err(GitError::UnknownRef("HEAD".to_string()));
            }
            state.created.push(name.to_string());
        }
        self.tag(name);
        Ok(())
    }

    fn delete_local_tag(&self, name: &str) -> Result<()> {
        let mut state = self.state.borrow_mut();
        let before = state.tags.len();
        state.tags.retain(|t| t.name != name);
        if state.tags.len() == before {
            return Err(GitError::TagNotFound(name.to_string()));
        }
        state.deleted.push(name.to_string());
        Ok(())
    }
}

/// Deterministic 40 character hash that differs in its leading characters
fn fake_hash(index: usize) -> String {
    let mixed = (index as u128 + 1).wrapping_mul(0x9e37_79b9_7f4a_7c15_f39c_c060_5ced_c835);
    format!("{:032x}{:08x}", mixed, index)
}
