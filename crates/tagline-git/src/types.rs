//! Plain data carried out of the repository

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One commit as seen by the release engine
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommitInfo {
    pub hash: String,
    /// Leading seven hex digits of `hash`
    pub short_hash: String,
    /// Full commit message, possibly spanning several lines
    pub message: String,
    pub author: String,
    pub author_email: String,
    pub timestamp: DateTime<Utc>,
}

impl CommitInfo {
    pub fn new(
        hash: impl Into<String>,
        message: impl Into<String>,
        author: impl Into<String>,
        author_email: impl Into<String>,
        timestamp: DateTime<Utc>,
    ) -> Self {
        let hash = hash.into();
        let short_hash = hash.chars().take(7).collect();

        Self {
            hash,
            short_hash,
            message: message.into(),
            author: author.into(),
            author_email: author_email.into(),
            timestamp,
        }
    }

    /// First line of the message
    pub fn summary(&self) -> &str {
        self.message.lines().next().unwrap_or("")
    }
}

/// A tag and the commit it peels to
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TagInfo {
    pub name: String,
    pub commit_hash: String,
    pub commit_date: DateTime<Utc>,
    /// Tagger date, present only for annotated tags
    pub annotated_date: Option<DateTime<Utc>>,
}

impl TagInfo {
    /// A lightweight tag; see [`TagInfo::with_annotated_date`]
    pub fn new(
        name: impl Into<String>,
        commit_hash: impl Into<String>,
        commit_date: DateTime<Utc>,
    ) -> Self {
        Self {
            name: name.into(),
            commit_hash: commit_hash.into(),
            commit_date,
            annotated_date: None,
        }
    }

    /// Mark the tag as annotated at the given date
    pub fn with_annotated_date(mut self, date: DateTime<Utc>) -> Self {
        self.annotated_date = Some(date);
        self
    }

    pub fn is_annotated(&self) -> bool {
        self.annotated_date.is_some()
    }

    /// Creation date: the annotation date when annotated, else the commit date
    pub fn created(&self) -> DateTime<Utc> {
        self.annotated_date.unwrap_or(self.commit_date)
    }
}
