//! Walking commit ranges

use chrono::{TimeZone, Utc};
use git2::Sort;
use tracing::{debug, instrument};

use crate::repository::{GitRepo, Result};
use crate::types::CommitInfo;

impl GitRepo {
    /// Commits reachable from `to` but not from `from`, newest first
    #[instrument(skip(self))]
    pub fn commits_between(&self, from: Option<&str>, to: &str) -> Result<Vec<CommitInfo>> {
        let tip = self.resolve_commit(to)?;

        let mut revwalk = self.repo.revwalk()?;
        revwalk.set_sorting(Sort::TOPOLOGICAL | Sort::TIME)?;
        revwalk.push(tip.id())?;

        if let Some(from) = from {
            let base = self.resolve_commit(from)?;
            revwalk.hide(base.id())?;
        }

        let commits = revwalk
            .map(|oid| Ok(commit_info(&self.repo.find_commit(oid?)?)))
            .collect::<Result<Vec<_>>>()?;

        debug!(count = commits.len(), "walked commit range");
        Ok(commits)
    }
}

fn commit_info(commit: &git2::Commit<'_>) -> CommitInfo {
    let author = commit.author();
    // a timestamp chrono cannot represent falls back to the epoch
    let timestamp = Utc
        .timestamp_opt(commit.time().seconds(), 0)
        .single()
        .unwrap_or_default();

    CommitInfo::new(
        commit.id().to_string(),
        String::from_utf8_lossy(commit.message_bytes()),
        String::from_utf8_lossy(author.name_bytes()),
        String::from_utf8_lossy(author.email_bytes()),
        timestamp,
    )
}

#[cfg(test)]
mod tests {
    use crate::repository::test_support::Scratch;

    #[test]
    fn test_full_history_newest_first() {
        let scratch = Scratch::new();
        scratch.commit("feat: x", 1_700_000_000);
        scratch.commit("fix: y\n\nbody text", 1_700_000_100);
        let repo = scratch.open();

        let commits = repo.commits_between(None, "HEAD").unwrap();
        assert_eq!(commits.len(), 2);
        assert_eq!(commits[0].message, "fix: y\n\nbody text");
        assert_eq!(commits[1].message, "feat: x");
        assert_eq!(commits[0].short_hash.len(), 7);
    }

    #[test]
    fn test_range_excludes_base() {
        let scratch = Scratch::new();
        let first = scratch.commit("feat: x", 1_700_000_000);
        scratch.tag("v0.1.0", first);
        scratch.commit("fix: y", 1_700_000_100);
        scratch.commit("docs: z", 1_700_000_200);
        let repo = scratch.open();

        let commits = repo.commits_between(Some("v0.1.0"), "HEAD").unwrap();
        let messages: Vec<_> = commits.iter().map(|c| c.message.as_str()).collect();
        assert_eq!(messages, vec!["docs: z", "fix: y"]);
    }

    #[test]
    fn test_unknown_base_is_an_error() {
        let scratch = Scratch::new();
        scratch.commit("feat: x", 1_700_000_000);
        let repo = scratch.open();

        assert!(repo.commits_between(Some("v9.9.9"), "HEAD").is_err());
    }
}
