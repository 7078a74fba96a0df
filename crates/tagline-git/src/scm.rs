//! Hyperlink templates for the hosting provider behind a remote
//!
//! Providers are data here: detection yields a pair of URL templates with
//! `{tag}` and `{hash}` placeholders that the changelog interpolates.

use url::Url;

/// Hosting platform detected from a remote URL
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScmProvider {
    GitHub,
    GitLab,
    Gitea,
    CodeCommit,
    Unrecognised,
}

impl ScmProvider {
    /// Classify a remote host name
    pub fn from_host(host: &str) -> Self {
        let host = host.to_lowercase();

        if host == "github.com" || host.ends_with(".github.com") {
            Self::GitHub
        } else if host == "gitlab.com" || host.starts_with("gitlab.") || host.contains(".gitlab.")
        {
            Self::GitLab
        } else if host == "codeberg.org" || host.starts_with("gitea.") {
            Self::Gitea
        } else if host.starts_with("git-codecommit.") && host.ends_with(".amazonaws.com") {
            Self::CodeCommit
        } else {
            Self::Unrecognised
        }
    }
}

/// Tag and commit URL templates for one repository
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScmLinks {
    pub provider: ScmProvider,
    /// Template containing `{tag}`
    pub tag_url: String,
    /// Template containing `{hash}`
    pub commit_url: String,
}

impl ScmLinks {
    /// Build link templates from a remote URL.
    ///
    /// Accepts `https://`, `ssh://` and scp-like `git@host:owner/repo.git`
    /// remotes. Returns `None` for unrecognised hosts and unparseable URLs.
    pub fn from_remote_url(remote: &str) -> Option<Self> {
        let url = parse_remote(remote)?;
        let host = url.host_str()?;
        let provider = ScmProvider::from_host(host);

        let path = url.path().trim_matches('/');
        let path = path.strip_suffix(".git").unwrap_or(path);
        if path.is_empty() {
            return None;
        }

        let base = format!("https://{}/{}", host, path);
        let (tag_url, commit_url) = match provider {
            ScmProvider::GitHub | ScmProvider::Gitea => (
                format!("{}/releases/tag/{{tag}}", base),
                format!("{}/commit/{{hash}}", base),
            ),
            ScmProvider::GitLab => (
                format!("{}/-/tags/{{tag}}", base),
                format!("{}/-/commit/{{hash}}", base),
            ),
            ScmProvider::CodeCommit => codecommit_templates(host, path)?,
            ScmProvider::Unrecognised => return None,
        };

        Some(Self {
            provider,
            tag_url,
            commit_url,
        })
    }

    /// Link to a tag
    pub fn tag_link(&self, tag: &str) -> String {
        self.tag_url.replace("{tag}", tag)
    }

    /// Link to a commit
    pub fn commit_link(&self, hash: &str) -> String {
        self.commit_url.replace("{hash}", hash)
    }
}

/// Parse a remote, rewriting scp-like syntax into an `ssh://` URL
fn parse_remote(remote: &str) -> Option<Url> {
    if remote.contains("://") {
        return Url::parse(remote).ok();
    }

    let (authority, path) = remote.split_once(':')?;
    Url::parse(&format!("ssh://{}/{}", authority, path.trim_start_matches('/'))).ok()
}

/// CodeCommit remotes look like `git-codecommit.<region>.amazonaws.com/v1/repos/<name>`
fn codecommit_templates(host: &str, path: &str) -> Option<(String, String)> {
    let region = host
        .strip_prefix("git-codecommit.")?
        .strip_suffix(".amazonaws.com")?;
    let name = path.rsplit('/').next()?;

    let console = format!(
        "https://{region}.console.aws.amazon.com/codesuite/codecommit/repositories/{name}"
    );
    Some((
        format!("{console}/browse/refs/tags/{{tag}}?region={region}"),
        format!("{console}/commit/{{hash}}?region={region}"),
    ))
}
