//! Remote operations

use tracing::debug;

use crate::repository::{GitRepo, Result};
use crate::scm::ScmLinks;
use tagline_core::error::GitError;

impl GitRepo {
    /// Get the URL for a remote
    pub fn remote_url(&self, name: &str) -> Result<Option<String>> {
        match self.repo.find_remote(name) {
            Ok(remote) => Ok(remote.url().map(|s| s.to_string())),
            Err(e) if e.code() == git2::ErrorCode::NotFound => {
                Err(GitError::RemoteNotFound(name.to_string()))
            }
            Err(e) => Err(GitError::Git2(e)),
        }
    }

    /// Link templates for the provider hosting `remote`, if it is recognised
    pub fn scm_links(&self, remote: &str) -> Result<Option<ScmLinks>> {
        let links = self
            .remote_url(remote)?
            .and_then(|url| ScmLinks::from_remote_url(&url));
        debug!(remote, provider = ?links.as_ref().map(|l| l.provider), "detected scm provider");
        Ok(links)
    }
}
