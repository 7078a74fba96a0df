//! Opening repositories through git2

use std::path::{Path, PathBuf};

use git2::{ErrorCode, Repository};
use tracing::{debug, instrument};

use tagline_core::error::GitError;

/// Result alias used throughout tagline-git
pub type Result<T> = std::result::Result<T, GitError>;

/// A git working tree backed by libgit2
pub struct GitRepo {
    pub(crate) repo: Repository,
    path: PathBuf,
}

/// Turn a failed open into a typed error, `missing` for the not-found case
fn open_error(err: git2::Error, missing: impl FnOnce() -> GitError) -> GitError {
    match err.code() {
        ErrorCode::NotFound => missing(),
        _ => GitError::OpenFailed(err.message().to_string()),
    }
}

impl GitRepo {
    /// Open the repository rooted exactly at `path`
    #[instrument(fields(path = %path.display()))]
    pub fn open(path: &Path) -> Result<Self> {
        let repo = Repository::open(path)
            .map_err(|e| open_error(e, || GitError::RepositoryNotFound(path.to_path_buf())))?;
        debug!("repository opened");

        Ok(Self {
            repo,
            path: path.to_path_buf(),
        })
    }

    /// Open the repository containing `start`, walking up as git does
    #[instrument(fields(start = %start.display()))]
    pub fn discover(start: &Path) -> Result<Self> {
        let repo = Repository::discover(start)
            .map_err(|e| open_error(e, || GitError::NotARepository(start.to_path_buf())))?;

        // bare repositories have no workdir
        let path = match repo.workdir() {
            Some(dir) => dir.to_path_buf(),
            None => repo.path().to_path_buf(),
        };
        debug!(path = %path.display(), "repository discovered");

        Ok(Self { repo, path })
    }

    /// Working tree root
    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn inner(&self) -> &Repository {
        &self.repo
    }

    pub fn head_commit(&self) -> Result<git2::Commit<'_>> {
        Ok(self.repo.head()?.peel_to_commit()?)
    }

    /// Resolve a revision (tag, branch, `HEAD`, hash) to a commit
    pub(crate) fn resolve_commit(&self, rev: &str) -> Result<git2::Commit<'_>> {
        let object = self.repo.revparse_single(rev).map_err(|e| match e.code() {
            ErrorCode::NotFound => GitError::UnknownRef(rev.to_string()),
            _ => GitError::Git2(e),
        })?;
        Ok(object.peel_to_commit()?)
    }
}
