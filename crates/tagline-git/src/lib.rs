//! Tagline Git - Git operations for release automation
//!
//! This crate provides the [`Vcs`] collaborator used by the rest of tagline,
//! a git2-backed implementation, an in-memory mock, version tag resolution
//! and SCM hyperlink detection.

mod commits;
pub mod mock;
mod pretag;
mod remote;
mod repository;
mod resolver;
pub mod scm;
mod tags;
pub mod types;
mod vcs;

pub use mock::MockRepo;
pub use pretag::PreTag;
pub use repository::{GitRepo, Result};
pub use resolver::{ResolvedTag, TagFilter, TagResolver, VERSION_TAG_GLOB};
pub use scm::{ScmLinks, ScmProvider};
pub use types::{CommitInfo, TagInfo};
pub use vcs::Vcs;
