//! Tagline - semantic version release automation
//!
//! Computes the next version of a git repository from its Conventional
//! Commits history and keeps a Markdown changelog in step with its tags.
//!
//! ```no_run
//! use std::path::Path;
//!
//! use tagline::{prepare_release, ReleaseOptions};
//! use tagline_core::config::load_config_or_default;
//! use tagline_git::GitRepo;
//!
//! # fn main() -> tagline_core::Result<()> {
//! let repo = GitRepo::discover(Path::new("."))?;
//! let (config, _) = load_config_or_default(repo.path())?;
//! let options = ReleaseOptions::from_config(&config)?;
//!
//! let plan = prepare_release(&repo, &options, &mut std::io::stdout())?;
//! if let Some(next) = &plan.version.next {
//!     println!("next version: {}", next);
//! }
//! # Ok(())
//! # }
//! ```

pub mod options;
pub mod workflow;

pub use options::ReleaseOptions;
pub use workflow::{
    changelog, changelog_for_latest, current_version, next_version, prepare_release,
    release_commit_message, ChangelogOutcome, ReleasePlan, SkipReason,
};
