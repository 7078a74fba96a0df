//! Tagline Core - Core library for release automation
//!
//! This crate provides the foundational types, error handling and
//! configuration shared by the tagline crates.

pub mod config;
pub mod error;
pub mod types;
pub mod version;

pub use error::{ChangelogError, ConfigError, GitError, Result, TaglineError, VersionError};
pub use types::{Increment, SortOrder};
pub use version::Version;
