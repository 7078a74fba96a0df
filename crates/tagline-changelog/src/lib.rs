//! Tagline Changelog - Changelog assembly for release automation
//!
//! This crate filters, formats and renders commits between version tags into
//! Markdown release sections, and writes them to a changelog document.

mod assembler;
mod document;
mod filter;
mod format;
pub mod markdown;
mod release;

pub use assembler::{AssemblerOptions, ChangelogAssembler, WriteMode};
pub use document::{splice, ChangelogFile};
pub use filter::{CommitFilter, RELEASE_COMMIT_PREFIX};
pub use format::MessageStyle;
pub use markdown::{MarkdownRenderer, PREAMBLE, UNRELEASED_ANCHOR};
pub use release::Release;
