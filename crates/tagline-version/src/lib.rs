//! Tagline Version - next-version calculation for release automation
//!
//! This crate classifies Conventional Commits messages, reduces a commit
//! range to a single [`Increment`](tagline_core::Increment) and applies it to
//! the latest version tag.

mod aggregate;
mod calculator;
mod parser;

pub use aggregate::RangeAggregator;
pub use calculator::{parse_prerelease_suffix, NextVersionOptions, VersionCalculator, VersionResult};
pub use parser::{trim_header, ConventionalParser};
