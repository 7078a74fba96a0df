//! Markdown rendering of release sections

use tracing::{debug, instrument};

use crate::format::MessageStyle;
use crate::release::Release;

/// Fixed text opening every generated changelog
pub const PREAMBLE: &str = "# Changelog\n\n\
All notable changes to this project will be documented in this file.\n\n";

/// Insertion point for new release sections
pub const UNRELEASED_ANCHOR: &str = "## Unreleased\n\n";

/// Renders releases as Markdown sections
#[derive(Debug, Clone, Copy, Default)]
pub struct MarkdownRenderer {
    style: MessageStyle,
}

impl MarkdownRenderer {
    pub fn new(style: MessageStyle) -> Self {
        Self { style }
    }

    /// Render one release:
    ///
    /// ```text
    /// ## v1.2.0 - 2024-03-01
    ///
    /// - `1a2b3c4` feat: add export
    /// ```
    pub fn render_release(&self, release: &Release) -> String {
        let tag = &release.tag.name;
        let date = release.date().format("%Y-%m-%d");

        let mut output = match &release.links {
            Some(links) => format!("## [{}]({}) - {}\n\n", tag, links.tag_link(tag), date),
            None => format!("## {} - {}\n\n", tag, date),
        };

        for commit in &release.commits {
            let hash = match &release.links {
                Some(links) => format!(
                    "[`{}`]({})",
                    commit.short_hash,
                    links.commit_link(&commit.hash)
                ),
                None => format!("`{}`", commit.short_hash),
            };
            output.push_str(&format!("- {} {}\n", hash, self.style.format(&commit.message)));
        }

        if !release.is_empty() {
            output.push('\n');
        }

        output
    }

    /// Render releases in the order given, newest first by convention
    #[instrument(skip(self, releases), fields(release_count = releases.len()))]
    pub fn render_sections(&self, releases: &[Release]) -> String {
        let output: String = releases.iter().map(|r| self.render_release(r)).collect();
        debug!(output_len = output.len(), "rendered changelog sections");
        output
    }

    /// A complete document: preamble, anchor, then every section
    pub fn render_document(&self, releases: &[Release]) -> String {
        format!(
            "{}{}{}",
            PREAMBLE,
            UNRELEASED_ANCHOR,
            self.render_sections(releases)
        )
    }
}
