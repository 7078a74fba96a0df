//! The changelog file on disk

use std::path::{Path, PathBuf};

use tracing::{info, instrument};

use tagline_core::error::ChangelogError;

use crate::markdown::UNRELEASED_ANCHOR;

/// Insert `sections` directly after the unreleased anchor.
///
/// Returns `None` when `document` has no anchor.
pub fn splice(document: &str, sections: &str) -> Option<String> {
    let idx = document.find(UNRELEASED_ANCHOR)? + UNRELEASED_ANCHOR.len();

    let mut output = String::with_capacity(document.len() + sections.len());
    output.push_str(&document[..idx]);
    output.push_str(sections);
    output.push_str(&document[idx..]);
    Some(output)
}

/// A changelog file
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChangelogFile {
    path: PathBuf,
}

impl ChangelogFile {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn exists(&self) -> bool {
        self.path.exists()
    }

    /// Replace the file with `document`
    #[instrument(skip(self, document), fields(path = %self.path.display()))]
    pub fn write(&self, document: &str) -> Result<(), ChangelogError> {
        std::fs::write(&self.path, document).map_err(|source| ChangelogError::WriteFailed {
            path: self.path.clone(),
            source,
        })?;
        info!(path = %self.path.display(), bytes = document.len(), "wrote changelog");
        Ok(())
    }

    /// Splice `sections` after the anchor of the existing file.
    ///
    /// The file is left untouched when it lacks the anchor.
    #[instrument(skip(self, sections), fields(path = %self.path.display()))]
    pub fn append(&self, sections: &str) -> Result<(), ChangelogError> {
        let current =
            std::fs::read_to_string(&self.path).map_err(|source| ChangelogError::ReadFailed {
                path: self.path.clone(),
                source,
            })?;

        let updated = splice(&current, sections)
            .ok_or_else(|| ChangelogError::MissingAnchor(self.path.clone()))?;

        self.write(&updated)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::markdown::PREAMBLE;
    use tempfile::TempDir;

    #[test]
    fn test_splice_after_anchor() {
        let doc = format!("{}{}## v1.0.0 - 2024-01-01\n\n", PREAMBLE, UNRELEASED_ANCHOR);
        let out = splice(&doc, "## v1.1.0 - 2024-02-01\n\n").unwrap();
        assert_eq!(
            out,
            format!(
                "{}{}## v1.1.0 - 2024-02-01\n\n## v1.0.0 - 2024-01-01\n\n",
                PREAMBLE, UNRELEASED_ANCHOR
            )
        );
    }

    #[test]
    fn test_splice_requires_exact_anchor() {
        assert!(splice("# Changelog\n\n## Unreleased\n", "x").is_none());
        assert!(splice("## unreleased\n\n", "x").is_none());
    }

    #[test]
    fn test_append_missing_anchor_leaves_file_untouched() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("CHANGELOG.md");
        let original = "# Changelog\n\nHand written notes\n";
        std::fs::write(&path, original).unwrap();

        let file = ChangelogFile::new(&path);
        let result = file.append("## v1.0.0 - 2024-01-01\n\n");

        assert!(matches!(result, Err(ChangelogError::MissingAnchor(_))));
        assert_eq!(std::fs::read(&path).unwrap(), original.as_bytes());
    }

    #[test]
    fn test_append_missing_file() {
        let temp = TempDir::new().unwrap();
        let file = ChangelogFile::new(temp.path().join("CHANGELOG.md"));
        assert!(!file.exists());
        assert!(matches!(
            file.append("x"),
            Err(ChangelogError::ReadFailed { .. })
        ));
    }

    #[test]
    fn test_write_then_append() {
        let temp = TempDir::new().unwrap();
        let file = ChangelogFile::new(temp.path().join("CHANGELOG.md"));

        file.write(&format!("{}{}", PREAMBLE, UNRELEASED_ANCHOR)).unwrap();
        file.append("## 0.1.0 - 2024-01-01\n\n").unwrap();

        let content = std::fs::read_to_string(file.path()).unwrap();
        assert!(content.ends_with("## Unreleased\n\n## 0.1.0 - 2024-01-01\n\n"));
    }
}
