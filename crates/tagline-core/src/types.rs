//! Core types for tagline

use serde::{Deserialize, Serialize};

/// Severity of a version bump.
///
/// Variants are declared in ascending order so the derived `Ord` gives
/// `None < Patch < Minor < Major`.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum Increment {
    /// No release-worthy change
    #[default]
    None,
    /// Bug fixes
    Patch,
    /// New features
    Minor,
    /// Breaking changes
    Major,
}

impl Increment {
    /// Returns the string representation of the increment
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::None => "none",
            Self::Patch => "patch",
            Self::Minor => "minor",
            Self::Major => "major",
        }
    }
}

impl std::fmt::Display for Increment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Ordering of commits within a changelog release
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortOrder {
    /// Oldest commit first
    Asc,
    /// Newest commit first, matching log order
    #[default]
    Desc,
}

impl std::str::FromStr for SortOrder {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "asc" => Ok(Self::Asc),
            "desc" => Ok(Self::Desc),
            _ => Err(format!("Unknown sort order: {}", s)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn test_increment_ordering() {
        assert!(Increment::None < Increment::Patch);
        assert!(Increment::Patch < Increment::Minor);
        assert!(Increment::Minor < Increment::Major);
        assert_eq!(Increment::Patch.max(Increment::Minor), Increment::Minor);
    }

    #[test]
    fn test_sort_order_is_case_insensitive() {
        assert_eq!(SortOrder::from_str("ASC").unwrap(), SortOrder::Asc);
        assert_eq!(SortOrder::from_str("Desc").unwrap(), SortOrder::Desc);
        assert!(SortOrder::from_str("newest").is_err());
    }
}
