//! Increment over a commit range

use tracing::debug;

use tagline_core::Increment;
use tagline_git::CommitInfo;

use crate::parser::ConventionalParser;

/// Reduces a range of commits to the largest increment any of them asks for
#[derive(Debug, Clone, Copy, Default)]
pub struct RangeAggregator {
    parser: ConventionalParser,
}

impl RangeAggregator {
    pub fn new(parser: ConventionalParser) -> Self {
        Self { parser }
    }

    /// The maximum increment across `commits`, in any order
    pub fn aggregate(&self, commits: &[CommitInfo]) -> Increment {
        let mut increment = Increment::None;

        for commit in commits {
            increment = increment.max(self.parser.parse(&commit.message));
            if increment == Increment::Major {
                break;
            }
        }

        debug!(commits = commits.len(), %increment, "aggregated increment");
        increment
    }
}
