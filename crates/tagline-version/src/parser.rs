//! Conventional Commits classification

use tagline_core::Increment;

const SEPARATOR: &str = ": ";
const BREAKING_FOOTERS: [&str; 2] = ["BREAKING CHANGE: ", "BREAKING-CHANGE: "];

/// Drop every line before the one holding the first `": "` separator.
///
/// Squash merges often prepend explanatory lines to the conventional header;
/// this skips them. Messages without a separator are returned unchanged.
pub fn trim_header(message: &str) -> &str {
    let Some(idx) = message.find(SEPARATOR) else {
        return message;
    };

    match message[..idx].rfind('\n') {
        Some(newline) => &message[newline + 1..],
        None => message,
    }
}

/// Classifies a single commit message into an [`Increment`]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ConventionalParser {
    trim_header: bool,
}

impl ConventionalParser {
    pub fn new() -> Self {
        Self::default()
    }

    /// Skip leading lines before the type token
    pub fn with_trim_header(mut self, trim: bool) -> Self {
        self.trim_header = trim;
        self
    }

    /// Classify `message`.
    ///
    /// `feat` is a minor bump and `fix` a patch bump, with or without a
    /// `(scope)`. A `!` before the separator or a trailing `BREAKING CHANGE: `
    /// paragraph is a major bump. Anything else, including messages with no
    /// type token at all, is [`Increment::None`].
    pub fn parse(&self, message: &str) -> Increment {
        let message = if self.trim_header {
            trim_header(message)
        } else {
            message
        };

        let Some(idx) = message.find(SEPARATOR) else {
            return Increment::None;
        };
        let token = message[..idx].to_lowercase();

        if token.ends_with('!') || has_breaking_footer(message) {
            return Increment::Major;
        }

        if matches_type(&token, "feat") {
            Increment::Minor
        } else if matches_type(&token, "fix") {
            Increment::Patch
        } else {
            Increment::None
        }
    }
}

/// `kind` exactly, or `kind(<scope>)`
fn matches_type(token: &str, kind: &str) -> bool {
    match token.strip_prefix(kind) {
        Some("") => true,
        Some(rest) => rest.starts_with('(') && rest.ends_with(')'),
        None => false,
    }
}

fn has_breaking_footer(message: &str) -> bool {
    let body = message.trim_end_matches('\n');
    let last = body.rsplit('\n').next().unwrap_or(body);
    BREAKING_FOOTERS.iter().any(|footer| last.starts_with(footer))
}
