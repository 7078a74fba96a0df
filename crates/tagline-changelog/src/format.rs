//! Commit message formatting for changelog entries

use tagline_version::trim_header;

/// How a commit message is turned into a list item body
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MessageStyle {
    /// Keep every line instead of only the first
    pub multiline: bool,
    /// Drop lines preceding the conventional header
    pub trim_header: bool,
}

impl MessageStyle {
    pub fn new(multiline: bool, trim_header: bool) -> Self {
        Self {
            multiline,
            trim_header,
        }
    }

    /// Format `message` for use after a list marker.
    ///
    /// Multi-line messages have their continuation lines indented by two
    /// spaces so they nest under the list item; blank lines stay empty.
    pub fn format(&self, message: &str) -> String {
        let message = if self.trim_header {
            trim_header(message)
        } else {
            message
        };

        if !self.multiline {
            return message.lines().next().unwrap_or("").trim_end().to_string();
        }

        message
            .trim_end()
            .lines()
            .enumerate()
            .map(|(i, line)| {
                let line = line.trim_end();
                if i == 0 || line.is_empty() {
                    line.to_string()
                } else {
                    format!("  {}", line)
                }
            })
            .collect::<Vec<_>>()
            .join("\n")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const MESSAGE: &str = "feat: add export\n\nSupports CSV and JSON.\nLarge files stream.\n";

    #[test]
    fn test_single_line() {
        assert_eq!(MessageStyle::default().format(MESSAGE), "feat: add export");
    }

    #[test]
    fn test_multiline_indents_continuation() {
        let style = MessageStyle::new(true, false);
        assert_eq!(
            style.format(MESSAGE),
            "feat: add export\n\n  Supports CSV and JSON.\n  Large files stream."
        );
    }

    #[test]
    fn test_whitespace_only_lines_become_blank() {
        let style = MessageStyle::new(true, false);
        assert_eq!(style.format("fix: a\n   \nbody"), "fix: a\n\n  body");
    }

    #[test]
    fn test_trim_header_in_both_styles() {
        let squashed = "Merged PR 42\nfix(api): handle 404\n\ndetails";

        let single = MessageStyle::new(false, true);
        assert_eq!(single.format(squashed), "fix(api): handle 404");

        let multi = MessageStyle::new(true, true);
        assert_eq!(multi.format(squashed), "fix(api): handle 404\n\n  details");

        assert_eq!(MessageStyle::default().format(squashed), "Merged PR 42");
    }
}
