// ABOUTME: Parses plan text into display blocks: headings, list items, breaks and paragraphs
// ABOUTME: Single pass, one block per line, no nesting and no inline emphasis parsing
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Display Block Renderer
//!
//! Classification looks at the trimmed line, while the marker stripping
//! only applies at the very start of the untrimmed line. An indented
//! `  ## Title` is therefore a level 1 heading whose text keeps the
//! indentation and the hashes.
//!
//! List items strip exactly one `*` or `-` marker, so `**Protein Sources:**`
//! becomes the item text `*Protein Sources:**` and `---` becomes `--`.

use serde::{Deserialize, Serialize};

/// One rendered line
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum DisplayBlock {
    /// `#`-prefixed line
    Heading {
        /// Length of the leading `#` run, at least 1
        level: usize,
        /// Line text without the marker
        text: String,
    },
    /// `*` or `-` prefixed line
    ListItem {
        /// Line text without the marker
        text: String,
    },
    /// Blank line
    Break,
    /// Any other line, unchanged
    Paragraph {
        /// Line text
        text: String,
    },
}

/// Visual size of a heading; only three distinct sizes exist
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HeadingSize {
    /// Level 1
    Large,
    /// Level 2
    Medium,
    /// Level 3
    Small,
    /// Level 4 and deeper
    Base,
}

impl HeadingSize {
    /// Size for a heading level
    #[must_use]
    pub const fn for_level(level: usize) -> Self {
        match level {
            1 => Self::Large,
            2 => Self::Medium,
            3 => Self::Small,
            _ => Self::Base,
        }
    }
}

impl DisplayBlock {
    /// Classify a single line
    #[must_use]
    pub fn from_line(line: &str) -> Self {
        let trimmed = line.trim();

        if trimmed.starts_with('#') {
            let hashes = line.len() - line.trim_start_matches('#').len();
            let text = if hashes > 0 {
                line[hashes..].trim_start()
            } else {
                line
            };
            return Self::Heading {
                level: hashes.max(1),
                text: text.to_owned(),
            };
        }

        if trimmed.starts_with(['*', '-']) {
            let text = line
                .strip_prefix(['*', '-'])
                .map_or(line, str::trim_start);
            return Self::ListItem {
                text: text.to_owned(),
            };
        }

        if trimmed.is_empty() {
            return Self::Break;
        }

        Self::Paragraph {
            text: line.to_owned(),
        }
    }

    /// Heading size, if this block is a heading
    #[must_use]
    pub const fn heading_size(&self) -> Option<HeadingSize> {
        match self {
            Self::Heading { level, .. } => Some(HeadingSize::for_level(*level)),
            _ => None,
        }
    }
}

/// Split plan text on `\n` and classify every line, in order
#[must_use]
pub fn parse_document(text: &str) -> Vec<DisplayBlock> {
    text.split('\n').map(DisplayBlock::from_line).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_indented_heading_keeps_text() {
        assert_eq!(
            DisplayBlock::from_line("  ## Title"),
            DisplayBlock::Heading {
                level: 1,
                text: "  ## Title".to_owned()
            }
        );
    }

    #[test]
    fn test_heading_size_caps_at_three() {
        assert_eq!(HeadingSize::for_level(3), HeadingSize::Small);
        assert_eq!(HeadingSize::for_level(4), HeadingSize::Base);
    }

    #[test]
    fn test_whitespace_only_line_is_break() {
        assert_eq!(DisplayBlock::from_line(" \t "), DisplayBlock::Break);
    }
}
