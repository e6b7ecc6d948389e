// ABOUTME: Plan text builder writing headings, list items and paragraphs line by line
// ABOUTME: Emits the line convention understood by the display block renderer
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use std::fmt::{self, Write};

/// Incremental builder for plan text
#[derive(Debug, Default)]
pub struct PlanWriter {
    buf: String,
}

impl PlanWriter {
    /// Create an empty writer
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a writer with preallocated capacity
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            buf: String::with_capacity(capacity),
        }
    }

    /// `#`-prefixed heading of the given level
    ///
    /// # Errors
    ///
    /// Returns `fmt::Error` if writing fails
    pub fn heading(&mut self, level: usize, text: impl fmt::Display) -> fmt::Result {
        for _ in 0..level {
            self.buf.write_char('#')?;
        }
        writeln!(self.buf, " {text}")
    }

    /// `- item` list line
    ///
    /// # Errors
    ///
    /// Returns `fmt::Error` if writing fails
    pub fn item(&mut self, text: impl fmt::Display) -> fmt::Result {
        writeln!(self.buf, "- {text}")
    }

    /// `**label**` line
    ///
    /// # Errors
    ///
    /// Returns `fmt::Error` if writing fails
    pub fn bold(&mut self, text: impl fmt::Display) -> fmt::Result {
        writeln!(self.buf, "**{text}**")
    }

    /// Bold label followed by plain text on the same line
    ///
    /// # Errors
    ///
    /// Returns `fmt::Error` if writing fails
    pub fn bold_lead(&mut self, label: &str, text: impl fmt::Display) -> fmt::Result {
        writeln!(self.buf, "**{label}** {text}")
    }

    /// Plain paragraph line
    ///
    /// # Errors
    ///
    /// Returns `fmt::Error` if writing fails
    pub fn line(&mut self, text: impl fmt::Display) -> fmt::Result {
        writeln!(self.buf, "{text}")
    }

    /// Empty separator line
    ///
    /// # Errors
    ///
    /// Returns `fmt::Error` if writing fails
    pub fn blank(&mut self) -> fmt::Result {
        self.buf.write_char('\n')
    }

    /// Write each entry as a list item
    ///
    /// # Errors
    ///
    /// Returns `fmt::Error` if writing fails
    pub fn items<I, T>(&mut self, entries: I) -> fmt::Result
    where
        I: IntoIterator<Item = T>,
        T: fmt::Display,
    {
        for entry in entries {
            self.item(entry)?;
        }
        Ok(())
    }

    /// Consume the writer and return the text
    #[must_use]
    pub fn finish(self) -> String {
        self.buf
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_line_convention() {
        let mut writer = PlanWriter::new();
        writer.heading(2, "Your Metrics").unwrap();
        writer.item("BMI: 24.2 kg/m²").unwrap();
        writer.blank().unwrap();
        writer.bold("Healthy Fats:").unwrap();
        writer.bold_lead("Remember:", "Consistency.").unwrap();

        assert_eq!(
            writer.finish(),
            "## Your Metrics\n- BMI: 24.2 kg/m²\n\n**Healthy Fats:**\n**Remember:** Consistency.\n"
        );
    }
}
