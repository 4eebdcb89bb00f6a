//! The parsed script unit handed to rules.

use std::path::{Path, PathBuf};

/// A parsed script as the host's parser produced it.
///
/// Owned by the host; rules only read it. The framework never parses scripts
/// itself - it receives the full source text and the originating path and
/// leaves syntax to the host's parser.
#[derive(Debug, Clone)]
pub struct ParsedScript {
    path: PathBuf,
    text: String,
}

impl ParsedScript {
    /// Creates a unit from a script's path and full source text.
    #[must_use]
    pub fn new(path: impl Into<PathBuf>, text: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            text: text.into(),
        }
    }

    /// Returns the originating file path.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Returns the full source text.
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Calculates the byte offset for a 1-indexed line and column.
    ///
    /// Line boundaries are `\n`; a preceding `\r` stays part of the line's
    /// byte count so offsets remain correct for CRLF scripts. Returns the
    /// end of the text if the line is out of bounds.
    #[must_use]
    pub fn offset_for(&self, line: usize, column: usize) -> usize {
        if line == 0 {
            return 0;
        }

        let mut offset = 0;
        for (i, raw_line) in self.text.split('\n').enumerate() {
            if i + 1 == line {
                return offset + column.saturating_sub(1);
            }
            offset += raw_line.len() + 1;
        }

        offset.min(self.text.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exposes_path_and_text() {
        let script = ParsedScript::new("deploy.sh", "echo hi\n");
        assert_eq!(script.path(), Path::new("deploy.sh"));
        assert_eq!(script.text(), "echo hi\n");
    }

    #[test]
    fn offset_calculation() {
        let script = ParsedScript::new("t.sh", "line1\nline2\nline3");
        assert_eq!(script.offset_for(1, 1), 0);
        assert_eq!(script.offset_for(2, 1), 6);
        assert_eq!(script.offset_for(2, 3), 8);
    }

    #[test]
    fn offset_calculation_with_crlf() {
        let script = ParsedScript::new("t.sh", "line1\r\nline2");
        assert_eq!(script.offset_for(2, 1), 7);
    }

    #[test]
    fn offset_clamps_past_end() {
        let script = ParsedScript::new("t.sh", "ab");
        assert_eq!(script.offset_for(9, 1), 2);
    }
}
