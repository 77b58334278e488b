//! Line-oriented slicing and the `split_lines` utility.

use std::sync::Arc;

use scour_core::Profile;

use super::Cursor;

impl Cursor {
    /// The current line's text, from its start to its terminator
    /// (both exclusive of the terminator). Pure read, no state change.
    pub fn slice_line(&self) -> &str {
        let start = self.state.sol_index;
        let end = self
            .raw_nth_eol(self.state.pos, 1)
            .unwrap_or(self.end);
        &self.text.as_str()[start..end]
    }

    /// The next line's text, if a line follows the current one.
    pub fn slice_next_line(&self) -> Option<&str> {
        let terminator = self.raw_nth_eol(self.state.pos, 1)?;
        let start = self.after_terminator(terminator);
        let end = self.raw_nth_eol(start, 1).unwrap_or(self.end);
        Some(&self.text.as_str()[start..end])
    }

    /// A direct read of a buffer range, clamped to the buffer. No state
    /// change. Offsets must fall on character boundaries.
    pub fn slice(&self, start: usize, end: usize) -> &str {
        let end = end.min(self.text.len());
        let start = start.min(end);
        &self.text.as_str()[start..end]
    }

    /// Offset just past the terminator at `pos` (past both characters of
    /// a CRLF pair).
    fn after_terminator(&self, pos: usize) -> usize {
        let text = self.text.as_str();
        match text[pos..].chars().next() {
            Some('\r') if text[pos + 1..].starts_with('\n') => pos + 2,
            Some(ch) => pos + ch.len_utf8(),
            None => pos,
        }
    }

    /// Split `text` into logical lines (a CRLF pair is one boundary).
    ///
    /// Built entirely on the public combinator API — the intended usage
    /// pattern for consumers. A trailing terminator yields a final empty
    /// line (segments = terminators + 1), and an empty input yields one
    /// empty line.
    pub fn split_lines(text: &str) -> Vec<&str> {
        let mut cursor = Cursor::new(text, Arc::new(Profile::plain()));
        let mut lines = Vec::new();
        loop {
            let start = cursor.pos();
            cursor.consume_until(|c| c.is_eol());
            lines.push(&text[start..cursor.pos()]);
            if !cursor.avail() {
                break;
            }
            // Step over the terminator (CRLF as one unit).
            cursor.advance();
        }
        lines
    }
}
