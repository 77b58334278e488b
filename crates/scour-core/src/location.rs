//! Positions reported by the cursor.

use std::fmt::{self, Display};

use crate::SourceText;

/// A captured source position: 1-based line/column plus 0-based byte offset.
///
/// Pure value type. It optionally carries its own handle to the buffer it
/// was captured from, so it stays usable after the cursor that produced it
/// is gone. Equality and ordering consider only the numeric fields.
#[derive(Debug, Clone)]
pub struct Location {
    pub line: u32,
    pub col: u32,
    pub pos: usize,
    buffer: Option<SourceText>,
}

impl Location {
    pub fn new(line: u32, col: u32, pos: usize) -> Self {
        Self {
            line,
            col,
            pos,
            buffer: None,
        }
    }

    pub fn with_buffer(line: u32, col: u32, pos: usize, buffer: SourceText) -> Self {
        Self {
            line,
            col,
            pos,
            buffer: Some(buffer),
        }
    }

    /// The buffer this location was captured from, if it carries one.
    pub fn buffer(&self) -> Option<&SourceText> {
        self.buffer.as_ref()
    }

    /// Rest of the buffer starting at this location.
    pub fn remainder(&self) -> Option<&str> {
        self.buffer.as_ref().map(|b| &b.as_str()[self.pos..])
    }
}

impl PartialEq for Location {
    fn eq(&self, other: &Self) -> bool {
        self.pos == other.pos && self.line == other.line && self.col == other.col
    }
}

impl Eq for Location {}

impl PartialOrd for Location {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Location {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        (self.pos, self.line, self.col).cmp(&(other.pos, other.line, other.col))
    }
}

impl Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "line {}, column {}", self.line, self.col)
    }
}
