//! Non-destructive lookahead and search.
//!
//! These run on an internal clone of the cursor (cheap speculative state
//! forking: buffer and profile are shared, the state struct is copied by
//! value), leaving the receiver untouched. Commit a lookahead with
//! [`Cursor::restore`].

use super::step::escape_parity;
use super::Cursor;

impl Cursor {
    /// `consume_while` on a clone; returns the stopped clone.
    pub fn lookahead_while<F>(&self, pred: F) -> Cursor
    where
        F: FnMut(&Cursor) -> bool,
    {
        let mut probe = self.clone();
        probe.consume_while(pred);
        probe
    }

    /// `consume_until` on a clone; returns the stopped clone.
    pub fn lookahead_until<F>(&self, pred: F) -> Cursor
    where
        F: FnMut(&Cursor) -> bool,
    {
        let mut probe = self.clone();
        probe.consume_until(pred);
        probe
    }

    /// The slice `consume_while` would consume, without moving.
    pub fn peek_while<F>(&self, pred: F) -> &str
    where
        F: FnMut(&Cursor) -> bool,
    {
        let end = self.lookahead_while(pred).state.pos;
        &self.text.as_str()[self.state.pos..end]
    }

    /// The slice `consume_until` would consume, without moving.
    pub fn peek_until<F>(&self, pred: F) -> &str
    where
        F: FnMut(&Cursor) -> bool,
    {
        let end = self.lookahead_until(pred).state.pos;
        &self.text.as_str()[self.state.pos..end]
    }

    /// Forward search from the current position (inclusive) up to `end`
    /// (default: the cursor's configured end). Returns the first
    /// character whose cursor state satisfies `pred`.
    pub fn find<F>(&self, pred: F, end: Option<usize>) -> Option<char>
    where
        F: FnMut(&Cursor) -> bool,
    {
        self.find_index(pred, end)
            .and_then(|i| self.text.as_str()[i..].chars().next())
    }

    /// Like [`find`](Self::find), but returns the byte offset.
    pub fn find_index<F>(&self, mut pred: F, end: Option<usize>) -> Option<usize>
    where
        F: FnMut(&Cursor) -> bool,
    {
        let end = end.unwrap_or(self.end).min(self.end);
        let mut probe = self.clone();
        loop {
            if probe.state.pos >= end {
                return None;
            }
            if pred(&probe) {
                return Some(probe.state.pos);
            }
            if !probe.avail() {
                return None;
            }
            probe.advance();
        }
    }

    /// Byte offset of the next non-escaped line terminator at or after
    /// the current position.
    pub fn find_next_eol(&self) -> Option<usize> {
        self.find_nth_eol(1)
    }

    /// Byte offset of the n-th next non-escaped line terminator
    /// (1-based; a CRLF pair counts once, at the CR).
    pub fn find_nth_eol(&self, n: usize) -> Option<usize> {
        if n == 0 {
            return None;
        }
        self.raw_nth_eol(self.state.pos, n)
    }

    /// Raw terminator scan over `from..end`, skipping escaped
    /// terminators and the LF half of CRLF pairs.
    pub(crate) fn raw_nth_eol(&self, from: usize, n: usize) -> Option<usize> {
        let text = self.text.as_str();
        let hay = &text[..self.end];
        let mut seen = 0;
        let mut iter = hay[from..].char_indices();
        while let Some((i, ch)) = iter.next() {
            if !self.profile.is_line_terminator(ch) {
                continue;
            }
            let abs = from + i;
            if !escape_parity(text, abs) {
                seen += 1;
                if seen == n {
                    return Some(abs);
                }
            }
            if ch == '\r' && hay[abs + 1..].starts_with('\n') {
                iter.next();
            }
        }
        None
    }
}
