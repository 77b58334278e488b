//! Consumption combinators.
//!
//! Everything here is built from `advance`, never from direct buffer
//! indexing, so literal-context tracking stays correct for free. The one
//! exception is `consume_comment`, which fast-scans to the comment's end
//! and then lets a single normal step perform the exit, keeping the
//! observable semantics identical to character stepping.

use super::context::{CommentContext, Context};
use super::step::escape_parity;
use super::Cursor;

/// Outcome of a [`Cursor::walk`] visitor step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Walk {
    Continue,
    Stop,
}

impl Cursor {
    /// Advance while `pred` holds (and data remains); returns the
    /// consumed slice.
    pub fn consume_while<F>(&mut self, mut pred: F) -> &str
    where
        F: FnMut(&Cursor) -> bool,
    {
        let start = self.state.pos;
        while self.avail() && pred(self) {
            self.advance();
        }
        &self.text.as_str()[start..self.state.pos]
    }

    /// Advance until `pred` holds (or data runs out); returns the
    /// consumed slice.
    pub fn consume_until<F>(&mut self, mut pred: F) -> &str
    where
        F: FnMut(&Cursor) -> bool,
    {
        let start = self.state.pos;
        while self.avail() && !pred(self) {
            self.advance();
        }
        &self.text.as_str()[start..self.state.pos]
    }

    /// Consume to the current line's terminator (exclusive); returns the
    /// consumed slice.
    pub fn consume_line(&mut self) -> &str {
        self.consume_until(|c| c.is_eol())
    }

    /// Drive the cursor to the end of data, invoking `visitor` at each
    /// position. A visitor may advance the cursor itself (no redundant
    /// auto-advance happens) and stops the walk by returning
    /// [`Walk::Stop`].
    pub fn walk<F>(&mut self, mut visitor: F)
    where
        F: FnMut(&mut Cursor) -> Walk,
    {
        while self.avail() {
            let before = self.state.pos;
            if visitor(self) == Walk::Stop {
                break;
            }
            if self.state.pos == before && self.avail() {
                self.advance();
            }
        }
    }

    /// If inside a comment, jump to its end without character stepping;
    /// otherwise a no-op. Afterwards the cursor rests on the first
    /// position past the comment, or at `end` if the comment never
    /// closes.
    pub fn consume_comment(&mut self) {
        match &self.state.context {
            Context::Comment(CommentContext::Line { .. }) => {
                // Fast scan to the line's non-escaped terminator; one
                // normal step then closes the comment while leaving it.
                match self.raw_nth_eol(self.state.pos, 1) {
                    Some(terminator) => {
                        self.reposition(terminator);
                        self.derive_flags();
                        self.advance_inner(false);
                    }
                    None => self.stop(),
                }
            }
            Context::Comment(CommentContext::Block(p)) => {
                let (pattern, start, open_len, progress) =
                    (p.pattern, p.start, p.open_len, p.close_progress);
                let close_bytes = self.profile.block_comments()[pattern].close().len();
                let close_progress_full = self.profile.block_comments()[pattern].close_len();
                // The close already matched fully on an earlier step: the
                // cursor rests one past its final character and the next
                // step exits the literal.
                if progress >= close_progress_full {
                    if self.avail() {
                        self.advance_inner(false);
                    }
                    return;
                }
                // A partially matched close straddles the current
                // position; the raw search must restart at its first
                // matched character, not at the cursor.
                let matched_bytes: usize = self.profile.block_comments()[pattern]
                    .close()
                    .chars()
                    .take(progress)
                    .map(char::len_utf8)
                    .sum();
                let search_from = (self.state.pos - matched_bytes).max(start + open_len);
                match self.raw_find_close(search_from, pattern) {
                    Some(found) => {
                        // Land where stepping would rest with the close
                        // fully matched; the next step exits the literal.
                        self.reposition(found + close_bytes);
                        if let Context::Comment(CommentContext::Block(p)) = &mut self.state.context
                        {
                            p.close_progress = close_progress_full;
                        }
                        self.derive_flags();
                        if self.avail() {
                            self.advance_inner(false);
                        }
                    }
                    None => self.stop(),
                }
            }
            _ => {}
        }
    }

    /// First non-escaped occurrence of a block-comment close pattern at
    /// or after `from`, bounded by `end`.
    fn raw_find_close(&self, mut from: usize, pattern: usize) -> Option<usize> {
        let close = self.profile.block_comments()[pattern].close();
        let hay = &self.text.as_str()[..self.end];
        while from <= hay.len() {
            let found = hay[from..].find(close)? + from;
            if !escape_parity(self.text.as_str(), found) {
                return Some(found);
            }
            // Skip past the escaped candidate's first character.
            from = found
                + hay[found..]
                    .chars()
                    .next()
                    .map(char::len_utf8)
                    .unwrap_or(1);
        }
        None
    }
}
