//! Open/close pattern scanning.
//!
//! Opening uses the profile's precomputed first-character sets to reject
//! non-matches before attempting a full prefix comparison. Closing feeds
//! one character per step into a close-match offset; a literal whose
//! close pattern has fully matched exits on the following step, so the
//! close pattern's final character is still reported inside the literal.

use scour_core::PatternPair;

use super::context::{CommentContext, Context, PairContext, StrContext};
use super::Cursor;

/// Which pattern table a [`PairContext`] indexes.
#[derive(Clone, Copy)]
enum PairTable {
    BlockComment,
    Regex,
}

impl Cursor {
    /// Close check, run against the character being left behind. Only
    /// called while inside a literal and not escaped.
    pub(crate) fn try_close(&mut self) {
        let Some(ch) = self.state.ch else { return };
        let pos = self.state.pos;
        let is_eol = self.state.is_eol;

        let mut context = std::mem::replace(&mut self.state.context, Context::Code);
        let closed = match &mut context {
            Context::Code => false,
            Context::Str(s) => {
                // A delimiter cannot close itself at the moment it opens.
                ch == s.open && pos != s.start
            }
            Context::Comment(CommentContext::Line { .. }) => is_eol,
            Context::Comment(CommentContext::Block(p)) => {
                self.step_pair_close(p, PairTable::BlockComment, ch, pos)
            }
            Context::Regex(p) => self.step_pair_close(p, PairTable::Regex, ch, pos),
        };
        if !closed {
            self.state.context = context;
        }
    }

    fn step_pair_close(&self, p: &mut PairContext, table: PairTable, ch: char, pos: usize) -> bool {
        let pair: &PatternPair = match table {
            PairTable::BlockComment => &self.profile.block_comments()[p.pattern],
            PairTable::Regex => &self.profile.regex_literals()[p.pattern],
        };
        // Fully matched on an earlier step: the literal ends here, one
        // position past the close pattern's final character.
        if p.close_progress >= pair.close_len() {
            return true;
        }
        // Close matching begins past the open pattern.
        if pos < p.start + p.open_len {
            return false;
        }
        if pair.close_char(p.close_progress) == Some(ch) {
            p.close_progress += 1;
        } else if pair.close_char(0) == Some(ch) {
            // Overlapping partial match restarts at offset 1.
            p.close_progress = 1;
        } else {
            p.close_progress = 0;
        }
        false
    }

    /// Open check at the current position, in code context only. Fixed
    /// order: string delimiter, line comment, block comment, regex; the
    /// first structurally matching rule wins.
    pub(crate) fn try_open(&mut self) {
        let Some(ch) = self.state.ch else { return };
        let pos = self.state.pos;
        let rest = &self.text.as_str()[pos..];

        if self.profile.is_string_delimiter(ch) {
            self.state.context = Context::Str(StrContext { open: ch, start: pos });
            return;
        }

        if let Some(rule) = self.profile.line_comment() {
            if (!rule.start_of_line_only || self.state.at_sol)
                && rule.open.chars().next() == Some(ch)
                && rest.starts_with(rule.open.as_str())
            {
                self.state.context = Context::Comment(CommentContext::Line { start: pos });
                return;
            }
        }

        if self.profile.opens_block_comment(ch) {
            let pairs = self.profile.block_comments();
            if let Some(pattern) = pairs.iter().position(|p| rest.starts_with(p.open())) {
                self.state.context = Context::Comment(CommentContext::Block(PairContext {
                    pattern,
                    start: pos,
                    open_len: pairs[pattern].open().len(),
                    close_progress: 0,
                }));
                return;
            }
        }

        if self.profile.opens_regex(ch) {
            let pairs = self.profile.regex_literals();
            if let Some(pattern) = pairs.iter().position(|p| rest.starts_with(p.open())) {
                self.state.context = Context::Regex(PairContext {
                    pattern,
                    start: pos,
                    open_len: pairs[pattern].open().len(),
                    close_progress: 0,
                });
            }
        }
    }
}
