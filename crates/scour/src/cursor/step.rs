//! Single-step state transition.
//!
//! `advance` is the heart of the machine. The phase order is load-bearing:
//! the close check reads the character being left behind, the position
//! bookkeeping uses the flags captured before the move, and the open check
//! runs against the freshly derived state of the new position.

use super::Cursor;

impl Cursor {
    /// Move forward one logical character and recompute every derived
    /// flag. A CRLF pair is one logical character.
    ///
    /// # Panics
    ///
    /// Panics when no data remains; check [`avail`](Self::avail) first.
    pub fn advance(&mut self) {
        self.advance_inner(self.exclude_comments);
    }

    pub(crate) fn advance_inner(&mut self, skip_comments: bool) {
        assert!(
            self.avail(),
            "cursor advanced past end (pos {}, end {}); check avail() before advancing",
            self.state.pos,
            self.end,
        );
        let has_patterns = self.profile.has_patterns();

        // 1. The character being left behind may complete the active
        //    literal's close pattern.
        if has_patterns && !self.state.is_escaped && !self.state.context.is_code() {
            self.try_close();
        }

        // 2. Move, using the flags of the character being left.
        let was_eol = self.state.is_eol;
        let was_escaped = self.state.is_escaped;
        let was_inline_ws = self.state.is_inline_whitespace;
        let step = match self.state.ch {
            Some('\r') if self.state.is_eol && self.state.next_ch == Some('\n') => 2,
            Some(ch) => ch.len_utf8(),
            None => 1,
        };
        // The min guards a CRLF pair straddling a custom `end`.
        self.state.pos = (self.state.pos + step).min(self.end);
        if was_eol {
            self.state.line += 1;
            self.state.col = 1;
            if !was_escaped {
                self.state.sol_index = self.state.pos;
                self.state.at_sol = true;
            }
        } else {
            self.state.col += 1;
            if self.state.at_sol && !was_inline_ws {
                self.state.at_sol = false;
            }
        }

        // 3. Re-derive flags for the new position; depth moves on arrival,
        //    and only in code.
        self.derive_flags();
        if self.state.context.is_code() {
            if let Some(ch) = self.state.ch {
                self.state.depth.apply(ch);
            }
        }

        // 4. The new position may open a literal.
        if has_patterns && !self.state.is_escaped && self.state.context.is_code() {
            self.try_open();
        }

        // 5. Comment exclusion: never leave the caller inside a comment.
        if skip_comments && self.state.context.is_comment() {
            self.skip_comment();
        }
    }

    /// Re-derive state for the current position without moving. Used at
    /// construction, after `jump_to`, and after a profile switch.
    /// Idempotent: close-pattern progress is only ever fed by `advance`,
    /// which consumes each character exactly once.
    pub fn init(&mut self) {
        self.derive_flags();
        if self.profile.has_patterns() && !self.state.is_escaped && self.state.context.is_code() {
            self.try_open();
        }
        if self.exclude_comments && self.state.context.is_comment() {
            self.skip_comment();
        }
    }

    /// Construction-time bootstrap: `init` plus the depth contribution of
    /// position 0 (depth is otherwise applied on arrival by `advance`).
    pub(crate) fn bootstrap(&mut self) {
        self.derive_flags();
        if self.state.context.is_code() {
            if let Some(ch) = self.state.ch {
                self.state.depth.apply(ch);
            }
        }
        if self.profile.has_patterns() && !self.state.is_escaped && self.state.context.is_code() {
            self.try_open();
        }
        if self.exclude_comments && self.state.context.is_comment() {
            self.skip_comment();
        }
    }

    /// Recompute all position-derived flags for the current `pos`.
    pub(crate) fn derive_flags(&mut self) {
        let text = self.text.as_str();
        let pos = self.state.pos;
        let ch = text[pos..].chars().next();
        self.state.ch = ch;
        self.state.next_ch = ch.and_then(|c| text[pos + c.len_utf8()..].chars().next());
        self.state.prev_ch = text[..pos].chars().next_back();
        self.state.is_escaped = escape_parity(text, pos);
        let (ws, inline_ws, eol) = match ch {
            Some(c) => (
                self.profile.is_whitespace(c),
                self.profile.is_inline_whitespace(c),
                self.profile.is_line_terminator(c),
            ),
            None => (false, false, false),
        };
        self.state.is_whitespace = ws;
        self.state.is_inline_whitespace = inline_ws;
        self.state.is_eol = eol;
    }

    /// Advance the position bookkeeping (pos/line/col/sol) to `target`
    /// without running the state machine. Caller re-derives flags after.
    pub(crate) fn reposition(&mut self, target: usize) {
        debug_assert!(target >= self.state.pos && target <= self.end);
        let text = self.text.clone();
        let start = self.state.pos;
        let mut iter = text.as_str()[start..target].char_indices().peekable();
        while let Some((i, ch)) = iter.next() {
            let abs = start + i;
            if self.profile.is_line_terminator(ch) {
                self.state.line += 1;
                self.state.col = 1;
                let mut after = abs + ch.len_utf8();
                if ch == '\r' && matches!(iter.peek(), Some((_, '\n'))) {
                    iter.next();
                    after += 1;
                }
                if !escape_parity(text.as_str(), abs) {
                    self.state.sol_index = after;
                    self.state.at_sol = true;
                }
            } else {
                self.state.col += 1;
                if self.state.at_sol && !self.profile.is_inline_whitespace(ch) {
                    self.state.at_sol = false;
                }
            }
        }
        self.state.pos = target;
    }

    /// Consume through comments until the cursor rests outside one (or
    /// runs out of data). Loops because the position right after a
    /// comment may itself open the next one.
    pub(crate) fn skip_comment(&mut self) {
        while self.state.context.is_comment() && self.avail() {
            self.consume_comment();
        }
    }
}

/// A position is escaped iff it is preceded by an odd run of backslashes
/// (`\\` escapes nothing, `\\\` escapes the following character).
pub(crate) fn escape_parity(text: &str, pos: usize) -> bool {
    let bytes = text.as_bytes();
    let mut run = 0;
    while run < pos && bytes[pos - 1 - run] == b'\\' {
        run += 1;
    }
    run % 2 == 1
}
