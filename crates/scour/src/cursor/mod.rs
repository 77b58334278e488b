//! The cursor state machine.
//!
//! A `Cursor` owns a position into a shared buffer plus every derived
//! per-character flag, and moves forward one logical character per
//! [`advance`](Cursor::advance). The buffer and the language profile are
//! shared by reference, the mutable state is a plain struct copied by
//! value, so cloning a cursor for lookahead is cheap at any buffer size.

mod consume;
mod context;
mod lines;
mod lookahead;
mod patterns;
mod step;

#[cfg(test)]
mod consume_tests;
#[cfg(test)]
mod cursor_tests;

use std::sync::Arc;

use scour_core::{Location, Profile, SourceText};

use crate::ScanError;

pub use consume::Walk;
pub use context::{CommentContext, Context, Depth, PairContext, StrContext};

/// Options accepted by [`Cursor::with_options`].
#[derive(Debug, Clone, Default)]
pub struct CursorOptions {
    /// Exclusive upper bound of scanning. Defaults to the buffer length.
    ///
    /// Normalized at construction: a value past the buffer is clamped to
    /// its length, and a value inside a multi-byte character is moved
    /// back to the nearest character boundary. This is part of the
    /// contract, not an error path — `end` is a scanning window, and any
    /// requested window is honored as closely as the buffer allows. Read
    /// the effective bound back with [`Cursor::end`].
    pub end: Option<usize>,
    /// Never rest inside a comment: `advance` consumes through comment
    /// bodies automatically.
    pub exclude_comments: bool,
}

/// Mutable cursor state, copied wholesale by `clone` and `restore`.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct State {
    pub pos: usize,
    pub line: u32,
    pub col: u32,
    /// Offset where the current line began (just past the most recent
    /// non-escaped line terminator).
    pub sol_index: usize,
    /// At start of line, ignoring leading inline whitespace.
    pub at_sol: bool,
    pub ch: Option<char>,
    pub next_ch: Option<char>,
    pub prev_ch: Option<char>,
    pub is_escaped: bool,
    pub is_whitespace: bool,
    pub is_inline_whitespace: bool,
    pub is_eol: bool,
    pub context: Context,
    pub depth: Depth,
}

impl State {
    fn start() -> Self {
        Self {
            pos: 0,
            line: 1,
            col: 1,
            sol_index: 0,
            at_sol: true,
            ch: None,
            next_ch: None,
            prev_ch: None,
            is_escaped: false,
            is_whitespace: false,
            is_inline_whitespace: false,
            is_eol: false,
            context: Context::Code,
            depth: Depth::default(),
        }
    }
}

/// The scanning cursor: position + derived lexical flags over a shared
/// immutable buffer.
#[derive(Debug, Clone)]
pub struct Cursor {
    text: SourceText,
    profile: Arc<Profile>,
    end: usize,
    exclude_comments: bool,
    pub(crate) state: State,
}

impl Cursor {
    /// Cursor over `text` with default options (scan to the end, comments
    /// observable).
    pub fn new(text: impl Into<SourceText>, profile: Arc<Profile>) -> Self {
        Self::with_options(text, profile, CursorOptions::default())
    }

    /// Cursor over `text` with an explicit scanning window and comment
    /// handling. See [`CursorOptions::end`] for how an out-of-range or
    /// mid-character `end` is normalized.
    pub fn with_options(
        text: impl Into<SourceText>,
        profile: Arc<Profile>,
        options: CursorOptions,
    ) -> Self {
        let text = text.into();
        let mut end = options.end.unwrap_or(text.len()).min(text.len());
        while !text.as_str().is_char_boundary(end) {
            end -= 1;
        }
        let mut cursor = Self {
            text,
            profile,
            end,
            exclude_comments: options.exclude_comments,
            state: State::start(),
        };
        cursor.bootstrap();
        cursor
    }

    // ------------------------------------------------------------------
    // Accessors
    // ------------------------------------------------------------------

    /// Byte offset of the current position.
    #[inline]
    pub fn pos(&self) -> usize {
        self.state.pos
    }

    /// 1-based line number.
    #[inline]
    pub fn line(&self) -> u32 {
        self.state.line
    }

    /// 1-based column number (logical characters, CRLF counts once).
    #[inline]
    pub fn col(&self) -> u32 {
        self.state.col
    }

    /// Offset where the current line began.
    #[inline]
    pub fn sol_index(&self) -> usize {
        self.state.sol_index
    }

    /// At start of line, ignoring leading inline whitespace.
    #[inline]
    pub fn at_sol(&self) -> bool {
        self.state.at_sol
    }

    /// Character under the cursor. `None` past the buffer; may still be
    /// `Some` at `pos == end` when `end` is before the buffer's end —
    /// use [`avail`](Self::avail) to bound loops.
    #[inline]
    pub fn ch(&self) -> Option<char> {
        self.state.ch
    }

    /// Character after the cursor.
    #[inline]
    pub fn next_ch(&self) -> Option<char> {
        self.state.next_ch
    }

    /// Character before the cursor.
    #[inline]
    pub fn prev_ch(&self) -> Option<char> {
        self.state.prev_ch
    }

    /// Whether data remains (`pos < end`). Check before `advance`.
    #[inline]
    pub fn avail(&self) -> bool {
        self.state.pos < self.end
    }

    #[inline]
    pub fn at_end(&self) -> bool {
        !self.avail()
    }

    /// Whether the current position is escaped (odd run of preceding
    /// backslashes).
    #[inline]
    pub fn is_escaped(&self) -> bool {
        self.state.is_escaped
    }

    #[inline]
    pub fn is_whitespace(&self) -> bool {
        self.state.is_whitespace
    }

    #[inline]
    pub fn is_inline_whitespace(&self) -> bool {
        self.state.is_inline_whitespace
    }

    /// Whether the current character is a line terminator.
    #[inline]
    pub fn is_eol(&self) -> bool {
        self.state.is_eol
    }

    #[inline]
    pub fn is_str(&self) -> bool {
        self.state.context.is_str()
    }

    #[inline]
    pub fn is_comment(&self) -> bool {
        self.state.context.is_comment()
    }

    #[inline]
    pub fn is_regex(&self) -> bool {
        self.state.context.is_regex()
    }

    /// Not inside any literal context.
    #[inline]
    pub fn is_code(&self) -> bool {
        self.state.context.is_code()
    }

    #[inline]
    pub fn context(&self) -> &Context {
        &self.state.context
    }

    #[inline]
    pub fn depth(&self) -> Depth {
        self.state.depth
    }

    #[inline]
    pub fn text(&self) -> &SourceText {
        &self.text
    }

    #[inline]
    pub fn profile(&self) -> &Arc<Profile> {
        &self.profile
    }

    /// Exclusive scan bound.
    #[inline]
    pub fn end(&self) -> usize {
        self.end
    }

    /// Buffer contents from the current position to `end`.
    #[inline]
    pub fn rest(&self) -> &str {
        &self.text.as_str()[self.state.pos..self.end]
    }

    /// Capture the current position as a [`Location`] carrying its own
    /// buffer handle.
    pub fn location(&self) -> Location {
        Location::with_buffer(
            self.state.line,
            self.state.col,
            self.state.pos,
            self.text.clone(),
        )
    }

    // ------------------------------------------------------------------
    // Repositioning and profile management
    // ------------------------------------------------------------------

    /// Return to position 0 with fresh derived state; buffer, profile and
    /// `end` are kept.
    pub fn reset(&mut self) {
        self.state = State::start();
        self.bootstrap();
    }

    /// Force the cursor to `end`, short-circuiting iteration. Only `pos`
    /// and the position-derived character flags are updated; line/column
    /// bookkeeping is left as-is.
    pub fn stop(&mut self) {
        self.state.pos = self.end;
        self.derive_flags();
    }

    /// Copy `other`'s state into `self` in place, preserving `self`'s
    /// identity for external references. Fails if `other` scans a
    /// different buffer.
    pub fn restore(&mut self, other: &Cursor) -> Result<(), ScanError> {
        if !self.text.same_buffer(&other.text) {
            return Err(ScanError::BufferMismatch);
        }
        self.profile = Arc::clone(&other.profile);
        self.end = other.end;
        self.exclude_comments = other.exclude_comments;
        self.state = other.state.clone();
        Ok(())
    }

    /// Move to an absolute byte offset.
    ///
    /// With a pattern-free profile this repositions directly in either
    /// direction (depth counters are not maintained across direct jumps).
    /// With literal patterns active, forward jumps scan via `advance` so
    /// context stays correct, and backward jumps fail: literal context
    /// cannot be un-derived without re-scanning from a known-good
    /// position.
    pub fn jump_to(&mut self, pos: usize) -> Result<(), ScanError> {
        if self.profile.has_patterns() {
            if pos < self.state.pos {
                return Err(ScanError::BackwardJump {
                    from: self.state.pos,
                    to: pos,
                });
            }
            while self.state.pos < pos && self.avail() {
                self.advance();
            }
            return Ok(());
        }

        let mut target = pos.min(self.end);
        while !self.text.as_str().is_char_boundary(target) {
            target -= 1;
        }
        if target < self.state.pos {
            self.state = State::start();
        }
        self.reposition(target);
        self.init();
        Ok(())
    }

    /// Swap the language profile. Only allowed in code context: literal
    /// state is tied to the profile that opened it.
    pub fn switch_profile(&mut self, profile: Arc<Profile>) -> Result<(), ScanError> {
        if !self.state.context.is_code() {
            return Err(ScanError::ProfileLocked {
                context: self.state.context.describe(),
            });
        }
        self.profile = profile;
        self.init();
        Ok(())
    }
}
