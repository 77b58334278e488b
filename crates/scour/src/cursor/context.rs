//! Literal-context and bracket-depth state.

/// Which literal context the cursor is inside, if any.
///
/// Exactly one variant holds at a time, so the "at most one of
/// string/comment/regex" invariant is enforced by construction rather
/// than by convention.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Context {
    /// Plain code: bracket depth counting and literal opening are active.
    Code,
    /// Inside a string literal.
    Str(StrContext),
    /// Inside a line or block comment.
    Comment(CommentContext),
    /// Inside a regex literal.
    Regex(PairContext),
}

impl Context {
    #[inline]
    pub fn is_code(&self) -> bool {
        matches!(self, Context::Code)
    }

    #[inline]
    pub fn is_str(&self) -> bool {
        matches!(self, Context::Str(_))
    }

    #[inline]
    pub fn is_comment(&self) -> bool {
        matches!(self, Context::Comment(_))
    }

    #[inline]
    pub fn is_regex(&self) -> bool {
        matches!(self, Context::Regex(_))
    }

    /// Short human-readable name, used in error messages.
    pub fn describe(&self) -> &'static str {
        match self {
            Context::Code => "code",
            Context::Str(_) => "string",
            Context::Comment(_) => "comment",
            Context::Regex(_) => "regex",
        }
    }
}

/// State of an open string literal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StrContext {
    /// Opening delimiter; the literal closes on the same character.
    pub open: char,
    /// Byte offset of the opening delimiter.
    pub start: usize,
}

/// State of an open comment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CommentContext {
    /// Line comment, ended by the next non-escaped line terminator.
    Line {
        /// Byte offset of the open pattern.
        start: usize,
    },
    /// Delimited comment, ended by its close pattern.
    Block(PairContext),
}

/// Progress state for a literal closed by a multi-character pattern.
///
/// `pattern` is an index into the profile's block-comment or regex table
/// (stable for the literal's lifetime: profiles cannot be swapped while a
/// literal is open). `close_progress` is how many characters of the close
/// pattern have matched so far.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PairContext {
    pub pattern: usize,
    /// Byte offset of the open pattern.
    pub start: usize,
    /// Open pattern length in bytes; close matching only begins past it,
    /// so an open/close overlap like `/*/` cannot close itself.
    pub open_len: usize,
    pub(crate) close_progress: usize,
}

/// Bracket nesting counters.
///
/// Updated only while the cursor is in code; decrements saturate at zero
/// so unbalanced input never underflows.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Depth {
    pub parenth: u32,
    pub bracket: u32,
    pub brace: u32,
}

impl Depth {
    #[inline]
    pub fn is_balanced(&self) -> bool {
        self.parenth == 0 && self.bracket == 0 && self.brace == 0
    }

    pub(crate) fn apply(&mut self, ch: char) {
        match ch {
            '(' => self.parenth += 1,
            ')' => self.parenth = self.parenth.saturating_sub(1),
            '[' => self.bracket += 1,
            ']' => self.bracket = self.bracket.saturating_sub(1),
            '{' => self.brace += 1,
            '}' => self.brace = self.brace.saturating_sub(1),
            _ => {}
        }
    }
}
