//! Language profiles: declarative lexical rules plus derived lookup sets.

use serde::{Deserialize, Serialize};

/// Inline whitespace recognized by default (no line terminators).
///
/// Unicode-aware set: NBSP and the BOM/ZWNBSP count as inline whitespace.
pub const DEFAULT_INLINE_WHITESPACE: &[char] =
    &[' ', '\t', '\u{000B}', '\u{000C}', '\u{00A0}', '\u{FEFF}'];

/// Line terminators recognized by default.
///
/// LF, CR (a CRLF pair is one logical terminator, handled by the cursor),
/// and the Unicode line/paragraph separators.
pub const DEFAULT_LINE_TERMINATORS: &[char] = &['\n', '\r', '\u{2028}', '\u{2029}'];

/// Errors raised while building a [`Profile`].
///
/// Construction never produces a partially-valid profile: the first
/// malformed rule aborts it.
#[derive(Debug, thiserror::Error)]
pub enum ProfileError {
    #[error("unknown language preset `{0}`")]
    UnknownPreset(String),

    #[error("empty pattern in {0} rule")]
    EmptyPattern(&'static str),

    #[error("malformed profile rules: {0}")]
    InvalidRules(#[from] serde_json::Error),
}

/// Line-comment rule: an open pattern, optionally restricted to the start
/// of a line (ignoring leading inline whitespace).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LineCommentRule {
    pub open: String,
    #[serde(default)]
    pub start_of_line_only: bool,
}

impl LineCommentRule {
    pub fn new(open: impl Into<String>) -> Self {
        Self {
            open: open.into(),
            start_of_line_only: false,
        }
    }

    pub fn start_of_line(open: impl Into<String>) -> Self {
        Self {
            open: open.into(),
            start_of_line_only: true,
        }
    }
}

/// An open/close delimiter pair for block comments or regex literals,
/// with the close pattern's characters pre-split for per-character
/// progress matching.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PatternPair {
    open: String,
    close: String,
    close_chars: Vec<char>,
}

impl PatternPair {
    fn new(open: String, close: String) -> Self {
        let close_chars = close.chars().collect();
        Self {
            open,
            close,
            close_chars,
        }
    }

    #[inline]
    pub fn open(&self) -> &str {
        &self.open
    }

    #[inline]
    pub fn close(&self) -> &str {
        &self.close
    }

    /// Close pattern length in characters (progress match target).
    #[inline]
    pub fn close_len(&self) -> usize {
        self.close_chars.len()
    }

    /// Close pattern character at a progress offset.
    #[inline]
    pub fn close_char(&self, offset: usize) -> Option<char> {
        self.close_chars.get(offset).copied()
    }
}

/// Raw profile rules: the serde-facing declaration of a language's lexical
/// shape. Validated into a [`Profile`] via `TryFrom`.
///
/// `inline_whitespace` / `line_terminators` default to the Unicode-aware
/// sets when omitted.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ProfileRules {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub inline_whitespace: Option<Vec<char>>,
    #[serde(default)]
    pub line_terminators: Option<Vec<char>>,
    #[serde(default)]
    pub string_delimiters: Vec<char>,
    #[serde(default)]
    pub line_comment: Option<LineCommentRule>,
    #[serde(default)]
    pub block_comments: Vec<(String, String)>,
    #[serde(default)]
    pub regex_literals: Vec<(String, String)>,
}

impl ProfileRules {
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            ..Self::default()
        }
    }

    /// Parse rules from JSON. Validation happens separately, in
    /// [`Profile::try_from`].
    pub fn from_json(json: &str) -> Result<Self, ProfileError> {
        Ok(serde_json::from_str(json)?)
    }
}

/// Validated, immutable language profile.
///
/// All derived sets (first characters of multi-character open patterns,
/// the `has_patterns` fast-path flag) are computed once at construction.
/// Profiles are shared by reference between cursors and never mutated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Profile {
    name: Option<String>,
    inline_whitespace: Vec<char>,
    line_terminators: Vec<char>,
    string_delimiters: Vec<char>,
    line_comment: Option<LineCommentRule>,
    block_comments: Vec<PatternPair>,
    block_first_chars: Vec<char>,
    regex_literals: Vec<PatternPair>,
    regex_first_chars: Vec<char>,
    has_patterns: bool,
}

impl TryFrom<ProfileRules> for Profile {
    type Error = ProfileError;

    fn try_from(rules: ProfileRules) -> Result<Self, ProfileError> {
        if let Some(lc) = &rules.line_comment {
            if lc.open.is_empty() {
                return Err(ProfileError::EmptyPattern("line comment"));
            }
        }
        let block_comments = validated_pairs(rules.block_comments, "block comment")?;
        let regex_literals = validated_pairs(rules.regex_literals, "regex literal")?;

        let block_first_chars = first_chars(&block_comments);
        let regex_first_chars = first_chars(&regex_literals);
        let has_patterns = !rules.string_delimiters.is_empty()
            || rules.line_comment.is_some()
            || !block_comments.is_empty()
            || !regex_literals.is_empty();

        Ok(Self {
            name: rules.name,
            inline_whitespace: rules
                .inline_whitespace
                .unwrap_or_else(|| DEFAULT_INLINE_WHITESPACE.to_vec()),
            line_terminators: rules
                .line_terminators
                .unwrap_or_else(|| DEFAULT_LINE_TERMINATORS.to_vec()),
            string_delimiters: rules.string_delimiters,
            line_comment: rules.line_comment,
            block_comments,
            block_first_chars,
            regex_literals,
            regex_first_chars,
            has_patterns,
        })
    }
}

impl Profile {
    /// A pattern-free profile: default whitespace and terminators, no
    /// strings/comments/regex. Cursors over it track position only, which
    /// also unlocks direct `jump_to` repositioning.
    pub fn plain() -> Self {
        Self::try_from(ProfileRules::named("plain")).expect("plain profile is always valid")
    }

    /// Parse and validate a profile from its JSON rule representation.
    pub fn from_json(json: &str) -> Result<Self, ProfileError> {
        Self::try_from(ProfileRules::from_json(json)?)
    }

    #[inline]
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    /// Whether any string/comment/regex rule exists. When false, the cursor
    /// skips all literal-context bookkeeping.
    #[inline]
    pub fn has_patterns(&self) -> bool {
        self.has_patterns
    }

    #[inline]
    pub fn is_inline_whitespace(&self, ch: char) -> bool {
        self.inline_whitespace.contains(&ch)
    }

    #[inline]
    pub fn is_line_terminator(&self, ch: char) -> bool {
        self.line_terminators.contains(&ch)
    }

    #[inline]
    pub fn is_whitespace(&self, ch: char) -> bool {
        self.is_inline_whitespace(ch) || self.is_line_terminator(ch)
    }

    #[inline]
    pub fn is_string_delimiter(&self, ch: char) -> bool {
        self.string_delimiters.contains(&ch)
    }

    #[inline]
    pub fn line_comment(&self) -> Option<&LineCommentRule> {
        self.line_comment.as_ref()
    }

    #[inline]
    pub fn block_comments(&self) -> &[PatternPair] {
        &self.block_comments
    }

    /// First-character fast rejection for block comment opens.
    #[inline]
    pub fn opens_block_comment(&self, ch: char) -> bool {
        self.block_first_chars.contains(&ch)
    }

    #[inline]
    pub fn regex_literals(&self) -> &[PatternPair] {
        &self.regex_literals
    }

    /// First-character fast rejection for regex opens.
    #[inline]
    pub fn opens_regex(&self, ch: char) -> bool {
        self.regex_first_chars.contains(&ch)
    }
}

fn validated_pairs(
    raw: Vec<(String, String)>,
    what: &'static str,
) -> Result<Vec<PatternPair>, ProfileError> {
    raw.into_iter()
        .map(|(open, close)| {
            if open.is_empty() || close.is_empty() {
                Err(ProfileError::EmptyPattern(what))
            } else {
                Ok(PatternPair::new(open, close))
            }
        })
        .collect()
}

fn first_chars(pairs: &[PatternPair]) -> Vec<char> {
    let mut chars: Vec<char> = Vec::with_capacity(pairs.len());
    for pair in pairs {
        // Open patterns are validated non-empty above.
        let first = pair.open().chars().next().expect("non-empty open pattern");
        if !chars.contains(&first) {
            chars.push(first);
        }
    }
    chars
}
