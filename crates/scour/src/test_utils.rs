//! Shared test fixtures.

use std::sync::Arc;

use scour_core::{LineCommentRule, Profile, ProfileRules};

use crate::Cursor;

pub fn plain() -> Arc<Profile> {
    Arc::new(Profile::plain())
}

/// C-family rules: string delimiters `'`, `"`, backtick; `//` line
/// comments; `/* */` block comments.
pub fn c_profile() -> Arc<Profile> {
    Arc::new(
        Profile::try_from(ProfileRules {
            name: Some("c".into()),
            string_delimiters: vec!['\'', '"', '`'],
            line_comment: Some(LineCommentRule::new("//")),
            block_comments: vec![("/*".into(), "*/".into())],
            ..ProfileRules::default()
        })
        .unwrap(),
    )
}

/// C-family plus `/…/` regex literals.
pub fn js_profile() -> Arc<Profile> {
    Arc::new(
        Profile::try_from(ProfileRules {
            name: Some("js".into()),
            string_delimiters: vec!['\'', '"', '`'],
            line_comment: Some(LineCommentRule::new("//")),
            block_comments: vec![("/*".into(), "*/".into())],
            regex_literals: vec![("/".into(), "/".into())],
            ..ProfileRules::default()
        })
        .unwrap(),
    )
}

/// One mark per scanned position: `c`ode, `s`tring, `#` comment,
/// `r` regex. The LF half of a CRLF pair is never a rest position and
/// produces no mark.
pub fn trace(input: &str, profile: Arc<Profile>) -> String {
    let mut cursor = Cursor::new(input, profile);
    let mut out = String::new();
    while cursor.avail() {
        out.push(mark(&cursor));
        cursor.advance();
    }
    out
}

pub fn mark(cursor: &Cursor) -> char {
    if cursor.is_str() {
        's'
    } else if cursor.is_comment() {
        '#'
    } else if cursor.is_regex() {
        'r'
    } else {
        'c'
    }
}
