#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

//! Context-aware source-code scanning cursor.
//!
//! A [`Cursor`] walks a text buffer one logical character at a time while
//! tracking line/column position, whether it sits inside a string literal,
//! a line/block comment, or a regex literal, bracket nesting depth,
//! backslash escaping, and start-of-line status. Higher-level tools
//! (formatters, linters, bundlers) drive it through consumption and search
//! combinators instead of re-deriving that state themselves.
//!
//! Lookahead is non-destructive: clone the cursor (cheap, the buffer is
//! shared), scan ahead on the clone, then discard it or [`Cursor::restore`]
//! the original from it.
//!
//! # Example
//!
//! ```
//! use scour::Cursor;
//!
//! let mut cursor = Cursor::new("total += 1; // tally", scour::langs::c_family());
//! let code = cursor.consume_until(|c| c.is_comment());
//! assert_eq!(code, "total += 1; ");
//! assert!(cursor.is_comment());
//! ```

mod cursor;
mod error;

#[cfg(test)]
mod test_utils;

pub use cursor::{
    CommentContext, Context, Cursor, CursorOptions, Depth, PairContext, StrContext, Walk,
};
pub use error::ScanError;
pub use scour_core::{
    LineCommentRule, Location, PatternPair, Profile, ProfileError, ProfileRules, SourceText,
};

#[cfg(feature = "scour-langs")]
pub use scour_langs as langs;
