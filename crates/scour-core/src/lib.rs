#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

//! Core data structures for scour.
//!
//! Two layers for language profiles:
//! - **Deserialization layer**: `ProfileRules`, a 1:1 serde mapping of a
//!   profile's rule data (what a config file or preset declares)
//! - **Validated layer**: `Profile`, with derived lookup sets precomputed
//!   at construction and never mutated afterwards
//!
//! The split keeps every reachable `Profile` valid by construction:
//! malformed rules (empty patterns) are rejected before a profile exists.

mod location;
mod profile;
mod text;

#[cfg(test)]
mod text_tests;

pub use location::Location;
pub use profile::{
    LineCommentRule, PatternPair, Profile, ProfileError, ProfileRules, DEFAULT_INLINE_WHITESPACE,
    DEFAULT_LINE_TERMINATORS,
};
pub use text::SourceText;
