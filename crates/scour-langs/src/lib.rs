#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

//! Builtin language profiles for the scour scanner.
//!
//! Each preset is a lazily-built, shared [`Profile`] selected by name or
//! alias (`from_name("cpp")`, `from_name("sh")`, …). The catalog is a
//! fixed table: every entry is validated the first time it is touched, and
//! [`registry`] exposes the whole set in declaration order.

use std::sync::Arc;

use indexmap::IndexMap;
use scour_core::Profile;

pub mod builtin;


pub use builtin::{
    all, c_family, css, from_name, html, javascript, json, jsonc, markdown, names, plain, python,
    rust, shell, sql, toml, yaml,
};
pub use scour_core::ProfileError;

/// The full catalog keyed by canonical preset name, in declaration order.
///
/// Built on demand; prefer [`from_name`] for lookups since it also
/// resolves aliases.
pub fn registry() -> IndexMap<&'static str, Arc<Profile>> {
    names()
        .iter()
        .map(|&name| {
            let profile = from_name(name).expect("registry names are canonical");
            (name, profile)
        })
        .collect()
}
