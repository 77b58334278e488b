//! Shared immutable source buffer.

use std::fmt;
use std::ops::Deref;
use std::sync::Arc;

/// Immutable text buffer shared by reference across cursors.
///
/// Cloning copies an `Arc`, never the text, so forking a cursor for
/// lookahead is cheap regardless of buffer size. Identity (`same_buffer`)
/// is pointer equality on the underlying allocation; `restore` uses it to
/// reject state transplants across unrelated buffers.
#[derive(Clone)]
pub struct SourceText(Arc<str>);

impl SourceText {
    pub fn new(text: impl Into<Arc<str>>) -> Self {
        Self(text.into())
    }

    #[inline]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Whether both handles point at the same allocation.
    #[inline]
    pub fn same_buffer(&self, other: &SourceText) -> bool {
        Arc::ptr_eq(&self.0, &other.0)
    }
}

impl Deref for SourceText {
    type Target = str;

    #[inline]
    fn deref(&self) -> &str {
        &self.0
    }
}

impl From<&str> for SourceText {
    fn from(text: &str) -> Self {
        Self(Arc::from(text))
    }
}

impl From<String> for SourceText {
    fn from(text: String) -> Self {
        Self(Arc::from(text))
    }
}

impl From<Arc<str>> for SourceText {
    fn from(text: Arc<str>) -> Self {
        Self(text)
    }
}

impl fmt::Debug for SourceText {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Buffers can be large; show length + prefix only.
        let prefix: String = self.0.chars().take(32).collect();
        write!(f, "SourceText({} bytes, {prefix:?}…)", self.0.len())
    }
}
