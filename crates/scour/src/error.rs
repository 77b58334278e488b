//! Usage errors.
//!
//! These are precondition violations raised synchronously at the call
//! site. Cheap guards (`avail()`, `is_code()`) exist for every one of
//! them; nothing is ever clamped or guessed silently.

/// Errors from cursor operations that violate a precondition.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ScanError {
    /// `jump_to` backward while literal patterns are active. Literal
    /// context cannot be un-derived; re-scan from an earlier clone.
    #[error("cannot jump backward from {from} to {to} while language patterns are active")]
    BackwardJump { from: usize, to: usize },

    /// `switch_profile` while inside a string/comment/regex literal.
    #[error("cannot switch language profile inside a {context} literal")]
    ProfileLocked { context: &'static str },

    /// `restore` from a cursor over a different buffer.
    #[error("cannot restore cursor state across different buffers")]
    BufferMismatch,
}
