//! Errors raised at the checked API boundary.
//!
//! The scanners themselves never fail: malformed input is simply no match.
//! Only contract violations by the caller surface here.

/// Caller error when probing a line for a directive.
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
pub enum DirectiveError {
    #[error("offset {offset} is past the end of a {len}-byte line")]
    OffsetOutOfBounds { offset: usize, len: usize },
}
