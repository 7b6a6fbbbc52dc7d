//! Scan outcome and the bounds-checked entry point shared by both scanners.

use crate::cursor::Cursor;

/// Outcome of one scanner call.
///
/// A zero-length match is distinct from no match: `scan_close` reports
/// `Matched(0)` when the cursor sits directly on `}}`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum MatchResult {
    /// No delimiter here, or the content after it is malformed.
    #[default]
    NoMatch,
    /// Matched; the length's meaning is scanner-specific.
    Matched(usize),
}

impl MatchResult {
    #[inline]
    pub fn is_match(self) -> bool {
        matches!(self, Self::Matched(_))
    }

    /// The matched length, or `None` for [`MatchResult::NoMatch`].
    #[inline]
    pub fn matched_len(self) -> Option<usize> {
        match self {
            Self::Matched(len) => Some(len),
            Self::NoMatch => None,
        }
    }
}

impl From<Option<usize>> for MatchResult {
    fn from(len: Option<usize>) -> Self {
        len.map_or(Self::NoMatch, Self::Matched)
    }
}

impl From<MatchResult> for Option<usize> {
    fn from(result: MatchResult) -> Self {
        result.matched_len()
    }
}

/// Run `scanner` on `buf` starting at `offset`.
///
/// An `offset` at or past the end of `buf` yields `NoMatch` without
/// invoking the scanner: both delimiters need at least two bytes.
pub fn scan_at(scanner: fn(Cursor<'_>) -> MatchResult, buf: &[u8], offset: usize) -> MatchResult {
    if offset >= buf.len() {
        return MatchResult::NoMatch;
    }
    scanner(Cursor::new(buf, offset))
}
