//! Open-delimiter scanner.
//!
//! Answers "is this `{{` the valid start of a well-formed directive": the
//! delimiter, then content that is valid UTF-8 with no `\n` and no `}`, then
//! a `}}` on the same line. The match length is always the width of the open
//! delimiter; the host locates the directive's end itself.

use crate::cursor::Cursor;
use crate::machine::Machine;
use crate::scan::{scan_at, MatchResult};
use crate::OPEN_DELIMITER;

/// Scan for a well-formed directive opening at `offset`.
///
/// Returns `Matched(2)` on success. Empty content (`{{}}`) is accepted.
pub fn scan_open(buf: &[u8], offset: usize) -> MatchResult {
    scan_at(open_directive, buf, offset)
}

fn open_directive(cursor: Cursor<'_>) -> MatchResult {
    Machine::open(cursor)
        .run()
        .map(|_content| OPEN_DELIMITER.len())
        .into()
}
