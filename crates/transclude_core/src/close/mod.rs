//! Close-delimiter scanner.
//!
//! Measures how much valid content lies between the cursor and the next
//! `}}` on the same line. Content rules are the open scanner's: both run the
//! same [`Machine`], the close scanner simply enters it already in content.

use crate::cursor::Cursor;
use crate::machine::Machine;
use crate::scan::{scan_at, MatchResult};

/// Scan for a close delimiter reachable from `offset`.
///
/// Returns `Matched(n)` where `n` is the number of content bytes before the
/// `}}`; `Matched(0)` when `}}` sits directly at `offset`.
pub fn scan_close(buf: &[u8], offset: usize) -> MatchResult {
    scan_at(close_directive, buf, offset)
}

fn close_directive(cursor: Cursor<'_>) -> MatchResult {
    Machine::close(cursor).run().into()
}
