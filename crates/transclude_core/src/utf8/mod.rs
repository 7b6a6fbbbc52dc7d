//! Multi-byte UTF-8 acceptance table shared by both delimiter scanners.
//!
//! Each lead byte maps to the range its first continuation byte must fall
//! in, plus the number of further continuation bytes (each `0x80..=0xBF`).
//! The narrowed first ranges reject overlong encodings (`0xE0`, `0xF0`),
//! UTF-16 surrogates (`0xED`), and code points above U+10FFFF (`0xF4`).
//!
//! | lead                   | first       | trailing |
//! |------------------------|-------------|----------|
//! | `C2..=DF`              | `80..=BF`   | 0        |
//! | `E0`                   | `A0..=BF`   | 1        |
//! | `E1..=EC`, `EE..=EF`   | `80..=BF`   | 1        |
//! | `ED`                   | `80..=9F`   | 1        |
//! | `F0`                   | `90..=BF`   | 2        |
//! | `F1..=F3`              | `80..=BF`   | 2        |
//! | `F4`                   | `80..=8F`   | 2        |

use crate::cursor::Cursor;

/// Inclusive byte range a continuation byte must fall in.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ContinuationRange {
    pub lo: u8,
    pub hi: u8,
}

impl ContinuationRange {
    /// The unrestricted continuation range `0x80..=0xBF`.
    pub const FULL: Self = Self::new(0x80, 0xBF);

    const fn new(lo: u8, hi: u8) -> Self {
        Self { lo, hi }
    }

    #[inline]
    pub const fn contains(self, b: u8) -> bool {
        self.lo <= b && b <= self.hi
    }
}

/// Classification of a byte in lead position.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Lead {
    /// `0x00..=0x7F`: a complete one-byte encoding.
    Ascii,
    /// Start of a 2-, 3-, or 4-byte encoding.
    Multi {
        /// Range of the first continuation byte.
        first: ContinuationRange,
        /// Continuation bytes after the first, each in [`ContinuationRange::FULL`].
        trailing: u8,
    },
    /// Continuation bytes, `0xC0`/`0xC1`, and `0xF5..=0xFF`.
    Invalid,
}

impl Lead {
    /// Total encoded length for a valid lead, `None` for [`Lead::Invalid`].
    pub const fn width(self) -> Option<usize> {
        match self {
            Self::Ascii => Some(1),
            Self::Multi { trailing, .. } => Some(2 + trailing as usize),
            Self::Invalid => None,
        }
    }
}

/// Classify `b` as a lead byte.
pub const fn classify(b: u8) -> Lead {
    const fn multi(lo: u8, hi: u8, trailing: u8) -> Lead {
        Lead::Multi {
            first: ContinuationRange::new(lo, hi),
            trailing,
        }
    }

    match b {
        0x00..=0x7F => Lead::Ascii,
        0xC2..=0xDF => multi(0x80, 0xBF, 0),
        0xE0 => multi(0xA0, 0xBF, 1),
        0xE1..=0xEC | 0xEE..=0xEF => multi(0x80, 0xBF, 1),
        0xED => multi(0x80, 0x9F, 1),
        0xF0 => multi(0x90, 0xBF, 2),
        0xF1..=0xF3 => multi(0x80, 0xBF, 2),
        0xF4 => multi(0x80, 0x8F, 2),
        0x80..=0xC1 | 0xF5..=0xFF => Lead::Invalid,
    }
}

/// Consume one complete multi-byte sequence starting at the cursor.
///
/// Returns `false` as soon as a byte falls outside its required range,
/// including the `0x00` reported at EOF for a truncated sequence. The cursor
/// position is unspecified after a rejection; callers abandon the scan.
pub(crate) fn eat_sequence(cursor: &mut Cursor<'_>) -> bool {
    let Lead::Multi { first, trailing } = classify(cursor.current()) else {
        return false;
    };
    cursor.advance();

    if !first.contains(cursor.current()) {
        return false;
    }
    cursor.advance();

    for _ in 0..trailing {
        if !ContinuationRange::FULL.contains(cursor.current()) {
            return false;
        }
        cursor.advance();
    }
    true
}
