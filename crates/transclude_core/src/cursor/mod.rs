//! Bounds-safe cursor over a borrowed byte slice.
//!
//! The cursor advances through the slice byte-by-byte. Reads at or past the
//! end of the slice return `0x00`, so scanners can treat end-of-input like a
//! sentinel byte without ever indexing out of bounds.
//!
//! # Interior Null Bytes
//!
//! A slice may legitimately contain `0x00`. The cursor distinguishes an
//! interior null from end-of-input by comparing `pos` against the slice
//! length: a null at `pos < len` is content, a null at `pos >= len` is EOF.

/// Returns `true` for bytes the content fast path may skip without further
/// inspection: ASCII other than a line break or the first close byte.
#[inline]
const fn is_plain(b: u8) -> bool {
    b.is_ascii() && b != b'\n' && b != b'}'
}

/// Cursor over a borrowed byte slice.
///
/// The cursor is [`Copy`], so a scan can snapshot its start position for
/// free. It never moves past `buf.len()`.
#[derive(Clone, Copy, Debug)]
pub struct Cursor<'a> {
    buf: &'a [u8],
    /// Current read position (byte index into `buf`).
    pos: usize,
}

impl<'a> Cursor<'a> {
    /// Create a cursor positioned at `pos`.
    ///
    /// A `pos` beyond the end of `buf` is clamped to `buf.len()`, which the
    /// cursor reports as EOF.
    pub fn new(buf: &'a [u8], pos: usize) -> Self {
        Self {
            buf,
            pos: pos.min(buf.len()),
        }
    }

    /// Returns the byte at the current position, or `0x00` at EOF.
    ///
    /// Interior null bytes also return `0x00`; use [`is_eof()`](Self::is_eof)
    /// to distinguish.
    #[inline]
    pub fn current(&self) -> u8 {
        self.buf.get(self.pos).copied().unwrap_or(0)
    }

    /// Advance the cursor by one byte. A no-op at EOF.
    #[inline]
    pub fn advance(&mut self) {
        if self.pos < self.buf.len() {
            self.pos += 1;
        }
    }

    /// Returns `true` if the cursor has consumed the whole slice.
    #[inline]
    pub fn is_eof(&self) -> bool {
        self.pos >= self.buf.len()
    }

    /// Current byte offset into the slice.
    #[inline]
    pub fn pos(&self) -> usize {
        self.pos
    }

    /// Bytes from the current position to the end of the slice.
    #[inline]
    pub fn rest(&self) -> &'a [u8] {
        &self.buf[self.pos..]
    }

    /// Advance past a run of plain ASCII content and return the byte that
    /// stopped the run (`0x00` at EOF).
    ///
    /// Stops at `\n`, `}`, any non-ASCII byte, or the end of the slice.
    /// Interior null bytes are plain content and are skipped.
    #[inline]
    pub fn eat_plain(&mut self) -> u8 {
        let run = self
            .rest()
            .iter()
            .position(|&b| !is_plain(b))
            .unwrap_or(self.buf.len() - self.pos);
        self.pos += run;
        self.current()
    }
}
