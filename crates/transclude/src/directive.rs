//! Directive discovery over a line of text.
//!
//! Implements the host side of the scanner contract: probe each `{` with
//! [`scan_open`], and on success measure the content with [`scan_close`]
//! right after the open delimiter to recover the full span.

use std::iter::FusedIterator;
use std::ops::Range;

use tracing::trace;
use transclude_core::{scan_close, scan_open, CLOSE_DELIMITER};

use crate::error::DirectiveError;

/// Byte range of a directive, delimiters included.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Span {
    pub start: usize,
    pub end: usize,
}

impl Span {
    pub const fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }

    pub const fn len(self) -> usize {
        self.end - self.start
    }

    pub const fn is_empty(self) -> bool {
        self.start == self.end
    }

    pub const fn as_range(self) -> Range<usize> {
        self.start..self.end
    }
}

/// A well-formed `{{path}}` directive found in a line.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Directive<'a> {
    /// Span from the first `{` through the last `}`.
    pub span: Span,
    /// Content between the delimiters. May be empty.
    pub path: &'a str,
}

/// Iterate over every well-formed directive in `line`, left to right.
///
/// After a directive, scanning resumes at its end, so directives never
/// overlap. A `{` that does not start a directive is skipped and scanning
/// continues at the next byte.
pub fn directives(line: &[u8]) -> Directives<'_> {
    Directives { line, pos: 0 }
}

/// Probe for a directive starting exactly at `offset`.
///
/// `Ok(None)` when no well-formed directive starts there. An `offset` past
/// the end of `line` is a caller error.
pub fn directive_at(line: &[u8], offset: usize) -> Result<Option<Directive<'_>>, DirectiveError> {
    if offset > line.len() {
        return Err(DirectiveError::OffsetOutOfBounds {
            offset,
            len: line.len(),
        });
    }
    Ok(probe(line, offset))
}

fn probe(line: &[u8], start: usize) -> Option<Directive<'_>> {
    let content_start = start + scan_open(line, start).matched_len()?;
    let content_end = content_start + scan_close(line, content_start).matched_len()?;
    let path = std::str::from_utf8(&line[content_start..content_end]).ok()?;
    Some(Directive {
        span: Span::new(start, content_end + CLOSE_DELIMITER.len()),
        path,
    })
}

/// Iterator returned by [`directives`].
#[derive(Clone, Debug)]
pub struct Directives<'a> {
    line: &'a [u8],
    pos: usize,
}

impl<'a> Iterator for Directives<'a> {
    type Item = Directive<'a>;

    fn next(&mut self) -> Option<Directive<'a>> {
        loop {
            let start = self.pos + memchr::memchr(b'{', self.line.get(self.pos..)?)?;
            if let Some(directive) = probe(self.line, start) {
                self.pos = directive.span.end;
                return Some(directive);
            }
            trace!(offset = start, "brace does not open a directive");
            self.pos = start + 1;
        }
    }
}

impl FusedIterator for Directives<'_> {}

#[cfg(test)]
mod tests;
