//! Delimiter scanners for the `{{path}}` include directive.
//!
//! Two independent, stateless recognizers over raw bytes:
//!
//! - [`scan_open`] checks that a `{{` at the offset starts a well-formed
//!   directive and reports the delimiter width.
//! - [`scan_close`] measures the valid content between the offset and the
//!   next `}}`.
//!
//! Content between the delimiters must be well-formed UTF-8 on a single
//! line. Malformed bytes, line breaks, and missing delimiters all produce
//! [`MatchResult::NoMatch`]; the host treats the candidate as literal text.
//!
//! # Design
//!
//! Both scanners drive one explicit state machine (`machine`) and share the
//! multi-byte acceptance table in [`utf8`], so they cannot disagree about
//! what counts as content. Reads go through a bounds-safe [`Cursor`] that
//! reports `0x00` at end of input; nothing reads past the slice.

mod close;
mod cursor;
mod machine;
mod open;
mod scan;
pub mod utf8;

pub use close::scan_close;
pub use cursor::Cursor;
pub use open::scan_open;
pub use scan::{scan_at, MatchResult};

/// The two-byte literal that opens a directive.
pub const OPEN_DELIMITER: &[u8; 2] = b"{{";

/// The two-byte literal that closes a directive.
pub const CLOSE_DELIMITER: &[u8; 2] = b"}}";
