//! Include directives for document assembly.
//!
//! Builds on the byte-level scanners in `transclude_core`:
//!
//! - [`directives`] / [`directive_at`] find `{{path}}` spans in a line.
//! - [`IncludeResolver`] maps a path to content; [`expand_includes`] splices
//!   resolved content into text and keeps unresolved directives literal.
//!
//! # Debugging
//!
//! Candidate rejections are traced at `trace` level and unresolved includes
//! at `debug` level. Install any `tracing` subscriber and filter with
//! `RUST_LOG=transclude=debug` or `RUST_LOG=transclude=trace`.

mod directive;
mod error;
mod resolve;

pub use directive::{directive_at, directives, Directive, Directives, Span};
pub use error::DirectiveError;
pub use resolve::{expand_includes, from_fn, FnResolver, IncludeResolver};
pub use transclude_core::{scan_close, scan_open, MatchResult, CLOSE_DELIMITER, OPEN_DELIMITER};
