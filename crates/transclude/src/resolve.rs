//! Include resolution and splicing.
//!
//! [`IncludeResolver`] is the seam to the document-assembly tool: it maps a
//! directive path to the content to transclude, or `None` when the path is
//! unknown. [`expand_includes`] replaces every resolvable directive with its
//! content and leaves unresolvable ones as literal text.

use std::borrow::Cow;
use std::collections::{BTreeMap, HashMap};
use std::hash::BuildHasher;

use tracing::debug;

use crate::directive::directives;

/// Maps an include path to the content it stands for.
pub trait IncludeResolver {
    /// Content for `path`, or `None` if the path cannot be resolved.
    ///
    /// Resolving to an empty string is a successful resolution: the
    /// directive is removed from the output.
    fn resolve(&self, path: &str) -> Option<Cow<'_, str>>;
}

impl<S: BuildHasher> IncludeResolver for HashMap<String, String, S> {
    fn resolve(&self, path: &str) -> Option<Cow<'_, str>> {
        self.get(path).map(|content| Cow::Borrowed(content.as_str()))
    }
}

impl IncludeResolver for BTreeMap<String, String> {
    fn resolve(&self, path: &str) -> Option<Cow<'_, str>> {
        self.get(path).map(|content| Cow::Borrowed(content.as_str()))
    }
}

/// Resolver backed by a closure. Created by [`from_fn`].
#[derive(Clone, Copy, Debug)]
pub struct FnResolver<F>(F);

/// Build a resolver from a closure returning owned content.
pub fn from_fn<F>(f: F) -> FnResolver<F>
where
    F: Fn(&str) -> Option<String>,
{
    FnResolver(f)
}

impl<F> IncludeResolver for FnResolver<F>
where
    F: Fn(&str) -> Option<String>,
{
    fn resolve(&self, path: &str) -> Option<Cow<'_, str>> {
        (self.0)(path).map(Cow::Owned)
    }
}

/// Replace every resolvable directive in `text` with its content.
///
/// Unresolved directives and malformed candidates stay as written. When
/// nothing resolves, `text` is returned borrowed.
#[tracing::instrument(level = "trace", skip_all, fields(len = text.len()))]
pub fn expand_includes<'t, R>(text: &'t str, resolver: &R) -> Cow<'t, str>
where
    R: IncludeResolver + ?Sized,
{
    let mut out: Option<String> = None;
    let mut copied = 0;

    for directive in directives(text.as_bytes()) {
        let Some(content) = resolver.resolve(directive.path) else {
            debug!(path = directive.path, "include left unresolved");
            continue;
        };
        let buf = out.get_or_insert_with(|| String::with_capacity(text.len()));
        buf.push_str(&text[copied..directive.span.start]);
        buf.push_str(&content);
        copied = directive.span.end;
    }

    match out {
        None => Cow::Borrowed(text),
        Some(mut buf) => {
            buf.push_str(&text[copied..]);
            Cow::Owned(buf)
        }
    }
}
