use super::*;
use pretty_assertions::assert_eq;

/// Helper: collect `(span, path)` pairs for every directive in `line`.
fn find(line: &str) -> Vec<(Range<usize>, &str)> {
    directives(line.as_bytes())
        .map(|d| (d.span.as_range(), d.path))
        .collect()
}

// === Discovery ===

#[test]
fn single_directive() {
    assert_eq!(
        find("   I include a {{simple_file.md}}!"),
        vec![(15..33, "simple_file.md")]
    );
}

#[test]
fn multiple_directives() {
    assert_eq!(
        find("I include a {{simple_file.md}} and another {{simple_file.md}}!"),
        vec![(12..30, "simple_file.md"), (43..61, "simple_file.md")]
    );
}

#[test]
fn adjacent_directives() {
    assert_eq!(
        find("{{opens_code_block.md}}{{simple_file.md}}"),
        vec![(0..23, "opens_code_block.md"), (23..41, "simple_file.md")]
    );
}

#[test]
fn empty_directive() {
    assert_eq!(find("a{{}}b"), vec![(1..5, "")]);
}

#[test]
fn unicode_path() {
    assert_eq!(find("{{caf\u{e9}.md}}"), vec![(0..12, "caf\u{e9}.md")]);
}

#[test]
fn no_directives() {
    assert!(find("plain text").is_empty());
    assert!(find("").is_empty());
    assert!(find("{ single } braces").is_empty());
}

#[test]
fn malformed_candidates_are_skipped() {
    assert_eq!(find("{{broken}x}} then {{ok}}"), vec![(18..24, "ok")]);
}

#[test]
fn unterminated_directive() {
    assert!(find("{{never closed").is_empty());
}

#[test]
fn directive_does_not_span_lines() {
    assert_eq!(find("{{first\nline}} {{second}}"), vec![(15..25, "second")]);
}

#[test]
fn extra_open_brace_belongs_to_content() {
    assert_eq!(find("{{{a}}"), vec![(0..6, "{a")]);
}

#[test]
fn invalid_utf8_candidate_is_skipped() {
    let line = b"{{bad\xC3 }} {{good}}";
    let found: Vec<_> = directives(line).map(|d| d.path).collect();
    assert_eq!(found, vec!["good"]);
}

#[test]
fn iterator_is_fused() {
    let mut iter = directives(b"{{a}}");
    assert!(iter.next().is_some());
    assert!(iter.next().is_none());
    assert!(iter.next().is_none());
}

// === Checked Probe ===

#[test]
fn directive_at_offset() {
    let line = b"see {{x.md}}";
    assert_eq!(
        directive_at(line, 4),
        Ok(Some(Directive {
            span: Span::new(4, 12),
            path: "x.md",
        }))
    );
}

#[test]
fn directive_at_wrong_offset() {
    let line = b"see {{x.md}}";
    assert_eq!(directive_at(line, 0), Ok(None));
    assert_eq!(directive_at(line, 5), Ok(None));
    assert_eq!(directive_at(line, line.len()), Ok(None));
}

#[test]
fn directive_at_out_of_bounds() {
    assert_eq!(
        directive_at(b"{{}}", 5),
        Err(DirectiveError::OffsetOutOfBounds { offset: 5, len: 4 })
    );
}

// === Span ===

#[test]
fn span_accessors() {
    let span = Span::new(3, 9);
    assert_eq!(span.len(), 6);
    assert!(!span.is_empty());
    assert_eq!(span.as_range(), 3..9);
    assert!(Span::new(2, 2).is_empty());
}
