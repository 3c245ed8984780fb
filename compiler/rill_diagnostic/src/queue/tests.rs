use pretty_assertions::assert_eq;
use rill_ir::SourcePos;

use super::*;
use crate::ErrorCode;

#[test]
fn counts_errors_not_warnings() {
    let mut queue = DiagnosticQueue::new();
    queue.add(Diagnostic::error(ErrorCode::G1001).with_message("bad range"));
    queue.add(Diagnostic::warning(ErrorCode::G1006).with_message("odd property"));
    assert_eq!(queue.error_count(), 1);
    assert!(queue.has_errors());
    assert_eq!(queue.diagnostics().len(), 2);
}

#[test]
fn flush_sorts_by_position() {
    let mut queue = DiagnosticQueue::new();
    queue.add(
        Diagnostic::error(ErrorCode::G1003)
            .with_message("later")
            .at(SourcePos::new(7, 2)),
    );
    queue.add(
        Diagnostic::error(ErrorCode::G1001)
            .with_message("earlier")
            .at(SourcePos::new(3, 9)),
    );
    let flushed = queue.flush();
    assert_eq!(flushed[0].message, "earlier");
    assert_eq!(flushed[1].message, "later");
    assert!(!queue.has_errors());
    assert!(queue.diagnostics().is_empty());
}

#[test]
fn convenience_constructors_carry_offending_text() {
    let diag = crate::reversed_char_range(SourcePos::new(4, 12), "'z'", "'a'");
    assert_eq!(diag.code, ErrorCode::G1001);
    assert_eq!(diag.pos, SourcePos::new(4, 12));
    assert_eq!(diag.offending.as_deref(), Some("'z'..'a'"));

    let diag = crate::multi_char_literal_in_set(SourcePos::new(1, 8), "'aa'");
    assert_eq!(diag.code, ErrorCode::G1005);
    assert_eq!(diag.offending.as_deref(), Some("'aa'"));
}
