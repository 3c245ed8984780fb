use pretty_assertions::assert_eq;
use rill_diagnostic::{DiagnosticQueue, ErrorCode};
use rill_ir::{Interval, IntervalSet, SourcePos};

use super::*;

/// Fixture resolver: knows `L` (ASCII letters, as a stand-in) and
/// nothing else.
struct FixtureProps;

impl UnicodeProperties for FixtureProps {
    fn property_set(&self, name: &str) -> Option<IntervalSet> {
        match name {
            "L" => {
                let mut set = IntervalSet::of_range(i32::from(b'A'), i32::from(b'Z'));
                set.add_range(i32::from(b'a'), i32::from(b'z'));
                Some(set)
            }
            _ => None,
        }
    }
}

fn parse(negated: bool, elements: &[SetElement<'_>]) -> (IntervalSet, CharSetParseMode, DiagnosticQueue) {
    let props = FixtureProps;
    let mut parser = CharSetParser::new(&props, negated, SourcePos::new(3, 14));
    let mut set = IntervalSet::new();
    let mut diags = DiagnosticQueue::new();
    for element in elements {
        parser.apply(element, &mut set, &mut diags);
    }
    let mode = parser.finish(&mut set, &mut diags);
    (set, mode, diags)
}

#[test]
fn range_yields_closed_interval() {
    let (set, mode, diags) = parse(
        false,
        &[
            SetElement::CodePoint('a'),
            SetElement::Range,
            SetElement::CodePoint('z'),
        ],
    );
    assert_eq!(set.intervals(), &[Interval::new(97, 122)]);
    assert_eq!(mode, CharSetParseMode::None);
    assert!(!diags.has_errors());
}

#[test]
fn reversed_range_is_error_with_no_intervals() {
    let (set, mode, diags) = parse(
        false,
        &[
            SetElement::CodePoint('z'),
            SetElement::Range,
            SetElement::CodePoint('a'),
        ],
    );
    assert!(set.is_empty());
    assert_eq!(mode, CharSetParseMode::Error);
    assert_eq!(diags.diagnostics().len(), 1);
    assert_eq!(diags.diagnostics()[0].code, ErrorCode::G1001);
    assert_eq!(diags.diagnostics()[0].offending.as_deref(), Some("'z'..'a'"));
}

#[test]
fn property_as_range_start_is_error() {
    let (_, mode, diags) = parse(
        false,
        &[
            SetElement::Property("L"),
            SetElement::Range,
            SetElement::CodePoint('z'),
        ],
    );
    assert_eq!(mode, CharSetParseMode::Error);
    assert_eq!(diags.diagnostics()[0].code, ErrorCode::G1002);
}

#[test]
fn property_as_range_end_is_error() {
    let (_, mode, diags) = parse(
        false,
        &[
            SetElement::CodePoint('a'),
            SetElement::Range,
            SetElement::Property("L"),
        ],
    );
    assert_eq!(mode, CharSetParseMode::Error);
    assert_eq!(diags.diagnostics()[0].code, ErrorCode::G1002);
}

#[test]
fn dangling_range_at_end_of_set_is_error() {
    let (set, mode, diags) = parse(false, &[SetElement::CodePoint('a'), SetElement::Range]);
    assert!(set.is_empty());
    assert_eq!(mode, CharSetParseMode::Error);
    assert_eq!(diags.diagnostics()[0].code, ErrorCode::G1003);
}

#[test]
fn alternated_singles_and_ranges_accumulate() {
    // 'a'..'z' | '0'..'9' | '_'
    let (set, mode, diags) = parse(
        false,
        &[
            SetElement::CodePoint('a'),
            SetElement::Range,
            SetElement::CodePoint('z'),
            SetElement::CodePoint('0'),
            SetElement::Range,
            SetElement::CodePoint('9'),
            SetElement::CodePoint('_'),
        ],
    );
    assert!(!diags.has_errors());
    assert_eq!(mode, CharSetParseMode::None);
    assert_eq!(
        set.intervals(),
        &[
            Interval::new(48, 57),
            Interval::new(95, 95),
            Interval::new(97, 122),
        ]
    );
}

#[test]
fn pending_single_is_flushed_at_end() {
    let (set, mode, _) = parse(false, &[SetElement::CodePoint('x')]);
    assert_eq!(set.intervals(), &[Interval::single(120)]);
    assert_eq!(mode, CharSetParseMode::None);
}

#[test]
fn property_set_is_unioned() {
    let (set, _, diags) = parse(false, &[SetElement::Property("L"), SetElement::CodePoint('_')]);
    assert!(!diags.has_errors());
    assert!(set.contains(i32::from(b'Q')));
    assert!(set.contains(i32::from(b'q')));
    assert!(set.contains(i32::from(b'_')));
    assert!(!set.contains(i32::from(b'0')));
}

#[test]
fn unknown_property_is_reported_and_skipped() {
    let (set, mode, diags) = parse(
        false,
        &[SetElement::Property("Nope"), SetElement::CodePoint('a')],
    );
    assert_eq!(diags.diagnostics()[0].code, ErrorCode::G1006);
    // parsing continued past the bad element
    assert_eq!(mode, CharSetParseMode::None);
    assert_eq!(set.intervals(), &[Interval::single(97)]);
}

#[test]
fn rule_ref_in_set_is_reported_and_skipped() {
    let (set, _, diags) = parse(
        false,
        &[SetElement::RuleRef("expr"), SetElement::CodePoint('a')],
    );
    assert_eq!(diags.diagnostics()[0].code, ErrorCode::G1004);
    assert_eq!(set.intervals(), &[Interval::single(97)]);
}

#[test]
fn multi_char_literal_in_negated_set_is_recoverable() {
    // ~('a' | 'aa')
    let (set, mode, diags) = parse(
        true,
        &[SetElement::CodePoint('a'), SetElement::StringLiteral("aa")],
    );
    assert_eq!(diags.diagnostics().len(), 1);
    assert_eq!(diags.diagnostics()[0].code, ErrorCode::G1005);
    assert_eq!(diags.diagnostics()[0].offending.as_deref(), Some("'aa'"));
    // construction still completed: everything except 'a'
    assert_eq!(mode, CharSetParseMode::None);
    assert_eq!(
        set.intervals(),
        &[Interval::new(0, 96), Interval::new(98, MAX_CODE_POINT)]
    );
}

#[test]
fn single_char_string_literal_is_a_code_point() {
    let (set, _, diags) = parse(false, &[SetElement::StringLiteral("b")]);
    assert!(!diags.has_errors());
    assert_eq!(set.intervals(), &[Interval::single(98)]);
}

#[test]
fn negated_range_complements_over_code_points() {
    let (set, _, _) = parse(
        true,
        &[
            SetElement::CodePoint('a'),
            SetElement::Range,
            SetElement::CodePoint('z'),
        ],
    );
    assert_eq!(
        set.intervals(),
        &[Interval::new(0, 96), Interval::new(123, MAX_CODE_POINT)]
    );
}

#[test]
fn fresh_state_per_parse() {
    // a parse left in Error mode must not leak into a new parse
    let (_, mode, _) = parse(false, &[SetElement::CodePoint('z'), SetElement::Range, SetElement::CodePoint('a')]);
    assert_eq!(mode, CharSetParseMode::Error);
    let (set, mode, diags) = parse(false, &[SetElement::CodePoint('q')]);
    assert_eq!(mode, CharSetParseMode::None);
    assert!(!diags.has_errors());
    assert_eq!(set.intervals(), &[Interval::single(113)]);
}
