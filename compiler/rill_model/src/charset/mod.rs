//! Charset parse state machine.
//!
//! Lexer set literals (`~('a'..'z' | '0'..'9' | \p{Alpha})`) are
//! parsed element-by-element through a small explicit state machine.
//! The machine never buffers more than one pending operand; every
//! emitted interval is immediately unioned into the caller-owned
//! accumulating set.
//!
//! State is a fresh value per set-literal parse. There are no shared
//! mode singletons; two parses can never observe each other.
//!
//! Malformed elements are grammar-content errors: they are reported
//! through the diagnostic queue with position and offending text, and
//! construction of the surrounding rule continues best-effort.

use rill_diagnostic::{
    dangling_range_operator, multi_char_literal_in_set, property_range_endpoint,
    reversed_char_range, rule_ref_in_lexer_set, unknown_unicode_property, DiagnosticQueue,
};
use rill_ir::{IntervalSet, SourcePos};

#[cfg(test)]
mod tests;

/// Largest valid Unicode code point; the universe for negated sets.
pub const MAX_CODE_POINT: i32 = 0x0010_FFFF;

/// Resolver for Unicode property classes (`\p{L}`, `\p{Alpha}`).
///
/// Property tables are owned by surrounding tooling; this crate only
/// consumes the resolved interval sets.
pub trait UnicodeProperties {
    /// The interval set for a property name, or `None` if the name is
    /// unknown.
    fn property_set(&self, name: &str) -> Option<IntervalSet>;
}

/// What the machine is holding between elements.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug, Default)]
pub enum CharSetParseMode {
    /// No pending operand.
    #[default]
    None,
    /// Malformed input already reported; terminal.
    Error,
    /// A single code point is pending, possibly the left side of a
    /// range.
    PrevCodePoint,
    /// A Unicode property class is pending. Properties can never be a
    /// range endpoint.
    PrevProperty,
}

/// Machine state threaded through one set-literal parse.
///
/// Invariant: `in_range` is only true while `mode` is
/// `PrevCodePoint`.
#[derive(Clone, Eq, PartialEq, Debug, Default)]
pub struct CharSetParseState {
    pub mode: CharSetParseMode,
    pub in_range: bool,
    /// Code point awaiting a possible range partner; meaningful only
    /// in `PrevCodePoint` mode.
    pub prev_code_point: i32,
    /// Interval set of a pending property; meaningful only in
    /// `PrevProperty` mode.
    pub prev_property: IntervalSet,
}

/// One syntactic element of a set literal, as delivered by the grammar
/// front end.
#[derive(Clone, Eq, PartialEq, Debug)]
pub enum SetElement<'a> {
    /// A single character literal or escape.
    CodePoint(char),
    /// A string literal; only single-character strings are legal in a
    /// set.
    StringLiteral(&'a str),
    /// The range operator `..`.
    Range,
    /// A Unicode property class, by name.
    Property(&'a str),
    /// A parser-rule reference; never legal in a lexer set.
    RuleRef(&'a str),
}

/// Parses one set literal, element by element.
///
/// Drive with [`CharSetParser::apply`] per element, then call
/// [`CharSetParser::finish`] at end-of-set. The accumulating set is
/// owned by the caller throughout.
pub struct CharSetParser<'a, P: UnicodeProperties> {
    props: &'a P,
    /// True inside `~(...)`; `finish` complements the result over the
    /// full code point range.
    negated: bool,
    pos: SourcePos,
    state: CharSetParseState,
    /// Display text of the pending property, for diagnostics.
    prev_property_text: String,
}

impl<'a, P: UnicodeProperties> CharSetParser<'a, P> {
    /// Start parsing a set literal at `pos`.
    pub fn new(props: &'a P, negated: bool, pos: SourcePos) -> Self {
        CharSetParser {
            props,
            negated,
            pos,
            state: CharSetParseState::default(),
            prev_property_text: String::new(),
        }
    }

    /// The machine state, for callers that inspect progress.
    pub fn state(&self) -> &CharSetParseState {
        &self.state
    }

    /// Consume the next element, unioning any completed interval into
    /// `set`.
    pub fn apply(
        &mut self,
        element: &SetElement<'_>,
        set: &mut IntervalSet,
        diags: &mut DiagnosticQueue,
    ) {
        if self.state.mode == CharSetParseMode::Error {
            // one report per malformed literal; consume the rest
            // silently
            return;
        }
        match element {
            SetElement::CodePoint(c) => self.apply_code_point(*c, set, diags),
            SetElement::StringLiteral(s) => {
                let mut chars = s.chars();
                match (chars.next(), chars.next()) {
                    (Some(c), None) => self.apply_code_point(c, set, diags),
                    _ => {
                        // skipped, machine state unchanged; the rest
                        // of the set still parses
                        diags.add(multi_char_literal_in_set(self.pos, &format!("'{s}'")));
                    }
                }
            }
            SetElement::Range => self.apply_range(diags),
            SetElement::Property(name) => self.apply_property(name, set, diags),
            SetElement::RuleRef(rule) => {
                diags.add(rule_ref_in_lexer_set(self.pos, rule));
            }
        }
    }

    /// End of the set literal: flush the pending operand and, for
    /// negated sets, complement over the full code point range.
    ///
    /// Returns the machine's final mode.
    pub fn finish(
        mut self,
        set: &mut IntervalSet,
        diags: &mut DiagnosticQueue,
    ) -> CharSetParseMode {
        match self.state.mode {
            CharSetParseMode::PrevCodePoint if self.state.in_range => {
                diags.add(dangling_range_operator(self.pos));
                self.state.mode = CharSetParseMode::Error;
            }
            CharSetParseMode::PrevCodePoint => {
                set.add(self.state.prev_code_point);
            }
            CharSetParseMode::PrevProperty => {
                set.union_with(&self.state.prev_property);
            }
            CharSetParseMode::None | CharSetParseMode::Error => {}
        }
        if self.negated {
            *set = set.complement(0, MAX_CODE_POINT);
        }
        self.state.mode
    }

    fn apply_code_point(&mut self, c: char, set: &mut IntervalSet, diags: &mut DiagnosticQueue) {
        let cp = c as i32;
        match self.state.mode {
            CharSetParseMode::PrevCodePoint if self.state.in_range => {
                let prev = self.state.prev_code_point;
                if cp < prev {
                    diags.add(reversed_char_range(self.pos, &quoted(prev), &quoted(cp)));
                    self.state.mode = CharSetParseMode::Error;
                    return;
                }
                set.add_range(prev, cp);
                self.state.in_range = false;
                self.state.mode = CharSetParseMode::None;
            }
            CharSetParseMode::PrevCodePoint => {
                // pending operand was a bare code point after all
                set.add(self.state.prev_code_point);
                self.state.prev_code_point = cp;
            }
            CharSetParseMode::PrevProperty => {
                set.union_with(&self.state.prev_property);
                self.state.prev_property = IntervalSet::new();
                self.state.prev_code_point = cp;
                self.state.mode = CharSetParseMode::PrevCodePoint;
            }
            CharSetParseMode::None => {
                self.state.prev_code_point = cp;
                self.state.mode = CharSetParseMode::PrevCodePoint;
            }
            CharSetParseMode::Error => {}
        }
    }

    fn apply_range(&mut self, diags: &mut DiagnosticQueue) {
        match self.state.mode {
            CharSetParseMode::PrevCodePoint if !self.state.in_range => {
                self.state.in_range = true;
            }
            CharSetParseMode::PrevProperty => {
                diags.add(property_range_endpoint(self.pos, &self.prev_property_text));
                self.state.mode = CharSetParseMode::Error;
            }
            _ => {
                // leading or doubled range operator
                diags.add(dangling_range_operator(self.pos));
                self.state.mode = CharSetParseMode::Error;
            }
        }
    }

    fn apply_property(&mut self, name: &str, set: &mut IntervalSet, diags: &mut DiagnosticQueue) {
        if self.state.in_range {
            // a property can never be the right side of a range
            diags.add(property_range_endpoint(self.pos, name));
            self.state.mode = CharSetParseMode::Error;
            return;
        }
        let Some(property) = self.props.property_set(name) else {
            // skipped, machine state unchanged
            diags.add(unknown_unicode_property(self.pos, name));
            return;
        };
        match self.state.mode {
            CharSetParseMode::PrevCodePoint => {
                set.add(self.state.prev_code_point);
            }
            CharSetParseMode::PrevProperty => {
                set.union_with(&self.state.prev_property);
            }
            CharSetParseMode::None => {}
            CharSetParseMode::Error => return,
        }
        self.state.prev_property = property;
        self.prev_property_text = name.to_string();
        self.state.mode = CharSetParseMode::PrevProperty;
    }
}

/// Quote a code point the way it appeared in the grammar, for error
/// messages.
fn quoted(cp: i32) -> String {
    match u32::try_from(cp).ok().and_then(char::from_u32) {
        Some(c) => format!("'{}'", c.escape_default()),
        None => format!("'\\u{{{cp:X}}}'"),
    }
}
