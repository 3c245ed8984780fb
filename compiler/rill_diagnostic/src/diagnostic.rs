use std::fmt;

use rill_ir::SourcePos;

use crate::ErrorCode;

/// Severity level for diagnostics.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum Severity {
    Error,
    Warning,
    Note,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Severity::Error => write!(f, "error"),
            Severity::Warning => write!(f, "warning"),
            Severity::Note => write!(f, "note"),
        }
    }
}

/// A diagnostic with the context needed to point at the offending
/// grammar element.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
#[must_use = "diagnostics should be reported or returned, not silently dropped"]
pub struct Diagnostic {
    /// Error code for searchability.
    pub code: ErrorCode,
    /// Severity level.
    pub severity: Severity,
    /// Main error message.
    pub message: String,
    /// Grammar file the diagnostic points into, when known.
    pub file: Option<String>,
    /// Line/column of the offending construct.
    pub pos: SourcePos,
    /// The offending grammar text, verbatim, when available.
    pub offending: Option<String>,
    /// Additional notes providing context.
    pub notes: Vec<String>,
}

impl Diagnostic {
    fn new_with_severity(code: ErrorCode, severity: Severity) -> Self {
        Diagnostic {
            code,
            severity,
            message: String::new(),
            file: None,
            pos: SourcePos::UNKNOWN,
            offending: None,
            notes: Vec::new(),
        }
    }

    /// Create a new error diagnostic.
    pub fn error(code: ErrorCode) -> Self {
        Self::new_with_severity(code, Severity::Error)
    }

    /// Create a new warning diagnostic.
    pub fn warning(code: ErrorCode) -> Self {
        Self::new_with_severity(code, Severity::Warning)
    }

    /// Set the main message.
    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = message.into();
        self
    }

    /// Set the grammar file name.
    pub fn with_file(mut self, file: impl Into<String>) -> Self {
        self.file = Some(file.into());
        self
    }

    /// Set the source position.
    pub fn at(mut self, pos: SourcePos) -> Self {
        self.pos = pos;
        self
    }

    /// Attach the offending grammar text.
    pub fn with_offending(mut self, text: impl Into<String>) -> Self {
        self.offending = Some(text.into());
        self
    }

    /// Add a note providing additional context.
    pub fn with_note(mut self, note: impl Into<String>) -> Self {
        self.notes.push(note.into());
        self
    }
}

// Convenience constructors for the grammar-content errors raised by
// charset parsing. Each carries the offending text so the report can
// point at the exact set-literal element.

/// Reversed character range like `'z'..'a'`.
pub fn reversed_char_range(pos: SourcePos, left: &str, right: &str) -> Diagnostic {
    Diagnostic::error(ErrorCode::G1001)
        .with_message(format!(
            "range {left}..{right} is reversed; the left endpoint must not exceed the right"
        ))
        .at(pos)
        .with_offending(format!("{left}..{right}"))
}

/// A Unicode property class used as a range endpoint (`\p{{L}}-'z'`).
pub fn property_range_endpoint(pos: SourcePos, property: &str) -> Diagnostic {
    Diagnostic::error(ErrorCode::G1002)
        .with_message(format!(
            "unicode property {property} cannot be an endpoint of a character range"
        ))
        .at(pos)
        .with_offending(property)
}

/// A range operator missing an operand (`'a'..` at end of set, or a
/// leading/doubled `..`).
pub fn dangling_range_operator(pos: SourcePos) -> Diagnostic {
    Diagnostic::error(ErrorCode::G1003)
        .with_message("range operator is missing an operand")
        .at(pos)
}

/// A parser-rule reference inside a lexer set literal.
pub fn rule_ref_in_lexer_set(pos: SourcePos, rule: &str) -> Diagnostic {
    Diagnostic::error(ErrorCode::G1004)
        .with_message(format!("rule reference {rule} is not allowed in a set"))
        .at(pos)
        .with_offending(rule)
}

/// A Unicode property name no property table resolves (`\p{Nope}`).
pub fn unknown_unicode_property(pos: SourcePos, property: &str) -> Diagnostic {
    Diagnostic::error(ErrorCode::G1006)
        .with_message(format!("unknown unicode property {property}"))
        .at(pos)
        .with_offending(property)
}

/// A multi-character string literal inside a set literal (`~('a'|'aa')`).
pub fn multi_char_literal_in_set(pos: SourcePos, literal: &str) -> Diagnostic {
    Diagnostic::error(ErrorCode::G1005)
        .with_message(format!(
            "multi-character literal {literal} is not allowed in a set; only single characters and ranges may appear"
        ))
        .at(pos)
        .with_offending(literal)
}
