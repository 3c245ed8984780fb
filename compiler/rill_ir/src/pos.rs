//! Source positions.
//!
//! Grammar constructs carry the line/column where they appear in the
//! grammar file so diagnostics can point at the exact element.

use std::fmt;

/// Line/column position in a grammar file.
///
/// Both fields are 1-based. Line and column are distinct fields and are
/// never folded into one value; every diagnostic and every recovery
/// operation carries both.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug, Default)]
pub struct SourcePos {
    pub line: u32,
    pub col: u32,
}

impl SourcePos {
    /// Position for synthesized constructs with no grammar location.
    pub const UNKNOWN: SourcePos = SourcePos { line: 0, col: 0 };

    /// Create a new position.
    #[inline]
    pub const fn new(line: u32, col: u32) -> Self {
        SourcePos { line, col }
    }

    /// Check whether this position points at real grammar text.
    #[inline]
    pub const fn is_known(&self) -> bool {
        self.line != 0
    }
}

impl fmt::Display for SourcePos {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.line, self.col)
    }
}
