use std::fmt;

/// Error codes for all grammar-compiler diagnostics.
///
/// Format: G#### where the first digit indicates the family:
/// - G1xxx: grammar content (recoverable, construction continues)
/// - G9xxx: internal consistency (fatal, construction aborts)
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum ErrorCode {
    // Grammar content (G1xxx)
    /// Reversed character range (`'z'..'a'`)
    G1001,
    /// Unicode property used as a range endpoint
    G1002,
    /// Dangling range operator at end of set (`'a'..`)
    G1003,
    /// Rule reference inside a lexer set literal
    G1004,
    /// Multi-character string literal inside a set literal
    G1005,
    /// Unknown Unicode property name
    G1006,

    // Internal consistency (G9xxx)
    /// No lookahead computed for a reachable decision
    G9001,
    /// Decision construct bound to a state that carries no decision
    G9002,
    /// Left-recursive alternative missing its rewritten form
    G9003,
}

impl ErrorCode {
    /// Check if this is a fatal internal-consistency error (G9xxx).
    pub fn is_internal(&self) -> bool {
        self.as_str().starts_with("G9")
    }

    /// Get the numeric code as a string (e.g., "G1001").
    pub fn as_str(&self) -> &'static str {
        match self {
            // Grammar content
            ErrorCode::G1001 => "G1001",
            ErrorCode::G1002 => "G1002",
            ErrorCode::G1003 => "G1003",
            ErrorCode::G1004 => "G1004",
            ErrorCode::G1005 => "G1005",
            ErrorCode::G1006 => "G1006",
            // Internal
            ErrorCode::G9001 => "G9001",
            ErrorCode::G9002 => "G9002",
            ErrorCode::G9003 => "G9003",
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
