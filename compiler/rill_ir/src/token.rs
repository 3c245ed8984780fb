//! Token type identities and display info.
//!
//! Token types are plain signed integers following the automaton
//! encoding: real tokens start at 1, with reserved sentinels below.

use std::fmt;

/// Token type of the end-of-file marker.
pub const EOF_TOKEN: i32 = -1;

/// Token type reserved for "no token"; never matched by any rule.
pub const INVALID_TOKEN: i32 = 0;

/// Pseudo token type for epsilon transitions inside the automaton.
///
/// Never appears in a lookahead set handed to this crate's consumers;
/// the analysis phase resolves epsilon edges before building the table.
pub const EPSILON_TOKEN: i32 = -2;

/// Display info for one token type.
///
/// Used only to render human-readable lookahead tables in generated
/// code comments and error messages. Value equality, no identity.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct TokenInfo {
    /// The token type id.
    pub ttype: i32,
    /// Display name (the grammar's token name, or a literal spelling).
    pub name: String,
}

impl TokenInfo {
    /// Create display info for a token type.
    pub fn new(ttype: i32, name: impl Into<String>) -> Self {
        TokenInfo {
            ttype,
            name: name.into(),
        }
    }
}

impl fmt::Display for TokenInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name)
    }
}
