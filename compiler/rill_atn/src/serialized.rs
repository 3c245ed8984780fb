//! Opaque serialized-automaton payload.

use std::fmt;

/// The serialized automaton: a flat ordered sequence of signed
/// integers produced by the ATN-serialization phase and embedded
/// verbatim in the generated lexer/parser file.
///
/// This workspace never interprets or re-encodes the payload; it only
/// carries the reference into the output model.
#[derive(Clone, Eq, PartialEq, Hash, Debug, Default)]
pub struct SerializedAtn(Vec<i32>);

impl SerializedAtn {
    /// Wrap a serialized payload.
    pub fn new(data: Vec<i32>) -> Self {
        SerializedAtn(data)
    }

    /// The raw payload.
    pub fn as_slice(&self) -> &[i32] {
        &self.0
    }

    /// Payload length in values.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Check whether the payload is empty.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl From<Vec<i32>> for SerializedAtn {
    fn from(data: Vec<i32>) -> Self {
        SerializedAtn(data)
    }
}

impl fmt::Display for SerializedAtn {
    /// Renders the payload as comma-separated values, the shape targets
    /// embed in a string or array literal.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, v) in self.0.iter().enumerate() {
            if i > 0 {
                write!(f, ",")?;
            }
            write!(f, "{v}")?;
        }
        Ok(())
    }
}
