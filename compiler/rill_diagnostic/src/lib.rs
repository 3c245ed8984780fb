//! Diagnostic system for grammar compilation.
//!
//! Two families of problems flow through here, and the distinction
//! matters to tooling:
//! - **Grammar content** (G1xxx): the user's grammar is wrong in a
//!   recoverable way (reversed character range, property used as a
//!   range endpoint, ...). Reported and construction continues with a
//!   safe default.
//! - **Internal consistency** (G9xxx): an upstream phase broke its
//!   contract (e.g. no lookahead computed for a reachable decision).
//!   These abort model construction and are never the grammar author's
//!   fault.
//!
//! Rendering diagnostics to a terminal is owned by surrounding tooling;
//! this crate only collects them.

mod diagnostic;
mod error_code;
pub mod queue;

pub use diagnostic::{
    dangling_range_operator, multi_char_literal_in_set, property_range_endpoint,
    reversed_char_range, rule_ref_in_lexer_set, unknown_unicode_property, Diagnostic, Severity,
};
pub use error_code::ErrorCode;
pub use queue::DiagnosticQueue;
