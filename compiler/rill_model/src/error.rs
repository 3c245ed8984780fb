//! Internal-consistency errors.
//!
//! These are never the grammar author's fault: they mean an upstream
//! phase (analysis, ATN construction, or the left-recursion rewrite)
//! broke its contract. They abort model construction and are surfaced
//! under a distinct error family (G9xxx) so tooling can tell them
//! apart from grammar-content diagnostics.

use std::fmt;

use rill_diagnostic::{Diagnostic, ErrorCode};
use rill_ir::{DecisionId, StateId};

/// Fatal internal-consistency failure during model construction.
#[derive(Clone, Eq, PartialEq, Debug)]
pub enum ModelError {
    /// The lookahead table has no entry for a reachable decision.
    MissingLookahead { decision: DecisionId },
    /// A choice/loop construct is bound to a state carrying no
    /// decision.
    NoDecisionAtState { state: StateId },
    /// A left-recursive alternative reached code generation without
    /// its rewritten form.
    MissingRewrittenAlt { rule: String, alt_num: usize },
}

impl ModelError {
    /// The error code this failure is reported under.
    pub fn code(&self) -> ErrorCode {
        match self {
            ModelError::MissingLookahead { .. } => ErrorCode::G9001,
            ModelError::NoDecisionAtState { .. } => ErrorCode::G9002,
            ModelError::MissingRewrittenAlt { .. } => ErrorCode::G9003,
        }
    }

    /// Convert into a diagnostic for the reporting queue.
    pub fn to_diagnostic(&self) -> Diagnostic {
        Diagnostic::error(self.code()).with_message(self.to_string())
    }
}

impl fmt::Display for ModelError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ModelError::MissingLookahead { decision } => {
                write!(f, "no lookahead computed for decision {decision}")
            }
            ModelError::NoDecisionAtState { state } => {
                write!(f, "state {state} carries no decision")
            }
            ModelError::MissingRewrittenAlt { rule, alt_num } => {
                write!(
                    f,
                    "alternative {alt_num} of left-recursive rule {rule} has no rewritten form"
                )
            }
        }
    }
}

impl std::error::Error for ModelError {}
