//! Integer identifiers shared across compiler phases.

/// Identifier for an automaton state.
///
/// States live in an arena owned by the automaton; edges reference
/// targets by id. Ids are dense, assigned in creation order.
pub type StateId = u32;

/// Identifier for a parse decision.
///
/// A decision is an automaton state with more than one outgoing
/// alternative. Decision ids index the lookahead table supplied by the
/// grammar-analysis phase.
pub type DecisionId = u32;
