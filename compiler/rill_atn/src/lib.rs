//! Rill ATN - Decision Automaton
//!
//! The automaton ("ATN") is the graph of states and transitions that
//! represents every token sequence a grammar rule can match. ATN
//! construction and lookahead computation happen upstream; this crate
//! holds the read-only graph they produce, plus:
//! - the cycle-safe graph visitor every analysis pass traverses with
//! - the per-decision lookahead table the model builder classifies from
//! - the opaque serialized-automaton payload carried into generated files
//!
//! # Design
//!
//! The automaton is a genuinely cyclic graph (loops, left recursion).
//! States live in a `Vec` arena indexed by `StateId`; transitions
//! reference target ids, never own states. The visitor's visited-id set
//! is the only cycle-breaking mechanism in the workspace.

mod lookahead;
mod serialized;
mod state;
pub mod visitor;

pub use lookahead::{DecisionLookahead, LookaheadTable};
pub use serialized::SerializedAtn;
pub use state::{Atn, AtnState, StateKind, Transition, TransitionKind};
pub use visitor::walk_states;
