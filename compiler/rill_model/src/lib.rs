//! Rill Model - Output-Model Construction
//!
//! This crate is the heart of the grammar compiler: it turns analyzed
//! grammar constructs plus the decision automaton into the
//! target-language-agnostic output model that template rendering
//! consumes. It contains:
//! - the lookahead classifier deciding LL(1) vs runtime-adaptive shapes
//! - the choice/loop builder producing `Choice`/`Loop` nodes per
//!   grammar decision construct
//! - the error-recovery operation builders (`Sync`, no-viable-alt,
//!   early-exit)
//! - the left-recursion alternative metadata threaded through
//!   precedence-climbing rewrites
//! - the charset parse state machine for lexer set literals
//! - the declaration/label model behind generated context accessors
//! - the generated-file root carrying rule models and the serialized
//!   automaton payload
//!
//! # Construction discipline
//!
//! Model construction is a single synchronous top-to-bottom pass. A
//! node's decision-dependent fields are fully resolved before the node
//! is attached to its parent; nothing revisits or patches nodes after
//! attachment. The only mutation surface is the append-only child
//! lists (`preamble`, `ops`, `locals`, `iteration`) during
//! construction.

pub mod builder;
pub mod charset;
mod classify;
mod decl;
mod error;
mod file;
mod left_recursion;
mod nodes;
mod recovery;

#[cfg(test)]
mod tests;

pub use builder::{ModelBuilder, TokenNames};
pub use charset::{CharSetParseMode, CharSetParseState, CharSetParser, SetElement, UnicodeProperties, MAX_CODE_POINT};
pub use classify::{classify, Classification};
pub use decl::{context_type_name, decl_for_element, Decl, DeclFlags, DeclSignature};
pub use error::ModelError;
pub use file::{GeneratedFile, RuleFunction};
pub use left_recursion::{LeftRecursiveRule, LeftRecursiveRuleAltInfo};
pub use nodes::{
    Choice, ChoiceKind, CodeBlockForAlt, DecisionOp, Loop, LoopKind, MatchElement, OpContainer,
    Positioned, SrcOp, Sync, ThrowEarlyExit, ThrowNoViableAlt,
};
pub use recovery::{sync, throw_early_exit, throw_no_viable_alt};
