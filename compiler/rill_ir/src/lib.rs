//! Rill IR - Shared Value Types
//!
//! This crate contains the core data structures shared by every phase of
//! the Rill grammar compiler:
//! - Token intervals and interval sets (the set algebra under lookahead
//!   classification and charset parsing)
//! - Source positions for diagnostics
//! - Token display info for human-readable lookahead tables
//! - The grammar-AST boundary types the model builder consumes
//!
//! # Design Philosophy
//!
//! - **Value types**: everything here is `Clone + Eq + Hash`, compared by
//!   value, with no identity or interior mutability.
//! - **Flatten everything**: automaton states are referenced by `StateId`
//!   indices into an arena, never by ownership pointers. The automaton
//!   is a cyclic graph and id-edges are the only safe representation.

mod ast;
mod ids;
mod interval;
mod pos;
mod token;

pub use ast::{BlockAst, ElementAst, ElementKind, ElementLabel};
pub use ids::{DecisionId, StateId};
pub use interval::{Interval, IntervalSet};
pub use pos::SourcePos;
pub use token::{TokenInfo, EOF_TOKEN, EPSILON_TOKEN, INVALID_TOKEN};
