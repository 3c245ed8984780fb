//! Model-construction tests.
//!
//! Tests are organized into modules by category:
//! - `builder`: Choice/loop construction over synthetic automata and
//!   lookahead tables, covering shape selection, loop exit
//!   alternatives, and internal-consistency failures.
