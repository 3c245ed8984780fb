//! Grammar-AST boundary types.
//!
//! The grammar front end (file parsing, symbol analysis, ATN
//! construction) owns the real grammar AST. Model construction only
//! needs a narrow slice of it per construct: the bound automaton state,
//! the source position, greediness, and element labels. These types
//! carry exactly that slice.

use crate::{IntervalSet, SourcePos, StateId};

/// A decision-bearing block construct: `( A | B )`, `(...)?`, `(...)*`
/// or `(...)+`.
///
/// `state` is the automaton state the construct was bound to during ATN
/// construction: the block-start state for plain and optional blocks,
/// the loop-back state for star and plus loops.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct BlockAst {
    pub pos: SourcePos,
    pub state: StateId,
    /// False when the quantifier carries a `?` suffix (`(...)*?`).
    pub greedy: bool,
}

impl BlockAst {
    /// Create a greedy block bound to `state`.
    pub fn new(pos: SourcePos, state: StateId) -> Self {
        BlockAst {
            pos,
            state,
            greedy: true,
        }
    }

    /// Mark the block non-greedy.
    #[must_use]
    pub fn non_greedy(mut self) -> Self {
        self.greedy = false;
        self
    }
}

/// A label attached to a rule element: `x=ID`, `xs+=expr`, or a
/// compiler-synthesized tracking label.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct ElementLabel {
    pub name: String,
    /// True for `+=` list labels.
    pub is_list: bool,
    /// True when the compiler synthesized the label (e.g. implicit
    /// token tracking), false for user-authored labels.
    pub implicit: bool,
}

impl ElementLabel {
    /// A user-authored singular label (`x=ID`).
    pub fn explicit(name: impl Into<String>) -> Self {
        ElementLabel {
            name: name.into(),
            is_list: false,
            implicit: false,
        }
    }

    /// A user-authored list label (`xs+=expr`).
    pub fn explicit_list(name: impl Into<String>) -> Self {
        ElementLabel {
            name: name.into(),
            is_list: true,
            implicit: false,
        }
    }

    /// A compiler-synthesized label.
    pub fn synthesized(name: impl Into<String>) -> Self {
        ElementLabel {
            name: name.into(),
            is_list: false,
            implicit: true,
        }
    }
}

/// What a labeled element matches.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub enum ElementKind {
    /// A token reference (`ID`), by token type.
    TokenRef(i32),
    /// An invocation of another parser rule, by rule name.
    RuleRef(String),
    /// A token set (`(A | B)` matched as a set, or a lexer charset).
    Set(IntervalSet),
    /// The wildcard element `.`.
    Wildcard,
}

/// A single labeled rule element as handed over by the grammar walk.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct ElementAst {
    pub pos: SourcePos,
    /// Automaton state of the matched element.
    pub state: StateId,
    pub kind: ElementKind,
    pub label: Option<ElementLabel>,
}

impl ElementAst {
    /// Create an unlabeled element.
    pub fn new(pos: SourcePos, state: StateId, kind: ElementKind) -> Self {
        ElementAst {
            pos,
            state,
            kind,
            label: None,
        }
    }

    /// Attach a label.
    #[must_use]
    pub fn with_label(mut self, label: ElementLabel) -> Self {
        self.label = Some(label);
        self
    }
}
