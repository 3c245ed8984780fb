//! Output-model node variants.
//!
//! The output model is a closed set of tagged variants behind small
//! capability traits, not an inheritance hierarchy: shared fields are
//! flattened into each variant's payload, and the renderer reads the
//! fields of whichever variant it walks into.
//!
//! A `Choice` or `Loop` is never constructed without its lookahead
//! already resolved; the builder computes every decision-dependent
//! field before the node exists, and nothing patches nodes after they
//! are attached to a parent.

use rill_ir::{DecisionId, ElementKind, ElementLabel, IntervalSet, SourcePos, StateId, TokenInfo};

use crate::decl::Decl;

/// Capability: the node points at a grammar source position.
pub trait Positioned {
    fn pos(&self) -> SourcePos;
}

/// Capability: the node is bound to an automaton decision.
pub trait DecisionOp {
    fn decision(&self) -> DecisionId;
}

/// Capability: the node carries child operations, appended during
/// construction and frozen afterwards.
pub trait OpContainer {
    fn ops(&self) -> &[SrcOp];
    fn add_op(&mut self, op: SrcOp);
}

/// Any output-model operation the renderer can encounter.
#[derive(Clone, Eq, PartialEq, Debug)]
pub enum SrcOp {
    Choice(Choice),
    Loop(Loop),
    MatchElement(MatchElement),
    Sync(Sync),
    ThrowNoViableAlt(ThrowNoViableAlt),
    ThrowEarlyExit(ThrowEarlyExit),
    Decl(Decl),
}

impl SrcOp {
    /// The decision this op is bound to, for decision-bearing kinds.
    pub fn decision(&self) -> Option<DecisionId> {
        match self {
            SrcOp::Choice(c) => Some(c.decision),
            SrcOp::Loop(l) => Some(l.decision),
            SrcOp::Sync(s) => Some(s.decision),
            SrcOp::ThrowNoViableAlt(t) => Some(t.decision),
            SrcOp::ThrowEarlyExit(t) => Some(t.decision),
            SrcOp::MatchElement(_) | SrcOp::Decl(_) => None,
        }
    }
}

/// The code block generated for one alternative of a choice or loop.
#[derive(Clone, Eq, PartialEq, Debug, Default)]
pub struct CodeBlockForAlt {
    /// 1-based alternative number within the owning decision.
    pub alt_num: usize,
    pub pos: SourcePos,
    /// Ops emitted before the alternative body (label setup, etc.).
    pub preamble: Vec<SrcOp>,
    /// The alternative body.
    pub ops: Vec<SrcOp>,
    /// Local declarations scoped to this alternative.
    pub locals: Vec<Decl>,
}

impl CodeBlockForAlt {
    /// Create an empty block for a 1-based alternative number.
    pub fn new(alt_num: usize, pos: SourcePos) -> Self {
        CodeBlockForAlt {
            alt_num,
            pos,
            ..CodeBlockForAlt::default()
        }
    }
}

impl Positioned for CodeBlockForAlt {
    fn pos(&self) -> SourcePos {
        self.pos
    }
}

impl OpContainer for CodeBlockForAlt {
    fn ops(&self) -> &[SrcOp] {
        &self.ops
    }
    fn add_op(&mut self, op: SrcOp) {
        self.ops.push(op);
    }
}

/// Shape of an alternative/optional block node.
///
/// The `Ll1` kinds are the specialized shapes chosen when the
/// decision's per-alternative lookahead sets are pairwise disjoint;
/// the plain kinds defer the choice to runtime adaptive prediction.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum ChoiceKind {
    AltBlock,
    Ll1AltBlock,
    OptionalBlock,
    Ll1OptionalBlock,
}

impl ChoiceKind {
    /// Check whether this is an LL(1)-specialized shape.
    pub fn is_ll1(&self) -> bool {
        matches!(self, ChoiceKind::Ll1AltBlock | ChoiceKind::Ll1OptionalBlock)
    }
}

/// An alternative block `( A | B | C )` or optional block `(...)?`.
///
/// An optional block is a two-alternative block whose second
/// alternative is implicitly epsilon; it reuses this node verbatim.
#[derive(Clone, Eq, PartialEq, Debug)]
pub struct Choice {
    pub kind: ChoiceKind,
    pub decision: DecisionId,
    pub pos: SourcePos,
    /// Child blocks, one per explicit alternative.
    pub alts: Vec<CodeBlockForAlt>,
    /// Ops emitted before the dispatch (sync points, label setup).
    pub preamble: Vec<SrcOp>,
    /// Per-alternative lookahead display table; LL(1) shapes only.
    /// Index 0 = alternative 1.
    pub alt_look: Option<Vec<Vec<TokenInfo>>>,
    /// Union of every alternative's lookahead: the "expecting" set
    /// rendered into error messages.
    pub expecting: IntervalSet,
    /// The error op raised when no alternative matches.
    pub error: Option<Box<SrcOp>>,
}

impl Positioned for Choice {
    fn pos(&self) -> SourcePos {
        self.pos
    }
}

impl DecisionOp for Choice {
    fn decision(&self) -> DecisionId {
        self.decision
    }
}

impl OpContainer for Choice {
    fn ops(&self) -> &[SrcOp] {
        &self.preamble
    }
    fn add_op(&mut self, op: SrcOp) {
        self.preamble.push(op);
    }
}

/// Shape of a star/plus loop node.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum LoopKind {
    StarBlock,
    Ll1StarSingleAlt,
    PlusBlock,
    Ll1PlusSingleAlt,
}

impl LoopKind {
    /// Check whether this is an LL(1)-specialized shape.
    pub fn is_ll1(&self) -> bool {
        matches!(self, LoopKind::Ll1StarSingleAlt | LoopKind::Ll1PlusSingleAlt)
    }

    /// Check whether this loop requires at least one iteration.
    pub fn is_plus(&self) -> bool {
        matches!(self, LoopKind::PlusBlock | LoopKind::Ll1PlusSingleAlt)
    }
}

/// A star loop `(...)*` or plus loop `(...)+`.
#[derive(Clone, Eq, PartialEq, Debug)]
pub struct Loop {
    pub kind: LoopKind,
    /// The loop decision, carried by the loop-back state.
    pub decision: DecisionId,
    pub pos: SourcePos,
    /// Automaton state entering the loop body.
    pub block_start_state: StateId,
    /// Automaton state of the back edge.
    pub loop_back_state: StateId,
    /// The alternative number that means "stop the loop": 1 for
    /// non-greedy loops, alternative count + 1 for greedy loops.
    pub exit_alt: usize,
    /// Child blocks, one per loop alternative.
    pub alts: Vec<CodeBlockForAlt>,
    /// Ops emitted before the loop dispatch.
    pub preamble: Vec<SrcOp>,
    /// Per-alternative lookahead display table; LL(1) shapes only.
    pub alt_look: Option<Vec<Vec<TokenInfo>>>,
    /// Precomputed "loop continues" token set; LL(1) single-alt shapes
    /// only. Generic shapes consult runtime prediction instead.
    pub loop_expr: Option<IntervalSet>,
    /// Union of every alternative's lookahead.
    pub expecting: IntervalSet,
    /// Ops emitted at the end of every iteration (sync points).
    pub iteration: Vec<SrcOp>,
    /// The error op for loops that must match at least once.
    pub error: Option<Box<SrcOp>>,
}

impl Positioned for Loop {
    fn pos(&self) -> SourcePos {
        self.pos
    }
}

impl DecisionOp for Loop {
    fn decision(&self) -> DecisionId {
        self.decision
    }
}

impl OpContainer for Loop {
    fn ops(&self) -> &[SrcOp] {
        &self.iteration
    }
    fn add_op(&mut self, op: SrcOp) {
        self.iteration.push(op);
    }
}

/// A matched rule element (token, rule invocation, set, or wildcard),
/// carrying the automaton state of the match.
#[derive(Clone, Eq, PartialEq, Debug)]
pub struct MatchElement {
    pub pos: SourcePos,
    pub state: StateId,
    pub kind: ElementKind,
    pub label: Option<ElementLabel>,
}

impl Positioned for MatchElement {
    fn pos(&self) -> SourcePos {
        self.pos
    }
}

/// Mid-rule recovery point: consume input up to a recognized follow
/// token before re-attempting prediction.
///
/// Only attached to generic (non-LL(1)) shapes; disjoint lookahead
/// already guarantees correct prediction.
#[derive(Clone, Eq, PartialEq, Debug)]
pub struct Sync {
    pub decision: DecisionId,
    pub pos: SourcePos,
    pub expecting: IntervalSet,
}

impl Positioned for Sync {
    fn pos(&self) -> SourcePos {
        self.pos
    }
}

impl DecisionOp for Sync {
    fn decision(&self) -> DecisionId {
        self.decision
    }
}

/// Report that a choice had no matching alternative.
///
/// `pos` keeps line and column as distinct fields; both are rendered
/// into the generated throw.
#[derive(Clone, Eq, PartialEq, Debug)]
pub struct ThrowNoViableAlt {
    pub decision: DecisionId,
    pub pos: SourcePos,
    pub expecting: IntervalSet,
}

impl Positioned for ThrowNoViableAlt {
    fn pos(&self) -> SourcePos {
        self.pos
    }
}

impl DecisionOp for ThrowNoViableAlt {
    fn decision(&self) -> DecisionId {
        self.decision
    }
}

/// Report that a `+` loop matched zero iterations.
#[derive(Clone, Eq, PartialEq, Debug)]
pub struct ThrowEarlyExit {
    pub decision: DecisionId,
    pub pos: SourcePos,
    pub expecting: IntervalSet,
}

impl Positioned for ThrowEarlyExit {
    fn pos(&self) -> SourcePos {
        self.pos
    }
}

impl DecisionOp for ThrowEarlyExit {
    fn decision(&self) -> DecisionId {
        self.decision
    }
}
