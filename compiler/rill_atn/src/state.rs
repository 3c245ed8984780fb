//! Automaton states, transitions, and the state arena.

use rill_ir::{DecisionId, IntervalSet, StateId};
use rustc_hash::FxHashMap;
use smallvec::SmallVec;

/// What role a state plays in the automaton.
///
/// Decision-bearing kinds carry the decision index assigned during ATN
/// construction: the block-start state for alternative and optional
/// blocks, the loop-back state for star and plus loops.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum StateKind {
    /// Plain state with no special role.
    Basic,
    /// Entry state of a rule.
    RuleStart,
    /// Accept state of a rule.
    RuleStop,
    /// Start of an alternative or optional block; carries its decision.
    BlockStart { decision: DecisionId },
    /// End of a block, joining all alternatives.
    BlockEnd,
    /// Entry of a star loop (before the first iteration decision).
    StarLoopEntry,
    /// Start of a plus-loop body.
    PlusBlockStart,
    /// Back-edge state of a star or plus loop; carries its decision.
    LoopBack { decision: DecisionId },
}

impl StateKind {
    /// The decision carried by this state, if any.
    pub fn decision(&self) -> Option<DecisionId> {
        match self {
            StateKind::BlockStart { decision } | StateKind::LoopBack { decision } => {
                Some(*decision)
            }
            _ => None,
        }
    }
}

/// What a transition consumes.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub enum TransitionKind {
    /// Consumes nothing.
    Epsilon,
    /// Consumes one token of the given type.
    Atom(i32),
    /// Consumes one token whose type is in the set.
    Set(IntervalSet),
}

/// An edge to another state, by id.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct Transition {
    pub target: StateId,
    pub kind: TransitionKind,
}

impl Transition {
    /// Epsilon edge to `target`.
    pub fn epsilon(target: StateId) -> Self {
        Transition {
            target,
            kind: TransitionKind::Epsilon,
        }
    }

    /// Token edge to `target`.
    pub fn atom(target: StateId, ttype: i32) -> Self {
        Transition {
            target,
            kind: TransitionKind::Atom(ttype),
        }
    }

    /// Set edge to `target`.
    pub fn set(target: StateId, set: IntervalSet) -> Self {
        Transition {
            target,
            kind: TransitionKind::Set(set),
        }
    }
}

/// One automaton state: its id, role, and outgoing edges.
///
/// Most states have one or two outgoing transitions; the `SmallVec`
/// keeps those inline.
#[derive(Clone, Eq, PartialEq, Debug)]
pub struct AtnState {
    pub id: StateId,
    pub kind: StateKind,
    pub transitions: SmallVec<[Transition; 2]>,
}

/// The automaton: a state arena plus a decision-to-state index.
///
/// Read-only once construction hands it over; nothing in model
/// construction mutates states or edges.
#[derive(Clone, Debug, Default)]
pub struct Atn {
    states: Vec<AtnState>,
    decision_states: FxHashMap<DecisionId, StateId>,
}

impl Atn {
    /// Create an empty automaton.
    pub fn new() -> Self {
        Atn::default()
    }

    /// Add a state, returning its id. Ids are dense and assigned in
    /// creation order.
    pub fn add_state(&mut self, kind: StateKind) -> StateId {
        let id = u32::try_from(self.states.len()).unwrap_or_else(|_| {
            // 2^32 states would mean a grammar of absurd size; the
            // front end bounds rule counts long before this.
            panic!("automaton state arena overflow")
        });
        if let Some(decision) = kind.decision() {
            self.decision_states.insert(decision, id);
        }
        self.states.push(AtnState {
            id,
            kind,
            transitions: SmallVec::new(),
        });
        id
    }

    /// Add an outgoing transition to an existing state.
    ///
    /// # Panics
    /// Panics if `from` is not a state in this automaton; edges are
    /// only added during construction, where ids come straight from
    /// `add_state`.
    pub fn add_transition(&mut self, from: StateId, transition: Transition) {
        self.states[from as usize].transitions.push(transition);
    }

    /// Look up a state by id.
    pub fn state(&self, id: StateId) -> Option<&AtnState> {
        self.states.get(id as usize)
    }

    /// All states, in id order.
    pub fn states(&self) -> &[AtnState] {
        &self.states
    }

    /// The decision carried by a state, if any.
    pub fn decision_of(&self, id: StateId) -> Option<DecisionId> {
        self.state(id).and_then(|s| s.kind.decision())
    }

    /// The state carrying a decision, if the decision exists.
    pub fn decision_state(&self, decision: DecisionId) -> Option<StateId> {
        self.decision_states.get(&decision).copied()
    }

    /// Number of states in the arena.
    pub fn len(&self) -> usize {
        self.states.len()
    }

    /// Check whether the automaton has no states.
    pub fn is_empty(&self) -> bool {
        self.states.is_empty()
    }
}
