//! Choice/loop model construction.
//!
//! `ModelBuilder` is invoked once per decision construct encountered
//! during the grammar walk (the walk itself is owned by the front
//! end). For each construct it resolves the decision from the bound
//! automaton state, fetches the precomputed lookahead, classifies it,
//! and builds the LL(1)-specialized or generic node with every
//! decision-dependent field resolved up front.
//!
//! The builder holds only read-only context. It is an explicit handle
//! passed alongside construction, not a back-pointer stored inside
//! nodes.

use rill_atn::{Atn, DecisionLookahead, LookaheadTable};
use rill_ir::{BlockAst, DecisionId, ElementAst, StateId, TokenInfo, EOF_TOKEN, INVALID_TOKEN};
use rustc_hash::FxHashMap;
use tracing::trace;

use crate::classify::{classify, Classification};
use crate::error::ModelError;
use crate::nodes::{Choice, ChoiceKind, CodeBlockForAlt, Loop, LoopKind, MatchElement, SrcOp};
use crate::recovery::{sync, throw_early_exit, throw_no_viable_alt};

/// Display names for token types, used to render per-alternative
/// lookahead tables.
#[derive(Clone, Debug, Default)]
pub struct TokenNames {
    names: FxHashMap<i32, String>,
}

impl TokenNames {
    /// Create an empty name table.
    pub fn new() -> Self {
        TokenNames::default()
    }

    /// Register the display name of a token type.
    pub fn insert(&mut self, ttype: i32, name: impl Into<String>) {
        self.names.insert(ttype, name.into());
    }

    /// Display name for a token type, falling back to a synthetic name
    /// for types the grammar never named.
    pub fn name_of(&self, ttype: i32) -> String {
        if let Some(name) = self.names.get(&ttype) {
            return name.clone();
        }
        match ttype {
            EOF_TOKEN => "EOF".to_string(),
            INVALID_TOKEN => "<INVALID>".to_string(),
            _ => format!("T__{ttype}"),
        }
    }

    /// Display info for a token type.
    pub fn info(&self, ttype: i32) -> TokenInfo {
        TokenInfo::new(ttype, self.name_of(ttype))
    }
}

impl FromIterator<(i32, String)> for TokenNames {
    fn from_iter<T: IntoIterator<Item = (i32, String)>>(iter: T) -> Self {
        TokenNames {
            names: iter.into_iter().collect(),
        }
    }
}

/// Read-only construction context for one grammar's model pass.
pub struct ModelBuilder<'a> {
    atn: &'a Atn,
    looks: &'a LookaheadTable,
    tokens: &'a TokenNames,
}

impl<'a> ModelBuilder<'a> {
    /// Create a builder over a grammar's automaton and completed
    /// lookahead table.
    pub fn new(atn: &'a Atn, looks: &'a LookaheadTable, tokens: &'a TokenNames) -> Self {
        ModelBuilder { atn, looks, tokens }
    }

    /// Build the node for an alternative block `( A | B | C )`.
    ///
    /// `alts` are the already-built child blocks, one per explicit
    /// alternative, in grammar order.
    pub fn alt_block(
        &self,
        ast: &BlockAst,
        alts: Vec<CodeBlockForAlt>,
    ) -> Result<Choice, ModelError> {
        self.choice(ast, alts, false)
    }

    /// Build the node for an optional block `(...)?`.
    ///
    /// An optional block reuses the alternative-block machinery: the
    /// decision has one extra implicit epsilon alternative, already
    /// reflected in its lookahead entry.
    pub fn optional_block(
        &self,
        ast: &BlockAst,
        alts: Vec<CodeBlockForAlt>,
    ) -> Result<Choice, ModelError> {
        self.choice(ast, alts, true)
    }

    fn choice(
        &self,
        ast: &BlockAst,
        alts: Vec<CodeBlockForAlt>,
        optional: bool,
    ) -> Result<Choice, ModelError> {
        let decision = self.decision_for(ast.state)?;
        let look = self.lookahead(decision)?;
        let cls = classify(look.alt_sets());
        let kind = match (optional, cls.disjoint) {
            (false, true) => ChoiceKind::Ll1AltBlock,
            (false, false) => ChoiceKind::AltBlock,
            (true, true) => ChoiceKind::Ll1OptionalBlock,
            (true, false) => ChoiceKind::OptionalBlock,
        };
        trace!(decision, ll1 = cls.disjoint, optional, "built choice");

        let mut preamble = Vec::new();
        if !cls.disjoint {
            // prediction can mispredict; give the runtime a
            // resynchronization point before it dispatches
            preamble.push(sync(decision, ast.pos, cls.combined.clone()));
        }
        let error = if optional {
            // the implicit epsilon alternative always matches
            None
        } else {
            Some(Box::new(throw_no_viable_alt(
                decision,
                ast.pos,
                cls.combined.clone(),
            )))
        };

        Ok(Choice {
            kind,
            decision,
            pos: ast.pos,
            alts,
            preamble,
            alt_look: self.alt_look_for(&cls, look),
            expecting: cls.combined,
            error,
        })
    }

    /// Build the node for a star loop `(...)*`.
    pub fn star_loop(&self, ast: &BlockAst, alts: Vec<CodeBlockForAlt>) -> Result<Loop, ModelError> {
        self.build_loop(ast, alts, false)
    }

    /// Build the node for a plus loop `(...)+`.
    pub fn plus_loop(&self, ast: &BlockAst, alts: Vec<CodeBlockForAlt>) -> Result<Loop, ModelError> {
        self.build_loop(ast, alts, true)
    }

    fn build_loop(
        &self,
        ast: &BlockAst,
        alts: Vec<CodeBlockForAlt>,
        plus: bool,
    ) -> Result<Loop, ModelError> {
        // loops are bound to their loop-back state
        let decision = self.decision_for(ast.state)?;
        let look = self.lookahead(decision)?;
        let cls = classify(look.alt_sets());
        let ll1 = cls.disjoint && alts.len() == 1;
        let kind = match (plus, ll1) {
            (false, true) => LoopKind::Ll1StarSingleAlt,
            (false, false) => LoopKind::StarBlock,
            (true, true) => LoopKind::Ll1PlusSingleAlt,
            (true, false) => LoopKind::PlusBlock,
        };
        let exit_alt = if ast.greedy { alts.len() + 1 } else { 1 };
        trace!(decision, ll1, plus, exit_alt, "built loop");

        let loop_expr = if ll1 {
            // "keep looping" is a plain token-set test; no runtime
            // prediction call in the generated code
            Some(look.alt(1).cloned().unwrap_or_default())
        } else {
            None
        };
        let mut iteration = Vec::new();
        if !ll1 {
            iteration.push(sync(decision, ast.pos, cls.combined.clone()));
        }
        let error = if plus {
            Some(Box::new(throw_early_exit(
                decision,
                ast.pos,
                cls.combined.clone(),
            )))
        } else {
            None
        };

        Ok(Loop {
            kind,
            decision,
            pos: ast.pos,
            block_start_state: self.loop_entry(ast.state),
            loop_back_state: ast.state,
            exit_alt,
            alts,
            preamble: Vec::new(),
            alt_look: self.alt_look_for(&cls, look),
            loop_expr,
            expecting: cls.combined,
            iteration,
            error,
        })
    }

    /// Build the op for a matched rule element.
    pub fn match_element(&self, ast: &ElementAst) -> SrcOp {
        SrcOp::MatchElement(MatchElement {
            pos: ast.pos,
            state: ast.state,
            kind: ast.kind.clone(),
            label: ast.label.clone(),
        })
    }

    fn decision_for(&self, state: StateId) -> Result<DecisionId, ModelError> {
        self.atn
            .decision_of(state)
            .ok_or(ModelError::NoDecisionAtState { state })
    }

    fn lookahead(&self, decision: DecisionId) -> Result<&'a DecisionLookahead, ModelError> {
        // the analysis phase is contractually required to have
        // computed lookahead for every reachable decision; a miss here
        // aborts construction rather than guessing a shape
        self.looks
            .get(decision)
            .ok_or(ModelError::MissingLookahead { decision })
    }

    /// The loop-back state's back edge re-enters the block; its target
    /// is the block-entry state.
    fn loop_entry(&self, loop_back: StateId) -> StateId {
        self.atn
            .state(loop_back)
            .and_then(|s| s.transitions.first())
            .map_or(loop_back, |t| t.target)
    }

    /// Per-alternative lookahead display table; LL(1) shapes only.
    fn alt_look_for(
        &self,
        cls: &Classification,
        look: &DecisionLookahead,
    ) -> Option<Vec<Vec<TokenInfo>>> {
        if !cls.disjoint {
            return None;
        }
        Some(
            look.alt_sets()
                .iter()
                .map(|set| set.values().map(|t| self.tokens.info(t)).collect())
                .collect(),
        )
    }
}
