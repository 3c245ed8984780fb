//! Per-decision lookahead sets.
//!
//! The grammar-analysis phase computes, for every decision, the set of
//! token types that can begin each alternative. This crate only stores
//! the result; it never computes FIRST/FOLLOW sets itself. The table is
//! complete before model construction starts; a missing entry at
//! lookup time is an upstream contract violation, not a grammar error.

use rill_ir::{DecisionId, IntervalSet};
use rustc_hash::FxHashMap;

/// Lookahead for one decision: ordered per-alternative token-interval
/// sets. Index 0 holds alternative 1.
///
/// Immutable once built. Sets may overlap (ambiguous alternatives) or
/// be empty (unreachable or epsilon-only alternatives); both are legal
/// inputs the classifier handles.
#[derive(Clone, Eq, PartialEq, Debug)]
pub struct DecisionLookahead {
    alt_sets: Vec<IntervalSet>,
}

impl DecisionLookahead {
    /// Wrap the per-alternative sets for one decision.
    pub fn new(alt_sets: Vec<IntervalSet>) -> Self {
        DecisionLookahead { alt_sets }
    }

    /// Number of alternatives in the decision.
    pub fn alt_count(&self) -> usize {
        self.alt_sets.len()
    }

    /// The per-alternative sets, index 0 = alternative 1.
    pub fn alt_sets(&self) -> &[IntervalSet] {
        &self.alt_sets
    }

    /// Lookahead set of a 1-based alternative number.
    pub fn alt(&self, alt_num: usize) -> Option<&IntervalSet> {
        alt_num.checked_sub(1).and_then(|i| self.alt_sets.get(i))
    }
}

/// Completed lookahead table, keyed by decision index.
#[derive(Clone, Debug, Default)]
pub struct LookaheadTable {
    by_decision: FxHashMap<DecisionId, DecisionLookahead>,
}

impl LookaheadTable {
    /// Create an empty table.
    pub fn new() -> Self {
        LookaheadTable::default()
    }

    /// Record the lookahead for a decision. Last write wins; the
    /// analysis phase writes each decision exactly once.
    pub fn insert(&mut self, decision: DecisionId, lookahead: DecisionLookahead) {
        self.by_decision.insert(decision, lookahead);
    }

    /// Fetch the lookahead for a decision.
    pub fn get(&self, decision: DecisionId) -> Option<&DecisionLookahead> {
        self.by_decision.get(&decision)
    }

    /// Number of decisions in the table.
    pub fn len(&self) -> usize {
        self.by_decision.len()
    }

    /// Check whether the table is empty.
    pub fn is_empty(&self) -> bool {
        self.by_decision.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn alt_lookup_is_one_based() {
        let look = DecisionLookahead::new(vec![IntervalSet::of(4), IntervalSet::of(5)]);
        assert_eq!(look.alt_count(), 2);
        assert_eq!(look.alt(1), Some(&IntervalSet::of(4)));
        assert_eq!(look.alt(2), Some(&IntervalSet::of(5)));
        assert_eq!(look.alt(0), None);
        assert_eq!(look.alt(3), None);
    }

    #[test]
    fn table_round_trips_by_decision() {
        let mut table = LookaheadTable::new();
        table.insert(3, DecisionLookahead::new(vec![IntervalSet::of(1)]));
        assert_eq!(table.len(), 1);
        assert!(table.get(3).is_some());
        assert!(table.get(0).is_none());
    }
}
