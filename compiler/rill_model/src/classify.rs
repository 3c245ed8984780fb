//! Lookahead classification.
//!
//! The single question that decides a decision's code shape: are the
//! per-alternative lookahead sets pairwise disjoint? If yes, one token
//! of lookahead resolves the decision (LL(1)); if not, the generated
//! code must call runtime adaptive prediction.

use rill_ir::IntervalSet;

/// Result of classifying one decision's lookahead.
#[derive(Clone, Eq, PartialEq, Debug)]
pub struct Classification {
    /// True iff no two distinct alternatives' sets intersect.
    pub disjoint: bool,
    /// Union of all alternatives' sets: the "expecting" set used in
    /// generated error messages.
    pub combined: IntervalSet,
}

/// Classify a decision from its ordered per-alternative lookahead sets.
///
/// Pure function of its input. Empty sets are legal (epsilon-only or
/// unreachable alternatives) and never cause a false non-disjoint
/// result; an empty set intersects nothing.
pub fn classify(alt_sets: &[IntervalSet]) -> Classification {
    let mut disjoint = true;
    let mut combined = IntervalSet::new();
    for (i, set) in alt_sets.iter().enumerate() {
        if disjoint {
            for other in &alt_sets[i + 1..] {
                if set.intersects(other) {
                    disjoint = false;
                    break;
                }
            }
        }
        combined.union_with(set);
    }
    Classification { disjoint, combined }
}
