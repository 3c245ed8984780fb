//! Error-recovery operation construction.
//!
//! Three node kinds, each bound to a decision's combined expected set
//! and the line/column of the originating construct. They are attached
//! as child ops of the owning choice/loop by the builder, never handed
//! out free-standing to the renderer.
//!
//! Line and column travel as distinct `SourcePos` fields end to end;
//! neither ever overwrites the other.

use rill_ir::{DecisionId, IntervalSet, SourcePos};

use crate::nodes::{SrcOp, Sync, ThrowEarlyExit, ThrowNoViableAlt};

/// The throw raised when a choice has no matching alternative.
pub fn throw_no_viable_alt(decision: DecisionId, pos: SourcePos, expecting: IntervalSet) -> SrcOp {
    SrcOp::ThrowNoViableAlt(ThrowNoViableAlt {
        decision,
        pos,
        expecting,
    })
}

/// The throw raised when a `+` loop matched zero iterations.
pub fn throw_early_exit(decision: DecisionId, pos: SourcePos, expecting: IntervalSet) -> SrcOp {
    SrcOp::ThrowEarlyExit(ThrowEarlyExit {
        decision,
        pos,
        expecting,
    })
}

/// A mid-rule resynchronization point.
///
/// Only meaningful on generic shapes; the builder never attaches one
/// to an LL(1)-specialized node.
pub fn sync(decision: DecisionId, pos: SourcePos, expecting: IntervalSet) -> SrcOp {
    SrcOp::Sync(Sync {
        decision,
        pos,
        expecting,
    })
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn recovery_ops_carry_decision_and_position() {
        let pos = SourcePos::new(12, 5);
        let expecting = IntervalSet::of_range(4, 6);

        let op = throw_no_viable_alt(3, pos, expecting.clone());
        let SrcOp::ThrowNoViableAlt(t) = op else {
            panic!("wrong variant");
        };
        assert_eq!(t.decision, 3);
        assert_eq!(t.pos.line, 12);
        assert_eq!(t.pos.col, 5);
        assert_eq!(t.expecting, expecting);
    }

    #[test]
    fn early_exit_and_sync_share_the_contract() {
        let pos = SourcePos::new(2, 9);
        let expecting = IntervalSet::of(7);

        let SrcOp::ThrowEarlyExit(t) = throw_early_exit(1, pos, expecting.clone()) else {
            panic!("wrong variant");
        };
        assert_eq!((t.decision, t.pos, t.expecting), (1, pos, expecting.clone()));

        let SrcOp::Sync(s) = sync(1, pos, expecting.clone()) else {
            panic!("wrong variant");
        };
        assert_eq!((s.decision, s.pos, s.expecting), (1, pos, expecting));
    }
}
