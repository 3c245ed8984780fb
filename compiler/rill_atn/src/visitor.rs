//! Cycle-safe traversal of automaton states.
//!
//! The automaton is not acyclic: loops and left recursion create real
//! cycles. This module is the single traversal primitive used by every
//! analysis pass; no other component walks the graph itself.

use rill_ir::StateId;
use rustc_hash::FxHashSet;

use crate::{Atn, AtnState};

/// Visit every state reachable from `start`, exactly once each.
///
/// Depth traversal over state → transition → target edges. A state
/// already seen is never re-entered and its callback never re-invoked,
/// which makes the walk safe over arbitrary cycles.
///
/// Visitation order is unspecified beyond "each reachable state exactly
/// once"; callers must not depend on the order.
pub fn walk_states<F>(atn: &Atn, start: StateId, mut on_state: F)
where
    F: FnMut(&AtnState),
{
    let mut visited: FxHashSet<StateId> = FxHashSet::default();
    let mut stack = vec![start];
    while let Some(id) = stack.pop() {
        if !visited.insert(id) {
            continue;
        }
        let Some(state) = atn.state(id) else {
            // dangling edge; construction never produces one, but a
            // traversal must not panic on foreign input
            continue;
        };
        on_state(state);
        // reverse so the walk explores transitions in index order
        for transition in state.transitions.iter().rev() {
            if !visited.contains(&transition.target) {
                stack.push(transition.target);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::{StateKind, Transition};

    fn chain(atn: &mut Atn, n: usize) -> Vec<StateId> {
        (0..n).map(|_| atn.add_state(StateKind::Basic)).collect()
    }

    #[test]
    fn visits_each_reachable_state_once() {
        let mut atn = Atn::new();
        let ids = chain(&mut atn, 4);
        atn.add_transition(ids[0], Transition::epsilon(ids[1]));
        atn.add_transition(ids[0], Transition::epsilon(ids[2]));
        atn.add_transition(ids[1], Transition::epsilon(ids[3]));
        atn.add_transition(ids[2], Transition::epsilon(ids[3]));

        let mut seen = Vec::new();
        walk_states(&atn, ids[0], |s| seen.push(s.id));
        seen.sort_unstable();
        assert_eq!(seen, ids);
    }

    #[test]
    fn two_state_cycle_terminates() {
        let mut atn = Atn::new();
        let ids = chain(&mut atn, 2);
        atn.add_transition(ids[0], Transition::epsilon(ids[1]));
        atn.add_transition(ids[1], Transition::epsilon(ids[0]));

        let mut count = 0;
        walk_states(&atn, ids[0], |_| count += 1);
        assert_eq!(count, 2);
    }

    #[test]
    fn self_loop_visited_once() {
        let mut atn = Atn::new();
        let s = atn.add_state(StateKind::LoopBack { decision: 0 });
        atn.add_transition(s, Transition::epsilon(s));

        let mut count = 0;
        walk_states(&atn, s, |_| count += 1);
        assert_eq!(count, 1);
    }

    #[test]
    fn unreachable_states_are_not_visited() {
        let mut atn = Atn::new();
        let ids = chain(&mut atn, 3);
        atn.add_transition(ids[0], Transition::epsilon(ids[1]));
        // ids[2] has no incoming edge

        let mut seen = Vec::new();
        walk_states(&atn, ids[0], |s| seen.push(s.id));
        seen.sort_unstable();
        assert_eq!(seen, vec![ids[0], ids[1]]);
    }
}
