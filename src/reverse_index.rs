//! A derived index over a rule set, keyed the opposite way from the rule set itself: given where
//! a transition *lands* (`next_state`, the move it made, the symbol it left behind), find every
//! transition that could have produced that landing. This is what makes predecessor search in
//! [`crate::configuration::Configuration::previous_configurations`] O(1) amortized instead of a
//! linear scan of every rule per step.

use hashbrown::HashMap;

use crate::state::MachineState;
use crate::symbol::TapeSymbol;
use crate::transition::{Move, Transition};

/// Transitions sharing a `(next_state, move_to)` pair, further bucketed by the symbol they leave
/// under the head — so a lookup that already knows the current head symbol skips straight past
/// transitions that could never have left it there. `all` additionally serves queries at the
/// unexplored frontier of a reverse search, where there is no fixed symbol yet to filter by.
#[derive(Debug, Default)]
pub(crate) struct ByLeaveSymbol<S, I, O> {
    grouped: HashMap<TapeSymbol<I, O>, Vec<Transition<S, I, O>>>,
    all: Vec<Transition<S, I, O>>,
}

impl<S, I, O> ByLeaveSymbol<S, I, O>
where
    S: Clone + Eq + std::hash::Hash,
    I: Clone + Eq + std::hash::Hash,
    O: Clone + Eq + std::hash::Hash,
{
    fn insert(&mut self, t: Transition<S, I, O>) {
        self.grouped
            .entry(t.leave_symbol())
            .or_default()
            .push(t.clone());
        self.all.push(t);
    }

    /// Transitions known to leave exactly `symbol` under the head.
    pub(crate) fn matching(&self, symbol: &TapeSymbol<I, O>) -> &[Transition<S, I, O>] {
        self.grouped.get(symbol).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Every transition in this bucket, unfiltered.
    pub(crate) fn all(&self) -> &[Transition<S, I, O>] {
        &self.all
    }
}

/// The full reverse index: `next_state -> {Left, Right, Hold}`.
#[derive(Debug, Default)]
pub(crate) struct ReverseIndex<S, I, O> {
    by_next_state: HashMap<MachineState<S>, PerMove<S, I, O>>,
}

#[derive(Debug, Default)]
struct PerMove<S, I, O> {
    left: ByLeaveSymbol<S, I, O>,
    right: ByLeaveSymbol<S, I, O>,
    hold: ByLeaveSymbol<S, I, O>,
}

impl<S, I, O> ReverseIndex<S, I, O>
where
    S: Clone + Eq + std::hash::Hash,
    I: Clone + Eq + std::hash::Hash,
    O: Clone + Eq + std::hash::Hash,
{
    pub(crate) fn build<'t>(transitions: impl Iterator<Item = &'t Transition<S, I, O>>) -> Self
    where
        S: 't,
        I: 't,
        O: 't,
    {
        let mut index = ReverseIndex {
            by_next_state: HashMap::new(),
        };
        for t in transitions {
            let bucket = index.by_next_state.entry(t.next_state()).or_default();
            let by_move = match t.move_to {
                Move::Left => &mut bucket.left,
                Move::Right => &mut bucket.right,
                Move::Hold => &mut bucket.hold,
            };
            by_move.insert(t.clone());
        }
        index
    }

    fn per_move(&self, state: &MachineState<S>) -> Option<&PerMove<S, I, O>> {
        self.by_next_state.get(state)
    }

    /// Transitions that land in `state` via `move_to` and leave `leave_symbol` under the head.
    pub(crate) fn matching(
        &self,
        state: &MachineState<S>,
        move_to: Move,
        leave_symbol: &TapeSymbol<I, O>,
    ) -> &[Transition<S, I, O>] {
        let Some(bucket) = self.per_move(state) else {
            return &[];
        };
        let by_move = match move_to {
            Move::Left => &bucket.left,
            Move::Right => &bucket.right,
            Move::Hold => &bucket.hold,
        };
        by_move.matching(leave_symbol)
    }

    /// Every transition landing in `state` via `move_to`, regardless of leave symbol — used when
    /// the reverse search is at its unexplored frontier and nothing constrains the symbol yet.
    pub(crate) fn all_matching_move(&self, state: &MachineState<S>, move_to: Move) -> &[Transition<S, I, O>] {
        let Some(bucket) = self.per_move(state) else {
            return &[];
        };
        let by_move = match move_to {
            Move::Left => &bucket.left,
            Move::Right => &bucket.right,
            Move::Hold => &bucket.hold,
        };
        by_move.all()
    }
}
