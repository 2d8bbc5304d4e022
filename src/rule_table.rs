//! The rule set a machine is built from: a forward lookup plus a lazily-built, memoized reverse
//! index and a predecessor-lookup cache, so repeated reverse search against the same rule set
//! never redoes work across `Generate` iterator steps.

use std::sync::{Mutex, OnceLock};

use hashbrown::HashMap;

use crate::error::Error;
use crate::reverse_index::ReverseIndex;
use crate::state::MachineState;
use crate::symbol::TapeSymbol;
use crate::transition::{Move, Transition};

type PredecessorKey<S, I, O> = (MachineState<S>, Move, TapeSymbol<I, O>);
type FrontierKey<S> = (MachineState<S>, Move);

/// A validated, immutable rule set. Construction fails fast on a duplicate `(state, read)` key
/// or a shape violation (see [`Transition::new`]); everything built from a `RuleTable` can then
/// assume those invariants hold.
pub struct RuleTable<S, I, O> {
    forward: HashMap<(S, TapeSymbol<I, O>), Transition<S, I, O>>,
    transitions: Vec<Transition<S, I, O>>,
    reverse: OnceLock<ReverseIndex<S, I, O>>,
    predecessor_cache: Mutex<HashMap<PredecessorKey<S, I, O>, Vec<Transition<S, I, O>>>>,
    frontier_cache: Mutex<HashMap<FrontierKey<S>, Vec<Transition<S, I, O>>>>,
}

impl<S, I, O> RuleTable<S, I, O>
where
    S: Clone + Eq + std::hash::Hash + std::fmt::Debug,
    I: Clone + Eq + std::hash::Hash,
    O: Clone + Eq + std::hash::Hash,
{
    pub fn new(transitions: Vec<Transition<S, I, O>>) -> Result<Self, Error> {
        let mut forward = HashMap::with_capacity(transitions.len());
        for t in &transitions {
            let key = t.from_key();
            if forward.insert(key, t.clone()).is_some() {
                let msg = format!("state {:?} already has a rule for read symbol", t.state);
                eprintln!("{msg}");
                return Err(Error::DuplicateTransition(msg));
            }
        }
        Ok(Self {
            forward,
            transitions,
            reverse: OnceLock::new(),
            predecessor_cache: Mutex::new(HashMap::new()),
            frontier_cache: Mutex::new(HashMap::new()),
        })
    }

    /// The rule that fires for `(state, read)`, if any — a missing rule is a normal reject
    /// outcome, not an error (spec §7).
    pub(crate) fn lookup(&self, state: &S, read: &TapeSymbol<I, O>) -> Option<&Transition<S, I, O>> {
        self.forward.get(&(state.clone(), read.clone()))
    }

    fn reverse_index(&self) -> &ReverseIndex<S, I, O> {
        self.reverse.get_or_init(|| {
            let index = ReverseIndex::build(self.transitions.iter());
            #[cfg(feature = "debug_reverse")]
            eprintln!(
                "rule_table: built reverse index over {} transitions",
                self.transitions.len()
            );
            index
        })
    }

    /// Transitions that could have led into `(state, move_to, leave_symbol)`, cached per key so
    /// repeated predecessor queries (one per DFS node revisited through a different path) hit a
    /// hashmap instead of rebuilding the candidate list.
    pub(crate) fn predecessors(
        &self,
        state: &MachineState<S>,
        move_to: Move,
        leave_symbol: &TapeSymbol<I, O>,
    ) -> Vec<Transition<S, I, O>> {
        let key = (state.clone(), move_to, leave_symbol.clone());
        if let Some(hit) = self.predecessor_cache.lock().unwrap().get(&key) {
            return hit.clone();
        }

        let result: Vec<Transition<S, I, O>> =
            self.reverse_index().matching(state, move_to, leave_symbol).to_vec();

        #[cfg(feature = "debug_reverse")]
        eprintln!(
            "rule_table: predecessors(state={:?}, move={:?}) -> {} candidates",
            state,
            move_to,
            result.len()
        );

        self.predecessor_cache.lock().unwrap().insert(key, result.clone());
        result
    }

    /// Transitions that could have led into `(state, move_to)` when the cell the reverse search
    /// would check is still unexplored — i.e. nothing fixes what it must hold yet, so every
    /// transition landing via that move is a live candidate (see
    /// [`crate::configuration::Configuration::previous_configurations`]).
    pub(crate) fn predecessors_at_frontier(
        &self,
        state: &MachineState<S>,
        move_to: Move,
    ) -> Vec<Transition<S, I, O>> {
        let key = (state.clone(), move_to);
        if let Some(hit) = self.frontier_cache.lock().unwrap().get(&key) {
            return hit.clone();
        }

        let result = self.reverse_index().all_matching_move(state, move_to).to_vec();

        self.frontier_cache.lock().unwrap().insert(key, result.clone());
        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::MachineState;

    #[test]
    fn new_rejects_duplicate_keys() {
        let rules = vec![
            Transition::new(0u8, TapeSymbol::Input('a'), None, Move::Right, None).unwrap(),
            Transition::new(0u8, TapeSymbol::Input('a'), Some('b'), Move::Right, None).unwrap(),
        ];
        assert!(matches!(RuleTable::new(rules), Err(Error::DuplicateTransition(_))));
    }

    #[test]
    fn lookup_finds_the_exact_rule() {
        let rules = vec![Transition::new(
            0u8,
            TapeSymbol::Input('a'),
            Some('b'),
            Move::Right,
            Some(MachineState::Accept),
        )
        .unwrap()];
        let table = RuleTable::new(rules).unwrap();
        assert!(table.lookup(&0u8, &TapeSymbol::Input('a')).is_some());
        assert!(table.lookup(&0u8, &TapeSymbol::Input('z')).is_none());
    }

    #[test]
    fn predecessors_are_cached_and_consistent() {
        let rules = vec![Transition::new(
            0u8,
            TapeSymbol::Input('a'),
            Some('b'),
            Move::Right,
            Some(MachineState::Accept),
        )
        .unwrap()];
        let table = RuleTable::new(rules).unwrap();
        let first = table.predecessors(&MachineState::Accept, Move::Right, &TapeSymbol::Output('b'));
        let second = table.predecessors(&MachineState::Accept, Move::Right, &TapeSymbol::Output('b'));
        assert_eq!(first.len(), 1);
        assert_eq!(first, second);
    }

    #[test]
    fn predecessors_at_frontier_ignores_leave_symbol_and_is_cached() {
        let rules = vec![
            Transition::new(0u8, TapeSymbol::Input('a'), Some('x'), Move::Right, Some(MachineState::Accept))
                .unwrap(),
            Transition::new(0u8, TapeSymbol::Input('b'), Some('y'), Move::Right, Some(MachineState::Accept))
                .unwrap(),
            Transition::new(0u8, TapeSymbol::Input('c'), None, Move::Left, Some(MachineState::Accept))
                .unwrap(),
        ];
        let table = RuleTable::new(rules).unwrap();
        let first = table.predecessors_at_frontier(&MachineState::Accept, Move::Right);
        let second = table.predecessors_at_frontier(&MachineState::Accept, Move::Right);
        assert_eq!(first.len(), 2);
        assert_eq!(first, second);
    }
}
