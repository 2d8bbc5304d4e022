//! The reverse generator: a bounded depth-first search over predecessor configurations, exposed
//! as a lazy `Iterator` so callers can pull accepted tapes one at a time instead of materializing
//! the whole (possibly infinite) search space up front.

use crate::configuration::Configuration;
use crate::rule_table::RuleTable;
use crate::state::MachineState;

/// Yields tapes the machine accepts, discovered by walking backward from `Accept` through
/// predecessor transitions. Explicit `Vec`-backed stack rather than recursion, so depth is
/// bounded by heap, not call stack, and the search is resumable one node at a time.
pub struct Generate<'m, S, I, O> {
    start_state: S,
    max_len: usize,
    stack: Vec<Configuration<'m, S, I, O>>,
}

impl<'m, S, I, O> Generate<'m, S, I, O>
where
    S: Clone + Eq + std::hash::Hash + std::fmt::Debug,
    I: Clone + Eq + std::hash::Hash,
    O: Clone + Eq + std::hash::Hash,
{
    pub(crate) fn new(rules: &'m RuleTable<S, I, O>, start_state: S, max_len: usize) -> Self {
        Self {
            start_state,
            max_len,
            stack: vec![Configuration::accept_root(rules)],
        }
    }
}

impl<'m, S, I, O> Iterator for Generate<'m, S, I, O>
where
    S: Clone + Eq + std::hash::Hash + std::fmt::Debug,
    I: Clone + Eq + std::hash::Hash,
    O: Clone + Eq + std::hash::Hash,
{
    type Item = Vec<I>;

    fn next(&mut self) -> Option<Self::Item> {
        while let Some(config) = self.stack.pop() {
            if config.tape.len() > self.max_len {
                continue;
            }

            // A valid start: the machine's start state, and nothing written to the left of the
            // head yet. The head itself can be anything — the forward parser's own start
            // configuration has the head on the first cell, not a marker.
            let is_initial = matches!(&config.state, MachineState::NonTerminal(s) if *s == self.start_state)
                && config.tape.left_cells().is_empty();

            // Keep expanding even past an initial-looking node: the same configuration can also
            // be reached as an intermediate step of a longer accepted tape via other predecessors.
            let mut children = config.previous_configurations();
            children.reverse();
            self.stack.extend(children);

            // `Output` residue on an otherwise-initial tape means some predecessor wrote a cell
            // that nothing ever restored — not a tape the forward parser could have started from.
            if is_initial {
                if let Some(input) = config.tape.as_input_list() {
                    return Some(input);
                }
            }
        }
        None
    }
}
