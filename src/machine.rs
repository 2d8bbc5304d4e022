//! The public entry point: a linear-bounded Turing machine built from a rule set, offering a
//! forward parser (`parse`) and a reverse tape generator (`generate`).

use crate::configuration::Configuration;
use crate::error::Error;
use crate::generator::Generate;
use crate::rule_table::RuleTable;
use crate::state::MachineState;
use crate::symbol::TapeSymbol;
use crate::transition::Transition;

/// A validated machine: a start state plus a rule set. `S` is the user's state type, `I` the
/// read-only input alphabet, `O` the writable output alphabet.
pub struct Machine<S, I, O> {
    start_state: S,
    rules: RuleTable<S, I, O>,
}

impl<S, I, O> Machine<S, I, O>
where
    S: Clone + Eq + std::hash::Hash + std::fmt::Debug,
    I: Clone + Eq + std::hash::Hash,
    O: Clone + Eq + std::hash::Hash,
{
    /// Builds a machine from its start state and its transitions, failing fast on a duplicate
    /// `(state, read)` key or an invalid boundary-marker move.
    pub fn new(start_state: S, transitions: Vec<Transition<S, I, O>>) -> Result<Self, Error> {
        Ok(Self {
            start_state,
            rules: RuleTable::new(transitions)?,
        })
    }

    /// Runs the forward parser over `input`, returning whether it reaches `Accept`. A tape with
    /// no matching rule anywhere along the way rejects; it is never an error (see
    /// [`crate::error`]).
    pub fn parse(&self, input: Vec<I>) -> bool {
        let mut config = Configuration::start(&self.rules, self.start_state.clone(), input);
        matches!(config.run(), MachineState::Accept)
    }

    /// Runs the forward parser over a full symbol sequence (markers included), dropping anything
    /// that isn't an `Input` cell before parsing — useful for round-tripping a generated tape
    /// back through `parse`.
    pub fn parse_symbols(&self, tape: Vec<TapeSymbol<I, O>>) -> bool {
        let input = tape.into_iter().filter_map(TapeSymbol::into_input).collect();
        self.parse(input)
    }

    /// A lazy, depth-first enumeration of tapes this machine accepts, bounded to tapes with at
    /// most `max_len` written cells. Discovers tapes by walking predecessor transitions backward
    /// from `Accept`, so it terminates exactly when the bounded search space is exhausted —
    /// never earlier, and never later than that.
    pub fn generate(&self, max_len: usize) -> Generate<'_, S, I, O> {
        Generate::new(&self.rules, self.start_state.clone(), max_len)
    }
}
