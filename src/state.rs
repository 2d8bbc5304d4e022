//! Machine states: the two terminal states `Accept`/`Reject`, plus user-carried non-terminal states.

use std::fmt::Display;

/// A machine is always in exactly one of these. `Accept` and `Reject` are terminal: no transition
/// fires from them and [`crate::machine::Machine::parse`]/iteration stops there.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MachineState<S> {
    Accept,
    Reject,
    NonTerminal(S),
}

impl<S> MachineState<S> {
    pub fn is_terminal(&self) -> bool {
        matches!(self, MachineState::Accept | MachineState::Reject)
    }

    pub fn as_non_terminal(&self) -> Option<&S> {
        match self {
            MachineState::NonTerminal(s) => Some(s),
            _ => None,
        }
    }
}

impl<S: Display> Display for MachineState<S> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MachineState::Accept => write!(f, "Accept"),
            MachineState::Reject => write!(f, "Reject"),
            MachineState::NonTerminal(s) => write!(f, "{s}"),
        }
    }
}
