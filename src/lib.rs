//! A linear-bounded Turing machine with both a forward parser and a reverse tape generator over
//! the same rule set. \
//! [`Machine::parse`] decides whether a given tape is accepted; [`Machine::generate`] enumerates
//! tapes the machine accepts by searching the same rules backward from `Accept`.

pub(crate) mod configuration;
pub mod error;
pub mod generator;
pub mod machine;
pub(crate) mod reverse_index;
pub(crate) mod rule_table;
pub mod state;
pub mod symbol;
pub mod tape;
pub mod transition;

pub use error::Error;
pub use generator::Generate;
pub use machine::Machine;
pub use state::MachineState;
pub use symbol::TapeSymbol;
pub use tape::Tape;
pub use transition::{Move, Transition};
