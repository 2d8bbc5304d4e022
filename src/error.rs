//! Construction-time failures. Everything else (a forward parse with no matching rule, a
//! reverse search that prunes on tape length) is a normal, non-error outcome — see spec §7.

use std::fmt::Display;

/// Fail-fast errors raised while building a [`crate::rule_table::RuleTable`]/
/// [`crate::machine::Machine`]. There is nothing to recover: the caller passed an
/// inconsistent rule set and construction simply does not produce a `Machine`.
#[derive(Debug)]
pub enum Error {
    /// Two transitions shared the same `(state, read_symbol)` key.
    DuplicateTransition(String),
    /// A `FromLeftEnd`/`FromRightEnd` transition carried a move the marker does not allow
    /// (see spec §3: `FromLeftEnd` moves `{Right, Hold}`, `FromRightEnd` moves `{Left, Hold}`).
    InvalidTransitionShape(String),
}

impl std::error::Error for Error {}

impl Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Error::DuplicateTransition(msg) => write!(f, "duplicate transition: {msg}"),
            Error::InvalidTransitionShape(msg) => write!(f, "invalid transition shape: {msg}"),
        }
    }
}
