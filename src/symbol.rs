//! Tape symbols. \
//! A cell holds either a boundary marker, a read-only input symbol, or a writable output symbol.
//! Input and output are disjoint *kinds* even if `I` and `O` happen to be the same Rust type.

use std::fmt::Display;

/// One tape cell. \
/// `LeftEndMarker`/`RightEndMarker` are fixed sentinels, never written. `Input` is read-only:
/// a transition can read it but can never produce one (see [`crate::transition::Transition::write`]).
/// `Output` is the only kind a transition may write.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TapeSymbol<I, O> {
    LeftEndMarker,
    RightEndMarker,
    Input(I),
    Output(O),
}

impl<I, O> TapeSymbol<I, O> {
    /// True for either boundary marker.
    pub fn is_marker(&self) -> bool {
        matches!(self, TapeSymbol::LeftEndMarker | TapeSymbol::RightEndMarker)
    }

    pub fn as_input(&self) -> Option<&I> {
        match self {
            TapeSymbol::Input(i) => Some(i),
            _ => None,
        }
    }

    pub fn as_output(&self) -> Option<&O> {
        match self {
            TapeSymbol::Output(o) => Some(o),
            _ => None,
        }
    }

    pub fn into_input(self) -> Option<I> {
        match self {
            TapeSymbol::Input(i) => Some(i),
            _ => None,
        }
    }
}

impl<I: Display, O: Display> Display for TapeSymbol<I, O> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TapeSymbol::LeftEndMarker => write!(f, "["),
            TapeSymbol::RightEndMarker => write!(f, "]"),
            TapeSymbol::Input(i) => write!(f, "{i}"),
            TapeSymbol::Output(o) => write!(f, "{o}"),
        }
    }
}
