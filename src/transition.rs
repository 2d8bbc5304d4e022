//! A single rule: `(state, read_symbol) -> (write?, move, next_state?)`.

use crate::error::Error;
use crate::state::MachineState;
use crate::symbol::TapeSymbol;

/// Head motion after a transition fires.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Move {
    Left,
    Right,
    Hold,
}

/// One rule. Identified by `(state, read)`; `write`/`move_to`/`change_state` describe the `to`
/// half. `write` is `Option<O>` rather than `Option<TapeSymbol<I, O>>` on purpose: the type
/// system is what makes "a transition can never write an `Input`" true, not a runtime check
/// (see DESIGN.md, Open Question resolution 4).
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Transition<S, I, O> {
    pub state: S,
    pub read: TapeSymbol<I, O>,
    pub write: Option<O>,
    pub move_to: Move,
    /// Absent means "stay in `state`".
    pub change_state: Option<MachineState<S>>,
}

impl<S, I, O> Transition<S, I, O>
where
    S: Clone,
    I: Clone,
    O: Clone,
{
    /// Builds a transition, validating the `FromLeftEnd`/`FromRightEnd` move restrictions from
    /// spec §3. `FromMiddle` transitions (any non-marker read) accept any move.
    pub fn new(
        state: S,
        read: TapeSymbol<I, O>,
        write: Option<O>,
        move_to: Move,
        change_state: Option<MachineState<S>>,
    ) -> Result<Self, Error>
    where
        S: std::fmt::Debug,
    {
        match read {
            TapeSymbol::LeftEndMarker if !matches!(move_to, Move::Right | Move::Hold) => {
                let msg = format!(
                    "FromLeftEnd transition for state {state:?} must move Right or Hold, got {move_to:?}"
                );
                eprintln!("{msg}");
                return Err(Error::InvalidTransitionShape(msg));
            }
            TapeSymbol::RightEndMarker if !matches!(move_to, Move::Left | Move::Hold) => {
                let msg = format!(
                    "FromRightEnd transition for state {state:?} must move Left or Hold, got {move_to:?}"
                );
                eprintln!("{msg}");
                return Err(Error::InvalidTransitionShape(msg));
            }
            _ => {}
        }

        Ok(Self {
            state,
            read,
            write,
            move_to,
            change_state,
        })
    }

    /// The key this transition is filed under in a [`crate::rule_table::RuleTable`].
    pub fn from_key(&self) -> (S, TapeSymbol<I, O>) {
        (self.state.clone(), self.read.clone())
    }

    /// The symbol left under the head once this transition fires: `write` if present, else the
    /// unchanged `read` (an unwritten cell never changes kind — Open Question resolution 2).
    pub fn leave_symbol(&self) -> TapeSymbol<I, O> {
        match &self.write {
            Some(o) => TapeSymbol::Output(o.clone()),
            None => self.read.clone(),
        }
    }

    /// The state this transition lands in.
    pub fn next_state(&self) -> MachineState<S> {
        self.change_state
            .clone()
            .unwrap_or_else(|| MachineState::NonTerminal(self.state.clone()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_left_end_rejects_left_move() {
        let t = Transition::<u8, u8, u8>::new(
            0,
            TapeSymbol::LeftEndMarker,
            None,
            Move::Left,
            Some(MachineState::Accept),
        );
        assert!(matches!(t, Err(Error::InvalidTransitionShape(_))));
    }

    #[test]
    fn from_right_end_allows_hold() {
        let t = Transition::<u8, u8, u8>::new(
            0,
            TapeSymbol::RightEndMarker,
            None,
            Move::Hold,
            Some(MachineState::Accept),
        );
        assert!(t.is_ok());
    }

    #[test]
    fn leave_symbol_falls_back_to_read_when_unwritten() {
        let t = Transition::<u8, char, char>::new(
            0,
            TapeSymbol::Input('a'),
            None,
            Move::Right,
            None,
        )
        .unwrap();
        assert_eq!(t.leave_symbol(), TapeSymbol::Input('a'));
    }

    #[test]
    fn leave_symbol_is_output_when_written() {
        let t = Transition::<u8, char, char>::new(
            0,
            TapeSymbol::Input('a'),
            Some('b'),
            Move::Right,
            None,
        )
        .unwrap();
        assert_eq!(t.leave_symbol(), TapeSymbol::Output('b'));
    }
}
