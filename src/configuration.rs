//! A configuration: the machine's state plus its tape, at one instant. \
//! `step`/`run` drive the forward parser. `previous_configurations` drives the reverse
//! generator by undoing one transition at a time.

use crate::rule_table::RuleTable;
use crate::state::MachineState;
use crate::symbol::TapeSymbol;
use crate::tape::Tape;
use crate::transition::Move;

/// A `(state, tape)` pair. Forward stepping is a thin wrapper around [`RuleTable::lookup`];
/// reverse stepping is the interesting direction and lives here rather than on `Tape` because
/// it needs both the rule table and the transition's move to decide how to undo it.
pub struct Configuration<'m, S, I, O> {
    rules: &'m RuleTable<S, I, O>,
    pub state: MachineState<S>,
    pub tape: Tape<I, O>,
}

impl<'m, S, I, O> Configuration<'m, S, I, O>
where
    S: Clone + Eq + std::hash::Hash + std::fmt::Debug,
    I: Clone + Eq + std::hash::Hash,
    O: Clone + Eq + std::hash::Hash,
{
    pub fn new(rules: &'m RuleTable<S, I, O>, state: S, tape: Tape<I, O>) -> Self {
        Self {
            rules,
            state: MachineState::NonTerminal(state),
            tape,
        }
    }

    pub fn start(rules: &'m RuleTable<S, I, O>, state: S, cells: Vec<I>) -> Self {
        Self::new(rules, state, Tape::bounded_from_input(cells))
    }

    /// The reverse search's root: the accepting configuration itself, tape unbounded. Every
    /// generated tape is discovered by walking predecessors back from here.
    pub(crate) fn accept_root(rules: &'m RuleTable<S, I, O>) -> Self {
        Self {
            rules,
            state: MachineState::Accept,
            tape: Tape::empty_unbounded(),
        }
    }

    /// Applies the single matching transition, if any. Returns `false` (and leaves `self`
    /// unchanged) when no rule matches or the machine is already terminal — both normal reject
    /// outcomes, never an error (spec §7).
    pub fn step(&mut self) -> bool {
        let MachineState::NonTerminal(current) = &self.state else {
            return false;
        };
        let Some(transition) = self.rules.lookup(current, &self.tape.head()) else {
            return false;
        };
        let transition = transition.clone();

        if let Some(value) = transition.write.clone() {
            self.tape.write(value);
        }
        match transition.move_to {
            Move::Left => self.tape.move_left(),
            Move::Right => self.tape.move_right(),
            Move::Hold => {}
        }
        self.state = transition.next_state();
        true
    }

    /// Runs to completion: steps until terminal or stuck. Returns the terminal state, or the
    /// last non-terminal state reached if no rule matched (treated as `Reject` by the parser).
    pub fn run(&mut self) -> MachineState<S> {
        while self.step() {}
        match &self.state {
            MachineState::NonTerminal(_) => MachineState::Reject,
            terminal => terminal.clone(),
        }
    }

    /// Every configuration that could have stepped into `self` in one transition. \
    /// Undoing a transition with move `m` means undoing the *head motion* `m` caused: a
    /// transition that moved `Right` is undone by moving the cursor back `Left`, and vice versa
    /// (`Hold` undoes to nothing). What constrains which transitions qualify differs by move,
    /// though, because a `Right` move pushes the symbol it left behind onto the *left* stack —
    /// that pushed value, not the resulting head, is the transition's `leave_symbol`. So undoing
    /// `Right` means tentatively `move_left()`-ing first and reading the popped value back off;
    /// `Hold` never moved anything, so its leave symbol is simply the current head. When the
    /// stack being popped from was empty, nothing fixes what the cell must have held yet — the
    /// reverse search is at its unexplored frontier — so every transition landing via that move
    /// is a live candidate rather than being filtered by a symbol nothing constrains. \
    /// A move can also be ruled out before any of that: popping the *other* stack (or falling
    /// back to its marker) can never produce the opposite marker as the new head, so a `Right`
    /// move never lands with `LeftEndMarker` under the head and a `Left` move never lands with
    /// `RightEndMarker` — a head already sitting on that marker has no predecessor via that move
    /// at all, and undoing it anyway would tentatively no-op and loop the search on itself.
    pub fn previous_configurations(&self) -> Vec<Configuration<'m, S, I, O>> {
        let mut out = Vec::new();

        let hold_leave_symbol = self.tape.head();
        for transition in self.rules.predecessors(&self.state, Move::Hold, &hold_leave_symbol) {
            let mut tape = self.tape.clone();
            tape.set_head(transition.read.clone());
            out.push(Configuration {
                rules: self.rules,
                state: MachineState::NonTerminal(transition.state.clone()),
                tape,
            });
        }

        if self.tape.head() != TapeSymbol::LeftEndMarker {
            self.undo_directional_move(Move::Right, self.tape.left_is_empty(), Tape::move_left, &mut out);
        }
        if self.tape.head() != TapeSymbol::RightEndMarker {
            self.undo_directional_move(Move::Left, self.tape.right_is_empty(), Tape::move_right, &mut out);
        }

        out
    }

    fn undo_directional_move(
        &self,
        forward_move: Move,
        at_frontier: bool,
        undo: fn(&mut Tape<I, O>),
        out: &mut Vec<Configuration<'m, S, I, O>>,
    ) {
        let mut tape = self.tape.clone();
        undo(&mut tape);
        let candidates = if at_frontier {
            self.rules.predecessors_at_frontier(&self.state, forward_move)
        } else {
            self.rules.predecessors(&self.state, forward_move, &tape.head())
        };
        for transition in candidates {
            let mut tape = tape.clone();
            tape.set_head(transition.read.clone());
            out.push(Configuration {
                rules: self.rules,
                state: MachineState::NonTerminal(transition.state.clone()),
                tape,
            });
        }
    }
}
