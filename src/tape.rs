//! The tape: a persistent, two-stack cursor over `TapeSymbol`s. \
//! `left` holds every written cell strictly left of the head, in natural left-to-right order,
//! with the cell adjacent to the head last. `right` holds every written cell strictly right of
//! the head, also with the adjacent cell last (so naturally-ordered reading needs `.rev()`).
//! Both `move_left`/`move_right` are then a pop off one stack and a push onto the other —
//! O(1), no shifting. The two boundary markers are never stored in `left`/`right`; they only
//! ever appear as the head, which is what keeps a move into virgin territory a clean pop into
//! an empty stack rather than a marker leaking into tracked content.

use crate::symbol::TapeSymbol;

/// A linear-bounded tape: `[LeftEndMarker] <written cells> [RightEndMarker]`, with a head that
/// can sit on a written cell or directly on either marker.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tape<I, O> {
    left: Vec<TapeSymbol<I, O>>,
    head: Option<TapeSymbol<I, O>>,
    right: Vec<TapeSymbol<I, O>>,
}

impl<I, O> Tape<I, O>
where
    I: Clone + PartialEq,
    O: Clone + PartialEq,
{
    /// A tape pre-loaded with `cells` as `Input` symbols, head parked at the left marker's
    /// neighbour: the first cell, or the right marker if `cells` is empty (the forward-parse
    /// start configuration from spec §4.1).
    pub fn bounded_from_input(cells: Vec<I>) -> Self {
        let mut cells = cells.into_iter();
        let Some(first) = cells.next() else {
            return Self {
                left: Vec::new(),
                head: Some(TapeSymbol::RightEndMarker),
                right: Vec::new(),
            };
        };
        let right: Vec<TapeSymbol<I, O>> = cells.rev().map(TapeSymbol::Input).collect();
        Self {
            left: Vec::new(),
            head: Some(TapeSymbol::Input(first)),
            right,
        }
    }

    /// An empty tape with no cells at all, head parked at the right marker (the reverse-search
    /// start configuration: the accepting configuration before anything has been reconstructed).
    pub fn empty_unbounded() -> Self {
        Self {
            left: Vec::new(),
            head: Some(TapeSymbol::RightEndMarker),
            right: Vec::new(),
        }
    }

    /// The symbol under the head. Always `Some` once constructed through the constructors above;
    /// only `None` transiently inside `move_left`/`move_right` during a swap, never observable.
    pub fn head(&self) -> TapeSymbol<I, O> {
        self.head.clone().expect("tape head invariant violated")
    }

    /// Written cells strictly left of the head, in natural left-to-right order.
    pub fn left_cells(&self) -> &[TapeSymbol<I, O>] {
        &self.left
    }

    /// Written cells strictly right of the head, in natural left-to-right order.
    pub fn right_cells(&self) -> Vec<TapeSymbol<I, O>> {
        self.right.iter().rev().cloned().collect()
    }

    /// Whether anything has been written strictly left of the head — the cheap check behind
    /// [`Tape::left_cells`] for callers that only need to know emptiness.
    pub(crate) fn left_is_empty(&self) -> bool {
        self.left.is_empty()
    }

    /// Whether anything has been written strictly right of the head (mirror of
    /// [`Tape::left_is_empty`]).
    pub(crate) fn right_is_empty(&self) -> bool {
        self.right.is_empty()
    }

    /// Number of written cells (markers not counted).
    pub fn len(&self) -> usize {
        let head_counts = !self.head().is_marker() as usize;
        self.left.len() + self.right.len() + head_counts
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Writes an `Output` symbol under the head. The public write surface: callers can never
    /// place an `Input` or a marker this way (see [`crate::transition::Transition::write`]).
    pub fn write(&mut self, value: O) {
        self.head = Some(TapeSymbol::Output(value));
    }

    /// Crate-internal: places an arbitrary symbol (including `Input`) under the head, used only
    /// when the reverse generator reconstructs the pre-transition symbol a step's `read` names —
    /// see [`crate::configuration::Configuration::previous_configurations`].
    pub(crate) fn set_head(&mut self, symbol: TapeSymbol<I, O>) {
        self.head = Some(symbol);
    }

    /// Moves the head one cell left. If the head is already on the left marker this is a no-op
    /// (callers validate a move is legal before calling, same as the forward parser does for
    /// `FromLeftEnd` rules). The marker is never pushed onto `right` as it moves away — only real
    /// written cells are tracked, so a move into an empty stack correctly surfaces a marker.
    pub fn move_left(&mut self) {
        if self.head() == TapeSymbol::LeftEndMarker {
            return;
        }
        let current = self.head.take().expect("tape head invariant violated");
        if current != TapeSymbol::RightEndMarker {
            self.right.push(current);
        }
        self.head = Some(self.left.pop().unwrap_or(TapeSymbol::LeftEndMarker));
    }

    /// Moves the head one cell right (mirror of [`Tape::move_left`]).
    pub fn move_right(&mut self) {
        if self.head() == TapeSymbol::RightEndMarker {
            return;
        }
        let current = self.head.take().expect("tape head invariant violated");
        if current != TapeSymbol::LeftEndMarker {
            self.left.push(current);
        }
        self.head = Some(self.right.pop().unwrap_or(TapeSymbol::RightEndMarker));
    }

    /// The full tape, markers included, left to right — for diagnostics and for feeding a
    /// generated tape back into [`crate::machine::Machine::parse_symbols`]. Both markers are
    /// always exactly one cell, at the very ends; the head itself only contributes a middle
    /// entry when it isn't currently sitting on one of them, so a head parked on a marker
    /// doesn't double it up.
    pub fn to_symbols(&self) -> Vec<TapeSymbol<I, O>> {
        let mut out = Vec::with_capacity(self.left.len() + self.right.len() + 3);
        out.push(TapeSymbol::LeftEndMarker);
        out.extend(self.left.iter().cloned());
        let head = self.head();
        if !head.is_marker() {
            out.push(head);
        }
        out.extend(self.right.iter().rev().cloned());
        out.push(TapeSymbol::RightEndMarker);
        out
    }

    /// The tape's `Input` cells only, in left-to-right order. Output cells and markers are
    /// dropped — callers that need the full symbol sequence should use `to_symbols()` instead.
    pub fn to_input_list(&self) -> Vec<I> {
        self.to_symbols()
            .into_iter()
            .filter_map(|s| s.into_input())
            .collect()
    }

    /// The tape's written cells projected to input values, but only if every one of them is
    /// still `Input` — a cell left as `Output` means some transition wrote to it and nothing
    /// ever restored it, so the tape this traces back to cannot have been a genuine start tape.
    pub fn as_input_list(&self) -> Option<Vec<I>> {
        let mut out = Vec::with_capacity(self.left.len() + self.right.len());
        for symbol in self.to_symbols() {
            match symbol {
                TapeSymbol::Input(i) => out.push(i),
                TapeSymbol::Output(_) => return None,
                TapeSymbol::LeftEndMarker | TapeSymbol::RightEndMarker => {}
            }
        }
        Some(out)
    }
}
