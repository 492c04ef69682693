use crate::game_state::chess_types::{Move, Square};

/// What a single square selection did. None of these are failures of the
/// engine; the shell decides how to present them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectionOutcome {
    /// A piece of the side to move is now held as the selection.
    Selected(Square),
    /// Empty square chosen with nothing selected; nothing changed.
    Ignored(Square),
    /// Occupied square of the side not to move; nothing changed.
    NotYourTurn(Square),
    /// The held piece cannot go to the target. Selection was cleared.
    Rejected { from: Square, to: Square },
    /// The move was applied. `reply` is the opponent's answer in
    /// `GameMode::HumanVsAi`; it is `None` in `HumanVsHuman` or when the
    /// opponent had no legal move.
    Applied { player_move: Move, reply: Option<Move> },
}

impl SelectionOutcome {
    #[inline]
    pub fn is_applied(&self) -> bool {
        matches!(self, SelectionOutcome::Applied { .. })
    }
}
