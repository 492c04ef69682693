//! Owned aggregate of everything that changes during one game.
//!
//! Turn, selection, mode, history and the undo stack live together here and
//! are only mutated through the controller, which keeps
//! `history.len() == undo_stack.len()` at all times.

use crate::game_state::chess_types::*;

#[derive(Debug, Clone)]
pub struct GameState {
    pub board: Board,
    pub current_player: Color,
    pub selection: Option<Square>,
    pub mode: GameMode,

    // --- Applied moves, oldest first ---
    pub history: Vec<Move>,
    // --- Reversible moves, most recent last ---
    pub undo_stack: Vec<Move>,
}

impl Default for GameState {
    fn default() -> Self {
        Self::new_game(GameMode::default())
    }
}

impl GameState {
    pub fn new_game(mode: GameMode) -> Self {
        Self {
            board: Board::standard(),
            current_player: Color::White,
            selection: None,
            mode,
            history: Vec::new(),
            undo_stack: Vec::new(),
        }
    }

    /// Records an applied move in both the history and the undo stack.
    pub(crate) fn record(&mut self, mv: Move) {
        self.history.push(mv);
        self.undo_stack.push(mv);
    }

    /// Pops the most recent move from the undo stack and its history entry.
    pub(crate) fn pop_record(&mut self) -> Option<Move> {
        let mv = self.undo_stack.pop()?;
        self.history.pop();
        Some(mv)
    }

    #[inline]
    pub fn is_ai_turn(&self) -> bool {
        self.mode == GameMode::HumanVsAi
            && self.current_player == crate::game_state::chess_rules::AI_COLOR
    }
}
