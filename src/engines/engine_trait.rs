//! Opponent abstraction used by the controller.
//!
//! Different move-selection strategies can be swapped in behind a single
//! trait object. Engines see a board snapshot and the color to move; they never
//! mutate game state themselves.

use crate::game_state::chess_types::{Board, Color, Move};

#[derive(Debug, Clone, Default)]
pub struct EngineOutput {
    pub best_move: Option<Move>,
    pub info_lines: Vec<String>,
}

pub trait Engine: Send {
    fn name(&self) -> &str;

    fn new_game(&mut self) {}

    fn choose_move(&mut self, board: &Board, color: Color) -> EngineOutput;
}
