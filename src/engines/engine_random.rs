//! Uniform random-move opponent.
//!
//! Enumerates every legal `(from, to)` pair for the side to move and picks one
//! uniformly, without weighting by piece or position.

use rand::prelude::IndexedRandom;
use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::engines::engine_trait::{Engine, EngineOutput};
use crate::game_state::chess_types::{Board, Color, Move};
use crate::move_generation::legal_move_generator::generate_legal_moves_in_place;

pub struct RandomEngine {
    rng: Option<StdRng>,
    legal_moves: Vec<Move>,
}

impl RandomEngine {
    /// Draws from the thread-local generator on every call.
    pub fn new() -> Self {
        Self {
            rng: None,
            legal_moves: Vec::new(),
        }
    }

    /// Deterministic sequence of choices for a given seed.
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: Some(StdRng::seed_from_u64(seed)),
            legal_moves: Vec::new(),
        }
    }

    /// Picks one legal move for `color`, or `None` when the side has none.
    pub fn pick(&mut self, board: &Board, color: Color) -> Option<Move> {
        generate_legal_moves_in_place(board, color, &mut self.legal_moves);
        let picked = match self.rng.as_mut() {
            Some(rng) => self.legal_moves.choose(rng),
            None => self.legal_moves.choose(&mut rand::rng()),
        };
        picked.copied()
    }
}

impl Default for RandomEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl Engine for RandomEngine {
    fn name(&self) -> &str {
        "Random"
    }

    fn choose_move(&mut self, board: &Board, color: Color) -> EngineOutput {
        let best_move = self.pick(board, color);

        let mut out = EngineOutput {
            best_move,
            info_lines: Vec::new(),
        };
        out.info_lines.push(format!(
            "random_engine {} legal_moves {}",
            color,
            self.legal_moves.len()
        ));
        match best_move {
            Some(mv) => out
                .info_lines
                .push(format!("random_engine picked {}", mv.describe())),
            None => out
                .info_lines
                .push(format!("random_engine {color} has no legal move")),
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::RandomEngine;
    use crate::engines::engine_trait::Engine;
    use crate::game_state::chess_types::*;
    use crate::move_generation::move_validator::is_legal;

    #[test]
    fn black_reply_from_opening_is_legal_and_owned() {
        let board = Board::standard();
        let mut engine = RandomEngine::new();
        for _ in 0..50 {
            let mv = engine
                .choose_move(&board, Color::Black)
                .best_move
                .expect("opening position should have black moves");
            let origin = board.get(mv.from).expect("origin should be occupied");
            assert_eq!(origin.color, Color::Black);
            assert_eq!(mv.moved_color, Color::Black);
            assert!(is_legal(&board, mv.from, mv.to, Color::Black));
        }
    }

    #[test]
    fn no_legal_move_yields_none() {
        let mut board = Board::empty();
        board.place(
            Square::new(4, 4).expect("e4"),
            Piece::new(PieceKind::Pawn, Color::White),
        );
        let mut engine = RandomEngine::seeded(7);
        let out = engine.choose_move(&board, Color::Black);
        assert_eq!(out.best_move, None);
        assert!(out.info_lines.iter().any(|l| l.contains("no legal move")));
    }

    #[test]
    fn seeded_engines_repeat_choices() {
        let board = Board::standard();
        let mut first = RandomEngine::seeded(42);
        let mut second = RandomEngine::seeded(42);
        for _ in 0..10 {
            assert_eq!(
                first.pick(&board, Color::White),
                second.pick(&board, Color::White)
            );
        }
    }

    #[test]
    fn choices_cover_more_than_one_move() {
        let board = Board::standard();
        let mut engine = RandomEngine::seeded(1);
        let first = engine.pick(&board, Color::White);
        let varied = (0..100).any(|_| engine.pick(&board, Color::White) != first);
        assert!(varied);
    }
}
