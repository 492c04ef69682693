//! Crate root module declarations for the board engine.
//!
//! The core is the game-logic layer: board storage, per-piece move legality,
//! the turn/selection state machine with history and undo, a random-move
//! opponent and countdown clocks driven by an external tick. The `shell`
//! module is a text front-end over that core.

pub mod chess_errors;

pub mod game_state {
    pub mod board;
    pub mod chess_rules;
    pub mod chess_types;
    pub mod game_state;
}

pub mod move_generation {
    pub mod legal_move_apply;
    pub mod legal_move_generator;
    pub mod legal_move_shared;
    pub mod legal_moves_bishop;
    pub mod legal_moves_king;
    pub mod legal_moves_knight;
    pub mod legal_moves_pawn;
    pub mod legal_moves_queen;
    pub mod legal_moves_rook;
    pub mod move_validator;
}

pub mod engines {
    pub mod engine_random;
    pub mod engine_trait;
}

pub mod timing {
    pub mod clock_config;
    pub mod game_clock;
}

pub mod controller {
    pub mod game_controller;
    pub mod selection_outcome;
}

pub mod utils {
    pub mod algebraic;
    pub mod game_record;
    pub mod render_game_state;
}

pub mod shell {
    pub mod text_shell;
}
