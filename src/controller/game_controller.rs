//! Turn and selection state machine over one owned game.
//!
//! The controller is the only writer of `GameState` and `GameClock`. Every
//! entry point runs synchronously to completion for a single shell event
//! (a square selection, an undo, a reset or a clock tick).
//!
//! Selection works in two clicks. With nothing held, choosing a piece of the
//! side to move holds it; choosing an empty square does nothing; choosing an
//! enemy piece reports `NotYourTurn`. With a piece held, the next square is
//! the target: the move is applied when the validator accepts it and rejected
//! otherwise, and the selection is cleared either way.

use crate::chess_errors::{ChessErrors, ChessResult};
use crate::controller::selection_outcome::SelectionOutcome;
use crate::engines::engine_random::RandomEngine;
use crate::engines::engine_trait::Engine;
use crate::game_state::chess_types::*;
use crate::move_generation::legal_move_apply::{apply_move, revert_move};
use crate::move_generation::move_validator::is_legal;
use crate::timing::clock_config::ClockConfig;
use crate::timing::game_clock::{GameClock, TimeoutNotice};
use crate::utils::algebraic::move_to_long_algebraic;
use crate::utils::game_record::{write_game_record, GameRecord};

pub struct GameController {
    state: GameState,
    clock: GameClock,
    clock_config: ClockConfig,
    engine: Box<dyn Engine>,
    last_engine_info: Vec<String>,
}

impl GameController {
    pub fn new(mode: GameMode, clock_config: ClockConfig) -> Self {
        Self::with_engine(mode, clock_config, Box::new(RandomEngine::new()))
    }

    pub fn with_engine(
        mode: GameMode,
        clock_config: ClockConfig,
        engine: Box<dyn Engine>,
    ) -> Self {
        let mut controller = Self {
            state: GameState::new_game(mode),
            clock: GameClock::from_config(&clock_config),
            clock_config,
            engine,
            last_engine_info: Vec::new(),
        };
        controller.clock.start(controller.state.current_player);
        controller
    }

    /// Coordinate-based entry point for shells. Off-board input is an error
    /// and leaves the game untouched.
    pub fn select_square(&mut self, row: i32, col: i32) -> ChessResult<SelectionOutcome> {
        let square = Square::new(row, col)?;
        Ok(self.select(square))
    }

    pub fn select(&mut self, square: Square) -> SelectionOutcome {
        let Some(from) = self.state.selection.take() else {
            return self.begin_selection(square);
        };

        if !is_legal(&self.state.board, from, square, self.state.current_player) {
            return SelectionOutcome::Rejected { from, to: square };
        }

        match self.apply_and_record(from, square) {
            Some(player_move) => {
                let reply = self.switch_turn();
                SelectionOutcome::Applied { player_move, reply }
            }
            None => SelectionOutcome::Rejected { from, to: square },
        }
    }

    fn begin_selection(&mut self, square: Square) -> SelectionOutcome {
        match self.state.board.get(square) {
            Some(piece) if piece.color == self.state.current_player => {
                self.state.selection = Some(square);
                SelectionOutcome::Selected(square)
            }
            Some(_) => SelectionOutcome::NotYourTurn(square),
            None => SelectionOutcome::Ignored(square),
        }
    }

    fn apply_and_record(&mut self, from: Square, to: Square) -> Option<Move> {
        let mv = apply_move(&mut self.state.board, from, to)?;
        self.state.record(mv);
        Some(mv)
    }

    /// Flips the turn, lets the opponent answer when it is its side, and
    /// hands the running clock to whoever is to move afterwards.
    fn switch_turn(&mut self) -> Option<Move> {
        self.state.current_player = self.state.current_player.opposite();

        let mut reply = None;
        if self.state.is_ai_turn() {
            let ai_color = self.state.current_player;
            let output = self.engine.choose_move(&self.state.board, ai_color);
            self.last_engine_info = output.info_lines;

            if let Some(chosen) = output.best_move {
                if is_legal(&self.state.board, chosen.from, chosen.to, ai_color) {
                    reply = self.apply_and_record(chosen.from, chosen.to);
                } else {
                    self.last_engine_info.push(format!(
                        "engine {} proposed illegal move {}",
                        self.engine.name(),
                        move_to_long_algebraic(chosen.from, chosen.to)
                    ));
                }
            }
            self.state.current_player = ai_color.opposite();
        }

        self.clock.start(self.state.current_player);
        reply
    }

    /// Reverts the most recent move. The captured piece, if any, stays off
    /// the board. Returns `None` when there is nothing to undo.
    pub fn undo(&mut self) -> Option<Move> {
        let mv = self.state.pop_record()?;
        revert_move(&mut self.state.board, &mv);
        self.state.current_player = mv.moved_color;
        self.state.selection = None;
        self.clock.start(self.state.current_player);
        Some(mv)
    }

    /// New game in `mode`. Remaining clock time carries over.
    pub fn reset(&mut self, mode: GameMode) {
        self.state = GameState::new_game(mode);
        self.engine.new_game();
        self.last_engine_info.clear();
        self.clock.start(self.state.current_player);
    }

    /// New game in `mode` with both clocks reloaded from `clock_config`.
    pub fn reset_with_clock(&mut self, mode: GameMode, clock_config: ClockConfig) {
        self.clock_config = clock_config;
        self.clock = GameClock::from_config(&clock_config);
        self.reset(mode);
    }

    /// Changing mode starts a new game.
    pub fn set_mode(&mut self, mode: GameMode) {
        self.reset(mode);
    }

    /// One elapsed second for the running side. A timeout is advisory only.
    pub fn on_tick(&mut self) -> Option<TimeoutNotice> {
        self.clock.on_tick()
    }

    /// Starts a new game from `record` and replays its moves in order.
    ///
    /// Each move must be accepted by the validator for the color of the piece
    /// on its origin. The side to move afterwards is the opposite of the last
    /// mover. On error the current game is left as it was.
    pub fn load_record(&mut self, record: &GameRecord) -> ChessResult<()> {
        let mode = record.mode()?;
        let clock_config = record.clock_config()?;

        let mut replay = GameState::new_game(mode);
        for (ply, (from, to)) in record.moves.iter().enumerate() {
            let illegal =
                || ChessErrors::IllegalRecordedMove((ply, move_to_long_algebraic(*from, *to)));

            let mover = replay.board.get(*from).ok_or_else(illegal)?;
            if !is_legal(&replay.board, *from, *to, mover.color) {
                return Err(illegal());
            }
            let mv = apply_move(&mut replay.board, *from, *to).ok_or_else(illegal)?;
            replay.record(mv);
            replay.current_player = mover.color.opposite();
        }

        self.clock_config = clock_config;
        self.clock = GameClock::from_config(&clock_config);
        self.engine.new_game();
        self.last_engine_info.clear();
        self.state = replay;
        self.clock.start(self.state.current_player);
        Ok(())
    }

    /// Game record of the moves so far, dated today.
    pub fn export_record(&self) -> String {
        let today = chrono::Local::now().date_naive();
        write_game_record(&self.state, &self.clock_config, today)
    }

    #[inline]
    pub fn board(&self) -> &Board {
        &self.state.board
    }

    #[inline]
    pub fn current_player(&self) -> Color {
        self.state.current_player
    }

    #[inline]
    pub fn selection(&self) -> Option<Square> {
        self.state.selection
    }

    #[inline]
    pub fn mode(&self) -> GameMode {
        self.state.mode
    }

    #[inline]
    pub fn history(&self) -> &[Move] {
        &self.state.history
    }

    #[inline]
    pub fn undo_depth(&self) -> usize {
        self.state.undo_stack.len()
    }

    pub fn history_descriptors(&self) -> Vec<String> {
        self.state.history.iter().map(Move::describe).collect()
    }

    #[inline]
    pub fn remaining_seconds(&self, color: Color) -> i64 {
        self.clock.remaining(color)
    }

    #[inline]
    pub fn clock(&self) -> &GameClock {
        &self.clock
    }

    #[inline]
    pub fn clock_config(&self) -> ClockConfig {
        self.clock_config
    }

    pub fn engine_name(&self) -> &str {
        self.engine.name()
    }

    /// Diagnostic lines from the opponent's most recent decision.
    pub fn last_engine_info(&self) -> &[String] {
        &self.last_engine_info
    }
}
