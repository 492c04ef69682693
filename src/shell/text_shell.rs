//! Line-oriented command front-end over `GameController`.
//!
//! This is a reference shell: it parses text commands, forwards them to the
//! controller and prints what happened. Clock ticks arrive as events on the
//! same channel as input lines, so the controller is only ever touched from
//! the thread running the loop.

use std::fs;
use std::io::{self, Write};
use std::sync::mpsc::Receiver;

use crate::chess_errors::{ChessErrors, ChessResult};
use crate::controller::game_controller::GameController;
use crate::controller::selection_outcome::SelectionOutcome;
use crate::game_state::chess_types::{Color, GameMode, Square};
use crate::timing::clock_config::ClockConfig;
use crate::timing::game_clock::TimeoutNotice;
use crate::utils::algebraic::{algebraic_to_square, long_algebraic_to_squares};
use crate::utils::game_record::read_game_record;
use crate::utils::render_game_state::render_board_with_selection;

const SHELL_NAME: &str = "chessboard_engine";

pub enum ShellEvent {
    Line(String),
    Tick,
}

/// Processes input lines and clock ticks until `quit` or until every sender
/// has hung up.
pub fn run_event_loop(events: Receiver<ShellEvent>, out: &mut impl Write) -> io::Result<()> {
    let mut shell = ShellState::new();
    shell.greet(out)?;
    out.flush()?;

    for event in events {
        match event {
            ShellEvent::Line(line) => {
                if shell.handle_command(&line, out)? {
                    break;
                }
            }
            ShellEvent::Tick => shell.handle_tick(out)?,
        }
        out.flush()?;
    }

    Ok(())
}

pub struct ShellState {
    controller: GameController,
    pending_config: ClockConfig,
    // Indexed by `Color::index`.
    announced_timeout: [bool; 2],
}

impl Default for ShellState {
    fn default() -> Self {
        Self::new()
    }
}

impl ShellState {
    pub fn new() -> Self {
        let pending_config = ClockConfig::default();
        Self {
            controller: GameController::new(GameMode::HumanVsHuman, pending_config),
            pending_config,
            announced_timeout: [false; 2],
        }
    }

    pub fn controller(&self) -> &GameController {
        &self.controller
    }

    fn greet(&self, out: &mut impl Write) -> io::Result<()> {
        writeln!(out, "{SHELL_NAME} ready, type 'help' for commands")
    }

    /// Returns `Ok(true)` when the shell should exit.
    pub fn handle_command(&mut self, line: &str, out: &mut impl Write) -> io::Result<bool> {
        let trimmed = line.trim();
        if trimmed.is_empty() {
            return Ok(false);
        }

        let mut parts = trimmed.split_whitespace();
        let cmd = parts.next().unwrap_or_default();
        let args: Vec<&str> = parts.collect();

        let result = match cmd {
            "quit" | "exit" => return Ok(true),
            "help" => write_help(out).map_err(ShellError::Io),
            "new" => self.handle_new(&args, out),
            "mode" => self.handle_mode(&args, out),
            "select" => self.handle_select(&args, out),
            "move" => self.handle_move(&args, out),
            "undo" => self.handle_undo(out),
            "tick" => self.handle_tick_command(&args, out),
            "board" => self.write_board(out),
            "history" => self.write_history(out),
            "clock" => self.write_clock(out),
            "setoption" => self.handle_setoption(trimmed, out),
            "save" => self.handle_save(&args, out),
            "load" => self.handle_load(&args, out),
            square if square.len() == 2 => self.handle_select(&[square], out),
            other => Err(ChessErrors::InvalidCommand(other.to_owned()).into()),
        };

        match result {
            Ok(()) => {}
            Err(ShellError::Io(err)) => return Err(err),
            Err(ShellError::Chess(err)) => writeln!(out, "info string error: {err}")?,
        }

        Ok(false)
    }

    /// One host tick. A timeout is announced once per expired side.
    pub fn handle_tick(&mut self, out: &mut impl Write) -> io::Result<()> {
        if let Some(notice) = self.controller.on_tick() {
            self.announce_timeout(notice, out)?;
        }
        Ok(())
    }

    fn announce_timeout(&mut self, notice: TimeoutNotice, out: &mut impl Write) -> io::Result<()> {
        let announced = &mut self.announced_timeout[notice.expired.index()];
        if *announced {
            return Ok(());
        }
        *announced = true;
        writeln!(
            out,
            "timeout {} flag fell, {} wins on time",
            notice.expired, notice.winner
        )
    }

    fn handle_new(&mut self, args: &[&str], out: &mut impl Write) -> Result<(), ShellError> {
        let mode = match args.first() {
            Some(token) => GameMode::from_token(token)?,
            None => self.controller.mode(),
        };
        if let Some(minutes) = args.get(1) {
            self.pending_config.set_option("InitialMinutes", minutes)?;
        }
        if let Some(increment) = args.get(2) {
            self.pending_config.set_option("Increment", increment)?;
        }

        self.controller.reset_with_clock(mode, self.pending_config);
        self.announced_timeout = [false; 2];
        writeln!(
            out,
            "new game {} clock {}+{}",
            mode, self.pending_config.initial_minutes, self.pending_config.increment_seconds
        )?;
        self.write_opponent(out)
    }

    fn handle_mode(&mut self, args: &[&str], out: &mut impl Write) -> Result<(), ShellError> {
        let token = args
            .first()
            .ok_or_else(|| ChessErrors::InvalidCommand("mode needs hvh or ai".to_owned()))?;
        let mode = GameMode::from_token(token)?;
        self.controller.set_mode(mode);
        self.announced_timeout = [false; 2];
        writeln!(out, "new game {mode}")?;
        self.write_opponent(out)
    }

    fn write_opponent(&self, out: &mut impl Write) -> Result<(), ShellError> {
        if self.controller.mode() == GameMode::HumanVsAi {
            writeln!(out, "opponent {}", self.controller.engine_name())?;
        }
        Ok(())
    }

    fn handle_select(&mut self, args: &[&str], out: &mut impl Write) -> Result<(), ShellError> {
        let square = parse_square_arg(args.first().copied())?;
        let outcome = self.controller.select(square);
        self.write_outcome(&outcome, out)
    }

    fn handle_move(&mut self, args: &[&str], out: &mut impl Write) -> Result<(), ShellError> {
        let token = args
            .first()
            .ok_or_else(|| ChessErrors::InvalidCommand("move needs e.g. e2e4".to_owned()))?;
        let (from, to) = long_algebraic_to_squares(token)?;

        let first = self.controller.select(from);
        if !matches!(first, SelectionOutcome::Selected(_)) {
            return self.write_outcome(&first, out);
        }
        let second = self.controller.select(to);
        self.write_outcome(&second, out)
    }

    fn handle_undo(&mut self, out: &mut impl Write) -> Result<(), ShellError> {
        match self.controller.undo() {
            Some(mv) => writeln!(out, "undone {}", mv.describe())?,
            None => writeln!(out, "nothing to undo")?,
        }
        Ok(())
    }

    fn handle_tick_command(
        &mut self,
        args: &[&str],
        out: &mut impl Write,
    ) -> Result<(), ShellError> {
        let count = match args.first() {
            Some(raw) => raw.parse::<u32>().map_err(|_| {
                ChessErrors::InvalidOptionValue(("tick".to_owned(), (*raw).to_owned()))
            })?,
            None => 1,
        };
        for _ in 0..count {
            self.handle_tick(out)?;
        }
        self.write_clock(out)
    }

    fn handle_setoption(&mut self, line: &str, out: &mut impl Write) -> Result<(), ShellError> {
        let mut name_tokens = Vec::<&str>::new();
        let mut value_tokens = Vec::<&str>::new();
        let mut mode = "";

        for tok in line.split_whitespace().skip(1) {
            match tok {
                "name" => mode = "name",
                "value" => mode = "value",
                _ if mode == "name" => name_tokens.push(tok),
                _ if mode == "value" => value_tokens.push(tok),
                _ => {}
            }
        }

        let name = name_tokens.join("");
        let value = value_tokens.join(" ");
        self.pending_config.set_option(&name, &value)?;
        writeln!(out, "info string {name} set to {value}, applies to next 'new'")?;
        Ok(())
    }

    fn handle_save(&mut self, args: &[&str], out: &mut impl Write) -> Result<(), ShellError> {
        let path = args
            .first()
            .ok_or_else(|| ChessErrors::InvalidCommand("save needs a path".to_owned()))?;
        fs::write(path, self.controller.export_record())
            .map_err(|err| record_file_error(path, err))?;
        writeln!(out, "saved {} moves to {path}", self.controller.history().len())?;
        Ok(())
    }

    fn handle_load(&mut self, args: &[&str], out: &mut impl Write) -> Result<(), ShellError> {
        let path = args
            .first()
            .ok_or_else(|| ChessErrors::InvalidCommand("load needs a path".to_owned()))?;
        let text = fs::read_to_string(path).map_err(|err| record_file_error(path, err))?;
        let record = read_game_record(&text)?;
        self.controller.load_record(&record)?;
        self.pending_config = self.controller.clock_config();
        self.announced_timeout = [false; 2];
        let dated = record
            .date()
            .map(|date| format!(" dated {}", date.format("%Y.%m.%d")))
            .unwrap_or_default();
        writeln!(
            out,
            "loaded {} moves{dated}, {} to move",
            self.controller.history().len(),
            self.controller.current_player()
        )?;
        Ok(())
    }

    fn write_outcome(
        &mut self,
        outcome: &SelectionOutcome,
        out: &mut impl Write,
    ) -> Result<(), ShellError> {
        match outcome {
            SelectionOutcome::Selected(square) => writeln!(out, "selected {square}")?,
            SelectionOutcome::Ignored(square) => writeln!(out, "nothing to select on {square}")?,
            SelectionOutcome::NotYourTurn(square) => writeln!(
                out,
                "not your turn: {square} belongs to {}",
                self.controller.current_player().opposite()
            )?,
            SelectionOutcome::Rejected { from, to } => {
                writeln!(out, "invalid move {from}{to}")?
            }
            SelectionOutcome::Applied { player_move, reply } => {
                writeln!(out, "moved {}", player_move.describe())?;
                if self.controller.mode() == GameMode::HumanVsAi {
                    for line in self.controller.last_engine_info() {
                        writeln!(out, "info string {line}")?;
                    }
                    match reply {
                        Some(mv) => writeln!(out, "reply {}", mv.describe())?,
                        None => writeln!(out, "opponent has no move")?,
                    }
                }
                writeln!(out, "{} to move", self.controller.current_player())?;
            }
        }
        Ok(())
    }

    fn write_board(&self, out: &mut impl Write) -> Result<(), ShellError> {
        let text =
            render_board_with_selection(self.controller.board(), self.controller.selection());
        writeln!(out, "{text}")?;
        writeln!(out, "{} to move", self.controller.current_player())?;
        Ok(())
    }

    fn write_history(&self, out: &mut impl Write) -> Result<(), ShellError> {
        for (ply, line) in self.controller.history_descriptors().iter().enumerate() {
            writeln!(out, "{:>3}. {line}", ply + 1)?;
        }
        Ok(())
    }

    fn write_clock(&self, out: &mut impl Write) -> Result<(), ShellError> {
        let clock = self.controller.clock();
        let running = clock
            .running()
            .map_or_else(|| "none".to_owned(), |color| color.to_string());
        writeln!(
            out,
            "clock White {} Black {} running {running}",
            clock.format_remaining(Color::White),
            clock.format_remaining(Color::Black)
        )?;
        Ok(())
    }
}

fn record_file_error(path: &str, err: io::Error) -> ChessErrors {
    ChessErrors::RecordFile((path.to_owned(), err.to_string()))
}

fn parse_square_arg(arg: Option<&str>) -> ChessResult<Square> {
    let token =
        arg.ok_or_else(|| ChessErrors::InvalidCommand("select needs a square".to_owned()))?;
    algebraic_to_square(token)
}

fn write_help(out: &mut impl Write) -> io::Result<()> {
    writeln!(out, "new [hvh|ai] [minutes] [increment]")?;
    writeln!(out, "mode hvh|ai")?;
    writeln!(out, "select <square> | <square>")?;
    writeln!(out, "move <from><to>")?;
    writeln!(out, "undo")?;
    writeln!(out, "tick [n]")?;
    writeln!(out, "board | history | clock")?;
    writeln!(out, "setoption name <InitialMinutes|Increment> value <n>")?;
    writeln!(out, "save <path> | load <path>")?;
    writeln!(out, "quit")
}

enum ShellError {
    Io(io::Error),
    Chess(ChessErrors),
}

impl From<io::Error> for ShellError {
    fn from(err: io::Error) -> Self {
        ShellError::Io(err)
    }
}

impl From<ChessErrors> for ShellError {
    fn from(err: ChessErrors) -> Self {
        ShellError::Chess(err)
    }
}
