//! Errors used throughout the board engine.
//!
//! Game-rule failures (illegal moves, wrong-turn selections, an empty undo
//! stack, an opponent with no move, clock timeouts) are not errors: they are
//! reported as ordinary outcome values by the controller and the clock.
//! `ChessErrors` covers the remaining failure modes, which all come from
//! malformed input handed to the engine by a shell: coordinates off the board,
//! unparsable notation, broken or unreadable game records, bad option values
//! and unknown shell commands.

use std::error::Error;
use std::fmt;

pub type ChessResult<T> = Result<T, ChessErrors>;

/// Unified error type for input handed to the engine.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ChessErrors {
    /// Row/column outside `0..=7`.
    ///
    /// Payload: (row, col) exactly as supplied by the caller.
    InvalidSquare((i32, i32)),

    /// A coordinate such as `e4` could not be parsed.
    InvalidAlgebraicString(String),

    /// A header or movetext token in a game record was malformed.
    InvalidRecord(String),

    /// A move listed in a game record could not be replayed on the board.
    ///
    /// Payload: (ply index, long algebraic move).
    IllegalRecordedMove((usize, String)),

    /// An option name was not recognised.
    UnknownOption(String),

    /// An option value could not be parsed for the named option.
    ///
    /// Payload: (option name, offending value).
    InvalidOptionValue((String, String)),

    /// A game record file could not be read or written.
    ///
    /// Payload: (path, underlying I/O message).
    RecordFile((String, String)),

    /// A shell command was not recognised or had missing arguments.
    InvalidCommand(String),
}

impl fmt::Display for ChessErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ChessErrors::InvalidSquare((row, col)) => {
                write!(f, "square ({row}, {col}) is off the board")
            }
            ChessErrors::InvalidAlgebraicString(text) => {
                write!(f, "invalid algebraic coordinate: {text}")
            }
            ChessErrors::InvalidRecord(msg) => write!(f, "invalid game record: {msg}"),
            ChessErrors::IllegalRecordedMove((ply, mv)) => {
                write!(f, "recorded move {mv} at ply {ply} cannot be replayed")
            }
            ChessErrors::UnknownOption(name) => write!(f, "unknown option: {name}"),
            ChessErrors::InvalidOptionValue((name, value)) => {
                write!(f, "invalid value for option {name}: {value}")
            }
            ChessErrors::RecordFile((path, msg)) => {
                write!(f, "cannot access game record {path}: {msg}")
            }
            ChessErrors::InvalidCommand(cmd) => write!(f, "invalid command: {cmd}"),
        }
    }
}

impl Error for ChessErrors {}
