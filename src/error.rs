use std::path::PathBuf;

/// Errors raised by a single disk move.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum IllegalMoveError {
    #[error("peg {peg} has no disk to move")]
    EmptySource { peg: usize },

    #[error("cannot place disk {moving} from peg {from_peg} onto disk {resting} on peg {to_peg}")]
    SizeViolation {
        from_peg: usize,
        to_peg: usize,
        moving: usize,
        resting: usize,
    },

    #[error("no peg at index {index} (board has {peg_count} pegs)")]
    NoSuchPeg { index: usize, peg_count: usize },
}

/// Errors raised when a board is set up with invalid parameters.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigurationError {
    #[error("a board needs at least 3 pegs, got {requested}")]
    TooFewPegs { requested: usize },

    #[error("the first peg must be filled with at least one disk")]
    NoDisks,

    #[error("cannot refill a board after {moves} moves have been made")]
    AlreadyStarted { moves: usize },

    #[error("no transfer strategy for a board with {peg_count} pegs (expected 3 or 4)")]
    UnsupportedPegCount { peg_count: usize },
}

/// Errors that can occur while replaying a recorded move sequence.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ReplayError {
    #[error("invalid replay board: {0}")]
    Configuration(#[from] ConfigurationError),

    #[error("move #{index} could not be replayed: {source}")]
    IllegalMove {
        index: usize,
        source: IllegalMoveError,
    },
}

/// Errors that can occur while running a full tour on a board.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TransferError {
    #[error("configuration error: {0}")]
    Configuration(#[from] ConfigurationError),

    #[error("illegal move: {0}")]
    IllegalMove(#[from] IllegalMoveError),
}

/// Errors that can occur when loading configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    FileRead {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse TOML: {0}")]
    TomlParse(#[from] toml::de::Error),

    #[error("config validation error: {0}")]
    Validation(String),
}
