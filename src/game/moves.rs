use std::fmt;

use crate::error::ReplayError;

use super::PegBoard;

/// A single relocation of the top disk from one peg to another.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Move {
    pub source: usize,
    pub destination: usize,
}

impl Move {
    pub fn new(source: usize, destination: usize) -> Self {
        Move {
            source,
            destination,
        }
    }
}

impl From<(usize, usize)> for Move {
    fn from((source, destination): (usize, usize)) -> Self {
        Move::new(source, destination)
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} -> {}", self.source, self.destination)
    }
}

/// An append-only record of moves. The moves are not necessarily legal
/// until they are replayed onto a board.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MoveSequence {
    moves: Vec<Move>,
}

impl MoveSequence {
    pub fn new() -> Self {
        MoveSequence { moves: Vec::new() }
    }

    /// Build a sequence from `(source, destination)` pairs
    pub fn from_moves<I, M>(moves: I) -> Self
    where
        I: IntoIterator<Item = M>,
        M: Into<Move>,
    {
        MoveSequence {
            moves: moves.into_iter().map(Into::into).collect(),
        }
    }

    pub fn push(&mut self, mv: Move) {
        self.moves.push(mv);
    }

    /// Record a move from `source` to `destination`
    pub fn add_move(&mut self, source: usize, destination: usize) {
        self.push(Move::new(source, destination));
    }

    /// Get the move at position `index`
    pub fn get(&self, index: usize) -> Option<Move> {
        self.moves.get(index).copied()
    }

    pub fn len(&self) -> usize {
        self.moves.len()
    }

    pub fn is_empty(&self) -> bool {
        self.moves.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = Move> + '_ {
        self.moves.iter().copied()
    }

    /// Replay the sequence onto a fresh board with `disk_count` disks stacked on
    /// the first of `peg_count` pegs. Stops at the first move the board refuses.
    pub fn replay(&self, peg_count: usize, disk_count: usize) -> Result<PegBoard, ReplayError> {
        let mut board = PegBoard::new(peg_count)?;
        board.fill_first_peg(disk_count)?;
        for (index, mv) in self.moves.iter().enumerate() {
            board
                .move_disk(mv.source, mv.destination)
                .map_err(|source| ReplayError::IllegalMove { index, source })?;
        }
        Ok(board)
    }
}

impl<'a> IntoIterator for &'a MoveSequence {
    type Item = Move;
    type IntoIter = std::iter::Copied<std::slice::Iter<'a, Move>>;

    fn into_iter(self) -> Self::IntoIter {
        self.moves.iter().copied()
    }
}
