use std::convert::Infallible;

use crate::error::IllegalMoveError;
use crate::game::{MoveSequence, PegBoard};

/// Anything a transfer plan can be emitted onto.
///
/// The solvers only ever relocate one top disk at a time, so this is the
/// whole interface they need.
pub trait Mover {
    /// Error raised when a move is refused.
    type Error;

    /// Move the top disk of `source` onto `destination`.
    fn move_disk(&mut self, source: usize, destination: usize) -> Result<(), Self::Error>;
}

impl Mover for PegBoard {
    type Error = IllegalMoveError;

    fn move_disk(&mut self, source: usize, destination: usize) -> Result<(), IllegalMoveError> {
        PegBoard::move_disk(self, source, destination)
    }
}

/// Records moves without checking them, for planning without a board.
impl Mover for MoveSequence {
    type Error = Infallible;

    fn move_disk(&mut self, source: usize, destination: usize) -> Result<(), Infallible> {
        self.add_move(source, destination);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::Move;

    #[test]
    fn test_board_mover_checks_legality() {
        let mut board = PegBoard::new(3).unwrap();
        board.fill_first_peg(2).unwrap();
        Mover::move_disk(&mut board, 0, 1).unwrap();
        assert!(Mover::move_disk(&mut board, 0, 1).is_err());
        assert_eq!(board.move_count(), 1);
    }

    #[test]
    fn test_sequence_mover_records_anything() {
        let mut seq = MoveSequence::new();
        Mover::move_disk(&mut seq, 5, 5).unwrap();
        assert_eq!(seq.get(0), Some(Move::new(5, 5)));
    }
}
