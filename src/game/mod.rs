//! Puzzle state: disks, pegs, the board that enforces the size rule, and the
//! move record that can be replayed onto a fresh board.

mod board;
mod disk;
mod moves;
mod peg;
mod render;

pub use board::{PegBoard, MIN_PEGS};
pub use disk::Disk;
pub use moves::{Move, MoveSequence};
pub use peg::Peg;
