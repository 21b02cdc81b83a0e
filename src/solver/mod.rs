//! Transfer planning: the classic three-peg recursion and the four-peg
//! Frame–Stewart style decomposition, emitted one move at a time onto any
//! [`Mover`].

mod four_peg;
mod mover;
mod planner;
mod split;
mod three_peg;

pub use four_peg::{four_peg_moves, solve4, solve4_with_table};
pub use mover::Mover;
pub use planner::TransferPlanner;
pub use split::{SplitPolicy, SplitTable};
pub use three_peg::{solve3, three_peg_moves};
