use std::convert::Infallible;

use tracing::info;

use crate::error::{ConfigurationError, TransferError};
use crate::game::{MoveSequence, PegBoard};

use super::four_peg::{four_peg_moves, solve4, solve4_with_table};
use super::split::{SplitPolicy, SplitTable};
use super::three_peg::{solve3, three_peg_moves};
use super::Mover;

/// Transfers whole stacks between pegs, choosing the three- or four-peg
/// strategy from the number of pegs available.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TransferPlanner {
    policy: SplitPolicy,
}

impl TransferPlanner {
    pub fn new(policy: SplitPolicy) -> Self {
        TransferPlanner { policy }
    }

    pub fn solve3<M: Mover + ?Sized>(
        &self,
        mover: &mut M,
        n: usize,
        source: usize,
        spare: usize,
        destination: usize,
    ) -> Result<(), M::Error> {
        solve3(mover, n, source, spare, destination)
    }

    /// Four-peg transfer using this planner's split policy
    pub fn solve4<M: Mover + ?Sized>(
        &self,
        mover: &mut M,
        n: usize,
        source: usize,
        aux1: usize,
        aux2: usize,
        destination: usize,
    ) -> Result<(), M::Error> {
        match self.policy {
            SplitPolicy::Fixed => solve4(mover, n, source, aux1, aux2, destination),
            SplitPolicy::FrameStewart => {
                let table = SplitTable::new(n);
                solve4_with_table(mover, &table, n, source, aux1, aux2, destination)
            }
        }
    }

    /// Emit a full transfer from peg 0 to the last of `peg_count` pegs.
    fn transfer<M: Mover + ?Sized>(
        &self,
        mover: &mut M,
        peg_count: usize,
        disk_count: usize,
    ) -> Result<Result<(), M::Error>, ConfigurationError> {
        match peg_count {
            3 => Ok(self.solve3(mover, disk_count, 0, 1, 2)),
            4 => Ok(self.solve4(mover, disk_count, 0, 1, 2, 3)),
            _ => Err(ConfigurationError::UnsupportedPegCount { peg_count }),
        }
    }

    /// Move the board's whole stack from peg 0 to its last peg.
    ///
    /// Returns the number of moves applied by this call.
    pub fn tour(&self, board: &mut PegBoard) -> Result<usize, TransferError> {
        let disk_count = board.disk_count();
        if disk_count == 0 {
            return Err(ConfigurationError::NoDisks.into());
        }
        let peg_count = board.peg_count();
        let start = board.move_count();

        info!(pegs = peg_count, disks = disk_count, policy = %self.policy, "starting tour");
        self.transfer(board, peg_count, disk_count)??;

        let moves = board.move_count() - start;
        info!(moves, "tour finished");
        Ok(moves)
    }

    /// The moves a tour would make, computed without a board.
    pub fn plan(&self, peg_count: usize, disk_count: usize) -> Result<MoveSequence, ConfigurationError> {
        let mut moves = MoveSequence::new();
        let outcome: Result<(), Infallible> = self.transfer(&mut moves, peg_count, disk_count)?;
        match outcome {
            Ok(()) => Ok(moves),
            Err(never) => match never {},
        }
    }

    /// Number of moves a tour makes, saturating at `u64::MAX`.
    pub fn expected_moves(&self, peg_count: usize, disk_count: usize) -> Result<u64, ConfigurationError> {
        match peg_count {
            3 => Ok(three_peg_moves(disk_count)),
            4 => Ok(four_peg_moves(disk_count, self.policy)),
            _ => Err(ConfigurationError::UnsupportedPegCount { peg_count }),
        }
    }
}
