use tracing::{debug, trace};

use crate::error::{ConfigurationError, IllegalMoveError};

use super::{Disk, MoveSequence, Peg};

/// Fewest pegs on which a stack can be transferred at all.
pub const MIN_PEGS: usize = 3;

/// A fixed row of pegs holding disks, with the history of every applied move.
///
/// Every peg's stack is kept strictly decreasing in size from bottom to top;
/// [`PegBoard::move_disk`] is the only way disks change place once the board
/// has been filled.
#[derive(Debug, Clone)]
pub struct PegBoard {
    pegs: Vec<Peg>,
    history: MoveSequence,
    disk_count: usize,
}

impl PegBoard {
    /// Create a board with `peg_count` empty pegs indexed `0..peg_count`
    pub fn new(peg_count: usize) -> Result<Self, ConfigurationError> {
        if peg_count < MIN_PEGS {
            return Err(ConfigurationError::TooFewPegs {
                requested: peg_count,
            });
        }
        Ok(PegBoard {
            pegs: (0..peg_count).map(Peg::new).collect(),
            history: MoveSequence::new(),
            disk_count: 0,
        })
    }

    /// Stack disks of sizes `disk_count..=1` on peg 0, smallest on top.
    ///
    /// Only allowed while no move has been recorded.
    pub fn fill_first_peg(&mut self, disk_count: usize) -> Result<(), ConfigurationError> {
        if disk_count == 0 {
            return Err(ConfigurationError::NoDisks);
        }
        if !self.history.is_empty() {
            return Err(ConfigurationError::AlreadyStarted {
                moves: self.history.len(),
            });
        }

        for peg in &mut self.pegs {
            peg.clear();
        }
        let first = &mut self.pegs[0];
        for size in (1..=disk_count).rev() {
            first.push(Disk::new(size));
        }
        self.disk_count = disk_count;

        debug!(pegs = self.pegs.len(), disks = disk_count, "filled first peg");
        Ok(())
    }

    pub fn peg_count(&self) -> usize {
        self.pegs.len()
    }

    /// Number of disks the board was filled with
    pub fn disk_count(&self) -> usize {
        self.disk_count
    }

    pub fn peg(&self, index: usize) -> Option<&Peg> {
        self.pegs.get(index)
    }

    pub fn pegs(&self) -> &[Peg] {
        &self.pegs
    }

    /// Disks on a peg from bottom to top; empty for an unknown index
    pub fn stack(&self, index: usize) -> &[Disk] {
        self.pegs.get(index).map(Peg::disks).unwrap_or_default()
    }

    /// The smallest disk on a peg
    pub fn top(&self, index: usize) -> Option<Disk> {
        self.pegs.get(index).and_then(Peg::top)
    }

    /// Check if a peg holds no disk. Unknown indices count as empty.
    pub fn is_empty(&self, index: usize) -> bool {
        self.pegs.get(index).is_none_or(Peg::is_empty)
    }

    /// Index of the peg holding a disk of the same size
    pub fn locate(&self, disk: Disk) -> Option<usize> {
        self.pegs.iter().find(|peg| peg.holds(disk)).map(Peg::index)
    }

    /// Move the top disk of `source` onto `destination`.
    ///
    /// Nothing changes and nothing is recorded when the move is refused.
    pub fn move_disk(&mut self, source: usize, destination: usize) -> Result<(), IllegalMoveError> {
        let peg_count = self.pegs.len();
        for index in [source, destination] {
            if index >= peg_count {
                return Err(IllegalMoveError::NoSuchPeg { index, peg_count });
            }
        }

        let moving = self.pegs[source]
            .top()
            .ok_or(IllegalMoveError::EmptySource { peg: source })?;

        if let Some(resting) = self.pegs[destination].top() {
            if !moving.fits_on(resting) {
                debug!(source, destination, moving = moving.size(), resting = resting.size(), "refused move");
                return Err(IllegalMoveError::SizeViolation {
                    from_peg: source,
                    to_peg: destination,
                    moving: moving.size(),
                    resting: resting.size(),
                });
            }
        }

        let disk = self.pegs[source]
            .pop()
            .ok_or(IllegalMoveError::EmptySource { peg: source })?;
        self.pegs[destination].push(disk);
        self.history.add_move(source, destination);

        trace!(source, destination, size = disk.size(), moves = self.history.len(), "moved disk");
        Ok(())
    }

    /// Number of moves applied so far
    pub fn move_count(&self) -> usize {
        self.history.len()
    }

    /// Every move applied so far, in order
    pub fn history(&self) -> &MoveSequence {
        &self.history
    }

    /// Whether `destination` holds every disk of the board
    pub fn is_complete(&self, destination: usize) -> bool {
        self.disk_count > 0
            && self
                .pegs
                .get(destination)
                .is_some_and(|peg| peg.len() == self.disk_count)
    }

    /// Whether both boards hold the same disks at the same heights on the
    /// same pegs, regardless of how they got there.
    pub fn equivalent(&self, other: &PegBoard) -> bool {
        self.pegs.len() == other.pegs.len()
            && self.disk_count == other.disk_count
            && self
                .pegs
                .iter()
                .zip(&other.pegs)
                .all(|(a, b)| a.disks() == b.disks())
    }
}

impl PartialEq for PegBoard {
    fn eq(&self, other: &Self) -> bool {
        self.equivalent(other)
    }
}

impl Eq for PegBoard {}
