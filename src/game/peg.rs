use super::Disk;

/// A single peg holding a stack of disks, largest at the bottom.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Peg {
    index: usize,
    disks: Vec<Disk>,
}

impl Peg {
    pub(crate) fn new(index: usize) -> Self {
        Peg {
            index,
            disks: Vec::new(),
        }
    }

    /// Position of this peg on its board
    pub fn index(&self) -> usize {
        self.index
    }

    pub fn len(&self) -> usize {
        self.disks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.disks.is_empty()
    }

    /// The smallest disk on the peg, if any
    pub fn top(&self) -> Option<Disk> {
        self.disks.last().copied()
    }

    /// Disks from bottom to top
    pub fn disks(&self) -> &[Disk] {
        &self.disks
    }

    /// Disk at the given height, 0 being the bottom
    pub fn disk_at(&self, height: usize) -> Option<Disk> {
        self.disks.get(height).copied()
    }

    /// Whether a disk of the same size sits anywhere on this peg
    pub fn holds(&self, disk: Disk) -> bool {
        self.disks.contains(&disk)
    }

    /// Whether `disk` may be placed on top of this peg
    pub fn accepts(&self, disk: Disk) -> bool {
        self.top().is_none_or(|top| disk.fits_on(top))
    }

    /// Push a disk. Callers check [`Peg::accepts`] first.
    pub(crate) fn push(&mut self, disk: Disk) {
        debug_assert!(
            self.accepts(disk),
            "{disk} placed on {:?} on peg {}",
            self.top(),
            self.index
        );
        self.disks.push(disk);
    }

    pub(crate) fn pop(&mut self) -> Option<Disk> {
        self.disks.pop()
    }

    pub(crate) fn clear(&mut self) {
        self.disks.clear();
    }
}
