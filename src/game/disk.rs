use std::fmt;

/// A disk with a relative size. Disks have no identity beyond their size.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Disk {
    size: usize,
}

impl Disk {
    /// Create a disk of the given size
    pub fn new(size: usize) -> Self {
        Disk { size }
    }

    /// Get the size of the disk
    pub fn size(self) -> usize {
        self.size
    }

    /// Whether this disk may rest on top of `other`
    pub fn fits_on(self, other: Disk) -> bool {
        self.size < other.size
    }
}

impl fmt::Display for Disk {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "disk of size {}", self.size)
    }
}
