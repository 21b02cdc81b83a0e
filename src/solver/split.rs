use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::three_peg::three_peg_moves;

/// How the four-peg solver chooses how many disks to park.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SplitPolicy {
    /// Always park the top `n - 3` disks and move the last three with three pegs.
    #[default]
    Fixed,
    /// Park the number of disks that minimises the total move count.
    FrameStewart,
}

impl SplitPolicy {
    pub fn name(self) -> &'static str {
        match self {
            SplitPolicy::Fixed => "fixed",
            SplitPolicy::FrameStewart => "frame-stewart",
        }
    }
}

impl fmt::Display for SplitPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for SplitPolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "fixed" => Ok(SplitPolicy::Fixed),
            "frame-stewart" => Ok(SplitPolicy::FrameStewart),
            other => Err(format!(
                "unknown split policy '{other}' (expected 'fixed' or 'frame-stewart')"
            )),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Split {
    moves: u64,
    parked: usize,
}

/// Minimal four-peg move counts and the split that achieves them, for every
/// stack height up to a bound.
#[derive(Debug, Clone)]
pub struct SplitTable {
    splits: Vec<Split>,
}

impl SplitTable {
    /// Build the table for stacks of `0..=max_disks` disks.
    pub fn new(max_disks: usize) -> Self {
        let mut splits = Vec::with_capacity(max_disks + 1);
        splits.push(Split { moves: 0, parked: 0 });
        if max_disks >= 1 {
            splits.push(Split { moves: 1, parked: 0 });
        }

        for n in 2..=max_disks {
            let mut best = Split {
                moves: u64::MAX,
                parked: 1,
            };
            for parked in 1..n {
                let moves = splits[parked]
                    .moves
                    .saturating_mul(2)
                    .saturating_add(three_peg_moves(n - parked));
                // Strict comparison keeps the smallest split on ties.
                if moves < best.moves {
                    best = Split { moves, parked };
                }
            }
            splits.push(best);
        }

        SplitTable { splits }
    }

    /// Minimal move count for `n` disks, if covered
    pub fn moves(&self, n: usize) -> Option<u64> {
        self.splits.get(n).map(|s| s.moves)
    }

    /// Number of disks to park for `n` disks. Zero for `n < 2`.
    pub fn parked(&self, n: usize) -> Option<usize> {
        self.splits.get(n).map(|s| s.parked)
    }
}
