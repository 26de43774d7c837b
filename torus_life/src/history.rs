// history.rs - Equilibrium and short-cycle detection

use std::collections::VecDeque;
use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};

use tracing::debug;

use crate::error::{LifeError, LifeResult};
use crate::grid::Grid;

pub const DEFAULT_HISTORY_DEPTH: usize = 10;

/// True when `next` equals `current` cell for cell, i.e. the board has
/// reached a fixed point and will never change again.
pub fn is_settled(current: &Grid, next: &Grid) -> LifeResult<bool> {
    if !current.same_shape(next) {
        return Err(LifeError::ShapeMismatch {
            expected: current.dimensions(),
            found: next.dimensions(),
        });
    }
    Ok(current.cells() == next.cells())
}

/// 64-bit hash of a grid's extents and cells.
pub fn fingerprint(grid: &Grid) -> u64 {
    let mut hasher = DefaultHasher::new();
    grid.hash(&mut hasher);
    hasher.finish()
}

/// Outcome of observing one generation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Verdict {
    /// Not seen within the window
    Fresh,
    /// Seen `period` generations ago; period 1 is a fixed point
    Repeats { period: usize },
}

impl Verdict {
    pub fn is_repeat(&self) -> bool {
        matches!(self, Verdict::Repeats { .. })
    }
}

/// Ring of recent grid fingerprints.
///
/// Matches are by fingerprint only. Use [`is_settled`] when an exact answer
/// is required.
#[derive(Clone, Debug)]
pub struct History {
    fingerprints : VecDeque<u64>,
    depth        : usize,
}

impl Default for History {
    fn default() -> Self {
        Self::new(DEFAULT_HISTORY_DEPTH)
    }
}

impl History {
    /// A depth of 0 is raised to 1.
    pub fn new(depth: usize) -> Self {
        let depth = depth.max(1);
        Self {
            fingerprints: VecDeque::with_capacity(depth),
            depth,
        }
    }

    pub fn depth(&self) -> usize {
        self.depth
    }

    pub fn len(&self) -> usize {
        self.fingerprints.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fingerprints.is_empty()
    }

    /// Record `grid` and report whether it repeats a remembered generation.
    pub fn observe(&mut self, grid: &Grid) -> Verdict {
        let current = fingerprint(grid);
        let verdict = match self.fingerprints.iter().rev().position(|&seen| seen == current) {
            Some(back) => Verdict::Repeats { period: back + 1 },
            None => Verdict::Fresh,
        };

        self.fingerprints.push_back(current);
        if self.fingerprints.len() > self.depth {
            self.fingerprints.pop_front();
        }

        if let Verdict::Repeats { period } = verdict {
            debug!(period, "grid repeats an earlier generation");
        }
        verdict
    }

    /// Forget everything; call after reset, randomize or resize.
    pub fn clear(&mut self) {
        self.fingerprints.clear();
    }
}
