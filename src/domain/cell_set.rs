//! Live-cell storage.
//!
//! The set is hash-backed and shared through an `Arc`, so taking a
//! `Snapshot` is O(1). Edits go through `Arc::make_mut`, which copies the set
//! only while a snapshot is still alive; a snapshot therefore never observes
//! later edits.

use std::collections::HashSet;
use std::sync::Arc;

use super::{BoardBounds, Cell, LifeError};

/// Outcome of a bulk placement.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub struct Placement {
    /// Distinct cells now alive
    pub placed: usize,
    /// Cells dropped for lying outside the board
    pub rejected: usize,
}

/// Frozen, read-only view of the live cells at one instant.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Snapshot(Arc<HashSet<Cell>>);

impl Snapshot {
    #[inline]
    pub fn contains(&self, cell: Cell) -> bool {
        self.0.contains(&cell)
    }

    pub fn iter(&self) -> impl Iterator<Item = Cell> + '_ {
        self.0.iter().copied()
    }
}

/// The set of live cells on a bounded board.
#[derive(Clone, Debug)]
pub struct CellSet {
    bounds: BoardBounds,
    live: Arc<HashSet<Cell>>,
}

impl CellSet {
    /// Create an empty set for the given board
    pub fn new(bounds: BoardBounds) -> Self {
        Self {
            bounds,
            live: Arc::default(),
        }
    }

    pub const fn bounds(&self) -> BoardBounds {
        self.bounds
    }

    #[inline]
    pub fn contains(&self, cell: Cell) -> bool {
        self.live.contains(&cell)
    }

    pub fn len(&self) -> usize {
        self.live.len()
    }

    pub fn is_empty(&self) -> bool {
        self.live.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = Cell> + '_ {
        self.live.iter().copied()
    }

    /// Flip liveness of `cell` and return its new state.
    pub fn toggle(&mut self, cell: Cell) -> Result<bool, LifeError> {
        if !self.bounds.contains(cell) {
            return Err(self.bounds.out_of_bounds(cell));
        }
        let live = Arc::make_mut(&mut self.live);
        if live.remove(&cell) {
            Ok(false)
        } else {
            live.insert(cell);
            Ok(true)
        }
    }

    /// Discard the current contents and keep only the in-bounds cells of `cells`.
    pub fn replace_all(&mut self, cells: impl IntoIterator<Item = Cell>) -> Placement {
        let mut rejected = 0;
        let next: HashSet<Cell> = cells
            .into_iter()
            .filter(|&cell| {
                let inside = self.bounds.contains(cell);
                if !inside {
                    log::warn!("{}", self.bounds.out_of_bounds(cell));
                    rejected += 1;
                }
                inside
            })
            .collect();

        let placement = Placement {
            placed: next.len(),
            rejected,
        };
        self.live = Arc::new(next);
        placement
    }

    /// Swap in a set computed from a snapshot of this board.
    pub(crate) fn swap_in(&mut self, next: HashSet<Cell>) {
        debug_assert!(next.iter().all(|&cell| self.bounds.contains(cell)));
        self.live = Arc::new(next);
    }

    pub fn clear(&mut self) {
        self.live = Arc::default();
    }

    pub fn snapshot(&self) -> Snapshot {
        Snapshot(Arc::clone(&self.live))
    }
}
