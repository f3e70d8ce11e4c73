use std::collections::HashSet;

use rayon::prelude::*;

use super::{
    BoardBounds, Cell, CellSet, Evolution, LifeError, Offset, Placement, Snapshot, neighbors,
    rules::next_liveness,
};

/// Change notifications for the rendering collaborator.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EngineEvent {
    Stepped { generation: u64, population: usize },
    Edited { population: usize },
    Cleared,
}

type Listener = Box<dyn FnMut(EngineEvent)>;

/// SimulationEngine owns the board state and advances it one generation at
/// a time.
///
/// Every mutation takes `&mut self`, so a step can never interleave with
/// an edit. Within a step, all positions are evaluated against one frozen
/// snapshot and the result is swapped in as a whole.
pub struct SimulationEngine {
    bounds: BoardBounds,
    cells: CellSet,
    generation: u64,
    evolution: Evolution,
    listeners: Vec<Listener>,
}

impl SimulationEngine {
    /// Create an empty board at generation 0
    pub fn new(bounds: BoardBounds) -> Self {
        Self {
            bounds,
            cells: CellSet::new(bounds),
            generation: 0,
            evolution: Evolution::default(),
            listeners: Vec::new(),
        }
    }

    /// Select the step strategy (builder pattern)
    pub fn with_evolution(mut self, evolution: Evolution) -> Self {
        self.evolution = evolution;
        self
    }

    pub fn set_evolution(&mut self, evolution: Evolution) {
        self.evolution = evolution;
    }

    pub const fn evolution(&self) -> Evolution {
        self.evolution
    }

    pub const fn bounds(&self) -> BoardBounds {
        self.bounds
    }

    pub const fn current_generation(&self) -> u64 {
        self.generation
    }

    pub fn live_cells(&self) -> &CellSet {
        &self.cells
    }

    pub fn snapshot(&self) -> Snapshot {
        self.cells.snapshot()
    }

    pub fn population(&self) -> usize {
        self.cells.len()
    }

    /// Register a callback invoked after every state change
    pub fn subscribe(&mut self, listener: impl FnMut(EngineEvent) + 'static) {
        self.listeners.push(Box::new(listener));
    }

    /// Advance one generation.
    pub fn step(&mut self) {
        let snapshot = self.cells.snapshot();
        let next = match self.evolution {
            Evolution::Serial => evolve_serial(&snapshot, &self.bounds),
            Evolution::Parallel => evolve_parallel(&snapshot, &self.bounds),
        };

        self.cells.swap_in(next);
        self.generation += 1;
        log::debug!(
            "generation {} computed, {} live cells",
            self.generation,
            self.cells.len()
        );
        self.notify(EngineEvent::Stepped {
            generation: self.generation,
            population: self.cells.len(),
        });
    }

    /// Flip one cell. Out-of-bounds cells are rejected and the board is left as is.
    pub fn toggle_cell(&mut self, cell: Cell) -> Result<bool, LifeError> {
        let alive = self.cells.toggle(cell)?;
        self.notify(EngineEvent::Edited {
            population: self.cells.len(),
        });
        Ok(alive)
    }

    /// Replace the board with `cells` shifted by `offset`.
    ///
    /// Cells that land outside the board, or whose translation overflows,
    /// are dropped individually and counted in the returned report.
    pub fn set_figure(
        &mut self,
        cells: impl IntoIterator<Item = Cell>,
        offset: Offset,
    ) -> Placement {
        let mut overflowed = 0;
        let translated: Vec<Cell> = cells
            .into_iter()
            .filter_map(|cell| {
                let moved = cell.translate(offset);
                if moved.is_none() {
                    log::warn!("cell {cell} cannot be shifted by {offset:?}");
                    overflowed += 1;
                }
                moved
            })
            .collect();

        let mut placement = self.cells.replace_all(translated);
        placement.rejected += overflowed;
        if placement.rejected > 0 {
            log::warn!(
                "figure placed with {} cell(s) outside the board dropped",
                placement.rejected
            );
        }
        self.notify(EngineEvent::Edited {
            population: placement.placed,
        });
        placement
    }

    /// Empty the board and reset the generation counter.
    pub fn clear(&mut self) {
        self.cells.clear();
        self.generation = 0;
        self.notify(EngineEvent::Cleared);
    }

    fn notify(&mut self, event: EngineEvent) {
        for listener in &mut self.listeners {
            listener(event);
        }
    }
}

fn next_alive(cell: Cell, snapshot: &Snapshot, bounds: &BoardBounds) -> bool {
    next_liveness(snapshot.contains(cell), neighbors::count(cell, snapshot, bounds))
}

fn evolve_serial(snapshot: &Snapshot, bounds: &BoardBounds) -> HashSet<Cell> {
    bounds
        .positions()
        .filter(|&cell| next_alive(cell, snapshot, bounds))
        .collect()
}

/// Parallel evolution using rayon, one task per row
fn evolve_parallel(snapshot: &Snapshot, bounds: &BoardBounds) -> HashSet<Cell> {
    let width = bounds.width();
    (0..bounds.height())
        .into_par_iter()
        .flat_map_iter(move |y| {
            (0..width)
                .map(move |x| Cell::new(x, y))
                .filter(move |&cell| next_alive(cell, snapshot, bounds))
        })
        .collect()
}
