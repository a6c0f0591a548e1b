use std::fmt;

use rand::Rng;

use super::cell::{Cell, transition};
use super::topology::neighbors_of;

/// Default probability that `randomize` seeds a cell alive (1 in 10).
pub const DEFAULT_DENSITY: f64 = 0.1;

/// Errors surfaced by the checked model operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModelError {
    /// A cell index outside `0..total` was passed to an edit operation.
    IndexOutOfRange { index: usize, total: usize },
}

impl fmt::Display for ModelError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ModelError::IndexOutOfRange { index, total } => {
                write!(f, "cell index {} out of range (grid has {} cells)", index, total)
            }
        }
    }
}

impl std::error::Error for ModelError {}

/// The simulation engine for Conway's Game of Life on a fixed grid.
///
/// Owns the flat row-major cell array and advances it in two phases per
/// generation: a compute phase that stages every cell's next value against
/// the committed snapshot, and an apply phase that commits the staged
/// values and reports which indices changed.
///
/// The model never schedules itself. `resume` only flips the `running`
/// flag; an external driver is responsible for calling [`LifeModel::step`]
/// on a cadence while `is_running` holds (see `application::Playback`).
pub struct LifeModel {
    rows: usize,
    columns: usize,
    cells: Vec<Cell>,
    running: bool,
    tick_interval_ms: u32,
}

impl LifeModel {
    /// Build a model with the given dimensions, all cells dead and paused.
    pub fn new(rows: usize, columns: usize, tick_interval_ms: u32) -> Self {
        let mut model = Self {
            rows: 0,
            columns: 0,
            cells: Vec::new(),
            running: false,
            tick_interval_ms: 0,
        };
        model.configure(rows, columns, tick_interval_ms);
        model
    }

    /// Rebuild the grid for new dimensions, discarding all prior state.
    ///
    /// Every cell comes up dead with a freshly computed neighbor list and
    /// the simulation is paused. Callers should treat the whole grid as
    /// changed afterwards.
    pub fn configure(&mut self, rows: usize, columns: usize, tick_interval_ms: u32) {
        assert!(rows >= 1 && columns >= 1, "grid needs at least one cell");

        self.rows = rows;
        self.columns = columns;
        self.tick_interval_ms = tick_interval_ms;
        self.running = false;

        let total = rows * columns;
        self.cells = (0..total)
            .map(|i| Cell::new(neighbors_of(i, rows, columns)))
            .collect();
    }

    pub fn row_count(&self) -> usize {
        self.rows
    }

    pub fn column_count(&self) -> usize {
        self.columns
    }

    /// Total number of cells (`rows * columns`).
    pub fn total(&self) -> usize {
        self.cells.len()
    }

    /// Committed state of a cell; out-of-range indices read as dead.
    pub fn cell_alive(&self, index: usize) -> bool {
        self.cells.get(index).is_some_and(Cell::is_alive)
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Cadence for auto-advance, consumed by the external scheduler.
    pub fn tick_interval_ms(&self) -> u32 {
        self.tick_interval_ms
    }

    /// Advance one generation: compute phase then apply phase.
    ///
    /// Returns the indices whose committed state changed, so a renderer can
    /// refresh only those cells. A stable pattern yields an empty set.
    pub fn step(&mut self) -> Vec<usize> {
        self.compute_pending();
        self.apply_pending()
    }

    /// Pause and reseed every cell with an independent Bernoulli draw at
    /// [`DEFAULT_DENSITY`]. Seeds state directly, bypassing the rule.
    pub fn randomize(&mut self) -> Vec<usize> {
        self.randomize_with(&mut rand::rng(), DEFAULT_DENSITY)
    }

    /// `randomize` with a caller-supplied generator and density.
    /// A seeded generator makes the outcome reproducible.
    pub fn randomize_with<R: Rng>(&mut self, rng: &mut R, density: f64) -> Vec<usize> {
        self.pause();
        for cell in &mut self.cells {
            cell.set_pending(rng.random_bool(density));
        }
        self.apply_pending()
    }

    /// Pause and set every cell dead.
    pub fn clear(&mut self) -> Vec<usize> {
        self.pause();
        for cell in &mut self.cells {
            cell.set_pending(false);
        }
        self.apply_pending()
    }

    /// Edit a single cell's committed state immediately, with no rule
    /// evaluation. Out-of-range indices are silently ignored.
    pub fn set_cell(&mut self, index: usize, alive: bool) {
        let _ = self.try_set_cell(index, alive);
    }

    /// Like [`LifeModel::set_cell`], but an out-of-range index is reported
    /// instead of swallowed.
    pub fn try_set_cell(&mut self, index: usize, alive: bool) -> Result<(), ModelError> {
        match self.cells.get_mut(index) {
            Some(cell) => {
                cell.force(alive);
                // keep the buffers in sync so a later apply phase cannot
                // resurrect the value this edit overwrote
                cell.set_pending(alive);
                Ok(())
            }
            None => Err(ModelError::IndexOutOfRange {
                index,
                total: self.cells.len(),
            }),
        }
    }

    pub fn pause(&mut self) {
        self.running = false;
    }

    pub fn resume(&mut self) {
        self.running = true;
    }

    /// Compute phase: stage every cell's next value.
    ///
    /// Neighbor counts read committed `alive` values only, so the whole
    /// generation is evaluated against one consistent snapshot.
    fn compute_pending(&mut self) {
        for i in 0..self.cells.len() {
            let alive_neighbors = self.cells[i]
                .neighbors()
                .iter()
                .filter(|&&n| self.cells[n].is_alive())
                .count() as u8;
            let next = transition(self.cells[i].is_alive(), alive_neighbors);
            self.cells[i].set_pending(next);
        }
    }

    /// Apply phase: commit staged values, reporting the changed indices.
    fn apply_pending(&mut self) -> Vec<usize> {
        let mut changed = Vec::new();
        for (i, cell) in self.cells.iter_mut().enumerate() {
            if cell.needs_update() {
                cell.commit();
                changed.push(i);
            }
        }
        changed
    }
}
