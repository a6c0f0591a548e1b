/// A single double-buffered cell.
///
/// `alive` is the committed, externally visible state. `pending` holds the
/// value computed for the next generation until the apply phase commits it.
/// Keeping the two separate means a whole generation can be evaluated
/// against a stable snapshot; collapsing them into one field would let
/// early-updated cells corrupt the neighbor counts of cells evaluated later
/// in the same pass.
#[derive(Clone, Debug)]
pub struct Cell {
    alive: bool,
    pending: bool,
    neighbors: Vec<usize>,
}

impl Cell {
    /// New dead cell with its precomputed neighbor indices.
    /// The neighbor list is fixed for the lifetime of the grid.
    pub fn new(neighbors: Vec<usize>) -> Self {
        Self {
            alive: false,
            pending: false,
            neighbors,
        }
    }

    /// The committed state.
    pub const fn is_alive(&self) -> bool {
        self.alive
    }

    /// Precomputed neighbor indices, in canonical order.
    pub fn neighbors(&self) -> &[usize] {
        &self.neighbors
    }

    /// Stage a value for the next generation.
    pub fn set_pending(&mut self, alive: bool) {
        self.pending = alive;
    }

    /// Edit the committed state directly, bypassing the pending buffer.
    pub fn force(&mut self, alive: bool) {
        self.alive = alive;
    }

    /// Whether the apply phase would change this cell.
    pub const fn needs_update(&self) -> bool {
        self.alive != self.pending
    }

    /// Commit the pending value.
    pub fn commit(&mut self) {
        self.alive = self.pending;
    }
}

/// Conway's transition rule (B3/S23) for one cell:
/// fewer than 2 alive neighbors is death by isolation, more than 3 is
/// death by overcrowding, exactly 3 is birth or survival, exactly 2
/// keeps the current state.
pub const fn transition(alive: bool, alive_neighbors: u8) -> bool {
    match (alive, alive_neighbors) {
        (_, 3) => true,
        (current, 2) => current,
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_isolation() {
        assert!(!transition(true, 0));
        assert!(!transition(true, 1));
    }

    #[test]
    fn test_survival() {
        assert!(transition(true, 2));
        assert!(transition(true, 3));
    }

    #[test]
    fn test_overcrowding() {
        assert!(!transition(true, 4));
        assert!(!transition(true, 8));
    }

    #[test]
    fn test_birth() {
        assert!(transition(false, 3));
        assert!(!transition(false, 2));
        assert!(!transition(false, 4));
    }

    #[test]
    fn test_commit_consumes_pending() {
        let mut cell = Cell::new(vec![1, 2]);
        assert!(!cell.is_alive());
        assert!(!cell.needs_update());

        cell.set_pending(true);
        assert!(cell.needs_update());
        cell.commit();
        assert!(cell.is_alive());
        assert!(!cell.needs_update());
    }
}
