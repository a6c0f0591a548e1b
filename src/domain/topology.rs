/// Neighbor adjacency for a flattened row-major grid.
///
/// The grid has hard edges: cells on the border simply have fewer
/// neighbors, nothing wraps around.
///
/// Compute the neighbor indices of `index` on a `rows` x `columns` grid.
///
/// Emits in a fixed canonical order: top-left, top, top-right, left,
/// right, bottom-left, bottom, bottom-right, skipping any position that
/// falls outside the grid. The order carries no meaning for the rule
/// (only the count matters) but keeps results reproducible.
///
/// Precondition: `index < rows * columns`, `rows >= 1`, `columns >= 1`.
pub fn neighbors_of(index: usize, rows: usize, columns: usize) -> Vec<usize> {
    let first_row = index / columns == 0;
    let last_row = index / columns == rows - 1;
    let first_column = index % columns == 0;
    let last_column = index % columns == columns - 1;

    let mut neighbors = Vec::with_capacity(8);

    if !first_row {
        if !first_column {
            neighbors.push(index - columns - 1);
        }
        neighbors.push(index - columns);
        if !last_column {
            neighbors.push(index - columns + 1);
        }
    }
    if !first_column {
        neighbors.push(index - 1);
    }
    if !last_column {
        neighbors.push(index + 1);
    }
    if !last_row {
        if !first_column {
            neighbors.push(index + columns - 1);
        }
        neighbors.push(index + columns);
        if !last_column {
            neighbors.push(index + columns + 1);
        }
    }

    neighbors
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_valid(neighbors: &[usize], index: usize, total: usize) {
        assert!(!neighbors.contains(&index), "cell {} is its own neighbor", index);
        for &n in neighbors {
            assert!(n < total, "neighbor {} of cell {} out of range", n, index);
        }
    }

    #[test]
    fn test_corner_cells_have_three_neighbors() {
        // 4x5 grid, corners at 0, 4, 15, 19
        for corner in [0, 4, 15, 19] {
            let n = neighbors_of(corner, 4, 5);
            assert_eq!(n.len(), 3, "corner {}", corner);
            assert_valid(&n, corner, 20);
        }
    }

    #[test]
    fn test_edge_cells_have_five_neighbors() {
        // 4x5 grid: top edge 1-3, left edge 5/10, right edge 9/14, bottom 16-18
        for edge in [1, 2, 3, 5, 10, 9, 14, 16, 17, 18] {
            let n = neighbors_of(edge, 4, 5);
            assert_eq!(n.len(), 5, "edge {}", edge);
            assert_valid(&n, edge, 20);
        }
    }

    #[test]
    fn test_interior_cells_have_eight_neighbors() {
        for interior in [6, 7, 8, 11, 12, 13] {
            let n = neighbors_of(interior, 4, 5);
            assert_eq!(n.len(), 8, "interior {}", interior);
            assert_valid(&n, interior, 20);
        }
    }

    #[test]
    fn test_canonical_order() {
        // Center of a 3x3 grid: all eight neighbors, fixed order
        assert_eq!(neighbors_of(4, 3, 3), vec![0, 1, 2, 3, 5, 6, 7, 8]);
        // Top-left corner: right, bottom, bottom-right
        assert_eq!(neighbors_of(0, 3, 3), vec![1, 3, 4]);
        // Bottom-right corner: top-left, top, left
        assert_eq!(neighbors_of(8, 3, 3), vec![4, 5, 7]);
    }

    #[test]
    fn test_single_cell_grid() {
        assert!(neighbors_of(0, 1, 1).is_empty());
    }

    #[test]
    fn test_single_row_grid() {
        // 1x4: ends have one neighbor, interior cells two
        assert_eq!(neighbors_of(0, 1, 4), vec![1]);
        assert_eq!(neighbors_of(1, 1, 4), vec![0, 2]);
        assert_eq!(neighbors_of(2, 1, 4), vec![1, 3]);
        assert_eq!(neighbors_of(3, 1, 4), vec![2]);
    }

    #[test]
    fn test_single_column_grid() {
        // 4x1: neighbors are directly above/below
        assert_eq!(neighbors_of(0, 4, 1), vec![1]);
        assert_eq!(neighbors_of(1, 4, 1), vec![0, 2]);
        assert_eq!(neighbors_of(3, 4, 1), vec![2]);
    }
}
