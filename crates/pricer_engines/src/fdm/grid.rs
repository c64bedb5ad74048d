//! Dense price grid for the finite-difference solver.

/// Two-dimensional option value grid indexed by (asset step, time step).
///
/// Stored as a single contiguous buffer in row-major order (asset-step
/// major) rather than nested vectors, avoiding per-row allocations and
/// keeping backward induction cache-friendly. Accessors are bounds-checked;
/// an out-of-range index is a programming error and panics.
///
/// One grid is owned exclusively by one solver invocation and discarded at
/// its end.
pub struct PriceGrid {
    /// Values, `(space_steps + 1) × (time_steps + 1)` entries.
    values: Vec<f64>,
    space_steps: usize,
    time_steps: usize,
}

impl PriceGrid {
    /// Allocates a zeroed grid with `space_steps + 1` asset nodes and
    /// `time_steps + 1` time columns.
    pub fn new(space_steps: usize, time_steps: usize) -> Self {
        Self {
            values: vec![0.0; (space_steps + 1) * (time_steps + 1)],
            space_steps,
            time_steps,
        }
    }

    /// Number of asset steps (nodes run `0..=space_steps`).
    #[inline]
    pub fn space_steps(&self) -> usize {
        self.space_steps
    }

    /// Number of time steps (columns run `0..=time_steps`).
    #[inline]
    pub fn time_steps(&self) -> usize {
        self.time_steps
    }

    /// Returns the value at asset step `i`, time step `j`.
    #[inline]
    pub fn at(&self, i: usize, j: usize) -> f64 {
        self.values[self.index(i, j)]
    }

    /// Sets the value at asset step `i`, time step `j`.
    #[inline]
    pub fn set(&mut self, i: usize, j: usize, value: f64) {
        let idx = self.index(i, j);
        self.values[idx] = value;
    }

    #[inline]
    fn index(&self, i: usize, j: usize) -> usize {
        assert!(
            i <= self.space_steps && j <= self.time_steps,
            "grid index ({i}, {j}) out of bounds ({}, {})",
            self.space_steps,
            self.time_steps
        );
        i * (self.time_steps + 1) + j
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_grid_is_zeroed() {
        let grid = PriceGrid::new(4, 3);
        for i in 0..=4 {
            for j in 0..=3 {
                assert_eq!(grid.at(i, j), 0.0);
            }
        }
    }

    #[test]
    fn set_then_read_back() {
        let mut grid = PriceGrid::new(4, 3);
        grid.set(2, 1, 7.5);
        grid.set(4, 3, -1.0);

        assert_eq!(grid.at(2, 1), 7.5);
        assert_eq!(grid.at(4, 3), -1.0);
        assert_eq!(grid.at(1, 2), 0.0);
    }

    #[test]
    fn cells_do_not_alias() {
        // (i, j) and (j, i) must address different storage.
        let mut grid = PriceGrid::new(5, 5);
        grid.set(1, 2, 1.0);
        grid.set(2, 1, 2.0);
        assert_eq!(grid.at(1, 2), 1.0);
        assert_eq!(grid.at(2, 1), 2.0);
    }

    #[test]
    #[should_panic(expected = "out of bounds")]
    fn asset_index_past_end_panics() {
        let grid = PriceGrid::new(4, 3);
        grid.at(5, 0);
    }

    #[test]
    #[should_panic(expected = "out of bounds")]
    fn time_index_past_end_panics() {
        let grid = PriceGrid::new(4, 3);
        grid.at(0, 4);
    }
}
