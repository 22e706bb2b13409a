//! Core abstraction trait for reading a settled generation.

/// Read-only access to the cells of one settled generation.
///
/// Implemented by the arena's snapshot type and by test mocks. Renderers
/// and the rule evaluator only ever see a generation through this trait,
/// so they cannot observe a buffer that is still being written.
pub trait CellReader {
    /// Number of rows in the grid.
    fn rows(&self) -> u32;

    /// Number of columns in the grid.
    fn cols(&self) -> u32;

    /// Whether `(row, col)` is alive.
    ///
    /// Coordinates outside `[0, rows) x [0, cols)` are permanently dead
    /// and return `false`.
    fn is_alive(&self, row: i32, col: i32) -> bool;

    /// Number of live cells, scanning row-major.
    fn live_count(&self) -> usize {
        let mut n = 0;
        for r in 0..self.rows() as i32 {
            for c in 0..self.cols() as i32 {
                if self.is_alive(r, c) {
                    n += 1;
                }
            }
        }
        n
    }
}
