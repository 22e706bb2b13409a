//! Write-only view of the next generation.
//!
//! [`WriteBuffer`] holds a mutable borrow of the next buffer. It exposes
//! no reads, so code holding one cannot accidentally count neighbours
//! from a half-written generation.

use lifegrid_core::GridError;
use lifegrid_space::Square8;

/// Mutable access to the next generation's buffer.
///
/// Created by [`GridStore::split()`](crate::GridStore::split) and dropped
/// before [`GridStore::swap()`](crate::GridStore::swap).
pub struct WriteBuffer<'a> {
    space: &'a Square8,
    cells: &'a mut [bool],
}

impl<'a> WriteBuffer<'a> {
    pub(crate) fn new(space: &'a Square8, cells: &'a mut [bool]) -> Self {
        debug_assert_eq!(space.cell_count(), cells.len());
        Self { space, cells }
    }

    /// Write `state` at `(row, col)`.
    ///
    /// Returns `Err(GridError::CoordOutOfBounds)` outside the grid; the
    /// buffer is left untouched in that case.
    pub fn set(&mut self, row: i32, col: i32, state: bool) -> Result<(), GridError> {
        let i = self.space.checked_index(row, col)?;
        self.cells[i] = state;
        Ok(())
    }

    /// Overwrite every cell with `f(row, col)`, visiting cells row-major.
    ///
    /// Every cell of the buffer is written exactly once.
    pub fn fill_with(&mut self, mut f: impl FnMut(i32, i32) -> bool) {
        for ((row, col), cell) in self.space.cells().zip(self.cells.iter_mut()) {
            *cell = f(row, col);
        }
    }

    /// Number of cells in the buffer.
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Always `false`; grids have at least one cell.
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }
}
