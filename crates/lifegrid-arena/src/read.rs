//! Read-only view of the current generation.
//!
//! [`Snapshot`] borrows the current buffer of a [`crate::GridStore`] and
//! implements [`CellReader`]. It is what the rule evaluator and renderers
//! read from.

use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};

use lifegrid_core::CellReader;
use lifegrid_space::Square8;

/// A read-only view of one settled generation.
///
/// `'a` is the borrow of the `GridStore`. While a snapshot is alive the
/// store cannot be swapped, so the generation it shows cannot change
/// underneath it.
#[derive(Clone, Copy)]
pub struct Snapshot<'a> {
    space: &'a Square8,
    cells: &'a [bool],
}

impl<'a> Snapshot<'a> {
    pub(crate) fn new(space: &'a Square8, cells: &'a [bool]) -> Self {
        debug_assert_eq!(space.cell_count(), cells.len());
        Self { space, cells }
    }

    /// The grid topology.
    pub fn space(&self) -> &'a Square8 {
        self.space
    }

    /// Alive state of `(row, col)`; `false` outside the grid.
    pub fn get(&self, row: i32, col: i32) -> bool {
        match self.space.index(row, col) {
            Some(i) => self.cells[i],
            None => false,
        }
    }

    /// The raw row-major cell buffer.
    pub fn cells(&self) -> &'a [bool] {
        self.cells
    }

    /// Live cells in row-major order.
    pub fn live_cells(&self) -> impl Iterator<Item = (i32, i32)> + 'a {
        let space = self.space;
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, &alive)| alive)
            .filter_map(move |(i, _)| space.coord(i))
    }

    /// Hash of the cell buffer.
    ///
    /// Equal boards always hash equal; unequal boards collide only with
    /// 64-bit hash probability.
    pub fn fingerprint(&self) -> u64 {
        let mut hasher = DefaultHasher::new();
        self.space.rows().hash(&mut hasher);
        self.space.cols().hash(&mut hasher);
        self.cells.hash(&mut hasher);
        hasher.finish()
    }
}

impl CellReader for Snapshot<'_> {
    fn rows(&self) -> u32 {
        self.space.rows()
    }

    fn cols(&self) -> u32 {
        self.space.cols()
    }

    fn is_alive(&self, row: i32, col: i32) -> bool {
        self.get(row, col)
    }

    fn live_count(&self) -> usize {
        self.cells.iter().filter(|&&alive| alive).count()
    }
}

impl std::fmt::Debug for Snapshot<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Snapshot")
            .field("rows", &self.space.rows())
            .field("cols", &self.space.cols())
            .field("live", &CellReader::live_count(self))
            .finish()
    }
}
