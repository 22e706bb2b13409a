//! Bounded Life board topology: the Moore neighbourhood with dead edges.

use lifegrid_core::GridError;
use smallvec::SmallVec;

/// Moore neighbourhood offsets as `(d_row, d_col)`, orthogonal first.
pub const OFFSETS_8: [(i32, i32); 8] = [
    (-1, 0),
    (1, 0),
    (0, -1),
    (0, 1),
    (-1, -1),
    (-1, 1),
    (1, -1),
    (1, 1),
];

/// In-bounds neighbours of one cell, as `(row, col)` pairs.
pub type Neighbours = SmallVec<[(i32, i32); 8]>;

/// A bounded two-dimensional square grid with 8-connected neighbourhood.
///
/// Each cell has coordinate `(row, col)` and linear index
/// `row * cols + col`. Edges absorb: a neighbour that would fall outside
/// the grid is omitted, so corner cells have 3 neighbours, edge cells 5,
/// and interior cells 8. Nothing wraps.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Square8 {
    rows: u32,
    cols: u32,
}

impl Square8 {
    /// Largest accepted row or column count; coordinates are `i32`.
    pub const MAX_DIM: u32 = i32::MAX as u32;

    /// Create a new 2D grid with `rows * cols` cells.
    ///
    /// Returns `Err(GridError::EmptyGrid)` if either dimension is 0,
    /// `Err(GridError::DimensionTooLarge)` if either exceeds `i32::MAX`,
    /// or `Err(GridError::CellCountOverflow)` if the product does not fit
    /// in `usize`.
    pub fn new(rows: u32, cols: u32) -> Result<Self, GridError> {
        if rows == 0 || cols == 0 {
            return Err(GridError::EmptyGrid { rows, cols });
        }
        if rows > Self::MAX_DIM {
            return Err(GridError::DimensionTooLarge {
                name: "rows",
                value: rows,
                max: Self::MAX_DIM,
            });
        }
        if cols > Self::MAX_DIM {
            return Err(GridError::DimensionTooLarge {
                name: "cols",
                value: cols,
                max: Self::MAX_DIM,
            });
        }
        if (rows as usize).checked_mul(cols as usize).is_none() {
            return Err(GridError::CellCountOverflow { rows, cols });
        }
        Ok(Self { rows, cols })
    }

    /// Number of rows.
    pub fn rows(&self) -> u32 {
        self.rows
    }

    /// Number of columns.
    pub fn cols(&self) -> u32 {
        self.cols
    }

    /// Total number of cells.
    pub fn cell_count(&self) -> usize {
        (self.rows as usize) * (self.cols as usize)
    }

    /// Whether `(row, col)` lies inside `[0, rows) x [0, cols)`.
    pub fn contains(&self, row: i32, col: i32) -> bool {
        row >= 0 && col >= 0 && (row as u32) < self.rows && (col as u32) < self.cols
    }

    /// Linear buffer index of `(row, col)`, or `None` outside the grid.
    pub fn index(&self, row: i32, col: i32) -> Option<usize> {
        if self.contains(row, col) {
            Some(row as usize * self.cols as usize + col as usize)
        } else {
            None
        }
    }

    /// Like [`index`](Self::index), but reports the violation.
    pub fn checked_index(&self, row: i32, col: i32) -> Result<usize, GridError> {
        self.index(row, col).ok_or(GridError::CoordOutOfBounds {
            row,
            col,
            rows: self.rows,
            cols: self.cols,
        })
    }

    /// Inverse of [`index`](Self::index).
    pub fn coord(&self, index: usize) -> Option<(i32, i32)> {
        if index >= self.cell_count() {
            return None;
        }
        let cols = self.cols as usize;
        Some(((index / cols) as i32, (index % cols) as i32))
    }

    /// The in-bounds 8-connected neighbours of `(row, col)`.
    ///
    /// The centre itself is never included. A centre outside the grid is
    /// accepted; only the neighbours that land inside are returned.
    pub fn neighbours(&self, row: i32, col: i32) -> Neighbours {
        let mut out = SmallVec::new();
        for (dr, dc) in OFFSETS_8 {
            let (Some(nr), Some(nc)) = (row.checked_add(dr), col.checked_add(dc)) else {
                continue;
            };
            if self.contains(nr, nc) {
                out.push((nr, nc));
            }
        }
        out
    }

    /// Row-major canonical ordering: `(0,0), (0,1), ..., (rows-1, cols-1)`.
    ///
    /// Yields exactly [`cell_count`](Self::cell_count) coordinates, in
    /// linear-index order.
    pub fn cells(&self) -> impl Iterator<Item = (i32, i32)> {
        let cols = self.cols as i32;
        (0..self.rows as i32).flat_map(move |r| (0..cols).map(move |c| (r, c)))
    }
}
