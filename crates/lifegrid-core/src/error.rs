//! Precondition errors for grid construction and mutation.
//!
//! The simulator has exactly one error class: a caller handed the grid
//! something it can never accept (a zero-sized board, or a write outside
//! the board). These checks are always on, independent of build profile.
//! Out-of-range *reads* are not errors; they observe a dead cell.

use std::error::Error;
use std::fmt;

/// A violated precondition on a grid operation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum GridError {
    /// Attempted to construct a grid with a zero dimension.
    EmptyGrid {
        /// Requested row count.
        rows: u32,
        /// Requested column count.
        cols: u32,
    },
    /// A dimension does not fit the `i32` coordinate space.
    DimensionTooLarge {
        /// Which dimension (`"rows"` or `"cols"`).
        name: &'static str,
        /// The requested value.
        value: u32,
        /// The largest accepted value.
        max: u32,
    },
    /// `rows * cols` does not fit in `usize` on this platform.
    CellCountOverflow {
        /// Requested row count.
        rows: u32,
        /// Requested column count.
        cols: u32,
    },
    /// A mutating operation addressed a cell outside the grid.
    CoordOutOfBounds {
        /// Offending row.
        row: i32,
        /// Offending column.
        col: i32,
        /// Grid row count.
        rows: u32,
        /// Grid column count.
        cols: u32,
    },
}

impl fmt::Display for GridError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyGrid { rows, cols } => {
                write!(f, "grid must have at least one cell, got {rows}x{cols}")
            }
            Self::DimensionTooLarge { name, value, max } => {
                write!(f, "{name} = {value} exceeds maximum of {max}")
            }
            Self::CellCountOverflow { rows, cols } => {
                write!(f, "cell count {rows}x{cols} overflows usize")
            }
            Self::CoordOutOfBounds {
                row,
                col,
                rows,
                cols,
            } => {
                write!(
                    f,
                    "coordinate ({row}, {col}) out of bounds: [0, {rows}) x [0, {cols})"
                )
            }
        }
    }
}

impl Error for GridError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_out_of_bounds_names_the_range() {
        let e = GridError::CoordOutOfBounds {
            row: -1,
            col: 4,
            rows: 3,
            cols: 5,
        };
        assert_eq!(
            e.to_string(),
            "coordinate (-1, 4) out of bounds: [0, 3) x [0, 5)"
        );
    }

    #[test]
    fn display_empty_grid() {
        let e = GridError::EmptyGrid { rows: 0, cols: 7 };
        assert!(e.to_string().contains("0x7"));
    }
}
