//! Test utilities and mock types for lifegrid development.
//!
//! Provides a mock [`CellReader`] backed by a set of live coordinates,
//! helpers for comparing boards as sets, and ASCII board fixtures in
//! [`fixtures`].

#![forbid(unsafe_code)]
#![allow(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod fixtures;

use std::collections::{BTreeSet, HashSet};

use lifegrid_arena::GridStore;
use lifegrid_core::{CellReader, GridError};

pub use fixtures::{parse_board, render_board};

/// Mock implementation of [`CellReader`].
///
/// Backed by a `HashSet<(i32, i32)>` of live cells. Coordinates outside
/// `rows x cols` are never reported alive, even if inserted.
pub struct MockCellReader {
    rows: u32,
    cols: u32,
    live: HashSet<(i32, i32)>,
}

impl MockCellReader {
    pub fn from_cells<I>(rows: u32, cols: u32, cells: I) -> Self
    where
        I: IntoIterator<Item = (i32, i32)>,
    {
        Self {
            rows,
            cols,
            live: cells.into_iter().collect(),
        }
    }
}

impl CellReader for MockCellReader {
    fn rows(&self) -> u32 {
        self.rows
    }

    fn cols(&self) -> u32 {
        self.cols
    }

    fn is_alive(&self, row: i32, col: i32) -> bool {
        row >= 0
            && col >= 0
            && (row as u32) < self.rows
            && (col as u32) < self.cols
            && self.live.contains(&(row, col))
    }
}

/// Live cells of any reader, ordered for stable assertions.
pub fn live_set<R: CellReader + ?Sized>(reader: &R) -> BTreeSet<(i32, i32)> {
    let mut out = BTreeSet::new();
    for row in 0..reader.rows() as i32 {
        for col in 0..reader.cols() as i32 {
            if reader.is_alive(row, col) {
                out.insert((row, col));
            }
        }
    }
    out
}

/// A store whose current buffer holds exactly `cells`.
pub fn store_from_cells(rows: u32, cols: u32, cells: &[(i32, i32)]) -> Result<GridStore, GridError> {
    let mut store = GridStore::new(rows, cols)?;
    for &(row, col) in cells {
        store.seed(row, col)?;
    }
    store.swap();
    Ok(store)
}

/// `cells` shifted by `(dr, dc)`.
pub fn translated(cells: &BTreeSet<(i32, i32)>, dr: i32, dc: i32) -> BTreeSet<(i32, i32)> {
    cells.iter().map(|&(r, c)| (r + dr, c + dc)).collect()
}
