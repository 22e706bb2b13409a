//! Double-buffered ping-pong cell store.
//!
//! [`GridStore`] keeps two equally-sized cell buffers that alternate
//! between "current" (readable) and "next" (writable) roles. On
//! [`GridStore::swap`], next becomes current and the old current becomes
//! the next write target.
//!
//! The lifecycle per generation is:
//! 1. `split()`: borrow current as a `Snapshot` and next as a `WriteBuffer`
//! 2. The rule evaluator reads the snapshot and writes every cell of next
//! 3. Both borrows end
//! 4. `swap()`: flip the role flag
//!
//! Seeding uses the same protocol: `set()` into next, then one `swap()`.

use lifegrid_core::GridError;
use lifegrid_space::Square8;

use crate::read::Snapshot;
use crate::write::WriteBuffer;

/// Double-buffered grid of boolean cells.
///
/// # Buffer layout
///
/// ```text
/// buffer_a  ←─── next (b_is_staging = false) / current (b_is_staging = true)
/// buffer_b  ←─── current (b_is_staging = false) / next (b_is_staging = true)
/// ```
///
/// Both buffers are allocated once at construction and never resized.
/// `swap()` only flips `b_is_staging`; no cell data moves.
#[derive(Clone)]
pub struct GridStore {
    /// Fixed topology.
    space: Square8,
    /// Cell buffer A.
    buffer_a: Vec<bool>,
    /// Cell buffer B.
    buffer_b: Vec<bool>,
    /// Which buffer is next (false = A next, true = B next).
    b_is_staging: bool,
    /// Number of swaps performed since construction or `clear()`.
    swaps: u64,
}

impl GridStore {
    /// Create a store of `rows * cols` cells, every cell dead in both buffers.
    ///
    /// Returns `Err(GridError)` if either dimension is zero or too large.
    pub fn new(rows: u32, cols: u32) -> Result<Self, GridError> {
        Ok(Self::with_space(Square8::new(rows, cols)?))
    }

    /// Create a store over an already-validated topology.
    pub fn with_space(space: Square8) -> Self {
        let n = space.cell_count();
        log::trace!("allocating {}x{} grid store", space.rows(), space.cols());
        Self {
            space,
            buffer_a: vec![false; n],
            buffer_b: vec![false; n],
            b_is_staging: false,
            swaps: 0,
        }
    }

    /// The grid topology.
    pub fn space(&self) -> &Square8 {
        &self.space
    }

    /// Number of rows.
    pub fn rows(&self) -> u32 {
        self.space.rows()
    }

    /// Number of columns.
    pub fn cols(&self) -> u32 {
        self.space.cols()
    }

    /// Total number of cells.
    pub fn cell_count(&self) -> usize {
        self.space.cell_count()
    }

    /// Alive state of `(row, col)` in the current buffer.
    ///
    /// Cells outside the grid are permanently dead.
    pub fn get(&self, row: i32, col: i32) -> bool {
        self.snapshot().get(row, col)
    }

    /// Write `state` at `(row, col)` in the next buffer.
    ///
    /// Not visible to [`get`](Self::get) until [`swap`](Self::swap).
    /// Returns `Err(GridError::CoordOutOfBounds)` outside the grid.
    pub fn set(&mut self, row: i32, col: i32, state: bool) -> Result<(), GridError> {
        self.next_buffer().set(row, col, state)
    }

    /// Mark `(row, col)` alive in the next buffer.
    pub fn seed(&mut self, row: i32, col: i32) -> Result<(), GridError> {
        self.set(row, col, true)
    }

    /// Exchange the current and next roles. O(1); copies nothing.
    pub fn swap(&mut self) {
        self.b_is_staging = !self.b_is_staging;
        self.swaps += 1;
        log::trace!("buffer swap #{}", self.swaps);
    }

    /// Number of swaps since construction or the last `clear()`.
    pub fn swap_count(&self) -> u64 {
        self.swaps
    }

    /// Copy the current buffer into the next buffer.
    ///
    /// After a step, next holds the generation before current. Edits that
    /// should layer on top of the visible board call this first so the
    /// following `swap()` does not resurrect stale cells.
    pub fn stage_current(&mut self) {
        if self.b_is_staging {
            self.buffer_b.copy_from_slice(&self.buffer_a);
        } else {
            self.buffer_a.copy_from_slice(&self.buffer_b);
        }
    }

    /// Borrow the current buffer.
    pub fn snapshot(&self) -> Snapshot<'_> {
        let current = if self.b_is_staging {
            &self.buffer_a
        } else {
            &self.buffer_b
        };
        Snapshot::new(&self.space, current)
    }

    /// Borrow the current buffer for reading and the next for writing.
    ///
    /// The two borrows are disjoint, and neither can outlive the `&mut
    /// self` borrow, so `swap()` cannot run while either is held.
    pub fn split(&mut self) -> (Snapshot<'_>, WriteBuffer<'_>) {
        let (current, next) = if self.b_is_staging {
            (&self.buffer_a, &mut self.buffer_b)
        } else {
            (&self.buffer_b, &mut self.buffer_a)
        };
        (
            Snapshot::new(&self.space, current),
            WriteBuffer::new(&self.space, next),
        )
    }

    /// Number of live cells in the current buffer.
    pub fn live_count(&self) -> usize {
        lifegrid_core::CellReader::live_count(&self.snapshot())
    }

    /// Live cells of the current buffer in row-major order.
    pub fn live_cells(&self) -> Vec<(i32, i32)> {
        self.snapshot().live_cells().collect()
    }

    /// Kill every cell in both buffers and reset the swap counter.
    pub fn clear(&mut self) {
        self.buffer_a.fill(false);
        self.buffer_b.fill(false);
        self.b_is_staging = false;
        self.swaps = 0;
    }

    /// Memory used by both cell buffers, in bytes.
    pub fn memory_bytes(&self) -> usize {
        (self.buffer_a.len() + self.buffer_b.len()) * std::mem::size_of::<bool>()
    }

    fn next_buffer(&mut self) -> WriteBuffer<'_> {
        self.split().1
    }
}

impl std::fmt::Debug for GridStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GridStore")
            .field("rows", &self.rows())
            .field("cols", &self.cols())
            .field("b_is_staging", &self.b_is_staging)
            .field("swaps", &self.swaps)
            .finish()
    }
}
