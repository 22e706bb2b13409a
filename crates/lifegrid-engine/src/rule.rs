//! Conway's B3/S23 rule.

use lifegrid_core::CellReader;
use lifegrid_space::Square8;

/// Next alive state of a cell given its current state and live neighbour count.
///
/// A live cell survives with 2 or 3 live neighbours (`n > 1 && n < 4`);
/// a dead cell is born with exactly 3. Everything else is dead.
pub fn next_state(alive: bool, live_neighbours: u8) -> bool {
    matches!((alive, live_neighbours), (true, 2) | (true, 3) | (false, 3))
}

/// Live cells among the in-bounds neighbours of `(row, col)` on `space`,
/// excluding the cell itself.
///
/// Neighbours come from [`Square8::neighbours`], so cells past an edge are
/// never visited and edge cells simply have fewer candidates.
pub fn count_live_neighbours<R: CellReader + ?Sized>(
    space: &Square8,
    reader: &R,
    row: i32,
    col: i32,
) -> u8 {
    let mut n = 0;
    for (r, c) in space.neighbours(row, col) {
        if reader.is_alive(r, c) {
            n += 1;
        }
    }
    n
}
