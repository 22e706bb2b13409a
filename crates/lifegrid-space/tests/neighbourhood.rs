use lifegrid_space::{Square8, OFFSETS_8};

#[test]
fn offsets_are_the_moore_neighbourhood() {
    let mut offsets = OFFSETS_8.to_vec();
    offsets.sort_unstable();
    let mut expected = Vec::new();
    for dr in -1..=1 {
        for dc in -1..=1 {
            if (dr, dc) != (0, 0) {
                expected.push((dr, dc));
            }
        }
    }
    assert_eq!(offsets, expected);
}

#[test]
fn neighbour_total_matches_edge_accounting() {
    // 4 corners * 3 + edge cells * 5 + interior * 8 on a 4x6 grid.
    let s = Square8::new(4, 6).unwrap();
    let total: usize = s.cells().map(|(r, c)| s.neighbours(r, c).len()).sum();
    let edge_cells = 2 * (4 - 2) + 2 * (6 - 2);
    let interior = (4 - 2) * (6 - 2);
    assert_eq!(total, 4 * 3 + edge_cells * 5 + interior * 8);
}
