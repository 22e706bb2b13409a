//! ASCII board fixtures.
//!
//! Boards are written one row per line, `#` or `O` for a live cell and
//! `.` or a space for a dead one. Leading and trailing blank lines are
//! ignored; short rows are padded with dead cells.

use lifegrid_core::CellReader;

/// Parse an ASCII board into `(rows, cols, live cells)`.
pub fn parse_board(text: &str) -> (u32, u32, Vec<(i32, i32)>) {
    let lines: Vec<&str> = text
        .lines()
        .skip_while(|l| l.trim().is_empty())
        .collect();
    let lines: Vec<&str> = {
        let end = lines
            .iter()
            .rposition(|l| !l.trim().is_empty())
            .map_or(0, |i| i + 1);
        lines[..end].to_vec()
    };
    let rows = lines.len() as u32;
    let cols = lines.iter().map(|l| l.chars().count()).max().unwrap_or(0) as u32;
    let mut live = Vec::new();
    for (r, line) in lines.iter().enumerate() {
        for (c, ch) in line.chars().enumerate() {
            if ch == '#' || ch == 'O' {
                live.push((r as i32, c as i32));
            }
        }
    }
    (rows, cols, live)
}

/// Render a reader as `#`/`.` rows joined by newlines.
pub fn render_board<R: CellReader + ?Sized>(reader: &R) -> String {
    let mut out = String::new();
    for row in 0..reader.rows() as i32 {
        if row > 0 {
            out.push('\n');
        }
        for col in 0..reader.cols() as i32 {
            out.push(if reader.is_alive(row, col) { '#' } else { '.' });
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::MockCellReader;

    #[test]
    fn parse_then_render() {
        let text = "
.#.
..#
###
";
        let (rows, cols, live) = parse_board(text);
        assert_eq!((rows, cols), (3, 3));
        assert_eq!(live.len(), 5);
        let reader = MockCellReader::from_cells(rows, cols, live);
        assert_eq!(render_board(&reader), ".#.\n..#\n###");
    }

    #[test]
    fn short_rows_are_padded() {
        let (rows, cols, live) = parse_board("#\n..#");
        assert_eq!((rows, cols), (2, 3));
        assert_eq!(live, vec![(0, 0), (1, 2)]);
    }
}
