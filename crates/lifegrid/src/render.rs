//! Terminal output of board frames.
//!
//! Each frame is written as one row of glyphs per board row, `#` for a
//! live cell and a space for a dead one by default. When clearing is on,
//! the frame is prefixed with an ANSI clear-screen and cursor-home
//! sequence so successive frames overwrite each other.

use std::fmt::Write as _;
use std::io::{self, Write};

use lifegrid_core::CellReader;
use lifegrid_engine::{Frame, RenderSink};

/// ANSI: erase the screen and move the cursor to the top-left corner.
pub const CLEAR_SCREEN: &str = "\x1b[2J\x1b[H";

/// Writes frames as text to any [`Write`] target.
pub struct TerminalRenderer<W: Write> {
    out: W,
    alive: char,
    dead: char,
    clear: bool,
    status: bool,
    buf: String,
}

impl<W: Write> TerminalRenderer<W> {
    /// Render to `out` with `#`/space glyphs and screen clearing on.
    pub fn new(out: W) -> Self {
        Self {
            out,
            alive: '#',
            dead: ' ',
            clear: true,
            status: false,
            buf: String::new(),
        }
    }

    /// Use `alive` and `dead` as cell glyphs.
    pub fn with_glyphs(mut self, alive: char, dead: char) -> Self {
        self.alive = alive;
        self.dead = dead;
        self
    }

    /// Turn the clear-screen prefix on or off.
    pub fn with_clear(mut self, clear: bool) -> Self {
        self.clear = clear;
        self
    }

    /// Append a `generation N, M alive` line under each frame.
    pub fn with_status_line(mut self, status: bool) -> Self {
        self.status = status;
        self
    }

    /// Recover the output target.
    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> RenderSink for TerminalRenderer<W> {
    fn render(&mut self, frame: &Frame<'_>) -> io::Result<()> {
        self.buf.clear();
        if self.clear {
            self.buf.push_str(CLEAR_SCREEN);
        }
        push_rows(&mut self.buf, frame.cells, self.alive, self.dead);
        if self.status {
            // Writing to a String cannot fail.
            let _ = writeln!(
                self.buf,
                "generation {}, {} alive",
                frame.generation,
                frame.cells.live_count()
            );
        }
        self.out.write_all(self.buf.as_bytes())?;
        self.out.flush()
    }
}

/// The board as text, one newline-terminated line per row.
pub fn render_to_string<R: CellReader + ?Sized>(reader: &R, alive: char, dead: char) -> String {
    let mut out = String::new();
    push_rows(&mut out, reader, alive, dead);
    out
}

fn push_rows<R: CellReader + ?Sized>(out: &mut String, reader: &R, alive: char, dead: char) {
    let rows = reader.rows() as i32;
    let cols = reader.cols() as i32;
    out.reserve((reader.rows() as usize) * (reader.cols() as usize + 1));
    for row in 0..rows {
        for col in 0..cols {
            out.push(if reader.is_alive(row, col) { alive } else { dead });
        }
        out.push('\n');
    }
}
