//! Named seed patterns.
//!
//! Each [`Pattern`] is a list of `(row, col)` offsets relative to its
//! top-left corner. [`library()`] returns them in a fixed, documented
//! order; [`find()`] looks one up by name.

use std::sync::OnceLock;

use indexmap::IndexMap;

/// A named arrangement of live cells.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Pattern {
    /// Lookup key, lowercase with dashes.
    pub name: &'static str,
    /// One-line description.
    pub description: &'static str,
    /// Live cells as `(row, col)` offsets from the pattern origin.
    pub cells: &'static [(i32, i32)],
}

impl Pattern {
    /// The live cells translated so the pattern's origin sits at `origin`.
    ///
    /// Saturates instead of overflowing; a saturated coordinate is always
    /// outside any grid and gets rejected when seeded.
    pub fn placed(&self, origin: (i32, i32)) -> impl Iterator<Item = (i32, i32)> + '_ {
        self.cells
            .iter()
            .map(move |&(r, c)| (origin.0.saturating_add(r), origin.1.saturating_add(c)))
    }

    /// Height and width of the pattern's bounding box.
    pub fn extent(&self) -> (i32, i32) {
        let rows = self.cells.iter().map(|&(r, _)| r + 1).max().unwrap_or(0);
        let cols = self.cells.iter().map(|&(_, c)| c + 1).max().unwrap_or(0);
        (rows, cols)
    }
}

/// Pattern seeded when no other is requested.
pub const DEFAULT_PATTERN: &str = "acorn";

/// Where [`DEFAULT_PATTERN`] is placed on the default 30x50 board.
pub const DEFAULT_ORIGIN: (i32, i32) = (10, 9);

const PATTERNS: &[Pattern] = &[
    Pattern {
        name: "block",
        description: "2x2 still life",
        cells: &[(0, 0), (0, 1), (1, 0), (1, 1)],
    },
    Pattern {
        name: "beehive",
        description: "6-cell still life",
        cells: &[(0, 1), (0, 2), (1, 0), (1, 3), (2, 1), (2, 2)],
    },
    Pattern {
        name: "blinker",
        description: "period-2 oscillator, horizontal phase",
        cells: &[(0, 0), (0, 1), (0, 2)],
    },
    Pattern {
        name: "toad",
        description: "period-2 oscillator",
        cells: &[(0, 1), (0, 2), (0, 3), (1, 0), (1, 1), (1, 2)],
    },
    Pattern {
        name: "beacon",
        description: "period-2 oscillator made of two blocks",
        cells: &[
            (0, 0),
            (0, 1),
            (1, 0),
            (1, 1),
            (2, 2),
            (2, 3),
            (3, 2),
            (3, 3),
        ],
    },
    Pattern {
        name: "glider",
        description: "spaceship moving one cell diagonally every 4 generations",
        cells: &[(0, 1), (1, 2), (2, 0), (2, 1), (2, 2)],
    },
    Pattern {
        name: "r-pentomino",
        description: "5-cell methuselah",
        cells: &[(0, 1), (0, 2), (1, 0), (1, 1), (2, 1)],
    },
    Pattern {
        name: "acorn",
        description: "7-cell methuselah",
        cells: &[(0, 1), (1, 3), (2, 0), (2, 1), (2, 4), (2, 5), (2, 6)],
    },
    Pattern {
        name: "diehard",
        description: "7-cell pattern that vanishes after 130 generations",
        cells: &[(0, 6), (1, 0), (1, 1), (2, 1), (2, 5), (2, 6), (2, 7)],
    },
    Pattern {
        name: "gosper-glider-gun",
        description: "period-30 glider gun",
        cells: &[
            (4, 0),
            (5, 0),
            (4, 1),
            (5, 1),
            (4, 10),
            (5, 10),
            (6, 10),
            (3, 11),
            (7, 11),
            (2, 12),
            (8, 12),
            (2, 13),
            (8, 13),
            (5, 14),
            (3, 15),
            (7, 15),
            (4, 16),
            (5, 16),
            (6, 16),
            (5, 17),
            (2, 20),
            (3, 20),
            (4, 20),
            (2, 21),
            (3, 21),
            (4, 21),
            (1, 22),
            (5, 22),
            (0, 24),
            (1, 24),
            (5, 24),
            (6, 24),
            (2, 34),
            (3, 34),
            (2, 35),
            (3, 35),
        ],
    },
];

/// Every built-in pattern, keyed by name, in declaration order.
pub fn library() -> &'static IndexMap<&'static str, Pattern> {
    static LIBRARY: OnceLock<IndexMap<&'static str, Pattern>> = OnceLock::new();
    LIBRARY.get_or_init(|| PATTERNS.iter().map(|p| (p.name, *p)).collect())
}

/// Look up a built-in pattern by name (case-insensitive).
pub fn find(name: &str) -> Option<&'static Pattern> {
    let lib = library();
    lib.get(name)
        .or_else(|| lib.get(name.to_ascii_lowercase().as_str()))
}
