//! lifegrid: Conway's Game of Life on a fixed, double-buffered grid.
//!
//! This is the top-level facade crate that re-exports the public API from
//! the lifegrid sub-crates, plus the terminal renderer and argument parser
//! used by the `lifegrid` binary.
//!
//! # Quick start
//!
//! ```rust
//! use lifegrid::prelude::*;
//!
//! let mut engine = SimulationEngine::new(6, 6).unwrap();
//! engine.seed_all([(1, 1), (1, 2), (2, 1), (2, 2)]).unwrap();
//! engine.step();
//! assert_eq!(engine.live_count(), 4);
//!
//! let text = render_to_string(&engine, '#', '.');
//! assert!(text.starts_with("......\n.##...\n"));
//! ```
//!
//! # Modules
//!
//! | Module | Sub-crate | Contents |
//! |--------|-----------|----------|
//! | [`types`] | `lifegrid-core` | `GridError`, `Generation`, `CellReader` |
//! | [`space`] | `lifegrid-space` | `Square8` topology and neighbour offsets |
//! | [`arena`] | `lifegrid-arena` | `GridStore`, `Snapshot`, `WriteBuffer` |
//! | [`engine`] | `lifegrid-engine` | Stepping, config, patterns, driver |
//! | [`render`] | this crate | Terminal frame output |
//! | [`cli`] | this crate | Command-line parsing |

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod cli;
pub mod render;

/// Error type, generation counter, and the read trait (`lifegrid-core`).
pub use lifegrid_core as types;

/// Grid topology (`lifegrid-space`).
pub use lifegrid_space as space;

/// Double-buffered cell storage (`lifegrid-arena`).
pub use lifegrid_arena as arena;

/// Rule evaluation, stepping, configuration, and the run driver
/// (`lifegrid-engine`).
pub use lifegrid_engine as engine;

/// Common imports for typical lifegrid usage.
pub mod prelude {
    pub use lifegrid_arena::{GridStore, Snapshot};
    pub use lifegrid_core::{CellReader, Generation, GridError};
    pub use lifegrid_engine::{
        stop_channel, ConfigError, Driver, DriverError, Frame, LifeConfig, RenderSink,
        RunSummary, SeedSource, SimulationEngine, StepMetrics, StopHandle, StopReason,
        StopSignal,
    };
    pub use lifegrid_space::Square8;

    pub use crate::render::{render_to_string, TerminalRenderer};
}
