//! Double-buffered cell storage for the lifegrid simulator.
//!
//! # Architecture
//!
//! The store uses a ping-pong design:
//!
//! ```text
//! GridStore
//! ├── Square8            (fixed topology: rows, cols, indexing)
//! ├── buffer_a: Vec<bool> ─┐ one is "current" (read-only during a step),
//! ├── buffer_b: Vec<bool> ─┘ the other is "next" (write-only during a step)
//! └── b_is_staging: bool  (which buffer is "next"; swap() flips it)
//! ```
//!
//! Reads go through [`Snapshot`] (a borrow of the current buffer) and
//! writes through [`WriteBuffer`] (a borrow of the next buffer).
//! [`GridStore::split()`] hands out both at once, so the borrow checker
//! proves a generation's reads never see its own writes.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod pingpong;
pub mod read;
pub mod write;

pub use pingpong::GridStore;
pub use read::Snapshot;
pub use write::WriteBuffer;
