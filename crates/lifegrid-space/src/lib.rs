//! Spatial topology for the lifegrid simulator.
//!
//! Defines [`Square8`], a finite two-dimensional lattice with an
//! 8-connected (Moore) neighbourhood and hard, non-wrapping edges.
//! Every other crate asks this one how a `(row, col)` pair maps onto a
//! buffer index and which cells surround it.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod square8;

pub use square8::{Neighbours, Square8, OFFSETS_8};
