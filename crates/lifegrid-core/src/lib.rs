//! Core types and traits for the lifegrid simulator.
//!
//! This is the leaf crate with zero internal dependencies. It defines
//! the abstractions shared by every other crate in the workspace:
//! the generation counter, the precondition error taxonomy, and the
//! read-only [`CellReader`] trait through which renderers and the rule
//! evaluator observe a settled generation.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod error;
pub mod id;
pub mod traits;

pub use error::GridError;
pub use id::Generation;
pub use traits::CellReader;
