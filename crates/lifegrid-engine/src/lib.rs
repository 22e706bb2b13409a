//! Simulation engine for the lifegrid Game of Life simulator.
//!
//! Provides [`SimulationEngine`], which applies Conway's rule to a
//! double-buffered [`GridStore`](lifegrid_arena::GridStore) one generation
//! at a time, and [`Driver`], the paced render/step loop that runs an
//! engine against a [`RenderSink`] until a generation limit, a stop
//! request, or a repeating board ends the run.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod config;
pub mod cycle;
pub mod driver;
pub mod engine;
pub mod metrics;
pub mod patterns;
pub mod rule;

pub use config::{ConfigError, LifeConfig, SeedSource};
pub use cycle::CycleDetector;
pub use driver::{
    stop_channel, Driver, DriverError, Frame, RenderSink, RunSummary, StopHandle, StopReason,
    StopSignal,
};
pub use engine::SimulationEngine;
pub use metrics::StepMetrics;
pub use patterns::Pattern;
pub use rule::{count_live_neighbours, next_state};
