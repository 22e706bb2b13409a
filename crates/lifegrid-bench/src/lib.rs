//! Benchmark profiles for the lifegrid simulator.
//!
//! - [`reference_profile`]: 100x100 board, 30% random fill
//! - [`stress_profile`]: 316x316 board (~100K cells), 30% random fill
//! - [`seeded_engine`]: build and seed an engine from a profile

#![forbid(unsafe_code)]
#![deny(rustdoc::broken_intra_doc_links)]

use std::time::Duration;

use lifegrid_engine::{ConfigError, LifeConfig, SeedSource, SimulationEngine};

/// 100x100 board (10K cells) with a reproducible random fill.
pub fn reference_profile(seed: u64) -> LifeConfig {
    random_profile(100, 100, seed)
}

/// 316x316 board (~100K cells) with a reproducible random fill.
pub fn stress_profile(seed: u64) -> LifeConfig {
    random_profile(316, 316, seed)
}

/// `rows x cols` board with a reproducible random fill.
pub fn random_profile(rows: u32, cols: u32, seed: u64) -> LifeConfig {
    LifeConfig {
        rows,
        cols,
        interval: Duration::ZERO,
        max_generations: None,
        seed: SeedSource::Random { density: 0.3, seed },
        stop_on_cycle: None,
    }
}

/// Seeded engine at generation 0 for `config`.
pub fn seeded_engine(config: &LifeConfig) -> Result<SimulationEngine, ConfigError> {
    config.build_engine()
}
