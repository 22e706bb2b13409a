//! Run configuration, validation, and error types.
//!
//! [`LifeConfig`] describes one simulation run: board size, pacing, how
//! the board is seeded, and when to stop. [`validate()`](LifeConfig::validate)
//! checks it up front; [`build_engine()`](LifeConfig::build_engine) turns
//! it into a seeded [`SimulationEngine`].

use std::error::Error;
use std::fmt;
use std::time::Duration;

use lifegrid_core::GridError;
use lifegrid_space::Square8;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use crate::engine::SimulationEngine;
use crate::patterns::{self, DEFAULT_ORIGIN, DEFAULT_PATTERN};

// ── SeedSource ─────────────────────────────────────────────────────

/// How the initial board is populated.
#[derive(Clone, Debug, PartialEq)]
pub enum SeedSource {
    /// A built-in pattern with its top-left corner at `origin`.
    Pattern {
        /// Name in the pattern library.
        name: String,
        /// `(row, col)` of the pattern's top-left corner.
        origin: (i32, i32),
    },
    /// An explicit list of live cells.
    Cells(Vec<(i32, i32)>),
    /// Each cell alive independently with probability `density`.
    Random {
        /// Probability in `[0, 1]`.
        density: f64,
        /// RNG seed; the same seed always yields the same board.
        seed: u64,
    },
}

impl Default for SeedSource {
    fn default() -> Self {
        Self::Pattern {
            name: DEFAULT_PATTERN.to_string(),
            origin: DEFAULT_ORIGIN,
        }
    }
}

// ── ConfigError ────────────────────────────────────────────────────

/// Errors detected while validating a [`LifeConfig`] or building its engine.
#[derive(Debug, PartialEq)]
pub enum ConfigError {
    /// Grid construction or seeding failed.
    Grid(GridError),
    /// The requested pattern is not in the library.
    UnknownPattern {
        /// The name that was not found.
        name: String,
    },
    /// Random seeding density is NaN or outside `[0, 1]`.
    InvalidDensity {
        /// The invalid value.
        value: f64,
    },
    /// Cycle detection was requested with a zero-generation window.
    ZeroCycleWindow,
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Grid(e) => write!(f, "grid: {e}"),
            Self::UnknownPattern { name } => write!(f, "unknown pattern '{name}'"),
            Self::InvalidDensity { value } => {
                write!(f, "density must be within [0, 1], got {value}")
            }
            Self::ZeroCycleWindow => write!(f, "cycle detection window must be at least 1"),
        }
    }
}

impl Error for ConfigError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Grid(e) => Some(e),
            _ => None,
        }
    }
}

impl From<GridError> for ConfigError {
    fn from(e: GridError) -> Self {
        Self::Grid(e)
    }
}

// ── LifeConfig ─────────────────────────────────────────────────────

/// Everything needed to start a run.
#[derive(Clone, Debug, PartialEq)]
pub struct LifeConfig {
    /// Board height. Default: 30.
    pub rows: u32,
    /// Board width. Default: 50.
    pub cols: u32,
    /// Pause between frames. Default: 10 ms.
    pub interval: Duration,
    /// Stop after this many generations. `None` runs until stopped.
    pub max_generations: Option<u64>,
    /// Initial board. Default: an acorn at (10, 9).
    pub seed: SeedSource,
    /// Stop once the board repeats within this many generations.
    pub stop_on_cycle: Option<usize>,
}

impl Default for LifeConfig {
    fn default() -> Self {
        Self {
            rows: 30,
            cols: 50,
            interval: Duration::from_millis(10),
            max_generations: None,
            seed: SeedSource::default(),
            stop_on_cycle: None,
        }
    }
}

impl LifeConfig {
    /// Check the configuration without allocating a board.
    ///
    /// Every seed coordinate must lie on the board; seeds are never
    /// silently dropped. Random boards are drawn from the board itself,
    /// so only their density is checked here.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let space = self.space()?;
        match &self.seed {
            SeedSource::Random { density, .. } => check_density(*density),
            _ => self.seed_cells(&space).map(drop),
        }
    }

    /// The live cells the initial board will contain.
    ///
    /// Random boards are drawn from a ChaCha8 stream seeded with the
    /// configured seed, so they are reproducible across platforms.
    pub fn resolve_seed_cells(&self) -> Result<Vec<(i32, i32)>, ConfigError> {
        let space = self.space()?;
        self.seed_cells(&space)
    }

    /// Validate, allocate, and seed an engine at generation 0.
    pub fn build_engine(&self) -> Result<SimulationEngine, ConfigError> {
        let cells = self.resolve_seed_cells()?;
        let mut engine = SimulationEngine::new(self.rows, self.cols)?;
        engine.seed_all(cells)?;
        log::info!(
            "seeded {}x{} board with {} live cells",
            self.rows,
            self.cols,
            engine.live_count()
        );
        Ok(engine)
    }

    fn space(&self) -> Result<Square8, ConfigError> {
        let space = Square8::new(self.rows, self.cols)?;
        if self.stop_on_cycle == Some(0) {
            return Err(ConfigError::ZeroCycleWindow);
        }
        Ok(space)
    }

    fn seed_cells(&self, space: &Square8) -> Result<Vec<(i32, i32)>, ConfigError> {
        let cells: Vec<_> = match &self.seed {
            SeedSource::Pattern { name, origin } => {
                let pattern =
                    patterns::find(name).ok_or_else(|| ConfigError::UnknownPattern {
                        name: name.clone(),
                    })?;
                pattern.placed(*origin).collect()
            }
            SeedSource::Cells(cells) => cells.clone(),
            SeedSource::Random { density, seed } => {
                check_density(*density)?;
                let mut rng = ChaCha8Rng::seed_from_u64(*seed);
                return Ok(space
                    .cells()
                    .filter(|_| rng.random_bool(*density))
                    .collect());
            }
        };
        for &(row, col) in &cells {
            space.checked_index(row, col)?;
        }
        Ok(cells)
    }
}

fn check_density(density: f64) -> Result<(), ConfigError> {
    if (0.0..=1.0).contains(&density) {
        Ok(())
    } else {
        Err(ConfigError::InvalidDensity { value: density })
    }
}
