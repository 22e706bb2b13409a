//! Command-line arguments for the `lifegrid` binary.
//!
//! [`Cli`] is parsed by clap; [`Cli::into_options()`] maps it onto a
//! [`LifeConfig`] plus renderer options and validates the result, so a
//! returned [`RunOptions`] is ready to drive.

use std::time::Duration;

use clap::builder::RangedU64ValueParser;
use clap::Parser;
use lifegrid_engine::config::{ConfigError, LifeConfig, SeedSource};
use lifegrid_engine::patterns::{DEFAULT_ORIGIN, DEFAULT_PATTERN};

/// Command-line arguments for a terminal run.
#[derive(Debug, Parser)]
#[command(name = "lifegrid", version, about, long_about = None)]
#[command(after_help = "Set RUST_LOG=debug for per-generation logging on stderr.")]
pub struct Cli {
    /// Board height.
    #[arg(long, value_name = "N", default_value_t = 30, value_parser = clap::value_parser!(u32).range(1..))]
    pub rows: u32,
    /// Board width.
    #[arg(long, value_name = "N", default_value_t = 50, value_parser = clap::value_parser!(u32).range(1..))]
    pub cols: u32,

    /// Built-in pattern to seed [default: acorn].
    #[arg(long, value_name = "NAME")]
    pub pattern: Option<String>,
    /// Top-left corner of the pattern [default: 10,9].
    #[arg(long, value_name = "ROW,COL", value_parser = parse_coord, allow_hyphen_values = true)]
    pub at: Option<(i32, i32)>,
    /// Seed each cell alive with probability DENSITY.
    #[arg(long, value_name = "DENSITY", conflicts_with_all = ["pattern", "at"])]
    pub random: Option<f64>,
    /// Seed for the random board.
    #[arg(long, value_name = "N", default_value_t = 0, requires = "random")]
    pub rng_seed: u64,

    /// Pause between frames.
    #[arg(long, value_name = "MILLISECONDS", default_value_t = 10)]
    pub interval_ms: u64,
    /// Stop after N generations.
    #[arg(long, value_name = "N")]
    pub generations: Option<u64>,
    /// Stop once the board repeats within N generations.
    #[arg(long, value_name = "N", value_parser = RangedU64ValueParser::<usize>::new().range(1..))]
    pub stop_on_cycle: Option<usize>,

    /// Glyph for live cells.
    #[arg(long, value_name = "CHAR", default_value_t = '#')]
    pub alive: char,
    /// Glyph for dead cells.
    #[arg(long, value_name = "CHAR", default_value_t = ' ')]
    pub dead: char,
    /// Do not clear the screen between frames.
    #[arg(long)]
    pub no_clear: bool,
    /// Print the generation and population under each frame.
    #[arg(long)]
    pub status: bool,

    /// List built-in patterns and exit.
    #[arg(long)]
    pub list_patterns: bool,
}

/// A validated run configuration plus display options.
#[derive(Clone, Debug, PartialEq)]
pub struct RunOptions {
    /// Simulation configuration.
    pub config: LifeConfig,
    /// Glyph for live cells.
    pub alive: char,
    /// Glyph for dead cells.
    pub dead: char,
    /// Clear the screen before each frame.
    pub clear: bool,
    /// Print a status line under each frame.
    pub status: bool,
}

impl Default for RunOptions {
    fn default() -> Self {
        Self {
            config: LifeConfig::default(),
            alive: '#',
            dead: ' ',
            clear: true,
            status: false,
        }
    }
}

impl Cli {
    /// Build the run configuration and validate it.
    pub fn into_options(self) -> Result<RunOptions, ConfigError> {
        let seed = match self.random {
            Some(density) => SeedSource::Random {
                density,
                seed: self.rng_seed,
            },
            None => SeedSource::Pattern {
                name: self.pattern.unwrap_or_else(|| DEFAULT_PATTERN.to_string()),
                origin: self.at.unwrap_or(DEFAULT_ORIGIN),
            },
        };
        let config = LifeConfig {
            rows: self.rows,
            cols: self.cols,
            interval: Duration::from_millis(self.interval_ms),
            max_generations: self.generations,
            seed,
            stop_on_cycle: self.stop_on_cycle,
        };
        config.validate()?;
        Ok(RunOptions {
            config,
            alive: self.alive,
            dead: self.dead,
            clear: !self.no_clear,
            status: self.status,
        })
    }
}

fn parse_coord(value: &str) -> Result<(i32, i32), String> {
    let (row, col) = value
        .split_once(',')
        .ok_or_else(|| format!("expected ROW,COL, got '{value}'"))?;
    let row = row.trim().parse().map_err(|e| format!("row: {e}"))?;
    let col = col.trim().parse().map_err(|e| format!("col: {e}"))?;
    Ok((row, col))
}
