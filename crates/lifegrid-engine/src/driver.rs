//! Paced render/step loop.
//!
//! [`Driver`] alternates between handing the current board to a
//! [`RenderSink`] and advancing the engine by one generation, pausing
//! for the configured interval between the two. A run ends when the
//! generation limit is reached, a [`StopHandle`] fires, the board starts
//! repeating, or the sink fails.
//!
//! The loop order per iteration is render, check, wait, step, so the
//! sink always sees generation 0 before anything is stepped and always
//! sees the final board before the run ends.

use std::cell::Cell;
use std::error::Error;
use std::fmt;
use std::io;
use std::time::Duration;

use crossbeam_channel::{Receiver, RecvTimeoutError, Sender, TryRecvError};
use lifegrid_core::{CellReader, Generation};

use crate::config::{ConfigError, LifeConfig};
use crate::cycle::CycleDetector;
use crate::engine::SimulationEngine;

// ── Rendering ──────────────────────────────────────────────────────

/// One rendered board.
pub struct Frame<'a> {
    /// Generation being shown.
    pub generation: Generation,
    /// Read access to the board's cells.
    pub cells: &'a dyn CellReader,
}

/// Destination for frames produced by a [`Driver`].
pub trait RenderSink {
    /// Present one frame. An error aborts the run.
    fn render(&mut self, frame: &Frame<'_>) -> io::Result<()>;
}

// ── Stop signalling ────────────────────────────────────────────────

/// Create a connected stop handle/signal pair.
pub fn stop_channel() -> (StopHandle, StopSignal) {
    let (tx, rx) = crossbeam_channel::bounded(1);
    (
        StopHandle { tx },
        StopSignal {
            rx: Some(rx),
            stopped: Cell::new(false),
        },
    )
}

/// Requests that a running [`Driver`] stop. Cloneable and `Send`.
#[derive(Clone, Debug)]
pub struct StopHandle {
    tx: Sender<()>,
}

impl StopHandle {
    /// Ask the driver to stop at its next check.
    ///
    /// Repeated calls, or calls after the driver has finished, are no-ops.
    pub fn stop(&self) {
        let _ = self.tx.try_send(());
    }
}

/// Receiving end of a stop request, polled by the driver.
///
/// Once a stop has been observed it stays observed.
#[derive(Debug)]
pub struct StopSignal {
    rx: Option<Receiver<()>>,
    stopped: Cell<bool>,
}

impl StopSignal {
    /// A signal that never fires.
    pub fn never() -> Self {
        Self {
            rx: None,
            stopped: Cell::new(false),
        }
    }

    /// Whether a stop has been requested, without blocking.
    pub fn is_stopped(&self) -> bool {
        if self.stopped.get() {
            return true;
        }
        match self.rx.as_ref().map(Receiver::try_recv) {
            Some(Ok(())) => {
                self.stopped.set(true);
                true
            }
            Some(Err(TryRecvError::Empty | TryRecvError::Disconnected)) | None => false,
        }
    }

    /// Block for up to `timeout`, returning early if a stop arrives.
    ///
    /// Returns whether a stop has been requested. With no live handle
    /// left this is a plain sleep.
    pub fn wait(&self, timeout: Duration) -> bool {
        if self.is_stopped() {
            return true;
        }
        match &self.rx {
            Some(rx) => match rx.recv_timeout(timeout) {
                Ok(()) => {
                    self.stopped.set(true);
                    true
                }
                Err(RecvTimeoutError::Timeout) => false,
                Err(RecvTimeoutError::Disconnected) => {
                    std::thread::sleep(timeout);
                    false
                }
            },
            None => {
                std::thread::sleep(timeout);
                false
            }
        }
    }
}

// ── DriverError ────────────────────────────────────────────────────

/// Errors that abort a [`Driver::run()`].
#[derive(Debug)]
pub enum DriverError {
    /// The render sink failed.
    Render(io::Error),
}

impl fmt::Display for DriverError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Render(e) => write!(f, "render failed: {e}"),
        }
    }
}

impl Error for DriverError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Render(e) => Some(e),
        }
    }
}

impl From<io::Error> for DriverError {
    fn from(e: io::Error) -> Self {
        Self::Render(e)
    }
}

// ── RunSummary ─────────────────────────────────────────────────────

/// Why a run ended.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StopReason {
    /// The configured generation limit was reached.
    GenerationLimit,
    /// A [`StopHandle`] requested the stop.
    Cancelled,
    /// The board repeated a recent state.
    Cycle {
        /// Generations between the two identical boards.
        period: u64,
    },
}

/// Outcome of a completed run.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RunSummary {
    /// Steps taken during this run.
    pub generations_run: u64,
    /// Generation on the board when the run ended.
    pub final_generation: Generation,
    /// Live cells on the final board.
    pub final_live: usize,
    /// Why the run ended.
    pub stop_reason: StopReason,
}

// ── Driver ─────────────────────────────────────────────────────────

/// Runs a [`SimulationEngine`] against a [`RenderSink`] at a fixed pace.
pub struct Driver {
    engine: SimulationEngine,
    interval: Duration,
    max_generations: Option<u64>,
    cycle: Option<CycleDetector>,
}

impl Driver {
    /// Drive `engine`, pausing `interval` between frames, with no limit.
    pub fn new(engine: SimulationEngine, interval: Duration) -> Self {
        Self {
            engine,
            interval,
            max_generations: None,
            cycle: None,
        }
    }

    /// Build and seed an engine from `config` and wrap it.
    pub fn from_config(config: &LifeConfig) -> Result<Self, ConfigError> {
        let engine = config.build_engine()?;
        let mut driver = Self::new(engine, config.interval);
        driver.max_generations = config.max_generations;
        driver.cycle = config.stop_on_cycle.map(CycleDetector::new);
        Ok(driver)
    }

    /// Stop after `limit` steps.
    pub fn with_generation_limit(mut self, limit: u64) -> Self {
        self.max_generations = Some(limit);
        self
    }

    /// Stop once the board repeats within `window` generations.
    pub fn with_cycle_detection(mut self, window: usize) -> Self {
        self.cycle = Some(CycleDetector::new(window));
        self
    }

    /// The driven engine.
    pub fn engine(&self) -> &SimulationEngine {
        &self.engine
    }

    /// Consume the driver and return its engine.
    pub fn into_engine(self) -> SimulationEngine {
        self.engine
    }

    /// Render and step until the run ends.
    ///
    /// The limit counts steps taken by this call: a limit of `n` renders
    /// `n + 1` frames. Returns `Err(DriverError::Render)` as soon as the
    /// sink fails; the engine keeps the board it had at that point.
    pub fn run<S>(&mut self, sink: &mut S, stop: &StopSignal) -> Result<RunSummary, DriverError>
    where
        S: RenderSink + ?Sized,
    {
        log::info!(
            "run starting at generation {} ({}x{}, interval {:?}, limit {:?})",
            self.engine.generation(),
            self.engine.rows(),
            self.engine.cols(),
            self.interval,
            self.max_generations
        );
        if let Some(cycle) = &mut self.cycle {
            cycle.reset();
        }

        let mut generations_run = 0u64;
        let stop_reason = loop {
            if stop.is_stopped() {
                break StopReason::Cancelled;
            }

            sink.render(&Frame {
                generation: self.engine.generation(),
                cells: &self.engine,
            })?;

            if let Some(cycle) = &mut self.cycle {
                let fingerprint = self.engine.snapshot().fingerprint();
                if let Some(period) = cycle.observe(self.engine.generation(), fingerprint) {
                    break StopReason::Cycle { period };
                }
            }
            if self.max_generations.is_some_and(|max| generations_run >= max) {
                break StopReason::GenerationLimit;
            }
            if stop.wait(self.interval) {
                break StopReason::Cancelled;
            }

            self.engine.step();
            generations_run += 1;
        };

        let summary = RunSummary {
            generations_run,
            final_generation: self.engine.generation(),
            final_live: self.engine.live_count(),
            stop_reason,
        };
        log::info!(
            "run stopped at generation {} with {} live cells: {:?}",
            summary.final_generation,
            summary.final_live,
            summary.stop_reason
        );
        Ok(summary)
    }
}

impl fmt::Debug for Driver {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Driver")
            .field("engine", &self.engine)
            .field("interval", &self.interval)
            .field("max_generations", &self.max_generations)
            .field("cycle_window", &self.cycle.as_ref().map(CycleDetector::window))
            .finish()
    }
}
