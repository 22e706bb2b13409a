//! Integration test: driving configured runs end to end.

use std::io;
use std::time::Duration;

use lifegrid_engine::{
    stop_channel, Driver, Frame, LifeConfig, RenderSink, SeedSource, StopHandle, StopReason,
    StopSignal,
};

/// Keeps the live count of every frame it is shown.
#[derive(Default)]
struct Populations(Vec<usize>);

impl RenderSink for Populations {
    fn render(&mut self, frame: &Frame<'_>) -> io::Result<()> {
        self.0.push(frame.cells.live_count());
        Ok(())
    }
}

/// Requests a stop after a fixed number of frames.
struct StopAfter {
    remaining: usize,
    handle: StopHandle,
}

impl RenderSink for StopAfter {
    fn render(&mut self, _frame: &Frame<'_>) -> io::Result<()> {
        self.remaining = self.remaining.saturating_sub(1);
        if self.remaining == 0 {
            self.handle.stop();
        }
        Ok(())
    }
}

fn fast(seed: SeedSource) -> LifeConfig {
    LifeConfig {
        rows: 16,
        cols: 16,
        interval: Duration::ZERO,
        seed,
        ..Default::default()
    }
}

#[test]
fn block_stops_on_period_one() {
    let config = LifeConfig {
        stop_on_cycle: Some(4),
        ..fast(SeedSource::Pattern {
            name: "block".into(),
            origin: (5, 5),
        })
    };
    let mut driver = Driver::from_config(&config).unwrap();
    let mut sink = Populations::default();
    let summary = driver.run(&mut sink, &StopSignal::never()).unwrap();
    assert_eq!(summary.stop_reason, StopReason::Cycle { period: 1 });
    assert_eq!(sink.0, vec![4, 4]);
}

#[test]
fn limit_wins_over_slow_cycle() {
    let config = LifeConfig {
        max_generations: Some(1),
        stop_on_cycle: Some(4),
        ..fast(SeedSource::Cells(vec![(3, 2), (3, 3), (3, 4)]))
    };
    let summary = Driver::from_config(&config)
        .unwrap()
        .run(&mut Populations::default(), &StopSignal::never())
        .unwrap();
    assert_eq!(summary.stop_reason, StopReason::GenerationLimit);
    assert_eq!(summary.generations_run, 1);
}

#[test]
fn sink_can_cancel_the_run() {
    let (handle, signal) = stop_channel();
    let config = fast(SeedSource::Pattern {
        name: "r-pentomino".into(),
        origin: (6, 6),
    });
    let mut driver = Driver::from_config(&config).unwrap();
    let mut sink = StopAfter { remaining: 3, handle };
    let summary = driver.run(&mut sink, &signal).unwrap();
    assert_eq!(summary.stop_reason, StopReason::Cancelled);
    assert_eq!(summary.generations_run, 2);
}

#[test]
fn random_board_run_is_reproducible() {
    let config = LifeConfig {
        max_generations: Some(25),
        ..fast(SeedSource::Random {
            density: 0.35,
            seed: 2024,
        })
    };
    let run = || {
        let mut sink = Populations::default();
        Driver::from_config(&config)
            .unwrap()
            .run(&mut sink, &StopSignal::never())
            .unwrap();
        sink.0
    };
    assert_eq!(run(), run());
}
