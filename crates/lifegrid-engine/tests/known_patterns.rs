//! Integration test: well-known patterns behave as documented.
//!
//! Still lifes stay put, period-2 oscillators return after two steps,
//! the glider translates diagonally, and the methuselahs run
//! deterministically.

use std::collections::BTreeSet;

use lifegrid_engine::patterns::{self, library};
use lifegrid_engine::SimulationEngine;
use lifegrid_test_utils::{live_set, parse_board, translated};

fn engine_with_pattern(rows: u32, cols: u32, name: &str, origin: (i32, i32)) -> SimulationEngine {
    let pattern = patterns::find(name).unwrap();
    let mut engine = SimulationEngine::new(rows, cols).unwrap();
    engine.seed_all(pattern.placed(origin)).unwrap();
    engine
}

fn board(engine: &SimulationEngine) -> BTreeSet<(i32, i32)> {
    live_set(&engine.snapshot())
}

// ── Still lifes ──────────────────────────────────────────────────

#[test]
fn still_lifes_never_change() {
    for name in ["block", "beehive"] {
        let mut engine = engine_with_pattern(12, 12, name, (4, 4));
        let start = board(&engine);
        for _ in 0..5 {
            let m = engine.step();
            assert!(m.is_unchanged(), "{name} changed");
        }
        assert_eq!(board(&engine), start, "{name}");
    }
}

// ── Oscillators ──────────────────────────────────────────────────

#[test]
fn period_two_oscillators() {
    for name in ["blinker", "toad", "beacon"] {
        let mut engine = engine_with_pattern(12, 12, name, (4, 4));
        let start = board(&engine);
        engine.step();
        assert_ne!(board(&engine), start, "{name} is not a still life");
        engine.step();
        assert_eq!(board(&engine), start, "{name} did not return");
    }
}

#[test]
fn blinker_phases_from_ascii() {
    let (rows, cols, cells) = parse_board(
        "
.....
.....
.###.
.....
.....
",
    );
    let mut engine = SimulationEngine::new(rows, cols).unwrap();
    engine.seed_all(cells).unwrap();
    engine.step();
    let (_, _, vertical) = parse_board(
        "
.....
..#..
..#..
..#..
.....
",
    );
    assert_eq!(board(&engine), vertical.into_iter().collect());
}

// ── Spaceships ───────────────────────────────────────────────────

#[test]
fn glider_moves_one_cell_diagonally_every_four_steps() {
    let mut engine = engine_with_pattern(20, 20, "glider", (1, 1));
    let start = board(&engine);
    for k in 1..=3 {
        engine.run(4);
        assert_eq!(board(&engine), translated(&start, k, k), "after {} steps", 4 * k);
    }
}

#[test]
fn glider_dies_into_corner_block() {
    // Hard edges stop the glider: it ends as a still life in the corner.
    let mut engine = engine_with_pattern(8, 8, "glider", (0, 0));
    engine.run(60);
    let settled = board(&engine);
    engine.step();
    assert_eq!(board(&engine), settled);
    assert_eq!(settled, BTreeSet::from([(6, 6), (6, 7), (7, 6), (7, 7)]));
}

// ── Methuselahs ──────────────────────────────────────────────────

#[test]
fn diehard_vanishes_after_130_generations() {
    let mut engine = engine_with_pattern(80, 80, "diehard", (36, 36));
    engine.run(100);
    assert!(engine.live_count() > 0);
    engine.run(30);
    assert_eq!(engine.live_count(), 0);
}

#[test]
fn acorn_runs_deterministically() {
    let mut a = engine_with_pattern(30, 50, "acorn", (10, 9));
    let mut b = engine_with_pattern(30, 50, "acorn", (10, 9));
    for _ in 0..200 {
        let ma = a.step();
        let mb = b.step();
        assert_eq!(ma.live_cells, mb.live_cells);
    }
    assert_eq!(board(&a), board(&b));
    assert_eq!(a.generation().0, 200);
}

#[test]
fn gosper_gun_emits_gliders() {
    let mut engine = engine_with_pattern(60, 80, "gosper-glider-gun", (1, 1));
    assert_eq!(engine.live_count(), 36);
    engine.run(120);
    assert!(engine.live_count() > 36);
}

// ── Library ──────────────────────────────────────────────────────

#[test]
fn every_pattern_seeds_on_a_large_board() {
    for pattern in library().values() {
        let mut engine = SimulationEngine::new(64, 64).unwrap();
        engine.seed_all(pattern.placed((10, 10))).unwrap();
        assert_eq!(engine.live_count(), pattern.cells.len(), "{}", pattern.name);
    }
}
