//! Detection of still and periodic boards.
//!
//! [`CycleDetector`] remembers the fingerprints of the last few
//! generations. When a fingerprint reappears the board has entered a
//! cycle whose period is the generation distance between the two
//! sightings: 1 for a still life, 2 for a blinker, and so on.

use std::collections::VecDeque;

use lifegrid_core::Generation;

/// Bounded history of board fingerprints.
#[derive(Clone, Debug)]
pub struct CycleDetector {
    window: usize,
    history: VecDeque<(u64, Generation)>,
}

impl CycleDetector {
    /// Remember up to `window` past generations (at least 1).
    ///
    /// Periods longer than `window` are not detected.
    pub fn new(window: usize) -> Self {
        let window = window.max(1);
        Self {
            window,
            history: VecDeque::with_capacity(window),
        }
    }

    /// Record `fingerprint` for `generation`.
    ///
    /// Returns the period if the same fingerprint was recorded for an
    /// earlier generation still inside the window.
    pub fn observe(&mut self, generation: Generation, fingerprint: u64) -> Option<u64> {
        let period = self
            .history
            .iter()
            .rev()
            .find(|(fp, _)| *fp == fingerprint)
            .map(|(_, seen)| generation.0.saturating_sub(seen.0));

        if self.history.len() == self.window {
            self.history.pop_front();
        }
        self.history.push_back((fingerprint, generation));
        period.filter(|&p| p > 0)
    }

    /// Forget every recorded generation.
    pub fn reset(&mut self) {
        self.history.clear();
    }

    /// The configured window.
    pub fn window(&self) -> usize {
        self.window
    }
}
