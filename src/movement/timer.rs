//! Movement domain: countdown windows advanced by the fixed tick.

use serde::Serialize;

/// A one-shot countdown measured in seconds.
///
/// Holds no callback; the owner advances it once per tick with [`Countdown::tick`].
/// A countdown that was never started (or was stopped) reads as expired.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct Countdown {
    remaining: f32,
}

impl Countdown {
    pub fn start(&mut self, duration: f32) {
        self.remaining = duration.max(0.0);
    }

    pub fn stop(&mut self) {
        self.remaining = 0.0;
    }

    pub fn tick(&mut self, dt: f32) {
        self.remaining = (self.remaining - dt).max(0.0);
    }

    pub fn expired(&self) -> bool {
        self.remaining <= 0.0
    }

    pub fn remaining(&self) -> f32 {
        self.remaining
    }
}
