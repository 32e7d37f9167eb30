//! Movement domain: cursor-aimed dash with linear decay.

use serde::Serialize;

use crate::movement::{InputSnapshot, MovementState, MovementTuning};

/// Residual dash impulse. Idle when `velocity` is exactly zero.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct DashState {
    pub can_dash: bool,
    /// Signed horizontal speed still contributed by the dash.
    pub velocity: f32,
    /// Speed removed per second while decaying.
    pub deceleration: f32,
    /// -1, 0 or +1. Zero only when idle.
    pub direction: f32,
    /// Horizontal offset the active dash was aimed at.
    pub distance_target: f32,
}

impl Default for DashState {
    fn default() -> Self {
        Self {
            can_dash: true,
            velocity: 0.0,
            deceleration: 0.0,
            direction: 0.0,
            distance_target: 0.0,
        }
    }
}

impl DashState {
    pub fn is_active(&self) -> bool {
        self.direction * self.velocity > 0.0
    }

    /// Launch toward `distance`. Starting at `2d / T` and losing speed linearly,
    /// the dash covers exactly `d` over the duration `T`.
    fn trigger(&mut self, distance: f32, duration: f32) {
        self.distance_target = distance;
        self.velocity = 2.0 * distance / duration;
        self.deceleration = self.velocity.abs() / duration;
        self.direction = if self.velocity < 0.0 { -1.0 } else { 1.0 };
        self.can_dash = false;
    }

    fn decay(&mut self, dt: f32) {
        self.velocity -= self.deceleration * dt * self.direction;
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DashOutcome {
    pub movement: MovementState,
    pub dash: DashState,
    pub started: bool,
}

/// Run one tick of the dash: trigger if allowed, decay, then add the residual
/// dash speed on top of the locomotion velocity.
pub fn step(
    mut movement: MovementState,
    mut dash: DashState,
    input: &InputSnapshot,
    tuning: &MovementTuning,
    dt: f32,
) -> DashOutcome {
    let mut started = false;
    if dash.can_dash && input.dash_held {
        dash.trigger(tuning.dash_distance(input.cursor_offset_x), tuning.dash_duration);
        // A zero-length dash never leaves idle
        started = dash.is_active();
    }

    if dash.is_active() {
        dash.decay(dt);
    }
    // A decay step that reaches or crosses zero finishes the dash right away.
    if !dash.is_active() {
        dash = DashState::default();
    }
    dash.can_dash = dash.velocity == 0.0;

    movement.velocity.x += dash.velocity;

    DashOutcome {
        movement,
        dash,
        started,
    }
}
