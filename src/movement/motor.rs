//! Movement domain: per-tick orchestration of locomotion, jump and dash.

use bevy::prelude::*;

use crate::movement::dash::{self, DashState};
use crate::movement::jump::{self, JumpState, JumpTrigger};
use crate::movement::locomotion;
use crate::movement::{ContactFlags, InputSnapshot, MovementState, MovementTuning};

/// Up in the motor's y-down frame.
pub const UP: Vec2 = Vec2::NEG_Y;

/// Result of resolving one move against the world.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct MoveOutcome {
    /// Velocity left after sliding along whatever was hit.
    pub velocity: Vec2,
    pub contacts: ContactFlags,
}

/// Collision-aware position resolution owned by the host.
pub trait Mover {
    fn move_and_slide(&mut self, velocity: Vec2, up: Vec2) -> MoveOutcome;
}

#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct TickReport {
    /// Combined velocity handed to the mover.
    pub velocity: Vec2,
    pub launched: Option<JumpTrigger>,
    pub dash_started: bool,
}

/// Report of the most recent tick, kept for telemetry.
#[derive(Component, Debug, Default)]
pub struct LastTick {
    pub report: TickReport,
}

/// Full movement state of one character.
#[derive(Component, Debug, Clone, Copy, Default, PartialEq)]
pub struct CharacterMotor {
    pub movement: MovementState,
    pub jump: JumpState,
    pub dash: DashState,
}

impl CharacterMotor {
    /// Compute this tick's velocity from the contacts of the previous move.
    pub fn tick(
        &mut self,
        input: &InputSnapshot,
        tuning: &MovementTuning,
        dt: f32,
    ) -> TickReport {
        let movement = locomotion::clamp_to_contacts(self.movement);
        let movement = locomotion::step(movement, input, tuning);
        let vertical = jump::step(movement, self.jump, input, tuning, dt);
        let dashed = dash::step(vertical.movement, self.dash, input, tuning, dt);

        self.movement = dashed.movement;
        self.jump = vertical.jump;
        self.dash = dashed.dash;

        TickReport {
            velocity: self.movement.velocity,
            launched: vertical.launched,
            dash_started: dashed.started,
        }
    }

    /// Record what the mover did with the last velocity.
    pub fn resolve(&mut self, outcome: MoveOutcome) {
        self.movement.velocity = outcome.velocity;
        self.movement.contacts = outcome.contacts;
    }

    /// Tick, then move synchronously through `mover`.
    pub fn step<M: Mover>(
        &mut self,
        mover: &mut M,
        input: &InputSnapshot,
        tuning: &MovementTuning,
        dt: f32,
    ) -> TickReport {
        let report = self.tick(input, tuning, dt);
        let outcome = mover.move_and_slide(report.velocity, UP);
        self.resolve(outcome);
        report
    }
}

/// A flat world laid out in the y-down frame: a floor at `floor_y`, an
/// optional ceiling above it and optional walls on either side. Used for
/// headless runs where no physics backend is available.
#[derive(Debug, Clone, PartialEq)]
pub struct FlatGroundMover {
    /// Position of the character's feet.
    pub position: Vec2,
    pub dt: f32,
    pub floor_y: f32,
    pub ceiling_y: Option<f32>,
    /// Left and right wall x coordinates.
    pub walls: Option<(f32, f32)>,
}

impl FlatGroundMover {
    const FLOOR_NORMAL: Vec2 = Vec2::NEG_Y;

    pub fn new(position: Vec2, dt: f32) -> Self {
        Self {
            position,
            dt,
            floor_y: 0.0,
            ceiling_y: None,
            walls: None,
        }
    }
}

impl Mover for FlatGroundMover {
    fn move_and_slide(&mut self, velocity: Vec2, up: Vec2) -> MoveOutcome {
        let mut next = self.position + velocity * self.dt;
        let mut resolved = velocity;
        let mut contacts = ContactFlags::default();
        // A surface counts as floor only if its normal faces the caller's up.
        let floor_faces_up = Self::FLOOR_NORMAL.dot(up) > 0.0;

        if next.y >= self.floor_y {
            next.y = self.floor_y;
            resolved.y = resolved.y.min(0.0);
            if floor_faces_up {
                contacts.on_floor = true;
            } else {
                contacts.on_ceiling = true;
            }
        }

        if let Some(ceiling_y) = self.ceiling_y
            && next.y <= ceiling_y
        {
            next.y = ceiling_y;
            resolved.y = resolved.y.max(0.0);
            if floor_faces_up {
                contacts.on_ceiling = true;
            } else {
                contacts.on_floor = true;
            }
        }

        if let Some((left, right)) = self.walls {
            if next.x <= left {
                next.x = left;
                resolved.x = resolved.x.max(0.0);
                contacts.on_wall = true;
            } else if next.x >= right {
                next.x = right;
                resolved.x = resolved.x.min(0.0);
                contacts.on_wall = true;
            }
        }

        self.position = next;
        MoveOutcome {
            velocity: resolved,
            contacts,
        }
    }
}
