//! Movement domain: headless measurements of what an archetype can reach.
//!
//! Each measurement drives a fresh [`CharacterMotor`] through a [`FlatGroundMover`],
//! so the numbers include every quirk of the real tick pipeline.

use bevy::prelude::*;

use crate::movement::{CharacterMotor, FlatGroundMover, InputSnapshot, MovementTuning};

/// Bevy's default fixed timestep, which the live game ticks at.
pub const FIXED_DT: f32 = 1.0 / 64.0;

const MAX_SIM_TICKS: usize = 10_000;

fn settled_motor(tuning: &MovementTuning, dt: f32) -> (CharacterMotor, FlatGroundMover) {
    let mut motor = CharacterMotor::default();
    let mut mover = FlatGroundMover::new(Vec2::ZERO, dt);
    // Spawn tick lands, second tick consumes the landing edge.
    for _ in 0..2 {
        motor.step(&mut mover, &InputSnapshot::default(), tuning, dt);
    }
    (motor, mover)
}

/// Height of a full (held) jump from flat ground.
pub fn jump_apex_height(tuning: &MovementTuning, dt: f32) -> f32 {
    let (mut motor, mut mover) = settled_motor(tuning, dt);
    let press = InputSnapshot {
        jump_held: true,
        jump_just_pressed: true,
        ..Default::default()
    };
    let hold = InputSnapshot {
        jump_held: true,
        ..Default::default()
    };

    motor.step(&mut mover, &press, tuning, dt);
    let mut apex = -mover.position.y;
    for _ in 0..MAX_SIM_TICKS {
        motor.step(&mut mover, &hold, tuning, dt);
        apex = apex.max(-mover.position.y);
        if motor.movement.contacts.on_floor {
            break;
        }
    }
    apex
}

/// Horizontal distance travelled by a standing dash aimed at `cursor_offset`,
/// measured once the dash is ready again and the character has stopped.
pub fn dash_reach(tuning: &MovementTuning, cursor_offset: f32, dt: f32) -> f32 {
    let (mut motor, mut mover) = settled_motor(tuning, dt);
    let dash = InputSnapshot {
        dash_held: true,
        cursor_offset_x: cursor_offset,
        ..Default::default()
    };

    motor.step(&mut mover, &dash, tuning, dt);
    for _ in 0..MAX_SIM_TICKS {
        if motor.dash.can_dash && motor.movement.velocity.x == 0.0 {
            break;
        }
        motor.step(&mut mover, &InputSnapshot::default(), tuning, dt);
    }
    mover.position.x
}
