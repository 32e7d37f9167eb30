//! Movement domain: fixed-tick motor driving.

use avian2d::prelude::*;
use bevy::prelude::*;

use crate::movement::{
    CharacterMotor, InputSnapshot, LastTick, MovementInput, MovementTuning, Player,
};

/// Run one motor tick per character and hand the velocity to avian, which
/// resolves the move during its own fixed step.
pub(crate) fn drive_motors(
    time: Res<Time>,
    mut input: ResMut<MovementInput>,
    mut query: Query<(
        &Transform,
        &MovementTuning,
        &mut CharacterMotor,
        &mut LastTick,
        &mut LinearVelocity,
        Has<Player>,
    )>,
) {
    let dt = time.delta_secs();

    for (transform, tuning, mut motor, mut last, mut velocity, is_player) in &mut query {
        let snapshot = if is_player {
            input.snapshot(transform.translation.x)
        } else {
            InputSnapshot::default()
        };

        let report = motor.tick(&snapshot, tuning, dt);

        if let Some(trigger) = report.launched {
            debug!("Jump: trigger={:?}, vy={}", trigger, report.velocity.y);
        }
        if report.dash_started {
            debug!(
                "Dash: target={}, velocity={}",
                motor.dash.distance_target, motor.dash.velocity
            );
        }

        velocity.0 = Vec2::new(report.velocity.x, -report.velocity.y);
        last.report = report;
    }

    input.consume_edges();
}
