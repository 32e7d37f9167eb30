//! Movement domain: optional per-tick telemetry frames.

use bevy::prelude::*;
use serde::Serialize;

use crate::movement::{
    CharacterMotor, ContactFlags, DashState, JumpPhase, JumpTrigger, LastTick, Player,
};

/// Gates per-tick telemetry. Off unless toggled on.
#[derive(Resource, Debug, Default)]
pub struct MovementTelemetry {
    pub enabled: bool,
}

#[derive(Debug, Clone, Serialize)]
pub struct TelemetryFrame {
    pub entity: u64,
    pub velocity: [f32; 2],
    pub contacts: ContactFlags,
    pub phase: JumpPhase,
    pub coyote_remaining: f32,
    pub buffer_remaining: f32,
    pub dash: DashState,
    pub launched: Option<JumpTrigger>,
    pub dash_started: bool,
}

impl TelemetryFrame {
    pub fn capture(entity: Entity, motor: &CharacterMotor, last: &LastTick) -> Self {
        Self {
            entity: entity.to_bits(),
            velocity: last.report.velocity.to_array(),
            contacts: motor.movement.contacts,
            phase: motor.jump.phase,
            coyote_remaining: motor.jump.coyote.remaining(),
            buffer_remaining: motor.jump.buffer.remaining(),
            dash: motor.dash,
            launched: last.report.launched,
            dash_started: last.report.dash_started,
        }
    }
}

pub(crate) fn emit_telemetry(
    telemetry: Res<MovementTelemetry>,
    query: Query<(Entity, &CharacterMotor, &LastTick), With<Player>>,
) {
    if !telemetry.enabled {
        return;
    }

    for (entity, motor, last) in &query {
        let frame = TelemetryFrame::capture(entity, motor, last);
        match serde_json::to_string(&frame) {
            Ok(json) => debug!(target: "movement::telemetry", "{json}"),
            Err(e) => warn!("Failed to serialize movement telemetry: {}", e),
        }
    }
}
