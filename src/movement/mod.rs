//! Movement domain: per-tick character motor and its Bevy/avian wiring.

mod bootstrap;
mod components;
pub mod dash;
mod dev;
pub mod jump;
pub mod locomotion;
mod motor;
pub mod reach;
mod resources;
mod systems;
mod telemetry;
mod timer;


pub use components::{ContactFlags, GameLayer, Ground, MovementState, Player, Wall};
pub use dash::DashState;
pub use jump::{JumpPhase, JumpState, JumpTrigger};
pub use motor::{CharacterMotor, FlatGroundMover, LastTick, MoveOutcome, Mover, TickReport};
pub use resources::{InputSnapshot, MovementInput, MovementTuning};
pub use telemetry::MovementTelemetry;
pub use timer::Countdown;

use bevy::prelude::*;

use crate::movement::bootstrap::spawn_player_from_archetype;
use crate::movement::dev::spawn_test_room;
use crate::movement::systems::{drive_motors, read_cursor, read_input, sense_contacts};
use crate::movement::telemetry::emit_telemetry;

pub struct MovementPlugin;

impl Plugin for MovementPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<MovementInput>()
            .init_resource::<MovementTelemetry>()
            .add_systems(Startup, (spawn_test_room, spawn_player_from_archetype))
            .add_systems(
                PreUpdate,
                (read_input, read_cursor).after(bevy::input::InputSystems),
            )
            .add_systems(
                FixedUpdate,
                (sense_contacts, drive_motors, emit_telemetry).chain(),
            );
    }
}
