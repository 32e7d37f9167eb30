//! Debug domain: hotkeys for inspecting the movement motor (dev-tools only).

use bevy::prelude::*;

use crate::movement::MovementTelemetry;

pub struct DebugPlugin;

impl Plugin for DebugPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Update, toggle_telemetry);
    }
}

/// Toggle per-tick movement telemetry with F3
fn toggle_telemetry(
    keyboard: Res<ButtonInput<KeyCode>>,
    mut telemetry: ResMut<MovementTelemetry>,
) {
    if keyboard.just_pressed(KeyCode::F3) {
        telemetry.enabled = !telemetry.enabled;
        info!(
            "Movement telemetry {} (logged at debug level)",
            if telemetry.enabled { "enabled" } else { "disabled" }
        );
    }
}
