//! Movement domain: input sampling for locomotion.

use bevy::prelude::*;
use bevy::window::PrimaryWindow;

use crate::movement::MovementInput;

const JUMP_KEYS: [KeyCode; 4] = [
    KeyCode::Space,
    KeyCode::KeyK,
    KeyCode::KeyW,
    KeyCode::ArrowUp,
];

const DASH_KEYS: [KeyCode; 2] = [KeyCode::ShiftLeft, KeyCode::KeyJ];

pub(crate) fn read_input(keyboard: Res<ButtonInput<KeyCode>>, mut input: ResMut<MovementInput>) {
    input.move_left = keyboard.any_pressed([KeyCode::KeyA, KeyCode::ArrowLeft]);
    input.move_right = keyboard.any_pressed([KeyCode::KeyD, KeyCode::ArrowRight]);

    input.jump_held = keyboard.any_pressed(JUMP_KEYS);
    // Edges stay latched until a fixed tick consumes them
    input.jump_just_pressed |= keyboard.any_just_pressed(JUMP_KEYS);
    input.jump_just_released |= keyboard.any_just_released(JUMP_KEYS) && !input.jump_held;

    input.dash_held = keyboard.any_pressed(DASH_KEYS);
    input.dash_just_pressed |= keyboard.any_just_pressed(DASH_KEYS);
}

pub(crate) fn read_cursor(
    windows: Query<&Window, With<PrimaryWindow>>,
    cameras: Query<(&Camera, &GlobalTransform)>,
    mut input: ResMut<MovementInput>,
) {
    let Ok(window) = windows.single() else {
        return;
    };
    let Ok((camera, camera_transform)) = cameras.single() else {
        return;
    };
    // Off-window cursor keeps the last known position
    let Some(cursor) = window.cursor_position() else {
        return;
    };

    if let Ok(world) = camera.viewport_to_world_2d(camera_transform, cursor) {
        input.cursor_world_x = Some(world.x);
    }
}
