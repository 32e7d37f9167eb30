//! Movement domain: tuning and input resources.

use bevy::prelude::*;
use serde::{Deserialize, Serialize};

/// Per-archetype movement constants. Accelerations are applied once per tick,
/// durations are in seconds.
#[derive(Component, Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MovementTuning {
    /// Added to the downward velocity every airborne tick.
    pub gravity: f32,
    pub jump_velocity: f32,
    /// Multiplier applied to the upward velocity when jump is released early.
    pub jump_cut_factor: f32,
    pub accel: f32,
    pub decel: f32,
    pub max_speed: f32,
    pub coyote_time: f32,
    pub buffer_time: f32,
    pub dash_duration: f32,
    /// Cap on the cursor offset a dash will cover. `None` leaves it unbounded.
    pub max_dash_distance: Option<f32>,
    /// Terminal fall speed. `None` lets gravity accumulate without limit.
    pub max_fall_speed: Option<f32>,
    /// Downward speed set on landing so the body stays seated on the floor.
    pub floor_stick_speed: f32,
}

impl Default for MovementTuning {
    fn default() -> Self {
        Self {
            gravity: 200.0,
            jump_velocity: 2000.0,
            jump_cut_factor: 0.1,
            accel: 100.0,
            decel: 200.0,
            max_speed: 700.0,
            coyote_time: 0.5,
            buffer_time: 0.5,
            dash_duration: 0.4,
            max_dash_distance: None,
            max_fall_speed: None,
            floor_stick_speed: 1.0,
        }
    }
}

impl MovementTuning {
    /// Horizontal distance a dash aimed at `cursor_offset` will cover.
    pub fn dash_distance(&self, cursor_offset: f32) -> f32 {
        match self.max_dash_distance {
            Some(max) => cursor_offset.clamp(-max, max),
            None => cursor_offset,
        }
    }
}

/// Input for a single fixed tick. Edge flags are true only on the tick they occur.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct InputSnapshot {
    pub move_left: bool,
    pub move_right: bool,
    pub jump_held: bool,
    pub jump_just_pressed: bool,
    pub jump_just_released: bool,
    pub dash_held: bool,
    /// Cursor x relative to the character origin, in world units.
    pub cursor_offset_x: f32,
}

/// Device input sampled every frame. Press and release edges are latched
/// until a fixed tick consumes them, so none is lost between ticks.
#[derive(Resource, Debug, Default)]
pub struct MovementInput {
    pub move_left: bool,
    pub move_right: bool,
    pub jump_held: bool,
    pub jump_just_pressed: bool,
    pub jump_just_released: bool,
    pub dash_held: bool,
    pub dash_just_pressed: bool,
    /// Last known cursor position in world space.
    pub cursor_world_x: Option<f32>,
}

impl MovementInput {
    pub fn snapshot(&self, origin_x: f32) -> InputSnapshot {
        InputSnapshot {
            move_left: self.move_left,
            move_right: self.move_right,
            jump_held: self.jump_held,
            jump_just_pressed: self.jump_just_pressed,
            jump_just_released: self.jump_just_released,
            dash_held: self.dash_held || self.dash_just_pressed,
            cursor_offset_x: self.cursor_world_x.map_or(0.0, |x| x - origin_x),
        }
    }

    /// Clear latched edges once a tick has seen them.
    pub fn consume_edges(&mut self) {
        self.jump_just_pressed = false;
        self.jump_just_released = false;
        self.dash_just_pressed = false;
    }
}
