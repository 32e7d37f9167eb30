//! Movement domain: components and physics layers for locomotion.

use avian2d::prelude::*;
use bevy::prelude::*;
use serde::Serialize;

/// Physics layers for collision filtering
#[derive(PhysicsLayer, Clone, Copy, Debug, Default)]
pub enum GameLayer {
    #[default]
    Default,
    /// Ground surfaces (floors, platforms, ceilings)
    Ground,
    /// Wall surfaces
    Wall,
    /// Player character
    Player,
}

#[derive(Component, Debug)]
pub struct Player;

/// Marker for ground colliders
#[derive(Component, Debug)]
pub struct Ground;

/// Marker for wall colliders
#[derive(Component, Debug)]
pub struct Wall;

/// Surface contacts reported by the mover after resolving a move.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct ContactFlags {
    pub on_floor: bool,
    pub on_wall: bool,
    pub on_ceiling: bool,
}

impl ContactFlags {
    pub const AIRBORNE: Self = Self {
        on_floor: false,
        on_wall: false,
        on_ceiling: false,
    };

    pub const GROUNDED: Self = Self {
        on_floor: true,
        on_wall: false,
        on_ceiling: false,
    };
}

/// Kinematic state shared by the locomotion, jump and dash stages.
///
/// Velocity is in units per second with y pointing down, so a negative
/// `velocity.y` moves the character up.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct MovementState {
    pub velocity: Vec2,
    pub contacts: ContactFlags,
    /// `contacts.on_floor` as it was on the previous tick.
    pub was_on_floor: bool,
}

impl MovementState {
    /// The floor was touched this tick but not the previous one.
    pub fn floor_entered(&self) -> bool {
        !self.was_on_floor && self.contacts.on_floor
    }

    /// The floor was touched last tick but not this one.
    pub fn floor_left(&self) -> bool {
        self.was_on_floor && !self.contacts.on_floor
    }
}
