//! Movement domain: demo room for trying out the motor.

use avian2d::prelude::*;
use bevy::prelude::*;

use crate::movement::{GameLayer, Ground, Wall};

#[derive(Clone, Copy)]
enum Surface {
    Ground,
    Wall,
}

fn spawn_block(commands: &mut Commands, surface: Surface, center: Vec2, size: Vec2, color: Color) {
    let blockers = [GameLayer::Player];
    let mut block = commands.spawn((
        Sprite {
            color,
            custom_size: Some(size),
            ..default()
        },
        Transform::from_translation(center.extend(0.0)),
        RigidBody::Static,
        Collider::rectangle(size.x, size.y),
    ));
    match surface {
        Surface::Ground => block.insert((Ground, CollisionLayers::new(GameLayer::Ground, blockers))),
        Surface::Wall => block.insert((Wall, CollisionLayers::new(GameLayer::Wall, blockers))),
    };
}

const FLOOR_TOP: f32 = -180.0;
const FLOOR_THICKNESS: f32 = 40.0;
const LEDGE_SIZE: Vec2 = Vec2::new(180.0, 20.0);
const PILLAR_SIZE: Vec2 = Vec2::new(30.0, 120.0);

/// Ledge centers x and tops y, stepping up to the right.
const LEDGES: [(f32, f32); 3] = [(-450.0, -80.0), (-150.0, 20.0), (200.0, 120.0)];

/// Height of each surface above the one it is reached from: floor to the
/// first ledge, ledge to ledge, floor to the pillar top.
pub(crate) fn climb_heights() -> Vec<f32> {
    let mut heights = Vec::new();
    let mut from = FLOOR_TOP;
    for (_, top) in LEDGES {
        heights.push(top - from);
        from = top;
    }
    heights.push(PILLAR_SIZE.y);
    heights
}

pub(crate) fn spawn_test_room(mut commands: Commands) {
    let wall_color = Color::srgb(0.3, 0.3, 0.4);
    let ground_color = Color::srgb(0.4, 0.5, 0.4);
    let platform_color = Color::srgb(0.5, 0.4, 0.3);

    // Floor
    spawn_block(
        &mut commands,
        Surface::Ground,
        Vec2::new(0.0, FLOOR_TOP - FLOOR_THICKNESS / 2.0),
        Vec2::new(1600.0, FLOOR_THICKNESS),
        ground_color,
    );

    // Side walls
    for x in [-820.0, 820.0] {
        spawn_block(
            &mut commands,
            Surface::Wall,
            Vec2::new(x, 300.0),
            Vec2::new(40.0, 1000.0),
            wall_color,
        );
    }

    // Ledges for coyote jumps
    for (x, top) in LEDGES {
        spawn_block(
            &mut commands,
            Surface::Ground,
            Vec2::new(x, top - LEDGE_SIZE.y / 2.0),
            LEDGE_SIZE,
            platform_color,
        );
    }

    // Low ceiling over the right side of the floor
    spawn_block(
        &mut commands,
        Surface::Ground,
        Vec2::new(550.0, -60.0),
        Vec2::new(300.0, 20.0),
        platform_color,
    );

    // Pillar to dash into; its top counts as floor
    spawn_block(
        &mut commands,
        Surface::Wall,
        Vec2::new(-650.0, FLOOR_TOP + PILLAR_SIZE.y / 2.0),
        PILLAR_SIZE,
        wall_color,
    );

    debug!("Test room climb heights: {:?}", climb_heights());
}
