//! Movement domain: player bootstrap from archetype data.

use avian2d::prelude::*;
use bevy::prelude::*;

use crate::content::{ArchetypeRegistry, SelectedArchetype};
use crate::movement::reach::{FIXED_DT, dash_reach, jump_apex_height};
use crate::movement::{CharacterMotor, GameLayer, LastTick, MovementTuning, Player};

const PLAYER_SIZE: Vec2 = Vec2::new(24.0, 48.0);
/// Cursor offset used when logging how far an archetype dashes.
const LOGGED_DASH_OFFSET: f32 = 200.0;

/// Spawn the player with the tuning of the selected archetype.
pub(crate) fn spawn_player_from_archetype(
    mut commands: Commands,
    selected: Res<SelectedArchetype>,
    registry: Res<ArchetypeRegistry>,
    existing_player: Query<Entity, With<Player>>,
) {
    // Don't spawn if player already exists
    if !existing_player.is_empty() {
        info!("Player already exists, skipping spawn");
        return;
    }

    let tuning = match registry.archetypes.get(&selected.archetype_id) {
        Some(def) => {
            info!("Using archetype '{}' ({})", def.id, def.name);
            def.tuning.clone()
        }
        None => {
            warn!(
                "Archetype '{}' not found in registry, using default tuning",
                selected.archetype_id
            );
            MovementTuning::default()
        }
    };

    info!(
        "Spawning player: max_speed={}, jump_height={:.1}, dash_reach={:.1}",
        tuning.max_speed,
        jump_apex_height(&tuning, FIXED_DT),
        dash_reach(&tuning, LOGGED_DASH_OFFSET, FIXED_DT),
    );

    commands.spawn((
        // Identity & Movement
        (
            Player,
            CharacterMotor::default(),
            LastTick::default(),
            tuning,
        ),
        // Rendering
        Sprite {
            color: Color::srgb(0.9, 0.9, 0.9),
            custom_size: Some(PLAYER_SIZE),
            ..default()
        },
        Transform::from_xyz(0.0, 100.0, 0.0),
        // Physics
        (
            RigidBody::Dynamic,
            Collider::rectangle(PLAYER_SIZE.x, PLAYER_SIZE.y),
            LockedAxes::ROTATION_LOCKED,
            LinearVelocity::default(),
            GravityScale(0.0), // The motor owns gravity
            Friction::new(0.0),
            Restitution::new(0.0),
            CollisionLayers::new(GameLayer::Player, [GameLayer::Ground, GameLayer::Wall]),
        ),
    ));
}
