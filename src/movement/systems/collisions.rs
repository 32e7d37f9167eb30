//! Movement domain: floor, wall and ceiling sensing after avian resolves a move.

use avian2d::prelude::*;
use bevy::prelude::*;

use crate::movement::{CharacterMotor, ContactFlags, GameLayer, MoveOutcome};

/// How far past the collider edge a surface still counts as touching.
const CONTACT_SKIN: f32 = 4.0;

/// Floors and ceilings are any solid surface, including the tops and
/// undersides of wall blocks. Only `Wall` blocks count as walls sideways.
pub(crate) fn surface_filter() -> SpatialQueryFilter {
    SpatialQueryFilter::from_mask([GameLayer::Ground, GameLayer::Wall])
}

/// Cast a short ray from each side of the character's box and hand the
/// result, together with the velocity avian left on the body, back to the
/// motor as the outcome of last tick's move.
pub(crate) fn sense_contacts(
    spatial_query: SpatialQuery,
    mut query: Query<(
        Entity,
        &Transform,
        &Collider,
        &LinearVelocity,
        &mut CharacterMotor,
    )>,
) {
    let surfaces = surface_filter();
    let wall_filter = SpatialQueryFilter::from_mask(GameLayer::Wall);

    for (entity, transform, collider, velocity, mut motor) in &mut query {
        let half_extents = match collider.shape_scaled().as_cuboid() {
            Some(c) => Vec2::new(c.half_extents.x, c.half_extents.y),
            None => Vec2::new(12.0, 24.0),
        };
        let origin = transform.translation.truncate();

        let touching = |offset: Vec2, direction: Dir2, reach: f32, filter: &SpatialQueryFilter| {
            spatial_query
                .cast_ray(origin + offset, direction, reach, true, filter)
                .is_some()
        };

        let contacts = ContactFlags {
            on_floor: touching(
                Vec2::new(0.0, -half_extents.y),
                Dir2::NEG_Y,
                CONTACT_SKIN,
                &surfaces,
            ),
            on_ceiling: touching(
                Vec2::new(0.0, half_extents.y),
                Dir2::Y,
                CONTACT_SKIN,
                &surfaces,
            ),
            on_wall: touching(Vec2::ZERO, Dir2::NEG_X, half_extents.x + CONTACT_SKIN, &wall_filter)
                || touching(Vec2::ZERO, Dir2::X, half_extents.x + CONTACT_SKIN, &wall_filter),
        };

        let was_on_floor = motor.movement.contacts.on_floor;
        if contacts.on_floor && !was_on_floor {
            debug!("Landed: entity={:?}", entity);
        } else if !contacts.on_floor && was_on_floor {
            debug!("Left floor: entity={:?}", entity);
        }

        // avian is y-up, the motor is y-down
        motor.resolve(MoveOutcome {
            velocity: Vec2::new(velocity.x, -velocity.y),
            contacts,
        });
    }
}
