//! Movement domain: contact clamps and horizontal acceleration.

use crate::movement::{InputSnapshot, MovementState, MovementTuning};

/// Zero the velocity components pushing into a wall or ceiling touched last tick.
pub fn clamp_to_contacts(mut state: MovementState) -> MovementState {
    if state.contacts.on_wall {
        state.velocity.x = 0.0;
    }
    if state.contacts.on_ceiling {
        state.velocity.y = 0.0;
    }
    state
}

/// Accelerate toward the single held direction, or bleed speed when no
/// direction is held. Holding both directions leaves `velocity.x` untouched.
pub fn step(
    mut state: MovementState,
    input: &InputSnapshot,
    tuning: &MovementTuning,
) -> MovementState {
    let vx = state.velocity.x;

    state.velocity.x = match (input.move_left, input.move_right) {
        (true, false) => (vx - tuning.accel).clamp(-tuning.max_speed, tuning.max_speed),
        (false, true) => (vx + tuning.accel).clamp(-tuning.max_speed, tuning.max_speed),
        (false, false) if vx.abs() > tuning.decel => vx - tuning.decel * vx.signum(),
        (false, false) => 0.0,
        (true, true) => vx,
    };

    state
}
