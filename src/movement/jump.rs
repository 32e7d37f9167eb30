//! Movement domain: gravity, floor edges and the jump state machine.
//!
//! | phase                      | event                               | next phase                     |
//! |----------------------------|-------------------------------------|--------------------------------|
//! | any                        | floor entered, buffered jump live   | `Ascending` (buffered launch)  |
//! | any                        | floor entered                       | `Grounded { coyote_armed }`    |
//! | `Grounded { armed: true }` | floor left                          | `CoyoteEligible`               |
//! | `Grounded { armed: false }`| floor left                          | `Descending`                   |
//! | `Grounded`                 | jump pressed                        | `Ascending` (ground launch)    |
//! | `CoyoteEligible`           | jump pressed, coyote live           | `Ascending` (coyote launch)    |
//! | `CoyoteEligible`           | coyote expired                      | `Descending`                   |
//! | `Ascending`                | apex reached or jump released       | `Descending` / `Grounded`      |

use serde::Serialize;

use crate::movement::{Countdown, InputSnapshot, MovementState, MovementTuning};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub enum JumpPhase {
    /// Standing on the floor. `coyote_armed` is false only between a launch
    /// from the floor and the character actually leaving it.
    Grounded { coyote_armed: bool },
    /// Rising from a launch; releasing jump cuts the ascent short.
    Ascending,
    /// Walked off a ledge; a jump is still allowed while the coyote window runs.
    CoyoteEligible,
    /// Airborne with no jump available.
    #[default]
    Descending,
}

/// Which window allowed a launch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum JumpTrigger {
    Ground,
    Coyote,
    Buffered,
}

#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct JumpState {
    pub phase: JumpPhase,
    pub coyote: Countdown,
    pub buffer: Countdown,
}

impl JumpState {
    pub fn is_jumping(&self) -> bool {
        self.phase == JumpPhase::Ascending
    }

    pub fn coyote_ready(&self) -> bool {
        matches!(
            self.phase,
            JumpPhase::Grounded { coyote_armed: true } | JumpPhase::CoyoteEligible
        )
    }

    fn can_coyote_jump(&self) -> bool {
        self.phase == JumpPhase::CoyoteEligible && !self.coyote.expired()
    }

    fn launch(&mut self, movement: &mut MovementState, tuning: &MovementTuning) {
        movement.velocity.y = -tuning.jump_velocity;
        self.phase = JumpPhase::Ascending;
        self.coyote.stop();
        self.buffer.stop();
    }

    fn settle(&mut self, on_floor: bool) {
        self.phase = if on_floor {
            JumpPhase::Grounded {
                coyote_armed: false,
            }
        } else {
            JumpPhase::Descending
        };
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct JumpOutcome {
    pub movement: MovementState,
    pub jump: JumpState,
    pub launched: Option<JumpTrigger>,
}

/// Run one tick of the vertical controller.
///
/// Floor edges are detected against `movement.was_on_floor`, which is
/// refreshed at the end of the step. Landing is processed before the jump
/// trigger, so at most one launch happens per tick.
pub fn step(
    mut movement: MovementState,
    mut jump: JumpState,
    input: &InputSnapshot,
    tuning: &MovementTuning,
    dt: f32,
) -> JumpOutcome {
    let on_floor = movement.contacts.on_floor;
    let mut launched = None;

    jump.coyote.tick(dt);
    jump.buffer.tick(dt);

    if movement.floor_entered() {
        movement.velocity.y = tuning.floor_stick_speed;
        jump.coyote.stop();
        if input.jump_held && !jump.buffer.expired() {
            jump.launch(&mut movement, tuning);
            launched = Some(JumpTrigger::Buffered);
        } else {
            jump.buffer.stop();
            jump.phase = JumpPhase::Grounded { coyote_armed: true };
        }
    }

    if movement.floor_left() {
        match jump.phase {
            JumpPhase::Grounded { coyote_armed: true } => {
                jump.coyote.start(tuning.coyote_time);
                jump.phase = JumpPhase::CoyoteEligible;
            }
            JumpPhase::Grounded {
                coyote_armed: false,
            } => jump.phase = JumpPhase::Descending,
            _ => {}
        }
    }

    if !on_floor {
        movement.velocity.y += tuning.gravity;
        if let Some(max_fall) = tuning.max_fall_speed {
            movement.velocity.y = movement.velocity.y.min(max_fall);
        }
        if input.jump_just_pressed {
            jump.buffer.start(tuning.buffer_time);
        }
    }

    if launched.is_none() && input.jump_just_pressed {
        let trigger = if on_floor {
            Some(JumpTrigger::Ground)
        } else if jump.can_coyote_jump() {
            Some(JumpTrigger::Coyote)
        } else {
            None
        };
        if let Some(trigger) = trigger {
            jump.launch(&mut movement, tuning);
            launched = Some(trigger);
        }
    }

    if jump.is_jumping() {
        if movement.velocity.y >= 0.0 {
            jump.settle(on_floor);
        } else if input.jump_just_released {
            movement.velocity.y *= tuning.jump_cut_factor;
            jump.settle(on_floor);
        }
    }

    if jump.phase == JumpPhase::CoyoteEligible && jump.coyote.expired() {
        jump.phase = JumpPhase::Descending;
    }

    movement.was_on_floor = on_floor;

    JumpOutcome {
        movement,
        jump,
        launched,
    }
}
