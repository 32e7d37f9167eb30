//! Validation for movement tuning values.

use crate::movement::MovementTuning;

/// A tuning value outside the range the motor is defined for.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidationError {
    pub archetype_id: String,
    pub field: &'static str,
    pub value: f32,
    pub expected: &'static str,
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Archetype '{}' has {} = {}, expected {}",
            self.archetype_id, self.field, self.value, self.expected
        )
    }
}

/// Helper macro for checking a field against a predicate
macro_rules! check_field {
    ($errors:expr, $id:expr, $tuning:expr, $field:ident, $expected:expr, $ok:expr) => {
        let value = $tuning.$field;
        if !$ok(value) {
            $errors.push(ValidationError {
                archetype_id: $id.to_string(),
                field: stringify!($field),
                value,
                expected: $expected,
            });
        }
    };
}

/// Validate one archetype's tuning.
/// Returns a list of validation errors, empty if every value is usable.
pub fn validate_tuning(id: &str, tuning: &MovementTuning) -> Vec<ValidationError> {
    let mut errors = Vec::new();
    let non_negative = |v: f32| v >= 0.0;
    let positive = |v: f32| v > 0.0;

    check_field!(errors, id, tuning, gravity, "a value >= 0", non_negative);
    check_field!(errors, id, tuning, jump_velocity, "a value >= 0", non_negative);
    check_field!(
        errors,
        id,
        tuning,
        jump_cut_factor,
        "a value in (0, 1]",
        |v: f32| v > 0.0 && v <= 1.0
    );
    check_field!(errors, id, tuning, accel, "a value >= 0", non_negative);
    check_field!(errors, id, tuning, decel, "a value > 0", positive);
    check_field!(errors, id, tuning, max_speed, "a value > 0", positive);
    check_field!(errors, id, tuning, coyote_time, "a value >= 0", non_negative);
    check_field!(errors, id, tuning, buffer_time, "a value >= 0", non_negative);
    check_field!(errors, id, tuning, dash_duration, "a value > 0", positive);
    check_field!(errors, id, tuning, floor_stick_speed, "a value >= 0", non_negative);

    if let Some(max) = tuning.max_dash_distance
        && max < 0.0
    {
        errors.push(ValidationError {
            archetype_id: id.to_string(),
            field: "max_dash_distance",
            value: max,
            expected: "a value >= 0",
        });
    }
    if let Some(max) = tuning.max_fall_speed
        && max <= 0.0
    {
        errors.push(ValidationError {
            archetype_id: id.to_string(),
            field: "max_fall_speed",
            value: max,
            expected: "a value > 0",
        });
    }

    errors
}
