//! Validation for tuning values that parse but cannot work together.

use super::data::{TUNING_SCHEMA_VERSION, TuningFile};

/// A validation error with context about what failed.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidationError {
    pub section: &'static str,
    pub field: &'static str,
    pub message: String,
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}.{}: {}", self.section, self.field, self.message)
    }
}

/// Helper macro for checking a value is strictly positive
macro_rules! check_positive {
    ($errors:expr, $section:expr, $owner:expr, $field:ident) => {
        if !($owner.$field > 0.0) {
            $errors.push(ValidationError {
                section: $section,
                field: stringify!($field),
                message: format!("must be positive, got {}", $owner.$field),
            });
        }
    };
}

/// Helper macro for checking a value is not negative
macro_rules! check_non_negative {
    ($errors:expr, $section:expr, $owner:expr, $field:ident) => {
        if !($owner.$field >= 0.0) {
            $errors.push(ValidationError {
                section: $section,
                field: stringify!($field),
                message: format!("must not be negative, got {}", $owner.$field),
            });
        }
    };
}

/// Returns a list of validation errors, empty if the tuning is usable.
pub fn validate_tuning(tuning: &TuningFile) -> Vec<ValidationError> {
    let mut errors = Vec::new();

    if tuning.schema_version != TUNING_SCHEMA_VERSION {
        errors.push(ValidationError {
            section: "tuning",
            field: "schema_version",
            message: format!(
                "expected {}, got {}",
                TUNING_SCHEMA_VERSION, tuning.schema_version
            ),
        });
    }

    // Movement
    let movement = &tuning.movement;
    check_positive!(errors, "movement", movement, move_speed);
    check_positive!(errors, "movement", movement, rotation_speed);
    check_positive!(errors, "movement", movement, capsule_radius);
    check_non_negative!(errors, "movement", movement, capsule_length);
    check_non_negative!(errors, "movement", movement, look_sensitivity);

    // Cover
    let cover = &tuning.cover;
    check_positive!(errors, "cover", cover, cover_move_speed);
    check_positive!(errors, "cover", cover, wall_check_distance);
    check_positive!(errors, "cover", cover, snap_probe_distance);
    check_non_negative!(errors, "cover", cover, edge_check_offset);
    check_non_negative!(errors, "cover", cover, min_move_magnitude);
    check_non_negative!(errors, "cover", cover, slide_sign_threshold);

    if !(cover.enter_dot_threshold > 0.0 && cover.enter_dot_threshold <= 1.0) {
        errors.push(ValidationError {
            section: "cover",
            field: "enter_dot_threshold",
            message: format!(
                "must be in (0, 1], got {}",
                cover.enter_dot_threshold
            ),
        });
    }

    // Side probes must reach past the edge-exit probe
    let edge_probe_offset = cover.edge_probe_offset(movement.capsule_radius);
    if !(cover.near_edge_distance > edge_probe_offset) {
        errors.push(ValidationError {
            section: "cover",
            field: "near_edge_distance",
            message: format!(
                "must exceed capsule_radius + edge_check_offset ({}), got {}",
                edge_probe_offset, cover.near_edge_distance
            ),
        });
    }

    // Camera
    let camera = &tuning.camera;
    check_non_negative!(errors, "camera", camera, cover_follow_distance);
    check_non_negative!(errors, "camera", camera, cover_shoulder_offset);

    errors
}
