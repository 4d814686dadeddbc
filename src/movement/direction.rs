//! Movement domain: camera-relative direction math.

use bevy::prelude::*;

use super::components::MovementInput;

/// Converts raw input into a world-space direction on the ground plane.
///
/// Camera axes are flattened and normalized; the result is not renormalized,
/// so partial stick deflection gives a partial-length vector.
pub fn world_move_direction(input: Vec2, camera_forward: Vec3, camera_right: Vec3) -> Vec3 {
    if input.length_squared() < MovementInput::PRESS_THRESHOLD_SQ {
        return Vec3::ZERO;
    }

    let forward = Vec3::new(camera_forward.x, 0.0, camera_forward.z).normalize_or_zero();
    let right = Vec3::new(camera_right.x, 0.0, camera_right.z).normalize_or_zero();

    forward * input.y + right * input.x
}

/// Unit direction for `direction`, or `None` below `min_magnitude`.
pub fn normalized_move(direction: Vec3, min_magnitude: f32) -> Option<Dir3> {
    if direction.length() < min_magnitude {
        return None;
    }
    Dir3::new(direction).ok()
}
