//! Movement domain: tuning for free-roam locomotion and the character body.

use bevy::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Resource, Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct MovementTuning {
    pub move_speed: f32,
    pub rotation_speed: f32,
    pub capsule_radius: f32,
    /// Length of the capsule's cylindrical section
    pub capsule_length: f32,
    /// Radians of look rotation per pixel of mouse motion
    pub look_sensitivity: f32,
}

impl Default for MovementTuning {
    fn default() -> Self {
        Self {
            move_speed: 5.0,
            rotation_speed: 10.0,
            capsule_radius: 0.4,
            capsule_length: 1.0,
            look_sensitivity: 0.003,
        }
    }
}

impl MovementTuning {
    /// Full standing height of the character capsule.
    pub fn capsule_height(&self) -> f32 {
        self.capsule_length + self.capsule_radius * 2.0
    }
}
