//! Camera domain: framing tuning and arbitration bookkeeping.

use bevy::prelude::*;
use serde::{Deserialize, Serialize};

use crate::camera::{RigKind, ShoulderSide};

#[derive(Resource, Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct CameraTuning {
    /// Distance of the cover rig out from the wall
    pub cover_follow_distance: f32,
    pub cover_follow_height: f32,
    /// Lateral offset of the cover rig along the wall tangent
    pub cover_shoulder_offset: f32,
    /// Eye height of the first-person rig above the capsule centre
    pub eye_height: f32,
}

impl Default for CameraTuning {
    fn default() -> Self {
        Self {
            cover_follow_distance: 2.5,
            cover_follow_height: 0.6,
            cover_shoulder_offset: 0.6,
            eye_height: 0.7,
        }
    }
}

/// Result of the last arbitration, readable by other systems.
#[derive(Resource, Debug, Default, Clone)]
pub struct CameraArbiter {
    /// Current explore rig, injected by camera zones
    pub explore_rig: Option<Entity>,
    pub active_kind: Option<RigKind>,
    pub active_entity: Option<Entity>,
    pub shoulder: ShoulderSide,
}
