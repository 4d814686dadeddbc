//! Cover domain: attachment tuning.

use bevy::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Resource, Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct CoverTuning {
    /// Lateral slide speed along the wall (m/s)
    pub cover_move_speed: f32,
    /// Shared by entry (moving into the wall) and push-off exit
    pub enter_dot_threshold: f32,
    /// Length of the edge and side-openness probes
    pub wall_check_distance: f32,
    /// Extra lateral offset past the capsule radius for the edge-exit probe
    pub edge_check_offset: f32,
    /// Lateral offset for the side-openness probes read by the camera
    pub near_edge_distance: f32,
    /// Length of the snap probe cast on entry
    pub snap_probe_distance: f32,
    /// World directions shorter than this count as no input
    pub min_move_magnitude: f32,
    /// Lateral motion needed before the remembered slide side flips
    pub slide_sign_threshold: f32,
}

impl Default for CoverTuning {
    fn default() -> Self {
        Self {
            cover_move_speed: 2.0,
            enter_dot_threshold: 0.7,
            wall_check_distance: 1.5,
            edge_check_offset: 0.3,
            near_edge_distance: 2.0,
            snap_probe_distance: 2.0,
            min_move_magnitude: 0.1,
            slide_sign_threshold: 0.1,
        }
    }
}

impl CoverTuning {
    /// Lateral offset of the edge-exit probe for a capsule of `capsule_radius`.
    pub fn edge_probe_offset(&self, capsule_radius: f32) -> f32 {
        capsule_radius + self.edge_check_offset
    }
}
