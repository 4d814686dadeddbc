//! Cover domain: wall-relative frame and edge queries.

use bevy::prelude::*;

use crate::cover::CoverTuning;
use crate::physics::WallProbe;

/// Wall-relative basis established on cover entry.
///
/// Computed once on entry and held fixed until exit; the wall is treated as
/// locally planar for the whole attachment.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CoverFrame {
    /// Horizontal, pointing away from the wall into open space
    pub wall_normal: Dir3,
    /// `normal x up`; the slide axis
    pub wall_tangent: Dir3,
    /// Sign of the last lateral motion that cleared the slide threshold;
    /// picks the camera shoulder when both sides are open
    pub last_slide_sign: f32,
}

impl CoverFrame {
    /// Builds a frame from a raw contact normal. Returns `None` for normals
    /// with no horizontal component (floors, ceilings).
    pub fn from_contact_normal(normal: Vec3) -> Option<Self> {
        let wall_normal = Dir3::new(Vec3::new(normal.x, 0.0, normal.z)).ok()?;
        let wall_tangent = Dir3::new(wall_normal.cross(Vec3::Y)).ok()?;

        Some(Self {
            wall_normal,
            wall_tangent,
            last_slide_sign: 1.0,
        })
    }

    fn side_is_open(
        &self,
        side: f32,
        position: Vec3,
        tuning: &CoverTuning,
        probe: &impl WallProbe,
    ) -> bool {
        let origin = position + self.wall_tangent * (side * tuning.near_edge_distance);
        probe
            .probe(origin, -self.wall_normal, tuning.wall_check_distance)
            .is_none()
    }
}

/// Cover attachment owned by a character. `frame` is `Some` exactly while the
/// character is in cover.
#[derive(Component, Debug, Default, Clone, Copy, PartialEq)]
pub struct CoverState {
    pub frame: Option<CoverFrame>,
}

impl CoverState {
    pub fn is_attached(&self) -> bool {
        self.frame.is_some()
    }

    pub fn last_slide_sign(&self) -> f32 {
        self.frame.map_or(1.0, |frame| frame.last_slide_sign)
    }

    pub fn is_right_side_open(
        &self,
        position: Vec3,
        tuning: &CoverTuning,
        probe: &impl WallProbe,
    ) -> bool {
        self.frame
            .is_some_and(|frame| frame.side_is_open(1.0, position, tuning, probe))
    }

    pub fn is_left_side_open(
        &self,
        position: Vec3,
        tuning: &CoverTuning,
        probe: &impl WallProbe,
    ) -> bool {
        self.frame
            .is_some_and(|frame| frame.side_is_open(-1.0, position, tuning, probe))
    }

    pub fn is_near_edge(&self, position: Vec3, tuning: &CoverTuning, probe: &impl WallProbe) -> bool {
        self.edge_report(position, tuning, probe).is_near_edge()
    }

    /// Snapshot of all side queries for this frame.
    pub fn edge_report(
        &self,
        position: Vec3,
        tuning: &CoverTuning,
        probe: &impl WallProbe,
    ) -> EdgeReport {
        EdgeReport {
            right_open: self.is_right_side_open(position, tuning, probe),
            left_open: self.is_left_side_open(position, tuning, probe),
            last_slide_sign: self.last_slide_sign(),
        }
    }
}

/// Side-openness results, recomputed every frame after the cover update.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EdgeReport {
    pub right_open: bool,
    pub left_open: bool,
    pub last_slide_sign: f32,
}

impl Default for EdgeReport {
    fn default() -> Self {
        Self {
            right_open: false,
            left_open: false,
            last_slide_sign: 1.0,
        }
    }
}

impl EdgeReport {
    pub fn is_near_edge(&self) -> bool {
        self.right_open || self.left_open
    }
}

/// The character's latest `EdgeReport`, read by the camera arbiter.
#[derive(Component, Debug, Default, Clone, Copy, PartialEq)]
pub struct CoverEdges(pub EdgeReport);
