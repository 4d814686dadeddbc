//! Camera domain: rig and zone components.

use bevy::prelude::*;

use crate::camera::{RigKind, ShoulderSide};

/// A virtual camera competing for activation.
#[derive(Component, Debug, Clone, Copy)]
pub struct CameraRig {
    pub kind: RigKind,
    /// Written by the arbiter every frame; 0 = inactive
    pub priority: i32,
}

impl CameraRig {
    pub fn new(kind: RigKind) -> Self {
        Self { kind, priority: 0 }
    }
}

/// Explore rig used until the player enters a camera zone.
#[derive(Component, Debug, Default)]
pub struct DefaultExploreRig;

/// Trigger volume that makes `explore_rig` the current explore camera.
#[derive(Component, Debug, Clone, Copy)]
pub struct CameraZone {
    pub explore_rig: Entity,
}

/// Look axes of the first-person rig, in radians.
#[derive(Component, Debug, Default, Clone, Copy, PartialEq)]
pub struct FirstPersonLook {
    pub yaw: f32,
    pub pitch: f32,
}

impl FirstPersonLook {
    pub const MAX_PITCH: f32 = 85.0 * std::f32::consts::PI / 180.0;

    pub fn reset(&mut self) {
        *self = Self::default();
    }

    pub fn apply_delta(&mut self, delta: Vec2, sensitivity: f32) {
        self.yaw -= delta.x * sensitivity;
        self.pitch = (self.pitch - delta.y * sensitivity).clamp(-Self::MAX_PITCH, Self::MAX_PITCH);
    }
}

/// Lateral framing of the cover rig.
#[derive(Component, Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct CoverCameraOffset {
    pub side: ShoulderSide,
}
