//! Physics domain: collision layers, surface classification, and the motion
//! primitives the locomotion code talks to.
//!
//! The cover engine never touches avian directly. It only sees the
//! [`WallProbe`] and [`CharacterMotor`] traits, which keeps it testable
//! against an in-memory world.

mod motor;

pub use motor::{KinematicMotor, SpatialWallProbe};

use avian3d::prelude::*;
use bevy::prelude::*;

/// Physics layers for collision filtering
#[derive(PhysicsLayer, Clone, Copy, Debug, Default)]
pub enum GameLayer {
    #[default]
    Default,
    /// Floors
    Ground,
    /// Anything the character collides with sideways, cover or not
    Wall,
    /// Player character
    Player,
    /// Camera zone sensors - never block movement
    CameraZone,
}

/// How a collider's surface should be treated by locomotion.
///
/// Attached to wall colliders. Colliders without it count as `Solid`.
#[derive(Component, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SurfaceKind {
    #[default]
    Solid,
    /// The character may attach to this surface
    Cover,
}

/// Result of a synchronous ray query.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ProbeHit {
    pub point: Vec3,
    pub normal: Vec3,
    pub distance: f32,
}

/// A contact reported while moving the character.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MotionContact {
    /// Surface normal at the contact, pointing away from the surface
    pub normal: Vec3,
    pub surface: SurfaceKind,
}

/// Point-in-time ray queries against the current world snapshot.
///
/// A miss is a normal answer ("open space"), not a failure.
pub trait WallProbe {
    fn probe(&self, origin: Vec3, direction: Dir3, max_distance: f32) -> Option<ProbeHit>;
}

/// Moves the character capsule.
pub trait CharacterMotor {
    fn position(&self) -> Vec3;

    /// Moves by `displacement`, resolving collisions, and reports every
    /// contact touched along the way.
    fn move_by(&mut self, displacement: Vec3) -> Vec<MotionContact>;

    /// Overwrites the pose directly with collision resolution suspended.
    fn place(&mut self, position: Vec3, facing: Option<Dir3>);
}

/// Contacts the character touched during this frame's movement.
///
/// Cleared at the start of every movement pass, so everything in here is a
/// fresh contact for the current frame.
#[derive(Component, Debug, Default, Clone)]
pub struct FrameContacts(pub Vec<MotionContact>);

/// Filter used by the character for both motion and probes.
pub fn wall_filter(character: Entity) -> SpatialQueryFilter {
    SpatialQueryFilter::from_mask(GameLayer::Wall).with_excluded_entities([character])
}

#[cfg(test)]
mod tests;
