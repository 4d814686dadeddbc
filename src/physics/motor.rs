//! Avian-backed implementations of the motion primitives.

use avian3d::prelude::*;
use bevy::prelude::*;

use super::{CharacterMotor, MotionContact, ProbeHit, SurfaceKind, WallProbe};

/// Gap kept between the capsule and whatever it slides against.
const SKIN_WIDTH: f32 = 0.02;
/// Collide-and-slide iterations per move.
const MAX_SLIDES: usize = 4;

/// Removes the part of `vector` that points into a surface with `normal`.
pub(crate) fn clip_to_surface(vector: Vec3, normal: Vec3) -> Vec3 {
    let into = vector.dot(normal);
    if into < 0.0 {
        vector - normal * into
    } else {
        vector
    }
}

/// Ray probe backed by avian's spatial query pipeline.
pub struct SpatialWallProbe<'a, 'w, 's> {
    spatial_query: &'a SpatialQuery<'w, 's>,
    filter: SpatialQueryFilter,
}

impl<'a, 'w, 's> SpatialWallProbe<'a, 'w, 's> {
    pub fn new(spatial_query: &'a SpatialQuery<'w, 's>, filter: SpatialQueryFilter) -> Self {
        Self {
            spatial_query,
            filter,
        }
    }
}

impl WallProbe for SpatialWallProbe<'_, '_, '_> {
    fn probe(&self, origin: Vec3, direction: Dir3, max_distance: f32) -> Option<ProbeHit> {
        self.spatial_query
            .cast_ray(origin, direction, max_distance, true, &self.filter)
            .map(|hit| ProbeHit {
                point: origin + direction * hit.distance,
                normal: hit.normal,
                distance: hit.distance,
            })
    }
}

/// Kinematic collide-and-slide motor for a single character.
///
/// Shape casts the character collider along the displacement, stops short of
/// the first hit, then slides the remainder along the hit surface.
pub struct KinematicMotor<'a, 'w, 's, F>
where
    F: Fn(Entity) -> SurfaceKind,
{
    spatial_query: &'a SpatialQuery<'w, 's>,
    transform: &'a mut Transform,
    shape: &'a Collider,
    filter: SpatialQueryFilter,
    classify: F,
}

impl<'a, 'w, 's, F> KinematicMotor<'a, 'w, 's, F>
where
    F: Fn(Entity) -> SurfaceKind,
{
    pub fn new(
        spatial_query: &'a SpatialQuery<'w, 's>,
        transform: &'a mut Transform,
        shape: &'a Collider,
        filter: SpatialQueryFilter,
        classify: F,
    ) -> Self {
        Self {
            spatial_query,
            transform,
            shape,
            filter,
            classify,
        }
    }

    pub fn rotation(&self) -> Quat {
        self.transform.rotation
    }

    pub fn set_rotation(&mut self, rotation: Quat) {
        self.transform.rotation = rotation;
    }
}

impl<F> CharacterMotor for KinematicMotor<'_, '_, '_, F>
where
    F: Fn(Entity) -> SurfaceKind,
{
    fn position(&self) -> Vec3 {
        self.transform.translation
    }

    fn move_by(&mut self, displacement: Vec3) -> Vec<MotionContact> {
        let mut contacts = Vec::new();
        let mut remaining = displacement;

        for _ in 0..MAX_SLIDES {
            let Ok((direction, length)) = Dir3::new_and_length(remaining) else {
                break;
            };

            // Starting flush against a wall is normal after a snap; only
            // report hits that push deeper into it
            let config = ShapeCastConfig {
                ignore_origin_penetration: true,
                ..ShapeCastConfig::from_max_distance(length + SKIN_WIDTH)
            };
            let hit = self.spatial_query.cast_shape(
                self.shape,
                self.transform.translation,
                self.transform.rotation,
                direction,
                &config,
                &self.filter,
            );

            let Some(hit) = hit else {
                self.transform.translation += remaining;
                break;
            };

            let travel = (hit.distance - SKIN_WIDTH).clamp(0.0, length);
            self.transform.translation += direction * travel;

            let normal = hit.normal1;
            contacts.push(MotionContact {
                normal,
                surface: (self.classify)(hit.entity),
            });

            remaining = clip_to_surface(remaining - direction * travel, normal);
        }

        contacts
    }

    fn place(&mut self, position: Vec3, facing: Option<Dir3>) {
        // Direct write: the next physics sync picks the pose up as-is.
        self.transform.translation = position;
        if let Some(facing) = facing {
            self.transform.look_to(facing, Dir3::Y);
        }
    }
}
