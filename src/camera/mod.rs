//! Camera domain: priority-driven rig arbitration and framing.

mod arbiter;
mod components;
mod events;
mod resources;
mod spawn;
mod systems;


pub use arbiter::{
    ArbiterInput, COVER_PRIORITY, CameraDecision, CameraPriorities, EXPLORE_PRIORITY,
    FIRST_PERSON_PRIORITY, RigKind, ShoulderSide, arbitrate, select_shoulder,
};
pub use components::{CameraRig, CameraZone, CoverCameraOffset, DefaultExploreRig, FirstPersonLook};
pub use events::SetExploreCameraEvent;
pub use resources::{CameraArbiter, CameraTuning};

use bevy::prelude::*;

use crate::camera::spawn::spawn_follow_rigs;
use crate::camera::systems::{
    activate_cameras, aim_explore_rigs, apply_explore_camera, arbitrate_cameras,
    follow_cover_rig, follow_first_person_rig, read_first_person_look,
    register_default_explore_rig, track_camera_zones,
};
use crate::core::LocomotionSet;

pub struct CameraPlugin;

impl Plugin for CameraPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<CameraTuning>()
            .init_resource::<CameraArbiter>()
            .add_message::<SetExploreCameraEvent>()
            .add_systems(Startup, spawn_follow_rigs)
            .add_systems(PostStartup, register_default_explore_rig)
            .add_systems(
                Update,
                read_first_person_look.in_set(LocomotionSet::Input),
            )
            .add_systems(
                Update,
                (
                    track_camera_zones,
                    apply_explore_camera,
                    arbitrate_cameras,
                    activate_cameras,
                    (follow_cover_rig, follow_first_person_rig, aim_explore_rigs),
                )
                    .chain()
                    .in_set(LocomotionSet::Camera),
            );
    }
}
