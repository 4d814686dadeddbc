//! Camera domain: rigs that follow the player.
//!
//! Explore rigs are level geometry and spawned with the level.

use bevy::prelude::*;

use crate::camera::{CameraRig, CoverCameraOffset, FirstPersonLook, RigKind};

pub(crate) fn spawn_follow_rigs(mut commands: Commands) {
    commands.spawn((
        Name::new("Cover Camera"),
        CameraRig::new(RigKind::Cover),
        CoverCameraOffset::default(),
        Camera3d::default(),
        Camera {
            is_active: false,
            ..default()
        },
        Transform::default(),
    ));

    commands.spawn((
        Name::new("First Person Camera"),
        CameraRig::new(RigKind::FirstPerson),
        FirstPersonLook::default(),
        Camera3d::default(),
        Camera {
            is_active: false,
            ..default()
        },
        Transform::default(),
    ));

    info!("[CAMERA] Spawned cover and first-person rigs");
}
