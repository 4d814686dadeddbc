//! Camera domain: zone tracking, arbitration, and rig framing systems.

use avian3d::prelude::*;
use bevy::ecs::message::{MessageReader, MessageWriter};
use bevy::input::mouse::AccumulatedMouseMotion;
use bevy::prelude::*;

use crate::camera::{
    ArbiterInput, CameraArbiter, CameraRig, CameraTuning, CameraZone, CoverCameraOffset,
    DefaultExploreRig, FirstPersonLook, RigKind, SetExploreCameraEvent, arbitrate,
};
use crate::cover::{CoverEdges, CoverState};
use crate::movement::{MovementMode, MovementModeState, MovementTuning, Player};

/// Seeds the explore rig before any zone has been entered.
pub(crate) fn register_default_explore_rig(
    mut arbiter: ResMut<CameraArbiter>,
    defaults: Query<Entity, With<DefaultExploreRig>>,
) {
    if arbiter.explore_rig.is_some() {
        return;
    }
    if let Some(rig) = defaults.iter().next() {
        arbiter.explore_rig = Some(rig);
    }
}

/// Emits `SetExploreCameraEvent` when the player starts touching a camera zone.
pub(crate) fn track_camera_zones(
    mut collision_start_events: MessageReader<CollisionStart>,
    zones: Query<&CameraZone>,
    player_query: Query<Entity, With<Player>>,
    mut explore_events: MessageWriter<SetExploreCameraEvent>,
) {
    let Some(player_entity) = player_query.iter().next() else {
        // Consume events if no player
        for _ in collision_start_events.read() {}
        return;
    };

    for event in collision_start_events.read() {
        let (zone_entity, other) = if zones.get(event.collider1).is_ok() {
            (event.collider1, event.collider2)
        } else if zones.get(event.collider2).is_ok() {
            (event.collider2, event.collider1)
        } else {
            continue;
        };

        if other != player_entity {
            continue;
        }

        if let Ok(zone) = zones.get(zone_entity) {
            explore_events.write(SetExploreCameraEvent {
                rig: zone.explore_rig,
            });
        }
    }
}

pub(crate) fn apply_explore_camera(
    mut explore_events: MessageReader<SetExploreCameraEvent>,
    mut arbiter: ResMut<CameraArbiter>,
) {
    for event in explore_events.read() {
        if arbiter.explore_rig != Some(event.rig) {
            info!("[CAMERA] Explore camera is now {:?}", event.rig);
            arbiter.explore_rig = Some(event.rig);
        }
    }
}

/// Writes this frame's priority snapshot onto every rig.
pub(crate) fn arbitrate_cameras(
    mut arbiter: ResMut<CameraArbiter>,
    players: Query<(&MovementModeState, &CoverEdges), With<Player>>,
    mut rigs: Query<(
        Entity,
        &mut CameraRig,
        Option<&mut FirstPersonLook>,
        Option<&mut CoverCameraOffset>,
    )>,
) {
    let Ok((state, edges)) = players.single() else {
        return;
    };

    let decision = arbitrate(&ArbiterInput {
        mode: state.mode(),
        edges: edges.0,
        previous_active: arbiter.active_kind,
        previous_shoulder: arbiter.shoulder,
    });

    let mut active_entity = None;
    let mut highest = 0;

    for (entity, mut rig, look, offset) in &mut rigs {
        rig.priority = match rig.kind {
            RigKind::Explore if arbiter.explore_rig == Some(entity) => {
                decision.priorities.explore
            }
            RigKind::Explore => 0,
            kind => decision.priorities.of(kind),
        };

        if rig.priority > highest {
            highest = rig.priority;
            active_entity = Some(entity);
        }

        if decision.reset_first_person_look
            && let Some(mut look) = look
        {
            look.reset();
        }
        if let Some(mut offset) = offset {
            offset.side = decision.shoulder;
        }
    }

    if arbiter.active_kind != Some(decision.active) {
        debug!(
            "[CAMERA] Active rig {:?} -> {:?}",
            arbiter.active_kind, decision.active
        );
    }

    arbiter.active_kind = Some(decision.active);
    arbiter.active_entity = active_entity;
    arbiter.shoulder = decision.shoulder;
}

/// Only the arbitrated rig renders.
pub(crate) fn activate_cameras(
    arbiter: Res<CameraArbiter>,
    mut cameras: Query<(Entity, &mut Camera), With<CameraRig>>,
) {
    for (entity, mut camera) in &mut cameras {
        let active = arbiter.active_entity == Some(entity);
        if camera.is_active != active {
            camera.is_active = active;
        }
    }
}

pub(crate) fn read_first_person_look(
    mouse_motion: Res<AccumulatedMouseMotion>,
    tuning: Res<MovementTuning>,
    players: Query<&MovementModeState, With<Player>>,
    mut looks: Query<&mut FirstPersonLook>,
) {
    let Ok(state) = players.single() else {
        return;
    };
    if state.mode() != MovementMode::FirstPerson || mouse_motion.delta == Vec2::ZERO {
        return;
    }

    for mut look in &mut looks {
        look.apply_delta(mouse_motion.delta, tuning.look_sensitivity);
    }
}

pub(crate) fn follow_first_person_rig(
    camera_tuning: Res<CameraTuning>,
    players: Query<&Transform, With<Player>>,
    mut rigs: Query<(&FirstPersonLook, &mut Transform), (With<CameraRig>, Without<Player>)>,
) {
    let Ok(player) = players.single() else {
        return;
    };

    for (look, mut transform) in &mut rigs {
        transform.translation = player.translation + Vec3::Y * camera_tuning.eye_height;
        transform.rotation =
            player.rotation * Quat::from_euler(EulerRot::YXZ, look.yaw, look.pitch, 0.0);
    }
}

/// Frames the player from open space, shifted toward the selected shoulder.
pub(crate) fn follow_cover_rig(
    camera_tuning: Res<CameraTuning>,
    players: Query<(&Transform, &CoverState), With<Player>>,
    mut rigs: Query<(&CoverCameraOffset, &mut Transform), (With<CameraRig>, Without<Player>)>,
) {
    let Ok((player, cover)) = players.single() else {
        return;
    };
    let Some(frame) = cover.frame else {
        return;
    };

    for (offset, mut transform) in &mut rigs {
        let shoulder = frame.wall_tangent * (offset.side.sign() * camera_tuning.cover_shoulder_offset);
        let focus = player.translation + shoulder;
        transform.translation = focus
            + frame.wall_normal * camera_tuning.cover_follow_distance
            + Vec3::Y * camera_tuning.cover_follow_height;
        transform.look_at(focus, Vec3::Y);
    }
}

/// Fixed explore rigs keep the player in frame.
pub(crate) fn aim_explore_rigs(
    players: Query<&Transform, With<Player>>,
    mut rigs: Query<(&CameraRig, &mut Transform), Without<Player>>,
) {
    let Ok(player) = players.single() else {
        return;
    };

    for (rig, mut transform) in &mut rigs {
        if rig.kind == RigKind::Explore {
            transform.look_at(player.translation, Vec3::Y);
        }
    }
}
