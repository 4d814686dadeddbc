//! Movement domain: mode-driven locomotion systems.

use avian3d::prelude::*;
use bevy::ecs::message::MessageReader;
use bevy::prelude::*;

use crate::camera::{CameraArbiter, CameraRig};
use crate::movement::{
    FirstPersonLock, FirstPersonToggled, MoveDirection, MovementInput, MovementMode,
    MovementModeState, MovementTuning, Player, world_move_direction,
};
use crate::physics::{CharacterMotor, FrameContacts, KinematicMotor, SurfaceKind, wall_filter};

/// Resolves the camera-relative world direction from the active rig.
pub(crate) fn update_move_direction(
    arbiter: Res<CameraArbiter>,
    rigs: Query<&GlobalTransform, With<CameraRig>>,
    mut query: Query<(&MovementInput, &mut MoveDirection), With<Player>>,
) {
    // Before the first arbitration there is no active rig; use world axes
    let (forward, right) = match arbiter.active_entity.and_then(|e| rigs.get(e).ok()) {
        Some(rig) => (*rig.forward(), *rig.right()),
        None => (Vec3::NEG_Z, Vec3::X),
    };

    for (input, mut direction) in &mut query {
        direction.0 = world_move_direction(input.axis, forward, right);
    }
}

pub(crate) fn apply_first_person_toggle(
    mut toggles: MessageReader<FirstPersonToggled>,
    mut query: Query<(&Transform, &mut MovementModeState, &mut FirstPersonLock), With<Player>>,
) {
    for toggle in toggles.read() {
        for (transform, mut state, mut lock) in &mut query {
            match toggle {
                FirstPersonToggled::Enter => {
                    if state.set_mode(MovementMode::FirstPerson) {
                        lock.0 = Some(transform.translation);
                        info!("[MODE] Entered first person at {:?}", transform.translation);
                    }
                }
                FirstPersonToggled::Exit => {
                    if state.mode() == MovementMode::FirstPerson {
                        state.set_mode(MovementMode::Free);
                        lock.0 = None;
                        info!("[MODE] Left first person");
                    }
                }
            }
        }
    }
}

/// Pins the character in place while looking in first person.
pub(crate) fn hold_first_person_position(
    mut query: Query<(&MovementModeState, &FirstPersonLock, &mut Transform), With<Player>>,
) {
    for (state, lock, mut transform) in &mut query {
        if state.mode() != MovementMode::FirstPerson {
            continue;
        }
        if let Some(position) = lock.0 {
            transform.translation = position;
        }
    }
}

pub(crate) fn apply_free_movement(
    time: Res<Time>,
    tuning: Res<MovementTuning>,
    spatial_query: SpatialQuery,
    surfaces: Query<&SurfaceKind>,
    mut query: Query<
        (
            Entity,
            &mut Transform,
            &Collider,
            &MovementModeState,
            &MoveDirection,
            &mut FrameContacts,
        ),
        With<Player>,
    >,
) {
    let dt = time.delta_secs();

    for (entity, mut transform, collider, state, direction, mut contacts) in &mut query {
        contacts.0.clear();

        if state.mode() != MovementMode::Free || direction.0.length_squared() <= 0.01 {
            continue;
        }

        let mut motor = KinematicMotor::new(
            &spatial_query,
            &mut *transform,
            collider,
            wall_filter(entity),
            |hit| surfaces.get(hit).copied().unwrap_or_default(),
        );

        // Turn toward the movement direction
        let target = Transform::IDENTITY.looking_to(direction.0, Vec3::Y).rotation;
        let blend = (tuning.rotation_speed * dt).min(1.0);
        let rotation = motor.rotation().slerp(target, blend);
        motor.set_rotation(rotation);

        contacts.0 = motor.move_by(direction.0 * tuning.move_speed * dt);
    }
}
