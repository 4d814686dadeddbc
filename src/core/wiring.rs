//! Core domain: startup check that every locomotion collaborator exists.

use bevy::ecs::message::MessageWriter;
use bevy::prelude::*;

use crate::camera::{CameraRig, DefaultExploreRig, RigKind};
use crate::movement::{MovementModeState, Player};

/// A collaborator the locomotion pipeline needs is missing or duplicated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WiringError {
    pub collaborator: &'static str,
    pub found: usize,
}

impl std::fmt::Display for WiringError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "expected exactly one {}, found {}",
            self.collaborator, self.found
        )
    }
}

/// How many of each collaborator the world holds after startup.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct WiringCounts {
    pub players: usize,
    pub cover_rigs: usize,
    pub first_person_rigs: usize,
    pub default_explore_rigs: usize,
}

/// Returns one error per collaborator whose count is not exactly one.
pub fn check_wiring(counts: &WiringCounts) -> Vec<WiringError> {
    [
        ("player with a movement state", counts.players),
        ("cover camera rig", counts.cover_rigs),
        ("first-person camera rig", counts.first_person_rigs),
        ("default explore camera rig", counts.default_explore_rigs),
    ]
    .into_iter()
    .filter(|(_, found)| *found != 1)
    .map(|(collaborator, found)| WiringError {
        collaborator,
        found,
    })
    .collect()
}

pub(crate) fn verify_wiring(
    players: Query<(), (With<Player>, With<MovementModeState>)>,
    rigs: Query<&CameraRig>,
    default_explore_rigs: Query<(), (With<DefaultExploreRig>, With<CameraRig>)>,
    mut exit: MessageWriter<AppExit>,
) {
    let rigs_of = |kind: RigKind| rigs.iter().filter(|rig| rig.kind == kind).count();

    let counts = WiringCounts {
        players: players.iter().count(),
        cover_rigs: rigs_of(RigKind::Cover),
        first_person_rigs: rigs_of(RigKind::FirstPerson),
        default_explore_rigs: default_explore_rigs.iter().count(),
    };

    let errors = check_wiring(&counts);
    if errors.is_empty() {
        info!("[WIRING] Locomotion collaborators present: {:?}", counts);
        return;
    }

    for error in &errors {
        error!("[WIRING] {}", error);
    }
    exit.write(AppExit::error());
}
