//! Movement domain: locomotion mode and per-character input state.

use bevy::prelude::*;

use crate::animation::AnimationFlags;
use crate::cover::{CoverEdges, CoverState};
use crate::physics::FrameContacts;

/// Marker for the player-controlled character.
///
/// Pulls in everything the locomotion pipeline expects on a character, so a
/// player can never be spawned half-wired.
#[derive(Component, Debug)]
#[require(
    MovementModeState,
    MovementInput,
    MoveDirection,
    FirstPersonLock,
    FrameContacts,
    CoverState,
    CoverEdges,
    AnimationFlags
)]
pub struct Player;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Reflect)]
pub enum MovementMode {
    #[default]
    Free,
    Cover,
    FirstPerson,
}

/// Owns the character's current movement mode.
///
/// Transition guards live with the callers; this only refuses redundant
/// transitions.
#[derive(Component, Debug, Default, Clone, PartialEq, Eq)]
pub struct MovementModeState {
    mode: MovementMode,
}

impl MovementModeState {
    pub fn mode(&self) -> MovementMode {
        self.mode
    }

    /// Switches to `target`. Returns false, and does nothing else, when the
    /// character is already in that mode.
    pub fn set_mode(&mut self, target: MovementMode) -> bool {
        if self.mode == target {
            return false;
        }
        debug!("[MODE] {:?} -> {:?}", self.mode, target);
        self.mode = target;
        true
    }

    pub fn is_in_cover(&self) -> bool {
        self.mode == MovementMode::Cover
    }
}

/// Raw 2D movement input: x is lateral, y is forward.
///
/// Persists between frames until new input replaces it.
#[derive(Component, Debug, Default, Clone, Copy, PartialEq)]
pub struct MovementInput {
    pub axis: Vec2,
    pub is_pressed: bool,
}

impl MovementInput {
    pub const PRESS_THRESHOLD_SQ: f32 = 0.01;

    pub fn set(&mut self, axis: Vec2) {
        self.axis = axis;
        self.is_pressed = axis.length_squared() > Self::PRESS_THRESHOLD_SQ;
    }
}

/// This frame's camera-relative world movement direction.
#[derive(Component, Debug, Default, Clone, Copy, PartialEq)]
pub struct MoveDirection(pub Vec3);

/// Position the character is pinned to while in first person.
#[derive(Component, Debug, Default, Clone, Copy)]
pub struct FirstPersonLock(pub Option<Vec3>);

/// True when the character is free-roaming with the stick pressed.
pub fn is_running(state: &MovementModeState, input: &MovementInput) -> bool {
    state.mode() == MovementMode::Free && input.is_pressed
}
