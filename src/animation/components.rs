use bevy::prelude::*;

use crate::movement::{MovementInput, MovementMode, MovementModeState, is_running};

/// Parameters the character's animation graph polls each frame.
#[derive(Component, Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct AnimationFlags {
    pub is_running: bool,
    pub is_in_cover: bool,
}

impl AnimationFlags {
    pub fn from_state(state: &MovementModeState, input: &MovementInput) -> Self {
        Self {
            is_running: is_running(state, input),
            is_in_cover: state.mode() == MovementMode::Cover,
        }
    }
}
