//! Movement domain: locomotion mode state, input, and free-roam movement.

mod bootstrap;
mod components;
mod direction;
mod events;
mod resources;
mod systems;


pub use components::{
    FirstPersonLock, MoveDirection, MovementInput, MovementMode, MovementModeState, Player,
    is_running,
};
pub use direction::{normalized_move, world_move_direction};
pub use events::FirstPersonToggled;
pub use resources::MovementTuning;

use bevy::prelude::*;

use crate::core::LocomotionSet;
use crate::movement::bootstrap::spawn_player;
use crate::movement::systems::{
    apply_first_person_toggle, apply_free_movement, hold_first_person_position,
    read_first_person_toggle, read_input, update_move_direction,
};

pub struct MovementPlugin;

impl Plugin for MovementPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<MovementTuning>()
            .add_message::<FirstPersonToggled>()
            .add_systems(Startup, spawn_player)
            .add_systems(
                Update,
                (read_input, read_first_person_toggle).in_set(LocomotionSet::Input),
            )
            .add_systems(
                Update,
                (
                    apply_first_person_toggle,
                    update_move_direction,
                    apply_free_movement,
                    hold_first_person_position,
                )
                    .chain()
                    .in_set(LocomotionSet::Movement),
            );
    }
}
