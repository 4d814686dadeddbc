//! Movement domain: system modules for locomotion updates.

pub(crate) mod input;
pub(crate) mod movement;

pub(crate) use input::{read_first_person_toggle, read_input};
pub(crate) use movement::{
    apply_first_person_toggle, apply_free_movement, hold_first_person_position,
    update_move_direction,
};
