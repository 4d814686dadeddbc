//! Movement domain: discrete input events.

use bevy::ecs::message::Message;

/// First-person look was requested or released.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FirstPersonToggled {
    Enter,
    Exit,
}

impl Message for FirstPersonToggled {}
