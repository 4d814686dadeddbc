//! Camera domain: explore-camera injection.

use bevy::ecs::message::Message;
use bevy::prelude::*;

/// Event fired when the player crosses into a new camera zone
#[derive(Debug)]
pub struct SetExploreCameraEvent {
    pub rig: Entity,
}

impl Message for SetExploreCameraEvent {}
