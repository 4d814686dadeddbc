//! Cover domain: attachment events.

use bevy::ecs::message::Message;
use bevy::prelude::*;

use crate::cover::CoverExitReason;

/// Event fired when a character attaches to a wall
#[derive(Debug)]
pub struct CoverEnteredEvent {
    pub entity: Entity,
    pub wall_normal: Dir3,
    pub snapped: bool,
}

impl Message for CoverEnteredEvent {}

/// Event fired when a character leaves cover
#[derive(Debug)]
pub struct CoverExitedEvent {
    pub entity: Entity,
    pub reason: CoverExitReason,
}

impl Message for CoverExitedEvent {}
