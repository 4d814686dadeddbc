//! Camera domain: priority arbitration as a pure function of locomotion state.

use crate::cover::EdgeReport;
use crate::movement::MovementMode;

pub const EXPLORE_PRIORITY: i32 = 10;
pub const COVER_PRIORITY: i32 = 20;
pub const FIRST_PERSON_PRIORITY: i32 = 30;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RigKind {
    Explore,
    Cover,
    FirstPerson,
}

/// Which shoulder the cover camera frames from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ShoulderSide {
    #[default]
    Right,
    Left,
}

impl ShoulderSide {
    /// +1 for right, -1 for left, along the wall tangent.
    pub fn sign(self) -> f32 {
        match self {
            ShoulderSide::Right => 1.0,
            ShoulderSide::Left => -1.0,
        }
    }
}

/// One frame's priority snapshot. Exactly one entry is nonzero.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CameraPriorities {
    pub explore: i32,
    pub cover: i32,
    pub first_person: i32,
}

impl CameraPriorities {
    pub fn of(&self, kind: RigKind) -> i32 {
        match kind {
            RigKind::Explore => self.explore,
            RigKind::Cover => self.cover,
            RigKind::FirstPerson => self.first_person,
        }
    }

    /// The rig with the highest nonzero priority.
    pub fn active(&self) -> Option<RigKind> {
        [RigKind::Explore, RigKind::Cover, RigKind::FirstPerson]
            .into_iter()
            .filter(|kind| self.of(*kind) > 0)
            .max_by_key(|kind| self.of(*kind))
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ArbiterInput {
    pub mode: MovementMode,
    pub edges: EdgeReport,
    /// Rig that was active after the previous arbitration
    pub previous_active: Option<RigKind>,
    pub previous_shoulder: ShoulderSide,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CameraDecision {
    pub priorities: CameraPriorities,
    pub active: RigKind,
    /// First-person look axes go back to neutral this frame
    pub reset_first_person_look: bool,
    pub shoulder: ShoulderSide,
}

pub fn arbitrate(input: &ArbiterInput) -> CameraDecision {
    let mut priorities = CameraPriorities::default();
    let mut reset_first_person_look = false;

    match input.mode {
        MovementMode::FirstPerson => {
            priorities.first_person = FIRST_PERSON_PRIORITY;
            reset_first_person_look = input.previous_active != Some(RigKind::FirstPerson);
        }
        // About to leave cover: keep the wider explore framing
        MovementMode::Cover if input.edges.is_near_edge() => {
            priorities.explore = EXPLORE_PRIORITY;
        }
        MovementMode::Cover => {
            priorities.cover = COVER_PRIORITY;
        }
        MovementMode::Free => {
            priorities.explore = EXPLORE_PRIORITY;
        }
    }

    CameraDecision {
        priorities,
        active: priorities.active().unwrap_or(RigKind::Explore),
        reset_first_person_look,
        shoulder: select_shoulder(&input.edges, input.previous_shoulder),
    }
}

/// Frames toward the open side; with both open, toward the last slide.
pub fn select_shoulder(edges: &EdgeReport, previous: ShoulderSide) -> ShoulderSide {
    match (edges.right_open, edges.left_open) {
        (true, true) if edges.last_slide_sign > 0.0 => ShoulderSide::Right,
        (true, true) => ShoulderSide::Left,
        (true, false) => ShoulderSide::Right,
        (false, true) => ShoulderSide::Left,
        (false, false) => previous,
    }
}
