//! Cover domain: the attachment state machine.
//!
//! Per frame, in order:
//! 1. entry on a fresh cover contact while free (nothing else that frame),
//! 2. exit when pushing away from the wall,
//! 3. lateral slide along the wall tangent,
//! 4. exit when the probe on this frame's slide side finds no wall.
//!
//! Everything here is a plain function of the character's components plus a
//! probe and a motor, so it runs the same against avian or a test world.

use bevy::prelude::*;

use crate::cover::{CoverFrame, CoverState, CoverTuning};
use crate::movement::{MovementMode, MovementModeState, normalized_move};
use crate::physics::{CharacterMotor, MotionContact, SurfaceKind, WallProbe};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CoverExitReason {
    PushedOff,
    ReachedEdge,
    /// Cover was dropped because the character switched to another mode
    ModeChanged,
}

/// What the cover engine did this frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum CoverOutcome {
    /// Not in cover and nothing to enter
    Idle,
    Entered { frame: CoverFrame, snapped: bool },
    /// In cover with no usable input
    Held,
    Slid { amount: f32 },
    Exited(CoverExitReason),
}

/// One character's view of the world for a cover update.
pub struct CoverAttachment<'a, P, M> {
    pub tuning: &'a CoverTuning,
    pub capsule_radius: f32,
    pub probe: &'a P,
    pub motor: &'a mut M,
}

impl<P, M> CoverAttachment<'_, P, M>
where
    P: WallProbe,
    M: CharacterMotor,
{
    /// Runs one frame of the attachment state machine.
    pub fn tick(
        &mut self,
        mode: &mut MovementModeState,
        cover: &mut CoverState,
        move_direction: Vec3,
        contacts: &[MotionContact],
        dt: f32,
    ) -> CoverOutcome {
        if let Some(outcome) = self.try_enter(mode, cover, move_direction, contacts) {
            return outcome;
        }
        self.update(mode, cover, move_direction, dt)
    }

    /// Free -> Cover on a fresh contact with a cover surface, if the character
    /// is moving into it steeply enough.
    pub fn try_enter(
        &mut self,
        mode: &mut MovementModeState,
        cover: &mut CoverState,
        move_direction: Vec3,
        contacts: &[MotionContact],
    ) -> Option<CoverOutcome> {
        if mode.mode() != MovementMode::Free || cover.is_attached() {
            return None;
        }
        let direction = normalized_move(move_direction, self.tuning.min_move_magnitude)?;

        let frame = contacts
            .iter()
            .filter(|contact| contact.surface == SurfaceKind::Cover)
            .filter_map(|contact| CoverFrame::from_contact_normal(contact.normal))
            .find(|frame| direction.dot(-*frame.wall_normal) > self.tuning.enter_dot_threshold)?;

        cover.frame = Some(frame);
        mode.set_mode(MovementMode::Cover);
        let snapped = self.snap(&frame);

        Some(CoverOutcome::Entered { frame, snapped })
    }

    /// Per-frame behaviour while attached: push-off, slide, edge check.
    pub fn update(
        &mut self,
        mode: &mut MovementModeState,
        cover: &mut CoverState,
        move_direction: Vec3,
        dt: f32,
    ) -> CoverOutcome {
        if mode.mode() != MovementMode::Cover {
            return CoverOutcome::Idle;
        }
        let Some(mut frame) = cover.frame else {
            return CoverOutcome::Idle;
        };
        let Some(direction) = normalized_move(move_direction, self.tuning.min_move_magnitude) else {
            return CoverOutcome::Held;
        };

        if direction.dot(*frame.wall_normal) > self.tuning.enter_dot_threshold {
            exit_cover(mode, cover);
            return CoverOutcome::Exited(CoverExitReason::PushedOff);
        }

        let amount = direction.dot(*frame.wall_tangent);
        if amount.abs() > self.tuning.slide_sign_threshold {
            frame.last_slide_sign = amount.signum();
        }
        cover.frame = Some(frame);

        // Contacts while sliding never re-trigger entry; drop them
        self.motor
            .move_by(frame.wall_tangent * (amount * self.tuning.cover_move_speed * dt));

        let origin = edge_probe_origin(
            &frame,
            self.motor.position(),
            amount,
            self.tuning.edge_probe_offset(self.capsule_radius),
        );
        let wall_ahead = self
            .probe
            .probe(origin, -frame.wall_normal, self.tuning.wall_check_distance);

        if wall_ahead.is_none() {
            exit_cover(mode, cover);
            return CoverOutcome::Exited(CoverExitReason::ReachedEdge);
        }

        CoverOutcome::Slid { amount }
    }

    /// Pulls the character flush against the wall, facing away from it.
    ///
    /// A missed probe leaves the pose untouched; the entry still stands.
    pub fn snap(&mut self, frame: &CoverFrame) -> bool {
        let position = self.motor.position();
        let Some(hit) = self
            .probe
            .probe(position, -frame.wall_normal, self.tuning.snap_probe_distance)
        else {
            debug!("[COVER] Snap probe missed, keeping current pose");
            return false;
        };

        let mut target = hit.point + frame.wall_normal * self.capsule_radius;
        target.y = position.y;

        let facing = Dir3::new(Vec3::new(frame.wall_normal.x, 0.0, frame.wall_normal.z)).ok();
        self.motor.place(target, facing);
        true
    }
}

/// Origin of the edge-exit probe for this frame's `slide` along the tangent.
/// A zero slide probes the positive tangent side.
pub fn edge_probe_origin(frame: &CoverFrame, position: Vec3, slide: f32, offset: f32) -> Vec3 {
    // -0.0 counts as zero
    let side = if slide >= 0.0 { 1.0 } else { -1.0 };
    position + frame.wall_tangent * (side * offset)
}

/// Cover -> Free, dropping the frame.
pub fn exit_cover(mode: &mut MovementModeState, cover: &mut CoverState) {
    mode.set_mode(MovementMode::Free);
    cover.frame = None;
}
