//! Physics domain: tests for surface classification and slide clipping.

use bevy::prelude::*;

use super::motor::clip_to_surface;
use super::{FrameContacts, SurfaceKind};

#[test]
fn test_unclassified_surfaces_are_solid() {
    assert_eq!(SurfaceKind::default(), SurfaceKind::Solid);
}

#[test]
fn test_frame_contacts_start_empty() {
    assert!(FrameContacts::default().0.is_empty());
}

#[test]
fn test_clip_removes_motion_into_wall() {
    let clipped = clip_to_surface(Vec3::new(1.0, 0.0, -1.0), Vec3::Z);
    assert!((clipped - Vec3::new(1.0, 0.0, 0.0)).length() < 1e-6);
}

#[test]
fn test_clip_keeps_motion_away_from_wall() {
    let away = Vec3::new(0.5, 0.0, 2.0);
    assert_eq!(clip_to_surface(away, Vec3::Z), away);
}

#[test]
fn test_clip_head_on_stops_completely() {
    let clipped = clip_to_surface(Vec3::NEG_Z * 3.0, Vec3::Z);
    assert!(clipped.length() < 1e-6);
}
