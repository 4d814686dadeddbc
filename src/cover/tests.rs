//! Cover domain: tests for entry, slide, edge exit, and side queries, run
//! against an in-memory wall world.

use bevy::ecs::message::MessageReader;
use bevy::prelude::*;

use super::systems::release_stale_cover;
use super::{
    CoverAttachment, CoverExitReason, CoverExitedEvent, CoverFrame, CoverOutcome, CoverState,
    CoverTuning,
};
use crate::movement::{MovementMode, MovementModeState, Player};
use crate::physics::{CharacterMotor, MotionContact, ProbeHit, SurfaceKind, WallProbe};

const RADIUS: f32 = 0.4;
const DT: f32 = 0.1;

// -----------------------------------------------------------------------------
// Test world
// -----------------------------------------------------------------------------

/// A vertical wall segment of infinite height.
struct TestWall {
    center: Vec3,
    normal: Vec3,
    half_length: f32,
}

struct TestWalls(Vec<TestWall>);

impl TestWalls {
    /// One wall through the origin facing +Z, spanning x in [-half_length, half_length].
    fn facing_z(half_length: f32) -> Self {
        Self(vec![TestWall {
            center: Vec3::ZERO,
            normal: Vec3::Z,
            half_length,
        }])
    }
}

impl WallProbe for TestWalls {
    fn probe(&self, origin: Vec3, direction: Dir3, max_distance: f32) -> Option<ProbeHit> {
        let mut closest: Option<ProbeHit> = None;

        for wall in &self.0 {
            let denom = direction.dot(wall.normal);
            // Only the front face blocks rays
            if denom > -1e-6 {
                continue;
            }
            let distance = (wall.center - origin).dot(wall.normal) / denom;
            if !(0.0..=max_distance).contains(&distance) {
                continue;
            }
            let point = origin + direction * distance;
            let along = wall.normal.cross(Vec3::Y);
            if (point - wall.center).dot(along).abs() > wall.half_length {
                continue;
            }
            if closest.is_none_or(|hit| distance < hit.distance) {
                closest = Some(ProbeHit {
                    point,
                    normal: wall.normal,
                    distance,
                });
            }
        }

        closest
    }
}

#[derive(Default)]
struct TestBody {
    position: Vec3,
    facing: Option<Dir3>,
    placements: usize,
}

impl TestBody {
    fn at(position: Vec3) -> Self {
        Self {
            position,
            ..default()
        }
    }
}

impl CharacterMotor for TestBody {
    fn position(&self) -> Vec3 {
        self.position
    }

    fn move_by(&mut self, displacement: Vec3) -> Vec<MotionContact> {
        self.position += displacement;
        Vec::new()
    }

    fn place(&mut self, position: Vec3, facing: Option<Dir3>) {
        self.position = position;
        self.facing = facing;
        self.placements += 1;
    }
}

fn cover_contact(normal: Vec3) -> MotionContact {
    MotionContact {
        normal,
        surface: SurfaceKind::Cover,
    }
}

struct Harness {
    tuning: CoverTuning,
    walls: TestWalls,
    body: TestBody,
    mode: MovementModeState,
    cover: CoverState,
}

impl Harness {
    fn new(walls: TestWalls, start: Vec3) -> Self {
        Self {
            tuning: CoverTuning::default(),
            walls,
            body: TestBody::at(start),
            mode: MovementModeState::default(),
            cover: CoverState::default(),
        }
    }

    fn tick(&mut self, move_direction: Vec3, contacts: &[MotionContact]) -> CoverOutcome {
        let mut attachment = CoverAttachment {
            tuning: &self.tuning,
            capsule_radius: RADIUS,
            probe: &self.walls,
            motor: &mut self.body,
        };
        attachment.tick(&mut self.mode, &mut self.cover, move_direction, contacts, DT)
    }

    /// Walks into the +Z facing wall and attaches.
    fn enter(&mut self) {
        let outcome = self.tick(Vec3::NEG_Z, &[cover_contact(Vec3::Z)]);
        assert!(matches!(outcome, CoverOutcome::Entered { .. }));
    }

    fn near_edge(&self) -> bool {
        self.cover
            .is_near_edge(self.body.position, &self.tuning, &self.walls)
    }
}

fn approx_eq(a: Vec3, b: Vec3) -> bool {
    (a - b).length() < 1e-4
}

// -----------------------------------------------------------------------------
// CoverFrame tests
// -----------------------------------------------------------------------------

#[test]
fn test_frame_flattens_contact_normal() {
    let frame = CoverFrame::from_contact_normal(Vec3::new(0.0, 0.5, 2.0)).unwrap();
    assert!(approx_eq(*frame.wall_normal, Vec3::Z));
    assert!(approx_eq(*frame.wall_tangent, Vec3::NEG_X));
    assert_eq!(frame.last_slide_sign, 1.0);
}

#[test]
fn test_frame_rejects_floor_normal() {
    assert!(CoverFrame::from_contact_normal(Vec3::Y).is_none());
}

// -----------------------------------------------------------------------------
// Entry tests
// -----------------------------------------------------------------------------

#[test]
fn test_head_on_contact_enters_cover() {
    let mut h = Harness::new(TestWalls::facing_z(5.0), Vec3::new(0.0, 0.0, 1.0));

    let outcome = h.tick(Vec3::NEG_Z, &[cover_contact(Vec3::Z)]);

    assert!(matches!(outcome, CoverOutcome::Entered { snapped: true, .. }));
    assert_eq!(h.mode.mode(), MovementMode::Cover);
    let frame = h.cover.frame.unwrap();
    assert!(approx_eq(*frame.wall_normal, Vec3::Z));
}

#[test]
fn test_parallel_movement_does_not_enter() {
    let mut h = Harness::new(TestWalls::facing_z(5.0), Vec3::new(0.0, 0.0, 1.0));

    let outcome = h.tick(Vec3::X, &[cover_contact(Vec3::Z)]);

    assert_eq!(outcome, CoverOutcome::Idle);
    assert_eq!(h.mode.mode(), MovementMode::Free);
    assert!(h.cover.frame.is_none());
}

#[test]
fn test_entry_threshold_angle() {
    // dot = 1/sqrt(2) ~ 0.707, just inside 0.7
    let mut inside = Harness::new(TestWalls::facing_z(5.0), Vec3::new(0.0, 0.0, 1.0));
    inside.tick(Vec3::new(1.0, 0.0, -1.0), &[cover_contact(Vec3::Z)]);
    assert_eq!(inside.mode.mode(), MovementMode::Cover);

    // dot ~ 0.673, just outside
    let mut outside = Harness::new(TestWalls::facing_z(5.0), Vec3::new(0.0, 0.0, 1.0));
    outside.tick(Vec3::new(1.1, 0.0, -1.0), &[cover_contact(Vec3::Z)]);
    assert_eq!(outside.mode.mode(), MovementMode::Free);
}

#[test]
fn test_solid_surface_is_ignored() {
    let mut h = Harness::new(TestWalls::facing_z(5.0), Vec3::new(0.0, 0.0, 1.0));
    let solid = MotionContact {
        normal: Vec3::Z,
        surface: SurfaceKind::Solid,
    };

    let outcome = h.tick(Vec3::NEG_Z, &[solid]);

    assert_eq!(outcome, CoverOutcome::Idle);
    assert_eq!(h.mode.mode(), MovementMode::Free);
}

#[test]
fn test_no_entry_without_input() {
    let mut h = Harness::new(TestWalls::facing_z(5.0), Vec3::new(0.0, 0.0, 1.0));

    h.tick(Vec3::new(0.0, 0.0, -0.05), &[cover_contact(Vec3::Z)]);

    assert_eq!(h.mode.mode(), MovementMode::Free);
}

#[test]
fn test_no_entry_from_first_person() {
    let mut h = Harness::new(TestWalls::facing_z(5.0), Vec3::new(0.0, 0.0, 1.0));
    h.mode.set_mode(MovementMode::FirstPerson);

    h.tick(Vec3::NEG_Z, &[cover_contact(Vec3::Z)]);

    assert_eq!(h.mode.mode(), MovementMode::FirstPerson);
    assert!(h.cover.frame.is_none());
}

#[test]
fn test_recontact_in_cover_does_not_reenter() {
    let mut h = Harness::new(TestWalls::facing_z(5.0), Vec3::new(0.0, 0.0, 1.0));
    h.enter();
    let placements = h.body.placements;

    let outcome = h.tick(Vec3::NEG_Z, &[cover_contact(Vec3::Z)]);

    assert!(!matches!(outcome, CoverOutcome::Entered { .. }));
    assert_eq!(h.mode.mode(), MovementMode::Cover);
    assert_eq!(h.body.placements, placements);
}

// -----------------------------------------------------------------------------
// Snap tests
// -----------------------------------------------------------------------------

#[test]
fn test_snap_places_capsule_against_wall() {
    let mut h = Harness::new(TestWalls::facing_z(5.0), Vec3::new(0.3, 0.9, 1.0));

    h.enter();

    assert!(approx_eq(h.body.position, Vec3::new(0.3, 0.9, RADIUS)));
    let facing = h.body.facing.unwrap();
    assert!(approx_eq(*facing, Vec3::Z));
}

#[test]
fn test_snap_miss_keeps_pose_but_stays_in_cover() {
    // Wall is 3m away, beyond the 2m snap probe
    let start = Vec3::new(0.0, 0.0, 3.0);
    let mut h = Harness::new(TestWalls::facing_z(5.0), start);

    let outcome = h.tick(Vec3::NEG_Z, &[cover_contact(Vec3::Z)]);

    assert!(matches!(outcome, CoverOutcome::Entered { snapped: false, .. }));
    assert_eq!(h.mode.mode(), MovementMode::Cover);
    assert_eq!(h.body.position, start);
    assert_eq!(h.body.placements, 0);
}

// -----------------------------------------------------------------------------
// Exit tests
// -----------------------------------------------------------------------------

#[test]
fn test_push_off_exits_same_tick() {
    let mut h = Harness::new(TestWalls::facing_z(5.0), Vec3::new(0.0, 0.0, 1.0));
    h.enter();
    let before = h.body.position;

    // Mostly away from the wall with some slide input
    let outcome = h.tick(Vec3::new(0.5, 0.0, 1.0), &[]);

    assert_eq!(outcome, CoverOutcome::Exited(CoverExitReason::PushedOff));
    assert_eq!(h.mode.mode(), MovementMode::Free);
    // Push-off wins over sliding: no lateral displacement
    assert_eq!(h.body.position, before);
}

#[test]
fn test_round_trip_leaves_no_cover_frame() {
    let mut h = Harness::new(TestWalls::facing_z(5.0), Vec3::new(0.0, 0.0, 1.0));
    h.enter();

    h.tick(Vec3::Z, &[]);

    assert_eq!(h.mode.mode(), MovementMode::Free);
    assert!(h.cover.frame.is_none());
    assert!(!h.cover.is_attached());
    let report = h.cover.edge_report(h.body.position, &h.tuning, &h.walls);
    assert!(!report.right_open && !report.left_open);
}

#[test]
fn test_slide_exits_exactly_when_edge_probe_misses() {
    let mut h = Harness::new(TestWalls::facing_z(5.0), Vec3::new(0.0, 0.0, 1.0));
    h.enter();

    // Tangent is -X, so moving along -X slides with a positive amount
    let probe_offset = h.tuning.edge_probe_offset(RADIUS);
    let mut exit_tick = None;

    for tick in 1..=40 {
        let outcome = h.tick(Vec3::NEG_X, &[]);
        let probe_x = h.body.position.x - probe_offset;

        if probe_x < -5.0 {
            assert_eq!(outcome, CoverOutcome::Exited(CoverExitReason::ReachedEdge));
            exit_tick = Some(tick);
            break;
        }
        assert!(
            matches!(outcome, CoverOutcome::Slid { .. }),
            "tick {} exited early at x={}",
            tick,
            h.body.position.x
        );
        assert_eq!(h.mode.mode(), MovementMode::Cover);
    }

    // 0.2m per tick, edge probe leaves the wall once x < -4.3
    assert_eq!(exit_tick, Some(22));
    assert_eq!(h.mode.mode(), MovementMode::Free);
    assert!(h.cover.frame.is_none());
}

#[test]
fn test_near_edge_precedes_forced_exit() {
    let mut h = Harness::new(TestWalls::facing_z(5.0), Vec3::new(0.0, 0.0, 1.0));
    h.enter();
    assert!(!h.near_edge());

    let mut first_near_edge = None;
    let mut exit_tick = None;

    for tick in 1..=40 {
        let outcome = h.tick(Vec3::NEG_X, &[]);
        if let CoverOutcome::Exited(_) = outcome {
            exit_tick = Some(tick);
            break;
        }
        if first_near_edge.is_none() && h.near_edge() {
            first_near_edge = Some(tick);
        }
    }

    let first_near_edge = first_near_edge.expect("near-edge never reported");
    let exit_tick = exit_tick.expect("never exited");
    assert!(first_near_edge < exit_tick);
}

#[test]
fn test_stationary_in_cover_holds_even_near_edge() {
    let mut h = Harness::new(TestWalls::facing_z(5.0), Vec3::new(-4.6, 0.0, 1.0));
    h.enter();

    let outcome = h.tick(Vec3::ZERO, &[]);

    assert_eq!(outcome, CoverOutcome::Held);
    assert_eq!(h.mode.mode(), MovementMode::Cover);
}

#[test]
fn test_slide_sign_tracks_lateral_motion() {
    let mut h = Harness::new(TestWalls::facing_z(5.0), Vec3::new(0.0, 0.0, 1.0));
    h.enter();
    assert_eq!(h.cover.last_slide_sign(), 1.0);

    // +X is against the tangent
    h.tick(Vec3::X, &[]);
    assert_eq!(h.cover.last_slide_sign(), -1.0);

    // Tiny lateral component back the other way does not flip the side
    h.tick(Vec3::new(-0.05, 0.0, -1.0), &[]);
    assert_eq!(h.cover.last_slide_sign(), -1.0);

    h.tick(Vec3::NEG_X, &[]);
    assert_eq!(h.cover.last_slide_sign(), 1.0);
}

#[test]
fn test_edge_probe_follows_this_frames_slide() {
    let mut h = Harness::new(TestWalls::facing_z(5.0), Vec3::new(4.5, 0.0, 1.0));
    h.enter();
    assert_eq!(h.cover.last_slide_sign(), 1.0);

    // Drifting toward the +X end below the slide threshold; the remembered
    // side stays +1 but the probe must look ahead at x = 5.2
    let outcome = h.tick(Vec3::new(0.05, 0.0, -1.0), &[]);

    assert_eq!(outcome, CoverOutcome::Exited(CoverExitReason::ReachedEdge));
    assert_eq!(h.mode.mode(), MovementMode::Free);
    assert!(h.cover.frame.is_none());
}

#[test]
fn test_zero_slide_probes_positive_tangent_side() {
    // Tangent is -X: the +tangent probe sits at x = -5.2, past the wall
    let mut h = Harness::new(TestWalls::facing_z(5.0), Vec3::new(-4.5, 0.0, 1.0));
    h.enter();
    assert_eq!(h.tick(Vec3::NEG_Z, &[]), CoverOutcome::Exited(CoverExitReason::ReachedEdge));

    // Same press at the other end keeps cover
    let mut h = Harness::new(TestWalls::facing_z(5.0), Vec3::new(4.5, 0.0, 1.0));
    h.enter();
    assert_eq!(h.tick(Vec3::NEG_Z, &[]), CoverOutcome::Slid { amount: 0.0 });
}

// -----------------------------------------------------------------------------
// Stale cover release
// -----------------------------------------------------------------------------

#[derive(Resource, Default)]
struct SeenExits(Vec<(Entity, CoverExitReason)>);

fn collect_exits(mut exits: MessageReader<CoverExitedEvent>, mut seen: ResMut<SeenExits>) {
    seen.0.extend(exits.read().map(|exit| (exit.entity, exit.reason)));
}

fn release_app(mode: MovementMode) -> (App, Entity) {
    let mut app = App::new();
    app.add_message::<CoverExitedEvent>()
        .init_resource::<SeenExits>()
        .add_systems(Update, (release_stale_cover, collect_exits).chain());

    let mut state = MovementModeState::default();
    state.set_mode(mode);
    let cover = CoverState {
        frame: CoverFrame::from_contact_normal(Vec3::Z),
    };
    let player = app.world_mut().spawn((Player, state, cover)).id();

    (app, player)
}

#[test]
fn test_first_person_releases_cover_frame() {
    let (mut app, player) = release_app(MovementMode::FirstPerson);
    app.update();

    let cover = app.world().get::<CoverState>(player).unwrap();
    assert!(cover.frame.is_none());
    assert_eq!(
        app.world().resource::<SeenExits>().0,
        vec![(player, CoverExitReason::ModeChanged)]
    );

    // Released once only
    app.update();
    assert_eq!(app.world().resource::<SeenExits>().0.len(), 1);
}

#[test]
fn test_cover_mode_keeps_its_frame() {
    let (mut app, player) = release_app(MovementMode::Cover);
    app.update();

    assert!(app.world().get::<CoverState>(player).unwrap().is_attached());
    assert!(app.world().resource::<SeenExits>().0.is_empty());
}

// -----------------------------------------------------------------------------
// Side query tests
// -----------------------------------------------------------------------------

#[test]
fn test_side_queries_false_outside_cover() {
    let h = Harness::new(TestWalls(Vec::new()), Vec3::ZERO);

    assert!(!h.cover.is_right_side_open(h.body.position, &h.tuning, &h.walls));
    assert!(!h.cover.is_left_side_open(h.body.position, &h.tuning, &h.walls));
    assert!(!h.near_edge());
}

#[test]
fn test_only_right_side_open_near_tangent_end() {
    let mut h = Harness::new(TestWalls::facing_z(5.0), Vec3::new(-3.5, 0.0, 1.0));
    h.enter();

    let report = h.cover.edge_report(h.body.position, &h.tuning, &h.walls);
    assert!(report.right_open);
    assert!(!report.left_open);
    assert!(report.is_near_edge());
}

#[test]
fn test_short_wall_has_both_sides_open() {
    let mut h = Harness::new(TestWalls::facing_z(1.0), Vec3::new(0.0, 0.0, 1.0));
    h.enter();

    let report = h.cover.edge_report(h.body.position, &h.tuning, &h.walls);
    assert!(report.right_open && report.left_open);
}

#[test]
fn test_default_tuning_detects_edge_before_exit() {
    let tuning = CoverTuning::default();
    assert!(tuning.near_edge_distance > tuning.edge_probe_offset(RADIUS));
}
