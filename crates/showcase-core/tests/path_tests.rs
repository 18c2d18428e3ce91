// Host-side tests for the path animator.

use glam::Vec3;
use showcase_core::showcase::{packet_animators, PACKET_PATHS};
use showcase_core::*;

fn l_path() -> Vec<Vec3> {
    vec![
        Vec3::new(0.0, 0.0, 0.0),
        Vec3::new(10.0, 0.0, 0.0),
        Vec3::new(10.0, 0.0, 10.0),
    ]
}

#[test]
fn single_waypoint_path_is_rejected() {
    let err = PathAnimator::from_waypoints(vec![Vec3::ZERO], 0.1).unwrap_err();
    assert_eq!(err, PathError::TooFewWaypoints { count: 1 });
    assert!(Path::new(Vec::new()).is_err());
}

#[test]
fn zero_or_invalid_speed_is_rejected() {
    for speed in [0.0, -0.5, f32::NAN, f32::INFINITY] {
        let err = PathAnimator::from_waypoints(l_path(), speed).unwrap_err();
        assert!(matches!(err, PathError::NonPositiveSpeed { .. }), "speed {speed}");
    }
    let mut a = PathAnimator::from_waypoints(l_path(), 0.1).unwrap();
    assert!(a.set_speed(0.0).is_err());
    assert_eq!(a.speed(), 0.1);
    assert!(a.set_speed(0.5).is_ok());
    assert_eq!(a.speed(), 0.5);
}

#[test]
fn error_messages_are_descriptive() {
    let msg = PathError::TooFewWaypoints { count: 1 }.to_string();
    assert!(msg.contains("at least 2"));
    let msg = PathError::NonPositiveSpeed { speed: 0.0 }.to_string();
    assert!(msg.contains("positive"));
}

#[test]
fn progress_zero_is_segment_start() {
    let mut a = PathAnimator::from_waypoints(l_path(), 0.25).unwrap();
    assert_eq!(a.current_position(), Vec3::ZERO);
    for _ in 0..4 {
        a.step();
    }
    assert_eq!(a.segment_index(), 1);
    assert_eq!(a.segment_progress(), 0.0);
    assert_eq!(a.current_position(), Vec3::new(10.0, 0.0, 0.0));
}

#[test]
fn progress_near_one_approaches_segment_end() {
    let mut a = PathAnimator::from_waypoints(l_path(), 0.1).unwrap();
    a.advance(0.999);
    let end = Vec3::new(10.0, 0.0, 0.0);
    assert_eq!(a.segment_index(), 0);
    assert!((a.current_position() - end).length() < 0.02);
}

#[test]
fn interpolation_is_linear() {
    let mut a = PathAnimator::from_waypoints(l_path(), 0.25).unwrap();
    a.step();
    assert_eq!(a.current_position(), Vec3::new(2.5, 0.0, 0.0));
    a.step();
    assert_eq!(a.current_position(), Vec3::new(5.0, 0.0, 0.0));
}

#[test]
fn loop_period_is_segments_over_delta() {
    let mut a = PathAnimator::from_waypoints(l_path(), 0.25).unwrap();
    let mut visited = [0usize; 2];
    // 2 segments / 0.25 per step = 8 steps per loop.
    for step in 1..=8 {
        visited[a.segment_index()] += 1;
        a.step();
        if step < 8 {
            assert!(
                a.segment_index() != 0 || a.segment_progress() != 0.0,
                "loop closed early at step {step}"
            );
        }
    }
    assert_eq!(visited, [4, 4]);
    assert_eq!(a.segment_index(), 0);
    assert_eq!(a.segment_progress(), 0.0);
    assert_eq!(a.current_position(), Vec3::ZERO);
}

#[test]
fn loop_closes_for_inexact_step_sizes() {
    // 0.1 and 0.02 do not sum to exactly 1.0 in f32.
    for delta in [0.1_f32, 0.02] {
        let mut a = PathAnimator::from_waypoints(l_path(), delta).unwrap();
        let steps = (2.0 / delta).round() as usize;
        for _ in 0..steps {
            a.step();
        }
        assert_eq!(a.segment_index(), 0, "delta {delta}");
        assert_eq!(a.segment_progress(), 0.0, "delta {delta}");
    }
}

#[test]
fn overshoot_crosses_at_most_one_segment() {
    let path = vec![
        Vec3::ZERO,
        Vec3::X,
        Vec3::new(1.0, 1.0, 0.0),
        Vec3::new(0.0, 1.0, 0.0),
    ];
    let mut a = PathAnimator::from_waypoints(path, 0.1).unwrap();
    a.advance(0.5);
    a.advance(5.0);
    assert_eq!(a.segment_index(), 1);
    assert_eq!(a.segment_progress(), 0.0);
    assert_eq!(a.current_position(), Vec3::X);

    // Overshooting the last segment wraps to the start, never further.
    a.advance(1.0);
    a.advance(3.0);
    assert_eq!(a.segment_index(), 0);
    assert_eq!(a.segment_progress(), 0.0);
}

#[test]
fn two_point_path_loops_on_its_single_segment() {
    let mut a = PathAnimator::from_waypoints(vec![Vec3::ZERO, Vec3::Y], 0.5).unwrap();
    a.step();
    a.step();
    assert_eq!(a.segment_index(), 0);
    assert_eq!(a.current_position(), Vec3::ZERO);
}

#[test]
fn reset_returns_to_first_waypoint() {
    let mut a = PathAnimator::from_waypoints(l_path(), 0.3).unwrap();
    for _ in 0..5 {
        a.step();
    }
    a.reset();
    assert_eq!(a.segment_index(), 0);
    assert_eq!(a.current_position(), Vec3::ZERO);
}

#[test]
fn identical_step_sequences_are_deterministic() {
    let deltas = [0.13, 0.4, 0.07, 0.9, 0.31, 0.55];
    let mut a = PathAnimator::from_waypoints(l_path(), 0.1).unwrap();
    let mut b = a.clone();
    for d in deltas.iter().cycle().take(60) {
        a.advance(*d);
        b.advance(*d);
        assert_eq!(a.current_position(), b.current_position());
    }
}

#[test]
fn positions_iterator_is_infinite() {
    let a = PathAnimator::from_waypoints(l_path(), 0.5).unwrap();
    let seq: Vec<Vec3> = a.positions().take(6).collect();
    assert_eq!(
        seq,
        vec![
            Vec3::new(0.0, 0.0, 0.0),
            Vec3::new(5.0, 0.0, 0.0),
            Vec3::new(10.0, 0.0, 0.0),
            Vec3::new(10.0, 0.0, 5.0),
            Vec3::new(0.0, 0.0, 0.0),
            Vec3::new(5.0, 0.0, 0.0),
        ]
    );
    // The source animator is untouched.
    assert_eq!(a.segment_index(), 0);
}

#[test]
fn path_measures_length() {
    let p = Path::new(l_path()).unwrap();
    assert_eq!(p.segment_count(), 2);
    assert_eq!(p.length(), 20.0);
    assert_eq!(p.segment(1), Some((Vec3::new(10.0, 0.0, 0.0), Vec3::new(10.0, 0.0, 10.0))));
    assert_eq!(p.segment(2), None);
}

#[test]
fn packet_animators_follow_board_routes() {
    let mut packets = packet_animators().unwrap();
    assert_eq!(packets.len(), 2);
    for (anim, route) in packets.iter().zip(PACKET_PATHS.iter()) {
        assert_eq!(anim.path().segment_count(), 4);
        assert_eq!(anim.current_position(), Vec3::from_array(route[0]));
        assert_eq!(anim.speed(), PACKET_STEP);
    }
    // 4 segments at 0.02 per frame loop every 200 frames.
    for _ in 0..200 {
        for p in &mut packets {
            p.step();
        }
    }
    for p in &packets {
        assert_eq!(p.segment_index(), 0);
        assert_eq!(p.segment_progress(), 0.0);
    }
}
