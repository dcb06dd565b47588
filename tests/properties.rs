//! Property tests for the path-constrained physics core.

use glam::Vec2;
use proptest::prelude::*;

use marble_roller::settings::PhysicsSettings;
use marble_roller::sim::{BodyState, Integrator, Path, PathPoint, distance, reduce, smooth};

fn point() -> impl Strategy<Value = Vec2> {
    (0.0f32..800.0, 0.0f32..600.0).prop_map(|(x, y)| Vec2::new(x, y))
}

fn polyline(max: usize) -> impl Strategy<Value = Vec<Vec2>> {
    prop::collection::vec(point(), 2..max)
}

fn stroke(max: usize) -> impl Strategy<Value = Vec<PathPoint>> {
    prop::collection::vec(point(), 0..max).prop_map(|pts| {
        pts.into_iter()
            .enumerate()
            .map(|(i, pos)| PathPoint {
                pos,
                timestamp: i as f64,
            })
            .collect()
    })
}

proptest! {
    #[test]
    fn nearest_segment_beats_every_endpoint(points in polyline(12), probe in point()) {
        let path = Path::build(&points).unwrap();
        let hit = path.nearest_segment(probe);
        let snapped = distance(probe, hit.projected);
        for seg in path.segments() {
            prop_assert!(snapped <= distance(probe, seg.start()) + 1e-3);
            prop_assert!(snapped <= distance(probe, seg.end()) + 1e-3);
        }
        prop_assert!((0.0..=1.0).contains(&hit.t));
    }

    #[test]
    fn advance_by_zero_is_identity(points in polyline(12), probe in point()) {
        let path = Path::build(&points).unwrap();
        let hit = path.nearest_segment(probe);
        let adv = path.advance(hit.projected, hit.segment_index, 0.0);
        prop_assert_eq!(adv.position, hit.projected);
        prop_assert_eq!(adv.segment_index, hit.segment_index);
    }

    #[test]
    fn advance_is_monotone(points in polyline(10), a in 0.0f32..1.0, b in 0.0f32..1.0) {
        let path = Path::build(&points).unwrap();
        let total = path.total_length();
        let (d1, d2) = if a < b { (a * total, b * total) } else { (b * total, a * total) };
        prop_assume!(d2 - d1 > 0.5);

        let first = path.advance(path.start(), 0, d1);
        let second = path.advance(path.start(), 0, d2);
        let arc1 = path.arc_length_to(first.position, first.segment_index);
        let arc2 = path.arc_length_to(second.position, second.segment_index);
        prop_assert!(arc2 > arc1);
        prop_assert!(second.segment_index >= first.segment_index);
    }

    #[test]
    fn advance_never_overshoots(points in polyline(10), extra in 0.0f32..5000.0) {
        let path = Path::build(&points).unwrap();
        let adv = path.advance(path.start(), 0, path.total_length() + extra + 1.0);
        prop_assert_eq!(adv.position, path.end());
        prop_assert_eq!(adv.segment_index, path.segment_count() - 1);
    }

    #[test]
    fn zero_dt_steps_change_nothing(points in polyline(10), pos in point(), speed in 0.0f32..200.0) {
        let integrator = Integrator::default();
        let path = Path::build(&points).unwrap();
        let body = BodyState::rolling(pos, speed, integrator.settings());
        let mut next = body;
        for _ in 0..5 {
            next = integrator.step(&next, &path, 0.0);
        }
        prop_assert_eq!(next, body);
    }

    #[test]
    fn step_keeps_speed_and_energy_consistent(
        points in polyline(10),
        pos in point(),
        speed in 0.0f32..200.0,
        dt in 0.001f32..0.5,
        friction in 0.5f32..1.0,
    ) {
        let integrator = Integrator::new(PhysicsSettings { friction, ..Default::default() });
        let path = Path::build(&points).unwrap();
        let mass = integrator.settings().mass;
        let next = integrator.step(&BodyState::rolling(pos, speed, integrator.settings()), &path, dt);

        prop_assert!(next.speed() >= 0.0);
        prop_assert_eq!(next.kinetic_energy(), 0.5 * mass * next.speed() * next.speed());
        prop_assert!((0.0..360.0).contains(&next.rotation()));
        prop_assert!(!next.is_airborne());
    }

    #[test]
    fn step_is_deterministic(points in polyline(10), pos in point(), speed in 0.0f32..100.0) {
        let integrator = Integrator::default();
        let path = Path::build(&points).unwrap();
        let body = BodyState::rolling(pos, speed, integrator.settings());
        let a = integrator.step(&body, &path, 1.0 / 60.0);
        let b = integrator.step(&body, &path.clone(), 1.0 / 60.0);
        prop_assert_eq!(a, b);
    }

    #[test]
    fn reduce_keeps_endpoints(points in stroke(40), spacing in 0.1f32..50.0) {
        let out = reduce(&points, spacing);
        prop_assert!(out.len() <= points.len());
        if !points.is_empty() {
            prop_assert_eq!(out.first(), points.first());
            prop_assert_eq!(out.last(), points.last());
        }
    }

    #[test]
    fn smooth_keeps_endpoints(points in stroke(40), factor in 0.0f32..=1.0) {
        let out = smooth(&points, factor);
        prop_assert_eq!(out.len(), points.len());
        prop_assert_eq!(out.first(), points.first());
        prop_assert_eq!(out.last(), points.last());
        prop_assert_eq!(smooth(&points, 0.0), points);
    }
}
