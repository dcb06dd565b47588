//! Freehand stroke preprocessing
//!
//! Runs exactly once, after the player lifts their finger and before the path
//! model is built. Never runs during simulation.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::error::{InvalidPathReason, SimError};
use super::geometry::distance;
use crate::levels::LevelGeometry;
use crate::settings::DrawingSettings;

/// A sampled stroke point with its capture time (ms, monotonic)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PathPoint {
    pub pos: Vec2,
    pub timestamp: f64,
}

impl PathPoint {
    pub fn new(x: f32, y: f32, timestamp: f64) -> Self {
        Self {
            pos: Vec2::new(x, y),
            timestamp,
        }
    }
}

/// Pull each interior point toward the midpoint of its neighbours
///
/// Endpoints are untouched. Inputs with fewer than 3 points pass through.
pub fn smooth(points: &[PathPoint], factor: f32) -> Vec<PathPoint> {
    if points.len() < 3 {
        return points.to_vec();
    }

    let mut smoothed = Vec::with_capacity(points.len());
    smoothed.push(points[0]);

    for window in points.windows(3) {
        let (prev, curr, next) = (window[0], window[1], window[2]);
        let midpoint = (prev.pos + next.pos) * 0.5;
        smoothed.push(PathPoint {
            pos: curr.pos.lerp(midpoint, factor),
            timestamp: curr.timestamp,
        });
    }

    smoothed.push(points[points.len() - 1]);
    smoothed
}

/// Greedy density reduction keeping points at least `min_spacing` apart
///
/// First and last points always survive. Inputs with fewer than 3 points pass through.
pub fn reduce(points: &[PathPoint], min_spacing: f32) -> Vec<PathPoint> {
    if points.len() < 3 {
        return points.to_vec();
    }

    let mut reduced = vec![points[0]];
    let mut last_kept = points[0].pos;

    for point in &points[1..points.len() - 1] {
        if distance(last_kept, point.pos) >= min_spacing {
            reduced.push(*point);
            last_kept = point.pos;
        }
    }

    reduced.push(points[points.len() - 1]);
    reduced
}

/// Validate a finished stroke against the level markers and produce the canonical path points
///
/// The first and last samples are snapped exactly onto the start and finish markers,
/// then the stroke is smoothed and reduced.
pub fn prepare_drawing(
    samples: &[PathPoint],
    level: &LevelGeometry,
    settings: &DrawingSettings,
) -> Result<Vec<PathPoint>, SimError> {
    let min_samples = settings.min_samples.max(2);
    if samples.len() < min_samples {
        return Err(SimError::too_few_points(samples.len()));
    }

    let first = samples[0];
    let last = samples[samples.len() - 1];

    let start_dist = distance(first.pos, level.start);
    if start_dist > settings.capture_radius {
        return Err(SimError::InvalidPath(InvalidPathReason::StartOutsideCapture {
            distance: start_dist,
        }));
    }

    let end_dist = distance(last.pos, level.finish);
    if end_dist > settings.capture_radius {
        return Err(SimError::InvalidPath(InvalidPathReason::EndOutsideCapture {
            distance: end_dist,
        }));
    }

    let mut snapped = samples.to_vec();
    let last_index = snapped.len() - 1;
    snapped[0].pos = level.start;
    snapped[last_index].pos = level.finish;

    let smoothed = smooth(&snapped, settings.smoothing_factor);
    Ok(reduce(&smoothed, settings.min_spacing))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::levels;

    fn zigzag(n: usize) -> Vec<PathPoint> {
        (0..n)
            .map(|i| {
                let y = if i % 2 == 0 { 0.0 } else { 6.0 };
                PathPoint::new(i as f32 * 4.0, y, i as f64 * 16.0)
            })
            .collect()
    }

    #[test]
    fn test_smooth_keeps_endpoints() {
        let pts = zigzag(9);
        let out = smooth(&pts, 0.3);
        assert_eq!(out.len(), pts.len());
        assert_eq!(out[0], pts[0]);
        assert_eq!(out[8], pts[8]);
    }

    #[test]
    fn test_smooth_factor_zero_is_identity() {
        let pts = zigzag(7);
        assert_eq!(smooth(&pts, 0.0), pts);
    }

    #[test]
    fn test_smooth_full_factor_moves_to_midpoint() {
        let pts = vec![
            PathPoint::new(0.0, 0.0, 0.0),
            PathPoint::new(5.0, 10.0, 1.0),
            PathPoint::new(10.0, 0.0, 2.0),
        ];
        let out = smooth(&pts, 1.0);
        assert!((out[1].pos - Vec2::new(5.0, 0.0)).length() < 1e-5);
        assert_eq!(out[1].timestamp, 1.0);
    }

    #[test]
    fn test_smooth_short_input_passthrough() {
        let pts = zigzag(2);
        assert_eq!(smooth(&pts, 0.5), pts);
    }

    #[test]
    fn test_reduce_drops_dense_points() {
        // 4px spacing, 10px minimum: keeps every third point plus the last
        let pts: Vec<PathPoint> = (0..11).map(|i| PathPoint::new(i as f32 * 4.0, 0.0, 0.0)).collect();
        let out = reduce(&pts, 10.0);
        let xs: Vec<f32> = out.iter().map(|p| p.pos.x).collect();
        assert_eq!(xs, vec![0.0, 12.0, 24.0, 36.0, 40.0]);
    }

    #[test]
    fn test_reduce_short_input_passthrough() {
        let pts = vec![PathPoint::new(0.0, 0.0, 0.0), PathPoint::new(0.1, 0.0, 1.0)];
        assert_eq!(reduce(&pts, 10.0), pts);
    }

    fn stroke_for(level: &LevelGeometry, n: usize) -> Vec<PathPoint> {
        (0..n)
            .map(|i| {
                let t = i as f32 / (n - 1) as f32;
                let pos = level.start.lerp(level.finish, t) + Vec2::new(3.0, -2.0);
                PathPoint {
                    pos,
                    timestamp: i as f64,
                }
            })
            .collect()
    }

    #[test]
    fn test_prepare_drawing_snaps_to_markers() {
        let level = levels::level(1).unwrap();
        let settings = DrawingSettings::default();
        let out = prepare_drawing(&stroke_for(&level, 40), &level, &settings).unwrap();
        assert!(out.len() >= 2);
        assert_eq!(out[0].pos, level.start);
        assert_eq!(out[out.len() - 1].pos, level.finish);
    }

    #[test]
    fn test_prepare_drawing_rejects_far_start() {
        let level = levels::level(1).unwrap();
        let mut stroke = stroke_for(&level, 40);
        stroke[0].pos = level.start + Vec2::new(100.0, 0.0);
        let err = prepare_drawing(&stroke, &level, &DrawingSettings::default()).unwrap_err();
        assert!(matches!(
            err,
            SimError::InvalidPath(InvalidPathReason::StartOutsideCapture { .. })
        ));
    }

    #[test]
    fn test_prepare_drawing_rejects_short_of_finish() {
        let level = levels::level(1).unwrap();
        let mut stroke = stroke_for(&level, 40);
        stroke.truncate(20);
        let err = prepare_drawing(&stroke, &level, &DrawingSettings::default()).unwrap_err();
        assert!(matches!(
            err,
            SimError::InvalidPath(InvalidPathReason::EndOutsideCapture { .. })
        ));
    }

    #[test]
    fn test_prepare_drawing_rejects_single_sample() {
        let level = levels::level(1).unwrap();
        let stroke = vec![PathPoint {
            pos: level.start,
            timestamp: 0.0,
        }];
        let err = prepare_drawing(&stroke, &level, &DrawingSettings::default()).unwrap_err();
        assert!(matches!(
            err,
            SimError::InvalidPath(InvalidPathReason::TooFewPoints { found: 1 })
        ));
    }
}
