//! Path model: an immutable chain of directed segments
//!
//! Built once per attempt from the preprocessed stroke. The body is snapped onto
//! the chain every tick and advanced along it by arc length.

use glam::Vec2;
use serde::Serialize;

use super::error::SimError;
use super::geometry::{angle_of, distance, project_onto_segment};
use super::preprocess::PathPoint;

/// A directed straight piece of the path
///
/// Angle and length are derived from the endpoints at construction and cannot
/// be set independently.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Segment {
    start: Vec2,
    end: Vec2,
    angle: f32,
    length: f32,
}

impl Segment {
    pub fn new(start: Vec2, end: Vec2) -> Self {
        Self {
            start,
            end,
            angle: angle_of(start, end),
            length: distance(start, end),
        }
    }

    #[inline]
    pub fn start(&self) -> Vec2 {
        self.start
    }

    #[inline]
    pub fn end(&self) -> Vec2 {
        self.end
    }

    /// Direction of travel in radians
    #[inline]
    pub fn angle(&self) -> f32 {
        self.angle
    }

    #[inline]
    pub fn length(&self) -> f32 {
        self.length
    }

    /// Unit direction of travel, zero for a degenerate segment
    #[inline]
    pub fn tangent(&self) -> Vec2 {
        (self.end - self.start).normalize_or_zero()
    }

    #[inline]
    pub fn is_degenerate(&self) -> bool {
        self.length == 0.0
    }
}

/// Result of snapping a point onto the path
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NearestSegment {
    pub segment_index: usize,
    pub projected: Vec2,
    /// Clamp parameter along the chosen segment
    pub t: f32,
}

/// Result of travelling along the path
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Advance {
    pub position: Vec2,
    pub segment_index: usize,
}

/// A traversable polyline with at least two points
#[derive(Debug, Clone, Serialize)]
pub struct Path {
    points: Vec<Vec2>,
    segments: Vec<Segment>,
    total_length: f32,
}

impl Path {
    /// Build a path from an ordered point sequence (at least 2 points)
    pub fn build(points: &[Vec2]) -> Result<Self, SimError> {
        if points.len() < 2 {
            return Err(SimError::too_few_points(points.len()));
        }

        let segments: Vec<Segment> = points
            .windows(2)
            .map(|pair| Segment::new(pair[0], pair[1]))
            .collect();
        let total_length: f32 = segments.iter().map(Segment::length).sum();

        Ok(Self {
            points: points.to_vec(),
            segments,
            total_length,
        })
    }

    /// Build a path from preprocessed stroke points, dropping their timestamps
    pub fn from_stroke(points: &[PathPoint]) -> Result<Self, SimError> {
        let positions: Vec<Vec2> = points.iter().map(|p| p.pos).collect();
        Self::build(&positions)
    }

    pub fn points(&self) -> &[Vec2] {
        &self.points
    }

    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    pub fn segment_count(&self) -> usize {
        self.segments.len()
    }

    pub fn start(&self) -> Vec2 {
        self.points[0]
    }

    pub fn end(&self) -> Vec2 {
        self.points[self.points.len() - 1]
    }

    pub fn total_length(&self) -> f32 {
        self.total_length
    }

    /// Snap a point onto the closest segment (lowest index wins ties)
    pub fn nearest_segment(&self, point: Vec2) -> NearestSegment {
        let mut best = NearestSegment {
            segment_index: 0,
            projected: self.segments[0].start,
            t: 0.0,
        };
        let mut best_dist = f32::INFINITY;

        for (i, seg) in self.segments.iter().enumerate() {
            let proj = project_onto_segment(point, seg.start, seg.end);
            let dist = distance(point, proj.point);
            if dist < best_dist {
                best_dist = dist;
                best = NearestSegment {
                    segment_index: i,
                    projected: proj.point,
                    t: proj.t,
                };
            }
        }

        best
    }

    /// Walk forward `arc_distance` along the chain from a point on `from_segment`
    ///
    /// Travel past the end clamps to the final point and reports the last segment.
    /// Zero, negative or NaN distances return the input unchanged.
    pub fn advance(&self, from: Vec2, from_segment: usize, arc_distance: f32) -> Advance {
        let last = self.segments.len() - 1;
        let from_segment = from_segment.min(last);

        if !(arc_distance > 0.0) {
            return Advance {
                position: from,
                segment_index: from_segment,
            };
        }

        let mut remaining = arc_distance;
        let mut cursor = from;

        for (index, seg) in self.segments.iter().enumerate().skip(from_segment) {
            let to_end = distance(cursor, seg.end);
            if remaining < to_end {
                let dir = (seg.end - cursor) / to_end;
                return Advance {
                    position: cursor + dir * remaining,
                    segment_index: index,
                };
            }

            remaining -= to_end;
            cursor = seg.end;

            if remaining <= 0.0 {
                return Advance {
                    position: cursor,
                    segment_index: index,
                };
            }
        }

        Advance {
            position: self.end(),
            segment_index: last,
        }
    }

    /// Cumulative arc length from the path start to a point lying on `segment_index`
    pub fn arc_length_to(&self, point: Vec2, segment_index: usize) -> f32 {
        let index = segment_index.min(self.segments.len() - 1);
        let before: f32 = self.segments[..index].iter().map(Segment::length).sum();
        before + distance(self.segments[index].start, point)
    }
}
