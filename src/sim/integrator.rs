//! Path-constrained motion integrator
//!
//! One call per tick: snap the body onto the path, derive acceleration from the
//! local slope, damp and integrate speed, then advance along the path by arc length.

use glam::Vec2;

use super::error::SimError;
use super::geometry::distance;
use super::path::Path;
use super::state::BodyState;
use crate::settings::PhysicsSettings;

/// Stateless stepper holding a fixed physics profile
#[derive(Debug, Clone, Default)]
pub struct Integrator {
    settings: PhysicsSettings,
}

impl Integrator {
    pub fn new(settings: PhysicsSettings) -> Self {
        Self { settings }
    }

    pub fn settings(&self) -> &PhysicsSettings {
        &self.settings
    }

    /// Advance the body by `dt` seconds along `path`
    ///
    /// Deterministic and side-effect free. A non-positive `dt` returns the body unchanged.
    pub fn step(&self, body: &BodyState, path: &Path, dt: f32) -> BodyState {
        if !(dt > 0.0) {
            return *body;
        }

        let cfg = &self.settings;

        // Snap onto the path; a degenerate segment has a zero tangent and no slope
        let snap = path.nearest_segment(body.position());
        let tangent = path.segments()[snap.segment_index].tangent();

        // y grows downward, so descending segments have positive sine
        let slope = tangent.y.atan2(tangent.x);
        let accel = cfg.gravity * slope.sin();

        // Friction is a per-tick multiplier; the body never reverses
        let speed = ((body.speed() + accel * dt) * cfg.friction).max(0.0);

        let travel = speed * dt;
        let advanced = path.advance(snap.projected, snap.segment_index, travel);
        let position = self.clamp_to_playfield(advanced.position);

        let rotation = if cfg.body_radius > 0.0 {
            (body.rotation() + (travel / cfg.body_radius).to_degrees()).rem_euclid(360.0)
        } else {
            body.rotation()
        };

        let is_moving = speed > cfg.stop_threshold
            && distance(position, path.end()) >= 2.0 * cfg.body_radius;

        BodyState::next(position, speed, cfg.mass, is_moving, rotation)
    }

    /// Build a path from raw points and step along it
    ///
    /// Fails with `InvalidPath` when fewer than 2 points are supplied.
    pub fn step_points(&self, body: &BodyState, points: &[Vec2], dt: f32) -> Result<BodyState, SimError> {
        let path = Path::build(points)?;
        Ok(self.step(body, &path, dt))
    }

    /// Keep a position inside the playfield, inset by the body radius
    pub fn clamp_to_playfield(&self, p: Vec2) -> Vec2 {
        let r = self.settings.body_radius;
        let max = self.settings.playfield - Vec2::splat(r);
        p.min(max).max(Vec2::splat(r))
    }
}
