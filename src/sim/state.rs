//! Body state and event types
//!
//! `BodyState` is a value: the integrator takes one and returns a fresh one.
//! Kinetic energy is derived from speed in exactly one place and cannot be set on its own.

use glam::Vec2;
use serde::Serialize;

use crate::settings::PhysicsSettings;

/// Kinetic energy of a body: ½·m·v²
#[inline]
pub fn kinetic_energy(mass: f32, speed: f32) -> f32 {
    0.5 * mass * speed * speed
}

/// Marble state for one tick
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct BodyState {
    position: Vec2,
    speed: f32,
    kinetic_energy: f32,
    is_moving: bool,
    is_airborne: bool,
    /// Degrees in [0, 360)
    rotation: f32,
}

impl BodyState {
    /// A stationary body waiting at `position`
    pub fn at_rest(position: Vec2) -> Self {
        Self {
            position,
            speed: 0.0,
            kinetic_energy: 0.0,
            is_moving: false,
            is_airborne: false,
            rotation: 0.0,
        }
    }

    /// A body already rolling at `speed` (negative speeds clamp to 0)
    ///
    /// Energy uses the profile's mass, the same one the integrator steps with.
    pub fn rolling(position: Vec2, speed: f32, physics: &PhysicsSettings) -> Self {
        let speed = speed.max(0.0);
        Self {
            position,
            speed,
            kinetic_energy: kinetic_energy(physics.mass, speed),
            is_moving: true,
            is_airborne: false,
            rotation: 0.0,
        }
    }

    pub(crate) fn next(position: Vec2, speed: f32, mass: f32, is_moving: bool, rotation: f32) -> Self {
        Self {
            position,
            speed,
            kinetic_energy: kinetic_energy(mass, speed),
            is_moving,
            is_airborne: false,
            rotation,
        }
    }

    #[inline]
    pub fn position(&self) -> Vec2 {
        self.position
    }

    #[inline]
    pub fn speed(&self) -> f32 {
        self.speed
    }

    #[inline]
    pub fn kinetic_energy(&self) -> f32 {
        self.kinetic_energy
    }

    #[inline]
    pub fn is_moving(&self) -> bool {
        self.is_moving
    }

    /// Always false: the body never leaves the path
    #[inline]
    pub fn is_airborne(&self) -> bool {
        self.is_airborne
    }

    #[inline]
    pub fn rotation(&self) -> f32 {
        self.rotation
    }

    /// Same body with the rolling flag set, for drivers starting a run
    pub fn launched(self) -> Self {
        Self {
            is_moving: true,
            ..self
        }
    }
}

/// Discrete events surfaced to the driver after a tick
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub enum GameEvent {
    /// Star captured at the right speed
    StarCollected { id: u32 },
    /// Body overlaps an obstacle; `cleared` reports whether its speed meets the gap threshold
    ObstacleContact { index: usize, cleared: bool },
    /// Body arrived at the finish marker
    FinishReached,
    /// Body came to rest before the finish
    Stalled,
}
