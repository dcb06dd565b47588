//! Configuration profiles
//!
//! Supplied once when the integrator and event resolver are built and fixed for
//! the lifetime of an attempt. Profiles round-trip through JSON.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::sim::SimError;

/// Difficulty presets
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum Difficulty {
    Relaxed,
    #[default]
    Standard,
    Precise,
}

impl Difficulty {
    pub fn as_str(&self) -> &'static str {
        match self {
            Difficulty::Relaxed => "Relaxed",
            Difficulty::Standard => "Standard",
            Difficulty::Precise => "Precise",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "relaxed" | "easy" => Some(Difficulty::Relaxed),
            "standard" | "normal" => Some(Difficulty::Standard),
            "precise" | "hard" => Some(Difficulty::Precise),
            _ => None,
        }
    }

    /// Star collection radius for this preset
    pub fn collect_distance(&self) -> f32 {
        match self {
            Difficulty::Relaxed => 70.0,
            Difficulty::Standard => STAR_COLLECT_DISTANCE,
            Difficulty::Precise => 20.0,
        }
    }

    /// Speed under which the marble counts as stopped
    pub fn stop_threshold(&self) -> f32 {
        match self {
            Difficulty::Relaxed => 0.05,
            Difficulty::Standard => STOP_THRESHOLD,
            Difficulty::Precise => 0.2,
        }
    }

    /// Capture radius around the start/finish markers when drawing
    pub fn capture_radius(&self) -> f32 {
        match self {
            Difficulty::Relaxed => 80.0,
            Difficulty::Standard => CAPTURE_RADIUS,
            Difficulty::Precise => 40.0,
        }
    }
}

/// Integrator constants
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PhysicsSettings {
    pub gravity: f32,
    /// Multiplicative per-tick damping, expected in (0, 1]
    pub friction: f32,
    pub mass: f32,
    pub body_radius: f32,
    pub stop_threshold: f32,
    /// Playfield width and height; the body is kept inside, inset by its radius
    pub playfield: Vec2,
}

impl Default for PhysicsSettings {
    fn default() -> Self {
        Self {
            gravity: GRAVITY,
            friction: FRICTION,
            mass: MARBLE_MASS,
            body_radius: MARBLE_RADIUS,
            stop_threshold: STOP_THRESHOLD,
            playfield: Vec2::new(CANVAS_WIDTH, CANVAS_HEIGHT),
        }
    }
}

/// Event resolver constants
///
/// The marble radius lives in `PhysicsSettings`; the resolver is handed it on construction.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct EventSettings {
    pub collect_distance: f32,
    pub finish_radius_factor: f32,
}

impl Default for EventSettings {
    fn default() -> Self {
        Self {
            collect_distance: STAR_COLLECT_DISTANCE,
            finish_radius_factor: FINISH_RADIUS_FACTOR,
        }
    }
}

/// Stroke acceptance and preprocessing constants
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DrawingSettings {
    pub capture_radius: f32,
    pub smoothing_factor: f32,
    pub min_spacing: f32,
    /// Minimum raw samples for a stroke (never below 2)
    pub min_samples: usize,
}

impl Default for DrawingSettings {
    fn default() -> Self {
        Self {
            capture_radius: CAPTURE_RADIUS,
            smoothing_factor: SMOOTHING_FACTOR,
            min_spacing: REDUCE_SPACING,
            min_samples: 2,
        }
    }
}

/// A complete configuration profile
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub difficulty: Difficulty,
    pub physics: PhysicsSettings,
    pub events: EventSettings,
    pub drawing: DrawingSettings,
}

impl Settings {
    /// Create settings from a difficulty preset (applies preset defaults)
    pub fn from_difficulty(difficulty: Difficulty) -> Self {
        let mut settings = Self::default();
        settings.apply_difficulty(difficulty);
        settings
    }

    /// Apply a difficulty preset (updates preset-dependent values)
    pub fn apply_difficulty(&mut self, difficulty: Difficulty) {
        self.difficulty = difficulty;
        self.events.collect_distance = difficulty.collect_distance();
        self.physics.stop_threshold = difficulty.stop_threshold();
        self.drawing.capture_radius = difficulty.capture_radius();
    }

    /// Parse a profile; missing fields take their defaults
    pub fn from_json(json: &str) -> Result<Self, SimError> {
        let settings: Self = serde_json::from_str(json)?;
        log::info!("Loaded settings profile ({})", settings.difficulty.as_str());
        Ok(settings)
    }

    pub fn to_json(&self) -> Result<String, SimError> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_consts() {
        let s = Settings::default();
        assert_eq!(s.physics.gravity, 25.0);
        assert_eq!(s.physics.friction, 0.99);
        assert_eq!(s.physics.mass, 35.0);
        assert_eq!(s.events.finish_radius_factor, 3.0);
        assert_eq!(s.drawing.min_samples, 2);
    }

    #[test]
    fn test_difficulty_from_str() {
        assert_eq!(Difficulty::from_str("HARD"), Some(Difficulty::Precise));
        assert_eq!(Difficulty::from_str("relaxed"), Some(Difficulty::Relaxed));
        assert_eq!(Difficulty::from_str("wobbly"), None);
        assert_eq!(Difficulty::Standard.as_str(), "Standard");
    }

    #[test]
    fn test_apply_difficulty() {
        let s = Settings::from_difficulty(Difficulty::Relaxed);
        assert_eq!(s.events.collect_distance, 70.0);
        assert_eq!(s.drawing.capture_radius, 80.0);
        assert_eq!(s.physics.stop_threshold, 0.05);
        assert_eq!(s.physics.gravity, GRAVITY);

        let s = Settings::from_difficulty(Difficulty::Precise);
        assert_eq!(s.physics.stop_threshold, 0.2);
        assert_eq!(s.events.collect_distance, 20.0);
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let s = Settings::from_json(r#"{ "physics": { "gravity": 9.8, "body_radius": 10.0 } }"#).unwrap();
        assert_eq!(s.physics.gravity, 9.8);
        assert_eq!(s.physics.friction, FRICTION);
        assert_eq!(s.physics.body_radius, 10.0);
        assert_eq!(s.difficulty, Difficulty::Standard);
    }

    #[test]
    fn test_json_roundtrip_and_errors() {
        let s = Settings::from_difficulty(Difficulty::Precise);
        let back = Settings::from_json(&s.to_json().unwrap()).unwrap();
        assert_eq!(back.difficulty, Difficulty::Precise);
        assert_eq!(back.events.collect_distance, 20.0);

        assert!(matches!(Settings::from_json("{ nope"), Err(SimError::Json(_))));
    }
}
