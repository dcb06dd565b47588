//! Marble Roller - draw a ramp, watch the marble roll
//!
//! Core modules:
//! - `sim`: Deterministic path-constrained physics (geometry, path model, integrator, events)
//! - `levels`: Built-in level catalog
//! - `progress`: Driver-owned save data and completion policy
//! - `settings`: Configuration profiles

pub mod levels;
pub mod progress;
pub mod settings;
pub mod sim;

pub use levels::LevelGeometry;
pub use progress::{CompletionPolicy, Progress};
pub use settings::{Difficulty, Settings};

/// Game configuration constants
pub mod consts {
    /// Playfield dimensions
    pub const CANVAS_WIDTH: f32 = 800.0;
    pub const CANVAS_HEIGHT: f32 = 600.0;

    /// Fixed driver timestep (60 Hz, one tick per rendered frame)
    pub const SIM_DT: f32 = 1.0 / 60.0;
    /// Maximum substeps per frame to prevent spiral of death
    pub const MAX_SUBSTEPS: u32 = 8;

    /// Marble defaults
    pub const MARBLE_RADIUS: f32 = 15.0;
    pub const MARBLE_MASS: f32 = 35.0;
    /// Acceleration along a vertical drop (pixels/s²)
    pub const GRAVITY: f32 = 25.0;
    /// Multiplicative damping applied once per tick
    pub const FRICTION: f32 = 0.99;
    /// Below this speed the marble counts as stopped
    pub const STOP_THRESHOLD: f32 = 0.1;

    /// Stars
    pub const STAR_COLLECT_DISTANCE: f32 = 30.0;
    /// Finish radius as a multiple of the marble radius
    pub const FINISH_RADIUS_FACTOR: f32 = 3.0;

    /// Drawing acceptance
    pub const CAPTURE_RADIUS: f32 = 60.0;
    pub const SMOOTHING_FACTOR: f32 = 0.3;
    pub const REDUCE_SPACING: f32 = 10.0;

    /// Energy points awarded per collected star
    pub const POINTS_PER_STAR: u64 = 100;
}
