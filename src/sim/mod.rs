//! Deterministic simulation module
//!
//! All gameplay physics lives here. The core is pure and deterministic:
//! - `Integrator::step` and `EventResolver` are side-effect-free functions of their inputs
//! - Paths and level geometry are immutable once built
//! - No rendering, input or persistence dependencies
//!
//! `attempt` is the reference driver that owns a fixed-timestep loop around the core.

pub mod attempt;
pub mod error;
pub mod events;
pub mod geometry;
pub mod integrator;
pub mod path;
pub mod preprocess;
pub mod state;

pub use attempt::{Attempt, AttemptPhase, AttemptSummary};
pub use error::{InvalidPathReason, SimError};
pub use events::{EventResolver, SpeedBand, required_speed_for_gap, speed_from_height};
pub use geometry::{Point2D, Projection, angle_of, distance, project_onto_segment};
pub use integrator::Integrator;
pub use path::{Advance, NearestSegment, Path, Segment};
pub use preprocess::{PathPoint, prepare_drawing, reduce, smooth};
pub use state::{BodyState, GameEvent, kinetic_energy};
