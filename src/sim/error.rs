//! Error taxonomy for the simulation core
//!
//! Every error is scoped to a single attempt; the driver recovers by discarding
//! the attempt's path and body state and starting over.

use std::error::Error;
use std::fmt::{self, Display};

/// Why a drawn path was rejected
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InvalidPathReason {
    /// A path needs at least two points to form a segment
    TooFewPoints { found: usize },
    /// The stroke began outside the capture radius of the start marker
    StartOutsideCapture { distance: f32 },
    /// The stroke ended outside the capture radius of the finish marker
    EndOutsideCapture { distance: f32 },
}

impl Display for InvalidPathReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::TooFewPoints { found } => write!(f, "need at least 2 points, found {}", found),
            Self::StartOutsideCapture { distance } => {
                write!(f, "stroke starts {:.1} away from the start marker", distance)
            }
            Self::EndOutsideCapture { distance } => {
                write!(f, "stroke ends {:.1} away from the finish marker", distance)
            }
        }
    }
}

#[derive(Debug)]
pub enum SimError {
    InvalidPath(InvalidPathReason),
    UnknownLevel(u32),
    /// Settings, level or save data failed to (de)serialize
    Json(serde_json::Error),
}

impl SimError {
    pub(crate) fn too_few_points(found: usize) -> Self {
        Self::InvalidPath(InvalidPathReason::TooFewPoints { found })
    }
}

impl Display for SimError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidPath(reason) => write!(f, "invalid path: {}", reason),
            Self::UnknownLevel(number) => write!(f, "unknown level: {}", number),
            Self::Json(inner) => write!(f, "invalid JSON: {}", inner),
        }
    }
}

impl Error for SimError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Json(inner) => Some(inner),
            Self::InvalidPath(_) | Self::UnknownLevel(_) => None,
        }
    }
}

impl From<serde_json::Error> for SimError {
    fn from(err: serde_json::Error) -> Self {
        Self::Json(err)
    }
}
