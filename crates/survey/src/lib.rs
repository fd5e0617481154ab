use std::fmt;

pub mod area;
pub mod builder;
pub mod session;

/// Why a capture request did not add a vertex. All variants are
/// recoverable and meant to be surfaced to the user.
#[derive(Debug, Clone, PartialEq)]
pub enum CaptureError {
    /// The location source has not delivered a fix yet.
    NoFixAvailable,
    /// The fix reported an accuracy worse than the configured limit.
    AccuracyTooLow {
        accuracy_meters: f64,
        limit_meters: f64,
    },
    /// The fix lies closer to the last vertex than the configured
    /// minimum separation.
    TooCloseToPrevious {
        distance_meters: f64,
        limit_meters: f64,
    },
    /// The polygon has fewer than three vertices.
    InsufficientVertices { count: usize },
}

impl fmt::Display for CaptureError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Self::NoFixAvailable => write!(f, "no fix available"),
            Self::AccuracyTooLow {
                accuracy_meters,
                limit_meters,
            } => write!(
                f,
                "accuracy too low: {accuracy_meters}m (limit {limit_meters}m)"
            ),
            Self::TooCloseToPrevious {
                distance_meters,
                limit_meters,
            } => write!(
                f,
                "too close to the previous point: {distance_meters}m \
                 (minimum {limit_meters}m)"
            ),
            Self::InsufficientVertices { count } => {
                write!(f, "a polygon needs at least 3 points, got {count}")
            }
        }
    }
}

impl std::error::Error for CaptureError {}

pub type CaptureResult<O> = Result<O, CaptureError>;
