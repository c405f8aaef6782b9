//! Error types for polyline encoding/decoding.

use std::fmt;

use thiserror::Error;

/// Result type for polyline operations.
pub type PolylineResult<T> = Result<T, PolylineError>;

/// Coordinate axis, used to point at the offending half of a pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    Latitude,
    Longitude,
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Axis::Latitude => f.write_str("latitude"),
            Axis::Longitude => f.write_str("longitude"),
        }
    }
}

/// Errors that can occur while encoding or decoding a polyline.
///
/// Both variants are permanent: repeating the call with the same input
/// yields the same error.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum PolylineError {
    /// A coordinate is NaN, infinite, or too large to quantize exactly.
    #[error("coordinate {index} has invalid {axis}: {value}")]
    InvalidCoordinate { index: usize, axis: Axis, value: f64 },

    /// The encoded string cannot be read back into coordinate pairs.
    #[error("malformed polyline at byte {offset}: {reason}")]
    MalformedPolyline { offset: usize, reason: MalformedReason },
}

/// Why an encoded polyline was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum MalformedReason {
    /// Character outside `'?'..='~'`.
    #[error("character {0:?} is outside the polyline alphabet")]
    InvalidCharacter(char),

    /// The string ended while a continuation bit was still set.
    #[error("input ends in the middle of a value")]
    TruncatedChunk,

    /// A latitude was decoded with no longitude after it.
    #[error("latitude has no matching longitude")]
    UnpairedValue,

    /// A value or running coordinate does not fit a 64-bit integer.
    #[error("value overflows a 64-bit integer")]
    Overflow,
}

impl PolylineError {
    pub(crate) fn malformed(offset: usize, reason: MalformedReason) -> Self {
        PolylineError::MalformedPolyline { offset, reason }
    }

    /// Returns the malformation reason, if this is a decode error.
    pub fn malformed_reason(&self) -> Option<MalformedReason> {
        match self {
            PolylineError::MalformedPolyline { reason, .. } => Some(*reason),
            PolylineError::InvalidCoordinate { .. } => None,
        }
    }
}
