//! Polyline representation for route geometries.
//!
//! This module provides a type for working with polylines as decoded
//! coordinate sequences. Encoding/decoding happens at the boundary
//! (when a route is written into a document or read back from one).

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::codec;
use crate::error::{PolylineError, PolylineResult};
use crate::haversine;
use crate::traits::Located;

/// A polyline representing a route geometry as decoded coordinates.
///
/// Stores latitude/longitude points directly for internal processing.
/// Serializes as a list of points; use [`encoded`] to serialize a field
/// as the compact polyline string instead.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Polyline {
    points: Vec<(f64, f64)>,
}

impl Polyline {
    /// Creates a new Polyline from decoded coordinate points.
    ///
    /// Each point is a (latitude, longitude) tuple.
    pub fn new(points: Vec<(f64, f64)>) -> Self {
        Self { points }
    }

    /// Builds a polyline through the given stops, in order.
    pub fn from_located<T: Located>(stops: &[T]) -> Self {
        Self::new(stops.iter().map(|stop| stop.location()).collect())
    }

    /// Returns a reference to the coordinate points.
    pub fn points(&self) -> &[(f64, f64)] {
        &self.points
    }

    /// Consumes the polyline and returns the owned coordinate points.
    pub fn into_points(self) -> Vec<(f64, f64)> {
        self.points
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Encodes the points into the compact polyline string.
    pub fn encode(&self) -> PolylineResult<String> {
        codec::encode(&self.points)
    }

    /// Decodes a compact polyline string.
    pub fn decode(encoded: &str) -> PolylineResult<Self> {
        codec::decode(encoded).map(Self::new)
    }

    /// Great-circle length of the route in meters.
    pub fn length_meters(&self) -> f64 {
        haversine::path_length_meters(&self.points)
    }
}

impl From<Vec<(f64, f64)>> for Polyline {
    fn from(points: Vec<(f64, f64)>) -> Self {
        Self::new(points)
    }
}

impl FromStr for Polyline {
    type Err = PolylineError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::decode(s)
    }
}

/// Serde adapter storing a [`Polyline`] as its encoded string.
///
/// ```
/// use route_polyline::polyline::Polyline;
/// use serde::{Deserialize, Serialize};
///
/// #[derive(Serialize, Deserialize)]
/// struct Route {
///     id: String,
///     #[serde(with = "route_polyline::polyline::encoded")]
///     polyline: Polyline,
/// }
/// ```
pub mod encoded {
    use serde::de::{self, Deserialize, Deserializer};
    use serde::ser::{self, Serializer};

    use super::Polyline;

    pub fn serialize<S>(polyline: &Polyline, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let encoded = polyline.encode().map_err(ser::Error::custom)?;
        serializer.serialize_str(&encoded)
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Polyline, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Polyline::decode(&s).map_err(de::Error::custom)
    }
}
