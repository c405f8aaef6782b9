//! route-polyline
//!
//! Encoded Polyline Algorithm Format codec for route geometries, plus the
//! small geographic helpers routes are used with.

pub mod error;
pub mod codec;
pub mod traits;
pub mod haversine;
pub mod polyline;
pub mod proximity;

pub use codec::{decode, encode, encode_all, PRECISION_FACTOR};
pub use error::{Axis, MalformedReason, PolylineError, PolylineResult};
pub use polyline::Polyline;
