//! Test fixtures for route-polyline.
//!
//! Provides real Moscow route data:
//! - Walking tour attractions in visiting order
//! - Bus route stops in driving order

pub mod moscow_routes;

pub use moscow_routes::*;
