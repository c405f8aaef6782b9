//! Proximity queries between a position and located stops.
//!
//! Used to trigger stop content when a traveller walks into range, and to
//! pick the closest stop on a route.

use tracing::trace;

use crate::haversine::distance_meters;
use crate::traits::Located;

/// Distance thresholds for stop proximity queries.
#[derive(Debug, Clone)]
pub struct ProximityOptions {
    /// Lower bound of the "near" band in meters (inclusive).
    pub min_distance_m: f64,
    /// Upper bound of the "near" band in meters (inclusive).
    pub max_distance_m: f64,
    /// Search radius for [`within_radius`] in meters.
    pub radius_m: f64,
}

impl Default for ProximityOptions {
    fn default() -> Self {
        Self {
            min_distance_m: 50.0,
            max_distance_m: 100.0,
            radius_m: 100.0,
        }
    }
}

/// True when `target` lies inside the `[min_distance_m, max_distance_m]` band
/// around `position`.
pub fn is_near<T: Located>(position: (f64, f64), target: &T, options: &ProximityOptions) -> bool {
    let distance = distance_meters(position, target.location());
    trace!(distance, "proximity check");
    distance >= options.min_distance_m && distance <= options.max_distance_m
}

/// Closest target to `position`; the first one wins ties.
pub fn nearest<T: Located>(position: (f64, f64), targets: &[T]) -> Option<&T> {
    let mut best: Option<(&T, f64)> = None;

    for target in targets {
        let distance = distance_meters(position, target.location());
        match best {
            Some((_, best_distance)) if best_distance <= distance => {}
            _ => best = Some((target, distance)),
        }
    }

    best.map(|(target, _)| target)
}

/// Targets within `options.radius_m` of `position`, in input order.
pub fn within_radius<'a, T: Located>(
    position: (f64, f64),
    targets: &'a [T],
    options: &ProximityOptions,
) -> Vec<&'a T> {
    targets
        .iter()
        .filter(|target| distance_meters(position, target.location()) <= options.radius_m)
        .collect()
}
