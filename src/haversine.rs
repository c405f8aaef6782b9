//! Great-circle distance between coordinates.
//!
//! Treats the Earth as a sphere, which is accurate to well under a meter
//! at the 50-100 m scale used for stop proximity.

/// Earth radius in kilometers.
const EARTH_RADIUS_KM: f64 = 6371.0;

/// Calculate haversine distance between two (lat, lng) points in kilometers.
pub fn distance_km(from: (f64, f64), to: (f64, f64)) -> f64 {
    let (lat1, lng1) = from;
    let (lat2, lng2) = to;

    let lat1_rad = lat1.to_radians();
    let lat2_rad = lat2.to_radians();
    let delta_lat = (lat2 - lat1).to_radians();
    let delta_lng = (lng2 - lng1).to_radians();

    let a = (delta_lat / 2.0).sin().powi(2)
        + lat1_rad.cos() * lat2_rad.cos() * (delta_lng / 2.0).sin().powi(2);
    let c = 2.0 * a.sqrt().asin();

    EARTH_RADIUS_KM * c
}

/// Same as [`distance_km`], in meters.
pub fn distance_meters(from: (f64, f64), to: (f64, f64)) -> f64 {
    distance_km(from, to) * 1000.0
}

/// Total length of a path in meters, summed leg by leg.
pub fn path_length_meters(points: &[(f64, f64)]) -> f64 {
    points
        .windows(2)
        .map(|leg| distance_meters(leg[0], leg[1]))
        .sum()
}
