//! Great-circle geometry used when no travel-time matrix is available.
//!
//! Straight-line distance ignores roads, so estimates are rough but always
//! available.

use crate::clock::Minutes;

/// Earth radius in kilometers.
const EARTH_RADIUS_KM: f64 = 6371.0;

/// Haversine distance between two `(lat, lng)` points in kilometers.
///
/// Coordinates are not validated.
pub fn haversine_km(from: (f64, f64), to: (f64, f64)) -> f64 {
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

/// Travel minutes between two points at a fixed pace, rounded up.
///
/// A pace of 2 minutes per kilometer is roughly 30 km/h of city driving.
pub fn estimate_travel_minutes(from: (f64, f64), to: (f64, f64), minutes_per_km: f64) -> Minutes {
    (haversine_km(from, to) * minutes_per_km).ceil() as Minutes
}
