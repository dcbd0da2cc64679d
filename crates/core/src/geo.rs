//! Great-circle distance on a spherical Earth.

use crate::constants::EARTH_RADIUS_KM;

/// Haversine distance in kilometres between two WGS-84 points given in degrees.
#[must_use]
pub fn distance_km(lat1: f64, lon1: f64, lat2: f64, lon2: f64) -> f64 {
    let d_lat = (lat1 - lat2).to_radians();
    let d_lon = (lon1 - lon2).to_radians();
    let lat1 = lat1.to_radians();
    let lat2 = lat2.to_radians();

    let a = (d_lat / 2.0).sin().powi(2) + lat1.cos() * lat2.cos() * (d_lon / 2.0).sin().powi(2);
    let c = 2.0 * a.sqrt().atan2((1.0 - a).sqrt());

    c * EARTH_RADIUS_KM
}
