//! Great-circle distance between two points on the Earth.
//!
//! The haversine formula treats the Earth as a sphere with its mean
//! radius, which is accurate to within about half a percent.

use crate::types::location::Location;

/// Earth's mean radius in kilometers.
pub const EARTH_RADIUS_KM: f64 = 6371.0;

/// Distance in kilometers between two [`Location`]s.
///
/// See [`distance_km`].
pub fn distance(from: &Location, to: &Location) -> f64 {
    distance_km(from.lat(), from.lng(), to.lat(), to.lng())
}

/// Computes the great-circle distance in kilometers between
/// (`lat1`, `lng1`) and (`lat2`, `lng2`), all in decimal degrees.
///
/// Inputs are not validated. A `NaN` input yields `NaN`; out-of-range
/// coordinates yield a number without meaning.
///
/// # Examples
/// ```
/// use vaccine_timetable::haversine::distance_km;
///
/// // Auckland to Wellington.
/// let d = distance_km(-36.8485, 174.7633, -41.2865, 174.7762);
/// assert!((d - 495.0).abs() < 5.0);
/// ```
pub fn distance_km(lat1: f64, lng1: f64, lat2: f64, lng2: f64) -> f64 {
    let d_lat = (lat2 - lat1).to_radians();
    let d_lng = (lng2 - lng1).to_radians();
    let lat1 = lat1.to_radians();
    let lat2 = lat2.to_radians();

    let a = (d_lat / 2.0).sin().powi(2) + lat1.cos() * lat2.cos() * (d_lng / 2.0).sin().powi(2);
    let c = 2.0 * a.sqrt().atan2((1.0 - a).sqrt());

    EARTH_RADIUS_KM * c
}
