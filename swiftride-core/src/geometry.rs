//! Spherical geometry and fixed-speed time conversion.
//!
//! All functions work on a sphere of radius [`EARTH_RADIUS_KM`]. Distances
//! produced by [`distance_km`] and offsets produced by [`destination_point`]
//! use the same radius so that generated candidates sit exactly on the
//! requested ring.

use crate::Coordinate;

/// Mean Earth radius used throughout the planner.
pub const EARTH_RADIUS_KM: f64 = 6371.0;

/// Average speed assumed for the personal micro-vehicle legs.
pub const VEHICLE_SPEED_KMH: f64 = 30.0;

/// Average speed assumed for simulated public-transit legs.
pub const TRANSIT_SPEED_KMH: f64 = 25.0;

/// Great-circle distance between `a` and `b` in kilometres (haversine).
///
/// # Examples
/// ```
/// use swiftride_core::{Coordinate, geometry::distance_km};
///
/// # fn main() -> Result<(), swiftride_core::CoordinateError> {
/// let a = Coordinate::new(0.0, 0.0)?;
/// let b = Coordinate::new(0.0, 1.0)?;
/// assert!((distance_km(&a, &b) - 111.19).abs() < 0.01);
/// assert_eq!(distance_km(&a, &a), 0.0);
/// # Ok(())
/// # }
/// ```
#[must_use]
pub fn distance_km(a: &Coordinate, b: &Coordinate) -> f64 {
    let d_lat = (b.lat - a.lat).to_radians();
    let d_lng = (b.lng - a.lng).to_radians();
    let h = (d_lat / 2.0).sin().powi(2)
        + a.lat.to_radians().cos() * b.lat.to_radians().cos() * (d_lng / 2.0).sin().powi(2);
    let c = 2.0 * h.sqrt().atan2((1.0 - h).sqrt());
    EARTH_RADIUS_KM * c
}

/// Minutes needed to cover `distance_km` at `speed_kmh`, rounded half up.
///
/// Negative, NaN or infinite inputs yield zero.
fn minutes_at(distance_km: f64, speed_kmh: f64) -> u32 {
    let minutes = (distance_km / speed_kmh * 60.0).round();
    if minutes.is_finite() && minutes > 0.0 {
        // Saturating float-to-int conversion; city-scale values are tiny.
        minutes as u32
    } else {
        0
    }
}

/// Vehicle travel time for `distance_km`, in whole minutes.
///
/// # Examples
/// ```
/// use swiftride_core::geometry::vehicle_minutes;
///
/// assert_eq!(vehicle_minutes(0.0), 0);
/// assert_eq!(vehicle_minutes(2.0), 4);
/// assert_eq!(vehicle_minutes(0.25), 1);
/// ```
#[must_use]
pub fn vehicle_minutes(distance_km: f64) -> u32 {
    minutes_at(distance_km, VEHICLE_SPEED_KMH)
}

/// Transit travel time for `distance_km` before any waiting penalty.
#[must_use]
pub fn transit_base_minutes(distance_km: f64) -> u32 {
    minutes_at(distance_km, TRANSIT_SPEED_KMH)
}

/// The point `distance_km` away from `origin` along `bearing_deg`.
///
/// Bearings are clockwise from true north. The returned longitude is
/// normalised to `[-180, 180]`.
#[must_use]
pub fn destination_point(origin: &Coordinate, distance_km: f64, bearing_deg: f64) -> (f64, f64) {
    let angular = distance_km / EARTH_RADIUS_KM;
    let bearing = bearing_deg.to_radians();
    let lat1 = origin.lat.to_radians();
    let lng1 = origin.lng.to_radians();

    let lat2 = (lat1.sin() * angular.cos() + lat1.cos() * angular.sin() * bearing.cos()).asin();
    let lng2 = lng1
        + (bearing.sin() * angular.sin() * lat1.cos()).atan2(angular.cos() - lat1.sin() * lat2.sin());

    let lng_deg = (lng2.to_degrees() + 540.0).rem_euclid(360.0) - 180.0;
    (lat2.to_degrees(), lng_deg)
}
