//! Geographic coordinates with an optional display name.

use std::fmt;

use geo::{Coord, Point};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A WGS84 position with an optional human-readable name.
///
/// Equality compares latitude and longitude only; the name is cosmetic.
///
/// # Examples
/// ```
/// use swiftride_core::Coordinate;
///
/// # fn main() -> Result<(), swiftride_core::CoordinateError> {
/// let office = Coordinate::new(32.0853, 34.7818)?.with_name("Office");
/// let same_spot = Coordinate::new(32.0853, 34.7818)?;
/// assert_eq!(office, same_spot);
/// assert_eq!(office.label(), "Office");
/// assert_eq!(same_spot.label(), "32.0853, 34.7818");
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Coordinate {
    /// Latitude in degrees, `[-90, 90]`.
    pub lat: f64,
    /// Longitude in degrees, `[-180, 180]`.
    pub lng: f64,
    /// Optional label shown to users.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

/// Errors returned by [`Coordinate::new`].
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum CoordinateError {
    /// Latitude or longitude was NaN or infinite.
    #[error("coordinate components must be finite numbers")]
    NonFinite,
    /// Latitude fell outside `[-90, 90]`.
    #[error("latitude {0} is outside [-90, 90]")]
    LatitudeOutOfRange(f64),
    /// Longitude fell outside `[-180, 180]`.
    #[error("longitude {0} is outside [-180, 180]")]
    LongitudeOutOfRange(f64),
}

impl Coordinate {
    /// Validates and constructs an unnamed [`Coordinate`].
    pub fn new(lat: f64, lng: f64) -> Result<Self, CoordinateError> {
        if !lat.is_finite() || !lng.is_finite() {
            return Err(CoordinateError::NonFinite);
        }
        if !(-90.0..=90.0).contains(&lat) {
            return Err(CoordinateError::LatitudeOutOfRange(lat));
        }
        if !(-180.0..=180.0).contains(&lng) {
            return Err(CoordinateError::LongitudeOutOfRange(lng));
        }
        Ok(Self {
            lat,
            lng,
            name: None,
        })
    }

    /// Attach a display name.
    #[must_use]
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Attach `name` only when no name is present yet.
    #[must_use]
    pub fn or_name(self, name: &str) -> Self {
        if self.name.is_some() {
            self
        } else {
            self.with_name(name)
        }
    }

    /// The display label: the name, or `"lat, lng"` when unnamed.
    #[must_use]
    pub fn label(&self) -> String {
        self.name
            .clone()
            .unwrap_or_else(|| format!("{}, {}", self.lat, self.lng))
    }
}

impl PartialEq for Coordinate {
    fn eq(&self, other: &Self) -> bool {
        self.lat == other.lat && self.lng == other.lng
    }
}

impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.label())
    }
}

impl From<&Coordinate> for Coord<f64> {
    fn from(value: &Coordinate) -> Self {
        Coord {
            x: value.lng,
            y: value.lat,
        }
    }
}

impl From<&Coordinate> for Point<f64> {
    fn from(value: &Coordinate) -> Self {
        Point::from(Coord::from(value))
    }
}
