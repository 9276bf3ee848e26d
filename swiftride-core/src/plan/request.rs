//! Planning request payload and its validation.

use serde::{Deserialize, Serialize};

use crate::Coordinate;
use crate::candidates::DEFAULT_RADIUS_METERS;

use super::error::PlanError;

/// Field name used in errors about the start point.
pub const FIELD_START: &str = "start";

/// Field name used in errors about the destination.
pub const FIELD_DESTINATION: &str = "destination";

/// A coordinate as it arrives from the caller; any part may be missing.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RawCoordinate {
    /// Latitude in degrees.
    #[serde(default)]
    pub lat: Option<f64>,
    /// Longitude in degrees.
    #[serde(default)]
    pub lng: Option<f64>,
    /// Optional display name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

impl From<&Coordinate> for RawCoordinate {
    fn from(value: &Coordinate) -> Self {
        Self {
            lat: Some(value.lat),
            lng: Some(value.lng),
            name: value.name.clone(),
        }
    }
}

/// A trip-planning request.
///
/// # Examples
/// ```
/// use swiftride_core::plan::PlanRequest;
///
/// let request: PlanRequest = serde_json::from_str(
///     r#"{"start": {"lat": 32.0853, "lng": 34.7818},
///         "destination": {"lat": 32.1133, "lng": 34.8043, "name": "University"}}"#,
/// )?;
/// let valid = request.validate()?;
/// assert_eq!(valid.radius_meters, 2000.0);
/// assert_eq!(valid.destination.label(), "University");
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PlanRequest {
    /// Where the trip starts.
    #[serde(default)]
    pub start: Option<RawCoordinate>,
    /// Where the trip ends.
    #[serde(default)]
    pub destination: Option<RawCoordinate>,
    /// Candidate search radius in metres; defaults to 2000.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub radius: Option<f64>,
}

/// A request that passed validation.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidatedRequest {
    /// Trip origin.
    pub start: Coordinate,
    /// Trip destination.
    pub destination: Coordinate,
    /// Candidate radius in metres.
    pub radius_meters: f64,
}

impl PlanRequest {
    /// Build a request from known coordinates.
    #[must_use]
    pub fn new(start: &Coordinate, destination: &Coordinate, radius: Option<f64>) -> Self {
        Self {
            start: Some(start.into()),
            destination: Some(destination.into()),
            radius,
        }
    }

    /// Check presence and ranges of every field.
    ///
    /// # Errors
    ///
    /// Returns a client-side [`PlanError`] describing the first problem found.
    pub fn validate(&self) -> Result<ValidatedRequest, PlanError> {
        let (Some(start), Some(destination)) = (&self.start, &self.destination) else {
            return Err(PlanError::MissingEndpoints);
        };
        let start = resolve(start, FIELD_START)?;
        let destination = resolve(destination, FIELD_DESTINATION)?;
        let radius_meters = self.radius.unwrap_or(DEFAULT_RADIUS_METERS);
        if !radius_meters.is_finite() {
            return Err(PlanError::InvalidRadius(radius_meters));
        }
        Ok(ValidatedRequest {
            start,
            destination,
            radius_meters,
        })
    }
}

fn resolve(raw: &RawCoordinate, field: &'static str) -> Result<Coordinate, PlanError> {
    let (Some(lat), Some(lng)) = (raw.lat, raw.lng) else {
        return Err(PlanError::MissingCoordinates { field });
    };
    let coordinate =
        Coordinate::new(lat, lng).map_err(|source| PlanError::InvalidCoordinate { field, source })?;
    Ok(match &raw.name {
        Some(name) => coordinate.with_name(name.clone()),
        None => coordinate,
    })
}
