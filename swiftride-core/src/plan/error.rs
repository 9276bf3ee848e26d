use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::{CoordinateError, SearchError};

/// Errors returned by [`crate::plan::TripPlanner`].
///
/// Everything except [`PlanError::Internal`] is the caller's fault and
/// carries an actionable message.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum PlanError {
    /// `start` or `destination` was absent.
    #[error("Start and destination are required")]
    MissingEndpoints,
    /// A coordinate lacked `lat` or `lng`.
    #[error("Start and destination must include lat and lng coordinates")]
    MissingCoordinates {
        /// The offending request field.
        field: &'static str,
    },
    /// A coordinate was outside the valid range.
    #[error("{field} coordinate is invalid: {source}")]
    InvalidCoordinate {
        /// The offending request field.
        field: &'static str,
        /// Why the coordinate was rejected.
        #[source]
        source: CoordinateError,
    },
    /// The radius was NaN or infinite.
    #[error("radius must be a finite number of metres, got {0}")]
    InvalidRadius(f64),
    /// The payload was not a well-formed planning request.
    #[error("malformed planning request: {message}")]
    MalformedRequest {
        /// Decoder diagnostic.
        message: String,
    },
    /// The search hit an internal fault.
    #[error("Failed to plan trip")]
    Internal(#[from] SearchError),
}

impl PlanError {
    /// Whether the error was caused by the request rather than the planner.
    #[must_use]
    pub const fn is_client_error(&self) -> bool {
        !matches!(self, Self::Internal(_))
    }

    /// The error shaped for the caller.
    #[must_use]
    pub fn to_body(&self) -> ErrorBody {
        let details = match self {
            Self::MissingCoordinates { field } => Some(format!("{field} is missing lat or lng")),
            Self::Internal(source) => Some(source.to_string()),
            _ => None,
        };
        ErrorBody {
            error: self.to_string(),
            details,
        }
    }
}

impl From<serde_json::Error> for PlanError {
    fn from(err: serde_json::Error) -> Self {
        Self::MalformedRequest {
            message: err.to_string(),
        }
    }
}

/// Failure payload returned to callers; never contains partial results.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorBody {
    /// Short message.
    pub error: String,
    /// Optional diagnostic detail.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}
