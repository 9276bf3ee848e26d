//! Trip-planner response types.
//!
//! The planner answers a trip-plan URL with a list of trip options. Only the
//! first option is used; its duration is either a numeric minute count or a
//! human-readable tag such as `"1h 20m"`.

use serde::Deserialize;
use swiftride_core::transit::parse_duration_text;

/// Trip-planner response body.
#[derive(Debug, Default, Deserialize)]
pub struct TripPlanResponse {
    /// Candidate itineraries, best first.
    #[serde(default)]
    pub trip_options: Vec<TripOption>,
}

/// One itinerary offered by the planner.
#[derive(Debug, Default, Deserialize)]
pub struct TripOption {
    /// Door-to-door duration in minutes.
    #[serde(default)]
    pub duration_minutes: Option<f64>,
    /// Display duration, e.g. `"45m"` or `"1h 20m"`.
    #[serde(default)]
    pub time_tag: Option<String>,
}

impl TripOption {
    /// Duration in whole minutes, preferring the numeric field.
    ///
    /// Returns `None` when the option carries neither a usable number nor a
    /// time tag.
    #[must_use]
    pub fn minutes(&self) -> Option<u32> {
        let numeric = self
            .duration_minutes
            .filter(|minutes| minutes.is_finite() && *minutes >= 0.0)
            .map(|minutes| {
                let rounded = minutes.round();
                if rounded >= f64::from(u32::MAX) {
                    u32::MAX
                } else {
                    rounded as u32
                }
            });
        numeric.or_else(|| self.time_tag.as_deref().map(parse_duration_text))
    }
}

impl TripPlanResponse {
    /// Duration of the first trip option, if it has one.
    #[must_use]
    pub fn first_duration(&self) -> Option<u32> {
        self.trip_options.first().and_then(TripOption::minutes)
    }
}
