//! Request orchestration: validate, generate candidates, search, shape.
//!
//! [`TripPlanner`] is the single entry point external surfaces call. It owns
//! a [`CandidateGenerator`] and a [`RouteSearch`] and turns a
//! [`PlanRequest`] into a [`PlanResponse`], `None` when no route exists, or
//! a [`PlanError`].

mod error;
mod request;
mod response;

pub use error::{ErrorBody, PlanError};
pub use request::{FIELD_DESTINATION, FIELD_START, PlanRequest, RawCoordinate, ValidatedRequest};
pub use response::{PlanResponse, Segment, Segments, TransitSegment};

use log::{debug, info};

use crate::candidates::CandidateGenerator;
use crate::route::CandidateRoute;
use crate::search::RouteSearch;
use crate::transit::{TransitTimeEstimator, TransitTimeSource};

/// Plans hybrid vehicle and transit trips.
///
/// # Examples
/// ```
/// use swiftride_core::TripPlanner;
///
/// let planner = TripPlanner::simulated();
/// let response = planner
///     .plan_json(
///         r#"{"start": {"lat": 32.0853, "lng": 34.7818},
///             "destination": {"lat": 32.1133, "lng": 34.8043}}"#,
///     )?
///     .expect("non-empty candidate sets always produce a route");
/// assert!(response.total_time.ends_with(" min"));
/// # Ok::<(), swiftride_core::PlanError>(())
/// ```
#[derive(Debug)]
pub struct TripPlanner<S = Box<dyn TransitTimeSource>> {
    generator: CandidateGenerator,
    search: RouteSearch<S>,
}

impl TripPlanner<Box<dyn TransitTimeSource>> {
    /// A planner that never queries a live transit source.
    #[must_use]
    pub fn simulated() -> Self {
        Self::new(RouteSearch::new(TransitTimeEstimator::simulated()))
    }
}

impl<S: TransitTimeSource> TripPlanner<S> {
    /// Create a planner around `search` with the default candidate ring.
    #[must_use]
    pub fn new(search: RouteSearch<S>) -> Self {
        Self {
            generator: CandidateGenerator::default(),
            search,
        }
    }

    /// Override the candidate generator.
    #[must_use]
    pub const fn with_generator(mut self, generator: CandidateGenerator) -> Self {
        self.generator = generator;
        self
    }

    /// Plan a trip for `request`.
    ///
    /// # Errors
    ///
    /// Returns a client [`PlanError`] when the request is invalid and
    /// [`PlanError::Internal`] when the search fails.
    pub fn plan(&self, request: &PlanRequest) -> Result<Option<PlanResponse>, PlanError> {
        let valid = request.validate()?;
        let route = self.plan_route(&valid)?;
        match &route {
            Some(route) => info!(
                "planned trip {} -> {} in {} min",
                valid.start,
                valid.destination,
                route.total_minutes()
            ),
            None => info!("no route from {} to {}", valid.start, valid.destination),
        }
        Ok(route.as_ref().map(PlanResponse::from))
    }

    /// Decode a JSON request and plan it.
    ///
    /// # Errors
    ///
    /// Returns [`PlanError::MalformedRequest`] when `json` is not a planning
    /// request, otherwise as [`TripPlanner::plan`].
    pub fn plan_json(&self, json: &str) -> Result<Option<PlanResponse>, PlanError> {
        let request: PlanRequest = serde_json::from_str(json)?;
        self.plan(&request)
    }

    /// Search for the best route of an already validated request.
    ///
    /// # Errors
    ///
    /// Returns [`PlanError::Internal`] when the search fails.
    pub fn plan_route(&self, request: &ValidatedRequest) -> Result<Option<CandidateRoute>, PlanError> {
        let pickups = self.generator.generate(&request.start, request.radius_meters);
        let dropoffs = self.generator.generate(&request.destination, request.radius_meters);
        debug!(
            "generated {} pickup and {} dropoff candidates at {} m",
            pickups.len(),
            dropoffs.len(),
            request.radius_meters
        );
        Ok(self
            .search
            .find_optimal_route(&request.start, &request.destination, &pickups, &dropoffs)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    use crate::test_support::ConstantTransitTimeSource;

    fn constant_planner(minutes: u32) -> TripPlanner<ConstantTransitTimeSource> {
        TripPlanner::new(RouteSearch::new(TransitTimeEstimator::with_source(
            ConstantTransitTimeSource::new(minutes),
        )))
    }

    #[rstest]
    fn malformed_json_is_a_client_error() {
        let err = constant_planner(20)
            .plan_json(r#"{"start": {"lat": "north"}}"#)
            .expect_err("malformed request");
        assert!(matches!(err, PlanError::MalformedRequest { .. }));
        assert!(err.is_client_error());
    }

    #[rstest]
    fn missing_destination_latitude_is_rejected() {
        let err = constant_planner(20)
            .plan_json(r#"{"start": {"lat": 32.0853, "lng": 34.7818}, "destination": {"lng": 34.8043}}"#)
            .expect_err("missing lat");
        assert_eq!(err, PlanError::MissingCoordinates { field: FIELD_DESTINATION });
    }

    #[rstest]
    fn zero_radius_rides_transit_door_to_door() {
        let response = constant_planner(20)
            .plan_json(
                r#"{"start": {"lat": 32.0853, "lng": 34.7818},
                    "destination": {"lat": 32.1133, "lng": 34.8043},
                    "radius": 0}"#,
            )
            .expect("valid request")
            .expect("route expected");
        assert_eq!(response.total_time, "20 min");
        assert_eq!(response.segments.scooter_start.time, "0 min");
        assert_eq!(response.segments.public_transport.from, "Original location");
    }

    #[rstest]
    fn saturated_transit_minutes_still_plan() {
        let response = constant_planner(u32::MAX)
            .plan_json(
                r#"{"start": {"lat": 32.0853, "lng": 34.7818},
                    "destination": {"lat": 32.1133, "lng": 34.8043}}"#,
            )
            .expect("overflowing pairs are skipped")
            .expect("route expected");
        assert_eq!(response.total_time, format!("{} min", u32::MAX));
        assert_eq!(response.segments.scooter_start.time, "0 min");
    }

    #[rstest]
    fn generator_count_bounds_the_ring() {
        let planner = constant_planner(20).with_generator(CandidateGenerator::new(0));
        let response = planner
            .plan_json(r#"{"start": {"lat": 1, "lng": 1}, "destination": {"lat": 1, "lng": 1.1}}"#)
            .expect("valid request")
            .expect("route expected");
        assert_eq!(response.segments.scooter_end.time, "0 min");
    }
}
