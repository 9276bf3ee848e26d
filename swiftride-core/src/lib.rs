//! Core planning logic for SwiftRide hybrid trips.
//!
//! A trip is three legs: a vehicle ride to a pickup point, a public-transit
//! ride to a dropoff point, and a vehicle ride to the destination. The crate
//! generates candidate transfer points around both ends, estimates every
//! leg, and returns the combination with the smallest total time.
//!
//! Transit durations come from an injected [`TransitTimeSource`]. Lookup
//! failures never reach the caller; [`TransitTimeEstimator`] replaces them
//! with a distance-based simulation.

#![forbid(unsafe_code)]

pub mod candidates;
mod coordinate;
pub mod geometry;
pub mod plan;
mod route;
mod search;
pub mod transit;

#[doc(hidden)]
pub mod test_support;

pub use crate::coordinate::{Coordinate, CoordinateError};
pub use crate::plan::{ErrorBody, PlanError, PlanRequest, PlanResponse, TripPlanner};
pub use crate::route::{CandidateRoute, LegKind, RouteError, TripLeg};
pub use crate::search::{DEFAULT_SEARCH_LIMIT, RouteSearch, SearchError, SearchLimits};
pub use crate::transit::{
    TransitLinkBuilder, TransitPair, TransitTimeError, TransitTimeEstimator, TransitTimeSource,
};
