//! Facade crate for the SwiftRide trip planner.
//!
//! This crate re-exports the core planning types and exposes the live
//! transit source behind the `live-transit` feature flag.

#![forbid(unsafe_code)]

pub use swiftride_core::{
    CandidateRoute, Coordinate, CoordinateError, ErrorBody, LegKind, PlanError, PlanRequest,
    PlanResponse, RouteSearch, SearchError, SearchLimits, TransitLinkBuilder, TransitTimeError,
    TransitTimeEstimator, TransitTimeSource, TripLeg, TripPlanner,
};

#[cfg(feature = "live-transit")]
pub use swiftride_data::transit::{
    HttpTransitTimeSource, HttpTransitTimeSourceConfig, ProviderBuildError,
};
