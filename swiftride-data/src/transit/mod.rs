//! Live public-transit durations from an HTTP trip planner.
//!
//! This module provides [`HttpTransitTimeSource`], which asks a trip planner
//! for the duration of every `(pickup, dropoff)` pair the search proposes.
//! Failures are reported as [`swiftride_core::TransitTimeError`] values; the
//! core estimator turns them into simulated durations.
//!
//! # Example
//!
//! ```no_run
//! use std::time::Duration;
//! use swiftride_core::{RouteSearch, TransitTimeEstimator, TripPlanner};
//! use swiftride_data::transit::{HttpTransitTimeSource, HttpTransitTimeSourceConfig};
//!
//! let config = HttpTransitTimeSourceConfig::new("https://moovitapp.com")
//!     .with_timeout(Duration::from_secs(10))
//!     .with_concurrency(4);
//! let source = HttpTransitTimeSource::with_config(config)?;
//! let planner = TripPlanner::new(RouteSearch::new(TransitTimeEstimator::with_source(source)));
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

mod planner;
mod provider;

pub use planner::{TripOption, TripPlanResponse};
pub use provider::{
    DEFAULT_CONCURRENCY, DEFAULT_TIMEOUT_SECS, DEFAULT_USER_AGENT, HttpTransitTimeSource,
    HttpTransitTimeSourceConfig, ProviderBuildError,
};
