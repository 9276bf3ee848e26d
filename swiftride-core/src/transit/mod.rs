//! Estimate public-transit durations between transfer points.
//!
//! The [`TransitTimeSource`] trait abstracts a live, possibly slow and
//! unreliable, transit planner. [`TransitTimeEstimator`] wraps an optional
//! source and guarantees an answer: when the source is absent or fails, a
//! [`SimulatedTransitTime`] figure derived from distance is used instead.

mod duration_text;
mod error;
mod estimator;
mod link;
mod simulated;
mod source;

pub use duration_text::{DEFAULT_PARSED_MINUTES, parse_duration_text};
pub use error::TransitTimeError;
pub use estimator::{EstimateProvenance, TransitEstimate, TransitTimeEstimator};
pub use link::{
    DEFAULT_PLANNER_BASE_URL, DEFAULT_PLANNER_LANGUAGE, DEFAULT_PLANNER_REGION, TransitLinkBuilder,
    TransitLinkError,
};
pub use simulated::{SimulatedTransitTime, WAITING_PENALTY_MINUTES};
pub use source::{TransitPair, TransitTimeSource};
