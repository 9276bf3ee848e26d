//! Planning response shaped for external consumers.

use serde::{Deserialize, Serialize};

use crate::route::{CandidateRoute, TripLeg};

/// A vehicle segment of the response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Segment {
    /// Label of the leg start.
    pub from: String,
    /// Label of the leg end.
    pub to: String,
    /// Duration, e.g. `"7 min"`.
    pub time: String,
}

/// The transit segment of the response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransitSegment {
    /// Label of the pickup point.
    pub from: String,
    /// Label of the dropoff point.
    pub to: String,
    /// Duration, e.g. `"20 min"`.
    pub time: String,
    /// Trip-planner link for the segment.
    pub moovit_link: String,
}

/// Labelled segments of the chosen route.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Segments {
    /// First-mile scooter ride.
    pub scooter_start: Segment,
    /// Public-transport ride.
    pub public_transport: TransitSegment,
    /// Last-mile scooter ride.
    pub scooter_end: Segment,
}

/// The successful planning response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlanResponse {
    /// Total trip time, e.g. `"31 min"`.
    pub total_time: String,
    /// Per-leg breakdown.
    pub segments: Segments,
}

fn minutes_label(minutes: u32) -> String {
    format!("{minutes} min")
}

impl From<&TripLeg> for Segment {
    fn from(leg: &TripLeg) -> Self {
        Self {
            from: leg.from.label(),
            to: leg.to.label(),
            time: minutes_label(leg.duration_minutes),
        }
    }
}

impl From<&CandidateRoute> for PlanResponse {
    fn from(route: &CandidateRoute) -> Self {
        let transit = route.transit();
        Self {
            total_time: minutes_label(route.total_minutes()),
            segments: Segments {
                scooter_start: route.vehicle_start().into(),
                public_transport: TransitSegment {
                    from: transit.from.label(),
                    to: transit.to.label(),
                    time: minutes_label(transit.duration_minutes),
                    moovit_link: transit.reference_link().unwrap_or_default().to_owned(),
                },
                scooter_end: route.vehicle_end().into(),
            },
        }
    }
}
