//! Three-leg hybrid routes.
//!
//! A [`CandidateRoute`] is always vehicle, transit, vehicle, and its total
//! equals the sum of its legs.

use thiserror::Error;

use crate::Coordinate;

/// How a leg is travelled.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LegKind {
    /// Personal micro-vehicle at a fixed average speed.
    Vehicle,
    /// Public transit, with a planner link for the segment.
    Transit {
        /// Trip-planner URL for looking the segment up.
        reference_link: String,
    },
}

/// A single segment of a trip.
#[derive(Debug, Clone, PartialEq)]
pub struct TripLeg {
    /// Where the leg starts.
    pub from: Coordinate,
    /// Where the leg ends.
    pub to: Coordinate,
    /// Leg duration in whole minutes.
    pub duration_minutes: u32,
    /// Mode of travel.
    pub kind: LegKind,
}

impl TripLeg {
    /// A vehicle leg.
    #[must_use]
    pub const fn vehicle(from: Coordinate, to: Coordinate, duration_minutes: u32) -> Self {
        Self {
            from,
            to,
            duration_minutes,
            kind: LegKind::Vehicle,
        }
    }

    /// A transit leg with its planner link.
    #[must_use]
    pub const fn transit(
        from: Coordinate,
        to: Coordinate,
        duration_minutes: u32,
        reference_link: String,
    ) -> Self {
        Self {
            from,
            to,
            duration_minutes,
            kind: LegKind::Transit { reference_link },
        }
    }

    /// The planner link for a transit leg.
    #[must_use]
    pub fn reference_link(&self) -> Option<&str> {
        match &self.kind {
            LegKind::Transit { reference_link } => Some(reference_link),
            LegKind::Vehicle => None,
        }
    }

    const fn is_vehicle(&self) -> bool {
        matches!(self.kind, LegKind::Vehicle)
    }
}

/// Errors returned by [`CandidateRoute::new`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RouteError {
    /// The stated total differs from the sum of leg durations.
    #[error("route total {stated} min does not match leg sum {computed:?} min")]
    TotalMismatch {
        /// Total supplied by the caller.
        stated: u32,
        /// Sum of the legs, `None` if it overflowed.
        computed: Option<u32>,
    },
    /// Legs were not vehicle, transit, vehicle.
    #[error("route legs must be vehicle, transit, vehicle")]
    LegOrder,
}

/// A priced pickup/dropoff combination.
///
/// # Examples
/// ```
/// use swiftride_core::{CandidateRoute, Coordinate, TripLeg};
///
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let origin = Coordinate::new(32.08, 34.78)?;
/// let pickup = Coordinate::new(32.09, 34.78)?;
/// let dropoff = Coordinate::new(32.11, 34.80)?;
/// let destination = Coordinate::new(32.11, 34.81)?;
/// let route = CandidateRoute::new(
///     [
///         TripLeg::vehicle(origin, pickup.clone(), 2),
///         TripLeg::transit(pickup, dropoff.clone(), 20, "https://planner.test".into()),
///         TripLeg::vehicle(dropoff, destination, 3),
///     ],
///     25,
/// )?;
/// assert_eq!(route.total_minutes(), 25);
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct CandidateRoute {
    legs: [TripLeg; 3],
    total_minutes: u32,
}

impl CandidateRoute {
    /// Validate and construct a route from its three legs and total.
    ///
    /// # Errors
    ///
    /// Returns [`RouteError::LegOrder`] unless the legs are vehicle, transit,
    /// vehicle, and [`RouteError::TotalMismatch`] when `total_minutes` is not
    /// the sum of the leg durations.
    pub fn new(legs: [TripLeg; 3], total_minutes: u32) -> Result<Self, RouteError> {
        let [first, middle, last] = &legs;
        if !first.is_vehicle() || middle.is_vehicle() || !last.is_vehicle() {
            return Err(RouteError::LegOrder);
        }
        let computed = legs
            .iter()
            .try_fold(0_u32, |sum, leg| sum.checked_add(leg.duration_minutes));
        if computed != Some(total_minutes) {
            return Err(RouteError::TotalMismatch {
                stated: total_minutes,
                computed,
            });
        }
        Ok(Self {
            legs,
            total_minutes,
        })
    }

    /// Where the traveller boards transit.
    #[must_use]
    pub const fn pickup(&self) -> &Coordinate {
        &self.legs[1].from
    }

    /// Where the traveller leaves transit.
    #[must_use]
    pub const fn dropoff(&self) -> &Coordinate {
        &self.legs[1].to
    }

    /// First-mile vehicle leg.
    #[must_use]
    pub const fn vehicle_start(&self) -> &TripLeg {
        &self.legs[0]
    }

    /// Transit leg.
    #[must_use]
    pub const fn transit(&self) -> &TripLeg {
        &self.legs[1]
    }

    /// Last-mile vehicle leg.
    #[must_use]
    pub const fn vehicle_end(&self) -> &TripLeg {
        &self.legs[2]
    }

    /// All legs in travel order.
    #[must_use]
    pub const fn legs(&self) -> &[TripLeg; 3] {
        &self.legs
    }

    /// Total trip time in minutes.
    #[must_use]
    pub const fn total_minutes(&self) -> u32 {
        self.total_minutes
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::{fixture, rstest};

    #[fixture]
    fn points() -> [Coordinate; 4] {
        [
            Coordinate::new(0.0, 0.0).expect("valid"),
            Coordinate::new(0.0, 0.01).expect("valid"),
            Coordinate::new(0.0, 0.05).expect("valid"),
            Coordinate::new(0.0, 0.06).expect("valid"),
        ]
    }

    fn legs(points: &[Coordinate; 4], minutes: [u32; 3]) -> [TripLeg; 3] {
        let [a, b, c, d] = points.clone();
        [
            TripLeg::vehicle(a, b.clone(), minutes[0]),
            TripLeg::transit(b, c.clone(), minutes[1], "https://planner.test".into()),
            TripLeg::vehicle(c, d, minutes[2]),
        ]
    }

    #[rstest]
    fn exposes_pickup_and_dropoff(points: [Coordinate; 4]) {
        let route = CandidateRoute::new(legs(&points, [1, 2, 3]), 6).expect("valid route");
        assert_eq!(route.pickup(), &points[1]);
        assert_eq!(route.dropoff(), &points[2]);
        assert_eq!(route.transit().reference_link(), Some("https://planner.test"));
        assert_eq!(route.vehicle_start().reference_link(), None);
    }

    #[rstest]
    fn rejects_mismatched_total(points: [Coordinate; 4]) {
        let err = CandidateRoute::new(legs(&points, [1, 2, 3]), 7).expect_err("mismatch");
        assert_eq!(
            err,
            RouteError::TotalMismatch {
                stated: 7,
                computed: Some(6)
            }
        );
    }

    #[rstest]
    fn rejects_overflowing_legs(points: [Coordinate; 4]) {
        let err = CandidateRoute::new(legs(&points, [u32::MAX, 1, 0]), 0).expect_err("overflow");
        assert!(matches!(err, RouteError::TotalMismatch { computed: None, .. }));
    }

    #[rstest]
    fn rejects_wrong_leg_order(points: [Coordinate; 4]) {
        let [a, b, c, d] = points;
        let all_vehicle = [
            TripLeg::vehicle(a, b.clone(), 1),
            TripLeg::vehicle(b, c.clone(), 1),
            TripLeg::vehicle(c, d, 1),
        ];
        assert_eq!(
            CandidateRoute::new(all_vehicle, 3).expect_err("order"),
            RouteError::LegOrder
        );
    }
}
