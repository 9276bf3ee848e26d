//! Distance-based transit duration used when no live figure is available.

use std::ops::RangeInclusive;

use rand::Rng;

use crate::Coordinate;
use crate::geometry::{distance_km, transit_base_minutes};

/// Boarding and waiting penalty added to every simulated transit leg.
pub const WAITING_PENALTY_MINUTES: RangeInclusive<u32> = 5..=15;

/// Simulated transit duration: average transit speed plus a random wait.
///
/// The waiting penalty is drawn afresh on every call, so two estimates for the
/// same pair may differ. Only the bounds are promised.
///
/// # Examples
/// ```
/// use swiftride_core::{Coordinate, transit::SimulatedTransitTime};
///
/// # fn main() -> Result<(), swiftride_core::CoordinateError> {
/// let a = Coordinate::new(32.0853, 34.7818)?;
/// let minutes = SimulatedTransitTime.minutes(&a, &a);
/// assert!((5..=15).contains(&minutes));
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct SimulatedTransitTime;

impl SimulatedTransitTime {
    /// Simulate a duration using the thread-local random generator.
    #[must_use]
    pub fn minutes(&self, from: &Coordinate, to: &Coordinate) -> u32 {
        self.minutes_with(&mut rand::thread_rng(), from, to)
    }

    /// Simulate a duration drawing the waiting penalty from `rng`.
    pub fn minutes_with<R: Rng + ?Sized>(&self, rng: &mut R, from: &Coordinate, to: &Coordinate) -> u32 {
        let base = transit_base_minutes(distance_km(from, to));
        base.saturating_add(rng.gen_range(WAITING_PENALTY_MINUTES))
    }

    /// The inclusive range every simulated duration for this pair falls in.
    #[must_use]
    pub fn bounds(&self, from: &Coordinate, to: &Coordinate) -> RangeInclusive<u32> {
        let base = transit_base_minutes(distance_km(from, to));
        base.saturating_add(*WAITING_PENALTY_MINUTES.start())
            ..=base.saturating_add(*WAITING_PENALTY_MINUTES.end())
    }
}
