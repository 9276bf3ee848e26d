//! Bounded search for the fastest vehicle, transit, vehicle combination.
//!
//! Only the first few candidates on each side are paired so the number of
//! transit lookups stays small. All lookups for a search are issued as one
//! batch; selection then walks the results in `(pickup_index, dropoff_index)`
//! order and keeps the first strictly smallest total, so the outcome does not
//! depend on how the source schedules its lookups.

use log::{debug, warn};
use thiserror::Error;

use crate::geometry::{distance_km, vehicle_minutes};
use crate::route::{CandidateRoute, RouteError, TripLeg};
use crate::transit::{TransitLinkBuilder, TransitPair, TransitTimeEstimator, TransitTimeSource};
use crate::Coordinate;

/// Default number of candidates considered on each side.
pub const DEFAULT_SEARCH_LIMIT: usize = 5;

/// Caps on how many pickup and dropoff candidates are paired.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchLimits {
    /// Leading pickup candidates considered.
    pub max_pickups: usize,
    /// Leading dropoff candidates considered.
    pub max_dropoffs: usize,
}

impl Default for SearchLimits {
    fn default() -> Self {
        Self::uniform(DEFAULT_SEARCH_LIMIT)
    }
}

impl SearchLimits {
    /// The same cap on both sides.
    #[must_use]
    pub const fn uniform(limit: usize) -> Self {
        Self {
            max_pickups: limit,
            max_dropoffs: limit,
        }
    }
}

/// Errors returned by [`RouteSearch::find_optimal_route`].
///
/// These indicate an internal fault rather than bad input.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SearchError {
    /// Minute arithmetic overflowed while pricing a pair.
    #[error("trip time overflowed for pickup {pickup_index}, dropoff {dropoff_index}")]
    Overflow {
        /// Index into the pickup candidates.
        pickup_index: usize,
        /// Index into the dropoff candidates.
        dropoff_index: usize,
    },
    /// A priced pair referred to a candidate outside the searched range.
    #[error("no candidate at pickup {pickup_index}, dropoff {dropoff_index}")]
    IndexOutOfRange {
        /// Index into the pickup candidates.
        pickup_index: usize,
        /// Index into the dropoff candidates.
        dropoff_index: usize,
    },
    /// The selected route failed its own invariants.
    #[error("selected route is inconsistent: {0}")]
    InvalidRoute(#[from] RouteError),
}

/// One evaluated pickup/dropoff combination.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct PricedPair {
    pickup_index: usize,
    dropoff_index: usize,
    vehicle_start: u32,
    transit: u32,
    vehicle_end: u32,
    total: u32,
}

/// Route search over candidate transfer points.
///
/// # Examples
/// ```
/// use swiftride_core::{Coordinate, RouteSearch, TransitTimeEstimator};
/// use swiftride_core::candidates::generate_candidates;
///
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let origin = Coordinate::new(32.0853, 34.7818)?;
/// let destination = Coordinate::new(32.1133, 34.8043)?;
/// let search = RouteSearch::new(TransitTimeEstimator::simulated());
/// let route = search
///     .find_optimal_route(
///         &origin,
///         &destination,
///         &generate_candidates(&origin, 2000.0, 8),
///         &generate_candidates(&destination, 2000.0, 8),
///     )?
///     .expect("non-empty candidate sets always produce a route");
/// assert_eq!(
///     route.total_minutes(),
///     route.legs().iter().map(|leg| leg.duration_minutes).sum::<u32>(),
/// );
/// # Ok(())
/// # }
/// ```
pub struct RouteSearch<S = Box<dyn TransitTimeSource>> {
    estimator: TransitTimeEstimator<S>,
    links: TransitLinkBuilder,
    limits: SearchLimits,
}

impl<S> std::fmt::Debug for RouteSearch<S> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RouteSearch")
            .field("estimator", &"<TransitTimeEstimator>")
            .field("links", &self.links)
            .field("limits", &self.limits)
            .finish()
    }
}

impl<S: TransitTimeSource> RouteSearch<S> {
    /// Create a search with default limits and planner links.
    #[must_use]
    pub fn new(estimator: TransitTimeEstimator<S>) -> Self {
        Self {
            estimator,
            links: TransitLinkBuilder::default(),
            limits: SearchLimits::default(),
        }
    }

    /// Override the candidate limits.
    #[must_use]
    pub const fn with_limits(mut self, limits: SearchLimits) -> Self {
        self.limits = limits;
        self
    }

    /// Override the planner link builder.
    #[must_use]
    pub fn with_links(mut self, links: TransitLinkBuilder) -> Self {
        self.links = links;
        self
    }

    /// The configured candidate limits.
    #[must_use]
    pub const fn limits(&self) -> SearchLimits {
        self.limits
    }

    /// Find the cheapest combination of pickup and dropoff candidates.
    ///
    /// Returns `Ok(None)` when either candidate set is empty. Pairs whose
    /// total overflows `u32` are skipped.
    ///
    /// # Errors
    ///
    /// Returns [`SearchError::Overflow`] when every pair overflows, and other
    /// [`SearchError`] variants for internal faults. Transit lookup failures
    /// are absorbed by the estimator.
    pub fn find_optimal_route(
        &self,
        origin: &Coordinate,
        destination: &Coordinate,
        pickups: &[Coordinate],
        dropoffs: &[Coordinate],
    ) -> Result<Option<CandidateRoute>, SearchError> {
        let pickups = leading(pickups, self.limits.max_pickups);
        let dropoffs = leading(dropoffs, self.limits.max_dropoffs);
        if pickups.is_empty() || dropoffs.is_empty() {
            debug!("no candidate pairs to evaluate");
            return Ok(None);
        }

        let pairs: Vec<TransitPair> = pickups
            .iter()
            .flat_map(|pickup| dropoffs.iter().map(move |dropoff| (pickup.clone(), dropoff.clone())))
            .collect();
        let estimates = self.estimator.estimate_batch(&pairs);

        let vehicle_start: Vec<u32> = pickups
            .iter()
            .map(|pickup| vehicle_minutes(distance_km(origin, pickup)))
            .collect();
        let vehicle_end: Vec<u32> = dropoffs
            .iter()
            .map(|dropoff| vehicle_minutes(distance_km(dropoff, destination)))
            .collect();

        let mut best: Option<PricedPair> = None;
        let mut overflow: Option<SearchError> = None;
        for (flat_index, estimate) in estimates.iter().enumerate() {
            let pickup_index = flat_index / dropoffs.len();
            let dropoff_index = flat_index % dropoffs.len();
            let start = vehicle_start.get(pickup_index).copied().unwrap_or_default();
            let end = vehicle_end.get(dropoff_index).copied().unwrap_or_default();
            let Some(total) = start
                .checked_add(estimate.minutes)
                .and_then(|sum| sum.checked_add(end))
            else {
                warn!(
                    "skipping pickup {pickup_index}, dropoff {dropoff_index}: \
                     {start} + {} + {end} min overflows",
                    estimate.minutes
                );
                if overflow.is_none() {
                    overflow = Some(SearchError::Overflow {
                        pickup_index,
                        dropoff_index,
                    });
                }
                continue;
            };
            if best.is_none_or(|current| total < current.total) {
                best = Some(PricedPair {
                    pickup_index,
                    dropoff_index,
                    vehicle_start: start,
                    transit: estimate.minutes,
                    vehicle_end: end,
                    total,
                });
            }
        }

        debug!(
            "evaluated {} candidate pairs; best total {:?} min",
            estimates.len(),
            best.map(|pair| pair.total)
        );
        match (best, overflow) {
            (Some(pair), _) => self
                .assemble(origin, destination, pickups, dropoffs, pair)
                .map(Some),
            (None, Some(err)) => Err(err),
            (None, None) => Ok(None),
        }
    }

    fn assemble(
        &self,
        origin: &Coordinate,
        destination: &Coordinate,
        pickups: &[Coordinate],
        dropoffs: &[Coordinate],
        pair: PricedPair,
    ) -> Result<CandidateRoute, SearchError> {
        let (Some(pickup), Some(dropoff)) = (
            pickups.get(pair.pickup_index).cloned(),
            dropoffs.get(pair.dropoff_index).cloned(),
        ) else {
            return Err(SearchError::IndexOutOfRange {
                pickup_index: pair.pickup_index,
                dropoff_index: pair.dropoff_index,
            });
        };
        let link = self.links.link(&pickup, &dropoff);
        let legs = [
            TripLeg::vehicle(origin.clone(), pickup.clone(), pair.vehicle_start),
            TripLeg::transit(pickup, dropoff.clone(), pair.transit, link),
            TripLeg::vehicle(dropoff, destination.clone(), pair.vehicle_end),
        ];
        Ok(CandidateRoute::new(legs, pair.total)?)
    }
}

fn leading(candidates: &[Coordinate], limit: usize) -> &[Coordinate] {
    candidates.get(..limit).unwrap_or(candidates)
}
