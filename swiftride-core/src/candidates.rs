//! Candidate transfer points around an origin.
//!
//! A candidate set always starts with the origin itself so the search can
//! choose to ride transit straight from where the traveller stands. The rest
//! of the set is a ring of points at the requested radius, evenly spaced by
//! bearing and starting due north.

use crate::Coordinate;
use crate::geometry::destination_point;

/// Default number of ring points generated around each origin.
pub const DEFAULT_CANDIDATE_COUNT: usize = 8;

/// Default search radius in metres.
pub const DEFAULT_RADIUS_METERS: f64 = 2000.0;

/// Name given to an unnamed origin when it is used as a candidate.
pub const ORIGIN_CANDIDATE_NAME: &str = "Original location";

/// Name given to every generated ring point.
pub const GENERATED_CANDIDATE_NAME: &str = "Generated point";

/// Ordered candidate points; element 0 is always the origin.
pub type CandidateSet = Vec<Coordinate>;

/// Generate `count` points on a ring of `radius_meters` around `origin`.
///
/// The origin is prepended as element 0. A non-positive or non-finite radius,
/// or a zero count, yields only the origin.
///
/// # Examples
/// ```
/// use swiftride_core::{Coordinate, candidates::generate_candidates};
///
/// # fn main() -> Result<(), swiftride_core::CoordinateError> {
/// let origin = Coordinate::new(32.0853, 34.7818)?;
/// let candidates = generate_candidates(&origin, 2000.0, 8);
/// assert_eq!(candidates.len(), 9);
/// assert_eq!(candidates[0], origin);
/// assert_eq!(candidates[0].label(), "Original location");
///
/// assert_eq!(generate_candidates(&origin, 0.0, 8).len(), 1);
/// # Ok(())
/// # }
/// ```
#[must_use]
pub fn generate_candidates(origin: &Coordinate, radius_meters: f64, count: usize) -> CandidateSet {
    let mut candidates = Vec::with_capacity(count.saturating_add(1));
    candidates.push(origin.clone().or_name(ORIGIN_CANDIDATE_NAME));

    if !radius_meters.is_finite() || radius_meters <= 0.0 || count == 0 {
        return candidates;
    }

    let radius_km = radius_meters / 1000.0;
    let step = 360.0 / count as f64;
    candidates.extend((0..count).map(|i| {
        let (lat, lng) = destination_point(origin, radius_km, step * i as f64);
        Coordinate {
            lat,
            lng,
            name: Some(GENERATED_CANDIDATE_NAME.to_owned()),
        }
    }));
    candidates
}

/// Candidate generation with a configured ring size.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CandidateGenerator {
    count: usize,
}

impl Default for CandidateGenerator {
    fn default() -> Self {
        Self::new(DEFAULT_CANDIDATE_COUNT)
    }
}

impl CandidateGenerator {
    /// Create a generator producing `count` ring points per origin.
    #[must_use]
    pub const fn new(count: usize) -> Self {
        Self { count }
    }

    /// Number of ring points produced per origin.
    #[must_use]
    pub const fn count(&self) -> usize {
        self.count
    }

    /// Generate the candidate set around `origin`.
    #[must_use]
    pub fn generate(&self, origin: &Coordinate, radius_meters: f64) -> CandidateSet {
        generate_candidates(origin, radius_meters, self.count)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::distance_km;
    use rstest::{fixture, rstest};

    #[fixture]
    fn origin() -> Coordinate {
        Coordinate::new(32.0853, 34.7818).expect("valid coordinate")
    }

    #[rstest]
    #[case(1)]
    #[case(4)]
    #[case(8)]
    fn returns_count_plus_origin(origin: Coordinate, #[case] count: usize) {
        assert_eq!(generate_candidates(&origin, 2000.0, count).len(), count + 1);
    }

    #[rstest]
    fn ring_points_sit_on_the_radius(origin: Coordinate) {
        let candidates = generate_candidates(&origin, 1500.0, 8);
        for point in candidates.iter().skip(1) {
            assert!((distance_km(&origin, point) - 1.5).abs() < 1e-9);
        }
    }

    #[rstest]
    fn first_ring_point_is_due_north(origin: Coordinate) {
        let candidates = generate_candidates(&origin, 2000.0, 8);
        let north = &candidates[1];
        assert!(north.lat > origin.lat);
        assert!((north.lng - origin.lng).abs() < 1e-9);
    }

    #[rstest]
    fn ring_points_are_evenly_spaced(origin: Coordinate) {
        let candidates = generate_candidates(&origin, 2000.0, 4);
        let ring = &candidates[1..];
        let gaps: Vec<f64> = ring
            .iter()
            .zip(ring.iter().cycle().skip(1))
            .map(|(a, b)| distance_km(a, b))
            .collect();
        for gap in &gaps {
            assert!((gap - gaps[0]).abs() < 1e-3, "uneven spacing: {gaps:?}");
        }
    }

    #[rstest]
    #[case(0.0)]
    #[case(-10.0)]
    #[case(f64::NAN)]
    fn degenerate_radius_returns_only_origin(origin: Coordinate, #[case] radius: f64) {
        let candidates = generate_candidates(&origin, radius, 8);
        assert_eq!(candidates, vec![origin]);
    }

    #[rstest]
    fn named_origin_keeps_its_name(origin: Coordinate) {
        let named = origin.with_name("Dizengoff Center");
        let candidates = generate_candidates(&named, 2000.0, 2);
        assert_eq!(candidates[0].label(), "Dizengoff Center");
        assert_eq!(candidates[1].label(), GENERATED_CANDIDATE_NAME);
    }

    #[rstest]
    fn generator_uses_configured_count(origin: Coordinate) {
        let generator = CandidateGenerator::new(3);
        assert_eq!(generator.generate(&origin, 500.0).len(), 4);
        assert_eq!(CandidateGenerator::default().count(), DEFAULT_CANDIDATE_COUNT);
    }
}
