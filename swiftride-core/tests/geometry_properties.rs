//! Property-based tests for geometry, candidate generation and search.
//!
//! # Invariants tested
//!
//! - **Distance:** symmetric, zero for identical points, never negative.
//! - **Candidates:** `count + 1` points, origin first, ring on the radius.
//! - **Vehicle minutes:** non-decreasing in distance.
//! - **Fallback:** simulated transit stays within its stated bounds.
//! - **Search:** the chosen total equals the sum of its legs and never
//!   exceeds riding transit directly between the endpoints.
//! - **Selection:** with per-pair transit minutes the search returns the
//!   first minimum over the bounded sample in `(pickup, dropoff)` order.

use proptest::prelude::*;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use swiftride_core::candidates::generate_candidates;
use swiftride_core::geometry::{distance_km, transit_base_minutes, vehicle_minutes};
use swiftride_core::test_support::{ConstantTransitTimeSource, TableTransitTimeSource};
use swiftride_core::transit::{SimulatedTransitTime, WAITING_PENALTY_MINUTES};
use swiftride_core::{
    Coordinate, RouteSearch, SearchLimits, TransitTimeEstimator, TransitTimeSource,
};

fn coordinate() -> impl Strategy<Value = Coordinate> {
    (-80.0_f64..80.0, -179.0_f64..179.0)
        .prop_map(|(lat, lng)| Coordinate::new(lat, lng).expect("strategy stays in range"))
}

/// Exhaustive first-minimum over the leading `limit` candidates.
fn brute_force_minimum(
    source: &TableTransitTimeSource,
    origin: &Coordinate,
    destination: &Coordinate,
    pickups: &[Coordinate],
    dropoffs: &[Coordinate],
    limit: usize,
) -> (u32, Coordinate, Coordinate) {
    let mut best: Option<(u32, Coordinate, Coordinate)> = None;
    for pickup in pickups.iter().take(limit) {
        for dropoff in dropoffs.iter().take(limit) {
            let transit = source
                .transit_minutes(pickup, dropoff)
                .expect("every pair is in the table");
            let total = vehicle_minutes(distance_km(origin, pickup))
                + transit
                + vehicle_minutes(distance_km(dropoff, destination));
            if best.as_ref().is_none_or(|(current, _, _)| total < *current) {
                best = Some((total, pickup.clone(), dropoff.clone()));
            }
        }
    }
    best.expect("non-empty candidate sets")
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    #[test]
    fn distance_is_symmetric(a in coordinate(), b in coordinate()) {
        let there = distance_km(&a, &b);
        let back = distance_km(&b, &a);
        prop_assert!((there - back).abs() < 1e-9);
        prop_assert!(there >= 0.0);
    }

    #[test]
    fn distance_to_self_is_zero(a in coordinate()) {
        prop_assert!(distance_km(&a, &a).abs() < 1e-12);
    }

    #[test]
    fn candidates_ring_the_origin(
        origin in coordinate(),
        radius in 1.0_f64..10_000.0,
        count in 1_usize..16,
    ) {
        let candidates = generate_candidates(&origin, radius, count);
        prop_assert_eq!(candidates.len(), count + 1);
        prop_assert_eq!(&candidates[0], &origin);
        for point in &candidates[1..] {
            let offset_m = distance_km(&origin, point) * 1000.0;
            prop_assert!((offset_m - radius).abs() < 1e-3, "{offset_m} m vs {radius} m");
        }
    }

    #[test]
    fn vehicle_minutes_never_decrease(a in 0.0_f64..500.0, delta in 0.0_f64..50.0) {
        prop_assert!(vehicle_minutes(a) <= vehicle_minutes(a + delta));
    }

    #[test]
    fn simulated_transit_stays_in_bounds(from in coordinate(), to in coordinate(), seed in any::<u64>()) {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let minutes = SimulatedTransitTime.minutes_with(&mut rng, &from, &to);
        let base = transit_base_minutes(distance_km(&from, &to));
        prop_assert!(minutes >= base + WAITING_PENALTY_MINUTES.start());
        prop_assert!(minutes <= base + WAITING_PENALTY_MINUTES.end());
    }

    #[test]
    fn search_never_beats_its_own_legs(
        origin in coordinate(),
        destination in coordinate(),
        transit in 0_u32..120,
        radius in 0.0_f64..3_000.0,
    ) {
        let search = RouteSearch::new(TransitTimeEstimator::with_source(
            ConstantTransitTimeSource::new(transit),
        ));
        let route = search
            .find_optimal_route(
                &origin,
                &destination,
                &generate_candidates(&origin, radius, 8),
                &generate_candidates(&destination, radius, 8),
            )
            .expect("search should not fail")
            .expect("non-empty candidates yield a route");
        let legs: u32 = route.legs().iter().map(|leg| leg.duration_minutes).sum();
        prop_assert_eq!(route.total_minutes(), legs);
        prop_assert!(route.total_minutes() <= transit);
    }

    #[test]
    fn search_picks_the_first_minimum(
        origin in coordinate(),
        destination in coordinate(),
        radius in 100.0_f64..3_000.0,
        pickup_count in 0_usize..8,
        dropoff_count in 0_usize..8,
        limit in 1_usize..7,
        minutes in prop::collection::vec(0_u32..40, 81),
    ) {
        let pickups = generate_candidates(&origin, radius, pickup_count);
        let dropoffs = generate_candidates(&destination, radius, dropoff_count);
        let entries = pickups
            .iter()
            .flat_map(|pickup| dropoffs.iter().map(move |dropoff| (pickup.clone(), dropoff.clone())))
            .zip(minutes.iter().copied())
            .collect();
        let table = TableTransitTimeSource::new(entries);
        let (expected_total, expected_pickup, expected_dropoff) =
            brute_force_minimum(&table, &origin, &destination, &pickups, &dropoffs, limit);

        let search = RouteSearch::new(TransitTimeEstimator::with_source(table))
            .with_limits(SearchLimits::uniform(limit));
        let route = search
            .find_optimal_route(&origin, &destination, &pickups, &dropoffs)
            .expect("search should not fail")
            .expect("non-empty candidates yield a route");

        prop_assert_eq!(route.total_minutes(), expected_total);
        prop_assert_eq!(route.pickup(), &expected_pickup);
        prop_assert_eq!(route.dropoff(), &expected_dropoff);
    }
}
