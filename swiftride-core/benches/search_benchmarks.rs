//! Criterion benchmarks for the route search.
//!
//! Measures a full candidate generation plus search across ring sizes with a
//! constant transit source, so the numbers reflect the planner itself rather
//! than any network.
//!
//! Run benchmarks with:
//! ```bash
//! cargo bench --package swiftride-core
//! ```

// Criterion macros generate code that triggers missing_docs warnings.
#![allow(missing_docs, reason = "Criterion macros generate undocumented code")]

use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use swiftride_core::candidates::CandidateGenerator;
use swiftride_core::test_support::ConstantTransitTimeSource;
use swiftride_core::{
    Coordinate, RouteSearch, SearchLimits, TransitTimeEstimator, TripPlanner,
};

/// Ring sizes to benchmark.
const RING_SIZES: &[usize] = &[4, 8, 16];

/// Search limits to benchmark against each ring size.
const LIMITS: &[usize] = &[5, 10];

fn bench_plan_route(c: &mut Criterion) {
    let mut group = c.benchmark_group("plan_route");
    let Ok(start) = Coordinate::new(32.0853, 34.7818) else {
        return;
    };
    let Ok(destination) = Coordinate::new(32.1133, 34.8043) else {
        return;
    };
    let request = swiftride_core::PlanRequest::new(&start, &destination, None);

    for &ring in RING_SIZES {
        for &limit in LIMITS {
            let search = RouteSearch::new(TransitTimeEstimator::with_source(
                ConstantTransitTimeSource::new(20),
            ))
            .with_limits(SearchLimits::uniform(limit));
            let planner = TripPlanner::new(search).with_generator(CandidateGenerator::new(ring));
            group.bench_with_input(
                BenchmarkId::new(format!("ring_{ring}"), limit),
                &request,
                |b, request| {
                    b.iter(|| {
                        #[expect(
                            clippy::let_underscore_must_use,
                            reason = "Benchmarking planning, result is intentionally discarded"
                        )]
                        let _ = planner.plan(request);
                    });
                },
            );
        }
    }

    group.finish();
}

criterion_group!(benches, bench_plan_route);
criterion_main!(benches);
