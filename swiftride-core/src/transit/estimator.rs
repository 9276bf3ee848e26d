//! Transit estimates that never fail.
//!
//! [`TransitTimeEstimator`] asks an optional live [`TransitTimeSource`] first
//! and replaces every failure with a [`SimulatedTransitTime`] figure. The
//! degradation is logged but never surfaced to the caller.

use log::{debug, warn};

use crate::Coordinate;

use super::error::TransitTimeError;
use super::simulated::SimulatedTransitTime;
use super::source::{TransitPair, TransitTimeSource};

/// Where an estimate came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EstimateProvenance {
    /// Reported by the live source.
    Live,
    /// Simulated from distance because the live source was absent or failed.
    Simulated,
}

/// A transit duration together with its provenance.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TransitEstimate {
    /// Duration in whole minutes.
    pub minutes: u32,
    /// Whether the figure is live or simulated.
    pub provenance: EstimateProvenance,
}

impl TransitEstimate {
    const fn live(minutes: u32) -> Self {
        Self {
            minutes,
            provenance: EstimateProvenance::Live,
        }
    }

    const fn simulated(minutes: u32) -> Self {
        Self {
            minutes,
            provenance: EstimateProvenance::Simulated,
        }
    }
}

/// Estimate transit durations, degrading to simulation on any error.
///
/// # Examples
/// ```
/// use swiftride_core::{Coordinate, TransitTimeEstimator};
/// use swiftride_core::transit::EstimateProvenance;
///
/// # fn main() -> Result<(), swiftride_core::CoordinateError> {
/// let estimator = TransitTimeEstimator::simulated();
/// let from = Coordinate::new(32.0853, 34.7818)?;
/// let to = Coordinate::new(32.1133, 34.8043)?;
/// let estimate = estimator.estimate(&from, &to);
/// assert_eq!(estimate.provenance, EstimateProvenance::Simulated);
/// assert!((14..=24).contains(&estimate.minutes));
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct TransitTimeEstimator<S = Box<dyn TransitTimeSource>> {
    source: Option<S>,
    fallback: SimulatedTransitTime,
}

impl TransitTimeEstimator<Box<dyn TransitTimeSource>> {
    /// An estimator that never queries a live source.
    #[must_use]
    pub const fn simulated() -> Self {
        Self {
            source: None,
            fallback: SimulatedTransitTime,
        }
    }
}

impl<S: TransitTimeSource> TransitTimeEstimator<S> {
    /// An estimator that queries `source` first.
    pub const fn with_source(source: S) -> Self {
        Self {
            source: Some(source),
            fallback: SimulatedTransitTime,
        }
    }

    /// Whether a live source is configured.
    #[must_use]
    pub const fn has_live_source(&self) -> bool {
        self.source.is_some()
    }

    /// Estimate the transit duration from `from` to `to`.
    #[must_use]
    pub fn estimate(&self, from: &Coordinate, to: &Coordinate) -> TransitEstimate {
        let Some(source) = &self.source else {
            return self.simulate(from, to);
        };
        self.settle(source.transit_minutes(from, to), from, to)
    }

    /// Estimate every pair, preserving the order of `pairs`.
    ///
    /// Each failed lookup falls back independently; a batch never fails.
    #[must_use]
    pub fn estimate_batch(&self, pairs: &[TransitPair]) -> Vec<TransitEstimate> {
        let Some(source) = &self.source else {
            return pairs.iter().map(|(from, to)| self.simulate(from, to)).collect();
        };
        let mut results = source.transit_minutes_batch(pairs).into_iter();
        pairs
            .iter()
            .map(|(from, to)| {
                // A source returning too few results is treated as failed for the rest.
                let outcome = results.next().unwrap_or(Err(TransitTimeError::MissingDuration {
                    url: String::from("<batch>"),
                }));
                self.settle(outcome, from, to)
            })
            .collect()
    }

    fn settle(
        &self,
        outcome: Result<u32, TransitTimeError>,
        from: &Coordinate,
        to: &Coordinate,
    ) -> TransitEstimate {
        match outcome {
            Ok(minutes) => TransitEstimate::live(minutes),
            Err(TransitTimeError::Disabled) => self.simulate(from, to),
            Err(err) => {
                warn!("live transit lookup failed, using simulated estimate: {err}");
                self.simulate(from, to)
            }
        }
    }

    fn simulate(&self, from: &Coordinate, to: &Coordinate) -> TransitEstimate {
        let minutes = self.fallback.minutes(from, to);
        debug!("simulated transit estimate {from} -> {to}: {minutes} min");
        TransitEstimate::simulated(minutes)
    }
}

impl<S: TransitTimeSource> From<Option<S>> for TransitTimeEstimator<S> {
    fn from(source: Option<S>) -> Self {
        Self {
            source,
            fallback: SimulatedTransitTime,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::{fixture, rstest};

    use crate::test_support::{ConstantTransitTimeSource, FailingTransitTimeSource};

    #[fixture]
    fn pair() -> (Coordinate, Coordinate) {
        (
            Coordinate::new(32.0853, 34.7818).expect("valid"),
            Coordinate::new(32.1133, 34.8043).expect("valid"),
        )
    }

    #[rstest]
    fn live_value_is_used_when_available(pair: (Coordinate, Coordinate)) {
        let estimator = TransitTimeEstimator::with_source(ConstantTransitTimeSource::new(42));
        let estimate = estimator.estimate(&pair.0, &pair.1);
        assert_eq!(estimate, TransitEstimate::live(42));
    }

    #[rstest]
    #[case(TransitTimeError::Timeout { url: "http://planner.test".into(), timeout_secs: 30 })]
    #[case(TransitTimeError::NetworkError { url: "http://planner.test".into(), message: "refused".into() })]
    #[case(TransitTimeError::ParseError { message: "unexpected token".into() })]
    #[case(TransitTimeError::Disabled)]
    fn failures_degrade_to_simulation(pair: (Coordinate, Coordinate), #[case] error: TransitTimeError) {
        let estimator = TransitTimeEstimator::with_source(FailingTransitTimeSource::new(error));
        let estimate = estimator.estimate(&pair.0, &pair.1);
        assert_eq!(estimate.provenance, EstimateProvenance::Simulated);
        assert!(SimulatedTransitTime.bounds(&pair.0, &pair.1).contains(&estimate.minutes));
    }

    #[rstest]
    fn batch_preserves_order_and_provenance(pair: (Coordinate, Coordinate)) {
        let estimator = TransitTimeEstimator::with_source(ConstantTransitTimeSource::new(9));
        let pairs = vec![pair.clone(), (pair.1.clone(), pair.0.clone())];
        let estimates = estimator.estimate_batch(&pairs);
        assert_eq!(estimates, vec![TransitEstimate::live(9); 2]);
    }

    #[rstest]
    fn simulated_estimator_has_no_live_source(pair: (Coordinate, Coordinate)) {
        let estimator = TransitTimeEstimator::simulated();
        assert!(!estimator.has_live_source());
        let estimates = estimator.estimate_batch(&[pair]);
        assert_eq!(estimates.len(), 1);
        assert_eq!(estimates[0].provenance, EstimateProvenance::Simulated);
    }
}
